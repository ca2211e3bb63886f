//! [`AuditLogEntry`] definitions.

use common::{unit as marker, DateTime, DateTimeOf};
use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(doc)]
use crate::domain::Property;
use crate::domain::user;

/// Append-only record of an administrative action.
///
/// No update or delete path exists for [`AuditLogEntry`]s anywhere in the
/// crate.
#[derive(Clone, Debug)]
pub struct AuditLogEntry {
    /// ID of this [`AuditLogEntry`].
    pub id: Id,

    /// [`User`] who performed the action, or [`None`] for the system actor.
    ///
    /// [`User`]: crate::domain::User
    pub user_id: Option<user::Id>,

    /// [`Action`] that was performed.
    pub action: Action,

    /// [`Resource`] kind the action was performed on.
    pub resource: Resource,

    /// ID of the affected resource, if any.
    pub resource_id: Option<String>,

    /// Human-readable description of the action.
    pub details: Option<String>,

    /// IP address the action originated from, if known.
    pub ip_address: Option<String>,

    /// User agent the action originated from, if known.
    pub user_agent: Option<String>,

    /// [`DateTime`] when this [`AuditLogEntry`] was appended.
    pub created_at: CreationDateTime,
}

impl AuditLogEntry {
    /// Creates a new [`AuditLogEntry`] describing the provided action,
    /// stamped with the current [`DateTime`].
    #[must_use]
    pub fn new(
        user_id: Option<user::Id>,
        action: Action,
        resource: Resource,
        resource_id: Option<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            id: Id::new(),
            user_id,
            action,
            resource,
            resource_id,
            details: Some(details.into()),
            ip_address: None,
            user_agent: None,
            created_at: DateTime::now().coerce(),
        }
    }
}

/// ID of an [`AuditLogEntry`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Action verb of an [`AuditLogEntry`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Eq,
    PartialEq,
    Serialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Action {
    /// Resource was created.
    Create,

    /// [`User`] was invited.
    ///
    /// [`User`]: crate::domain::User
    Invite,

    /// Resource was updated.
    Update,

    /// [`User`] account was activated (also used for unbanning).
    ///
    /// [`User`]: crate::domain::User
    Activate,

    /// [`User`] account was deactivated.
    ///
    /// [`User`]: crate::domain::User
    Deactivate,

    /// [`User`] account was banned.
    ///
    /// [`User`]: crate::domain::User
    Ban,

    /// Resource was deleted.
    Delete,
}

/// Kind of a resource an [`Action`] was performed on.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Eq,
    PartialEq,
    Serialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Resource {
    /// A [`User`] account.
    ///
    /// [`User`]: crate::domain::User
    User,

    /// A [`Property`].
    Property,
}

/// [`DateTime`] when an [`AuditLogEntry`] was appended.
pub type CreationDateTime = DateTimeOf<(AuditLogEntry, marker::Creation)>;

#[cfg(test)]
mod spec {
    use super::{Action, AuditLogEntry, Resource};

    #[test]
    fn actions_render_uppercase_verbs() {
        assert_eq!(Action::Invite.to_string(), "INVITE");
        assert_eq!(Action::Deactivate.to_string(), "DEACTIVATE");
        assert_eq!("BAN".parse::<Action>().unwrap(), Action::Ban);
    }

    #[test]
    fn new_entry_is_stamped_and_detailed() {
        let entry = AuditLogEntry::new(
            None,
            Action::Delete,
            Resource::User,
            Some("user-1".into()),
            "Deleted user: John Doe",
        );
        assert_eq!(entry.user_id, None);
        assert_eq!(entry.details.as_deref(), Some("Deleted user: John Doe"));
        assert_eq!(entry.resource, Resource::User);
        assert!(entry.ip_address.is_none());
    }
}
