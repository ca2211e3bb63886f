//! [`User`] definitions.

pub mod session;

use std::sync::LazyLock;

#[cfg(doc)]
use common::DateTime;
use common::{unit as marker, DateTimeOf};
use derive_more::{AsRef, Display, From, FromStr, Into};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use self::session::Session;

/// Administrative portal user.
#[derive(Clone, Debug)]
pub struct User {
    /// ID of this [`User`].
    pub id: Id,

    /// [`Email`] of this [`User`].
    pub email: Email,

    /// First name of this [`User`].
    pub first_name: String,

    /// Last name of this [`User`].
    pub last_name: String,

    /// [`Role`] of this [`User`].
    pub role: Role,

    /// [`Status`] of this [`User`].
    pub status: Status,

    /// Indicator whether the [`Email`] of this [`User`] is verified.
    pub email_verified: bool,

    /// [`DateTime`] when this [`User`] was created.
    pub created_at: CreationDateTime,

    /// [`DateTime`] when this [`User`] was last updated.
    pub updated_at: UpdateDateTime,

    /// [`DateTime`] when this [`User`] logged in last, if ever.
    pub last_login: Option<LastLoginDateTime>,
}

impl User {
    /// Returns the full name of this [`User`].
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// ID of a [`User`].
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

/// Email address of a [`User`].
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
#[as_ref(str, String)]
pub struct Email(String);

impl Email {
    /// Creates a new [`Email`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `address` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Creates a new [`Email`] if the given `address` is valid.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Option<Self> {
        let address = address.into();
        Self::check(&address).then_some(Self(address))
    }

    /// Checks whether the given `address` is a valid [`Email`].
    fn check(address: impl AsRef<str>) -> bool {
        /// Regular expression checking [`Email`] format.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid regex")
        });

        REGEX.is_match(address.as_ref())
    }
}

impl FromStr for Email {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Email`")
    }
}

/// Role of a [`User`].
///
/// No numeric ordering exists between [`Role`]s and no action anywhere is
/// restricted by them.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Role {
    /// Super administrator.
    Superadmin,

    /// Administrator.
    Admin,

    /// Surveyor.
    #[default]
    Surveyor,

    /// Property manager.
    PropertyManager,
}

/// Status of a [`User`] account.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Status {
    /// Account is active.
    #[default]
    Active,

    /// Account is deactivated.
    Inactive,

    /// Account is banned.
    Banned,
}

/// [`DateTime`] when a [`User`] was created.
pub type CreationDateTime = DateTimeOf<(User, marker::Creation)>;

/// [`DateTime`] when a [`User`] was last updated.
pub type UpdateDateTime = DateTimeOf<(User, marker::Update)>;

/// [`DateTime`] when a [`User`] logged in last.
pub type LastLoginDateTime = DateTimeOf<(User, marker::LastLogin)>;

#[cfg(test)]
mod spec {
    use super::{Email, Role, Status};

    #[test]
    fn email_accepts_ordinary_addresses() {
        assert!(Email::new("john.doe@example.com").is_some());
        assert!(Email::new("j@d.io").is_some());
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        assert!(Email::new("").is_none());
        assert!(Email::new("john.doe").is_none());
        assert!(Email::new("john doe@example.com").is_none());
        assert!(Email::new("john@nodot").is_none());
    }

    #[test]
    fn roles_and_statuses_use_wire_spellings() {
        assert_eq!(Role::PropertyManager.to_string(), "property_manager");
        assert_eq!(
            "superadmin".parse::<Role>().unwrap(),
            Role::Superadmin,
        );
        assert_eq!(Status::Banned.to_string(), "banned");
        assert_eq!("inactive".parse::<Status>().unwrap(), Status::Inactive);
    }
}
