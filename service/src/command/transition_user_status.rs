//! [`Command`] for transitioning a [`User`] account status.

use common::{
    operations::{By, Insert, Select, Update},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{audit, user, AuditLogEntry, User},
    infra::{store, Store},
    Service,
};

use super::Command;

/// [`Command`] for transitioning the [`user::Status`] of a [`User`].
///
/// No transition is restricted by the actor's role.
#[derive(Clone, Copy, Debug)]
pub struct TransitionUserStatus {
    /// [`User`] performing the transition, if any.
    pub actor: Option<user::Id>,

    /// ID of the [`User`] to transition.
    pub user_id: user::Id,

    /// [`StatusAction`] to apply.
    pub action: StatusAction,
}

/// Status transition applied to a [`User`] account.
///
/// Unbanning reuses [`StatusAction::Activate`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StatusAction {
    /// Make the account active.
    Activate,

    /// Make the account inactive.
    Deactivate,

    /// Ban the account.
    Ban,
}

impl StatusAction {
    /// Returns the target [`user::Status`] of this [`StatusAction`].
    #[must_use]
    pub fn target(self) -> user::Status {
        match self {
            Self::Activate => user::Status::Active,
            Self::Deactivate => user::Status::Inactive,
            Self::Ban => user::Status::Banned,
        }
    }

    /// Returns the [`audit::Action`] verb of this [`StatusAction`].
    #[must_use]
    pub fn audit_action(self) -> audit::Action {
        match self {
            Self::Activate => audit::Action::Activate,
            Self::Deactivate => audit::Action::Deactivate,
            Self::Ban => audit::Action::Ban,
        }
    }

    /// Returns the past-tense verb used in audit details.
    #[must_use]
    pub fn described(self) -> &'static str {
        match self {
            Self::Activate => "Activated",
            Self::Deactivate => "Deactivated",
            Self::Ban => "Banned",
        }
    }
}

impl<S> Command<TransitionUserStatus> for Service<S>
where
    S: Store<
            Select<By<Option<User>, user::Id>>,
            Ok = Option<User>,
            Err = Traced<store::Error>,
        > + Store<Update<User>, Ok = (), Err = Traced<store::Error>>
        + Store<Insert<AuditLogEntry>, Ok = (), Err = Traced<store::Error>>,
{
    type Ok = User;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: TransitionUserStatus,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let TransitionUserStatus {
            actor,
            user_id,
            action,
        } = cmd;

        let mut user = self
            .store()
            .execute(Select(By::<Option<User>, _>::new(user_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::UserNotExists(user_id))
            .map_err(tracerr::wrap!())?;

        user.status = action.target();
        user.updated_at = DateTime::now().coerce();

        self.store()
            .execute(Update(user.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        // The audit append is not transactional with the update above.
        self.store()
            .execute(Insert(AuditLogEntry::new(
                actor,
                action.audit_action(),
                audit::Resource::User,
                Some(user.id.to_string()),
                format!(
                    "{} user: {} {}",
                    action.described(),
                    user.first_name,
                    user.last_name,
                ),
            )))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(user)
    }
}

/// Error of [`TransitionUserStatus`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Store`] error.
    #[display("`Store` operation failed: {_0}")]
    #[from]
    Store(store::Error),

    /// [`User`] does not exist.
    #[display("`User(id: {_0})` does not exist")]
    #[from(ignore)]
    UserNotExists(#[error(not(source))] user::Id),
}

#[cfg(test)]
mod spec {
    use super::StatusAction;
    use crate::domain::user::Status;

    #[test]
    fn actions_map_onto_statuses() {
        assert_eq!(StatusAction::Activate.target(), Status::Active);
        assert_eq!(StatusAction::Deactivate.target(), Status::Inactive);
        assert_eq!(StatusAction::Ban.target(), Status::Banned);
    }

    #[test]
    fn audit_verbs_match_the_actions() {
        assert_eq!(
            StatusAction::Activate.audit_action().to_string(),
            "ACTIVATE",
        );
        assert_eq!(StatusAction::Ban.described(), "Banned");
    }
}
