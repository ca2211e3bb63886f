//! [`Command`] for inviting a new [`User`].

use common::{operations::Insert, DateTime};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{audit, user, AuditLogEntry, User},
    infra::{store, Store},
    Service,
};

use super::Command;

/// [`Command`] for inviting a new [`User`] onto the team.
#[derive(Clone, Debug)]
pub struct InviteUser {
    /// [`User`] performing the invitation, if any.
    pub actor: Option<user::Id>,

    /// Email address of the invitee, as entered.
    pub email: String,

    /// First name of the invitee.
    pub first_name: String,

    /// Last name of the invitee.
    pub last_name: String,

    /// [`user::Role`] of the invitee.
    pub role: user::Role,
}

impl<S> Command<InviteUser> for Service<S>
where
    S: Store<Insert<User>, Ok = (), Err = Traced<store::Error>>
        + Store<Insert<AuditLogEntry>, Ok = (), Err = Traced<store::Error>>,
{
    type Ok = User;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: InviteUser) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let InviteUser {
            actor,
            email,
            first_name,
            last_name,
            role,
        } = cmd;

        let email = user::Email::new(&email)
            .ok_or_else(|| tracerr::new!(E::InvalidEmail(email)))?;

        let now = DateTime::now();
        let user = User {
            id: user::Id::new(),
            email,
            first_name,
            last_name,
            role,
            status: user::Status::Active,
            email_verified: false,
            created_at: now.coerce(),
            updated_at: now.coerce(),
            last_login: None,
        };

        self.store()
            .execute(Insert(user.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        // The audit append is not transactional with the insert above.
        self.store()
            .execute(Insert(AuditLogEntry::new(
                actor,
                audit::Action::Invite,
                audit::Resource::User,
                Some(user.id.to_string()),
                format!(
                    "Invited new team member: {} {} ({})",
                    user.first_name, user.last_name, user.email,
                ),
            )))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(user)
    }
}

/// Error of [`InviteUser`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Store`] error.
    #[display("`Store` operation failed: {_0}")]
    #[from]
    Store(store::Error),

    /// Provided email address is not valid.
    #[display("`{_0}` is not a valid email address")]
    InvalidEmail(#[error(not(source))] String),
}
