//! [`Command`] for updating a [`User`] profile.

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

/// [`Command`] for updating the profile fields of a [`User`].
#[derive(Clone, Debug)]
pub struct UpdateUser {
    /// [`User`] performing the update, if any.
    pub actor: Option<user::Id>,

    /// ID of the [`User`] to update.
    pub user_id: user::Id,

    /// New first name.
    pub first_name: String,

    /// New last name.
    pub last_name: String,

    /// New email address, as entered.
    pub email: String,

    /// New [`user::Role`].
    pub role: user::Role,

    /// New [`user::Status`].
    pub status: user::Status,
}

impl<S> Command<UpdateUser> for Service<S>
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

    async fn execute(&self, cmd: UpdateUser) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateUser {
            actor,
            user_id,
            first_name,
            last_name,
            email,
            role,
            status,
        } = cmd;

        let email = user::Email::new(&email)
            .ok_or_else(|| tracerr::new!(E::InvalidEmail(email)))?;

        let mut user = self
            .store()
            .execute(Select(By::<Option<User>, _>::new(user_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::UserNotExists(user_id))
            .map_err(tracerr::wrap!())?;

        user.first_name = first_name;
        user.last_name = last_name;
        user.email = email;
        user.role = role;
        user.status = status;
        user.updated_at = DateTime::now().coerce();

        self.store()
            .execute(Update(user.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        // The audit append is not transactional with the update above.
        self.store()
            .execute(Insert(AuditLogEntry::new(
                actor,
                audit::Action::Update,
                audit::Resource::User,
                Some(user.id.to_string()),
                format!(
                    "Updated user details for {} {}",
                    user.first_name, user.last_name,
                ),
            )))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(user)
    }
}

/// Error of [`UpdateUser`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Store`] error.
    #[display("`Store` operation failed: {_0}")]
    #[from]
    Store(store::Error),

    /// Provided email address is not valid.
    #[display("`{_0}` is not a valid email address")]
    InvalidEmail(#[error(not(source))] String),

    /// [`User`] does not exist.
    #[display("`User(id: {_0})` does not exist")]
    #[from(ignore)]
    UserNotExists(#[error(not(source))] user::Id),
}
