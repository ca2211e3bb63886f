//! [`Command`] for deleting a [`User`].

use common::operations::{By, Delete, Insert, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{audit, user, AuditLogEntry, User},
    infra::{store, Store},
    Service,
};

use super::Command;

/// [`Command`] for permanently deleting a [`User`].
///
/// No soft-delete or cascade semantics exist; any confirmation belongs to
/// the presentation layer.
#[derive(Clone, Copy, Debug)]
pub struct DeleteUser {
    /// [`User`] performing the deletion, if any.
    pub actor: Option<user::Id>,

    /// ID of the [`User`] to delete.
    pub user_id: user::Id,
}

impl<S> Command<DeleteUser> for Service<S>
where
    S: Store<
            Select<By<Option<User>, user::Id>>,
            Ok = Option<User>,
            Err = Traced<store::Error>,
        > + Store<Delete<By<User, user::Id>>, Ok = (), Err = Traced<store::Error>>
        + Store<Insert<AuditLogEntry>, Ok = (), Err = Traced<store::Error>>,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: DeleteUser) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeleteUser { actor, user_id } = cmd;

        let user = self
            .store()
            .execute(Select(By::<Option<User>, _>::new(user_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::UserNotExists(user_id))
            .map_err(tracerr::wrap!())?;

        self.store()
            .execute(Delete(By::<User, _>::new(user_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        // The audit append is not transactional with the delete above.
        self.store()
            .execute(Insert(AuditLogEntry::new(
                actor,
                audit::Action::Delete,
                audit::Resource::User,
                Some(user_id.to_string()),
                format!(
                    "Deleted user: {} {}",
                    user.first_name, user.last_name,
                ),
            )))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(())
    }
}

/// Error of [`DeleteUser`] [`Command`] execution.
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
