//! [`Command`] for creating a [`Session`].

use common::{
    operations::{By, Select, Update},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{
        user::{self, session, Session},
        User,
    },
    infra::{store, Store},
    Service,
};

use super::Command;

/// [`Command`] for creating a [`Session`] for the [`User`] with the
/// provided email address.
///
/// Credential verification is delegated to the hosted identity provider;
/// this [`Command`] only establishes the local session.
#[derive(Clone, Debug)]
pub struct CreateUserSession {
    /// Email address of the [`User`] to sign in, as entered.
    pub email: String,
}

/// Output of [`CreateUserSession`] [`Command`].
#[derive(Clone, Debug)]
pub struct Output {
    /// [`session::Token`] of the created [`Session`].
    pub token: session::Token,

    /// [`User`] whose [`Session`] has been created.
    pub user: User,

    /// [`DateTime`] when the [`Session`] expires.
    pub expires_at: session::ExpirationDateTime,
}

impl<S> Command<CreateUserSession> for Service<S>
where
    S: for<'l> Store<
            Select<By<Option<User>, &'l user::Email>>,
            Ok = Option<User>,
            Err = Traced<store::Error>,
        > + Store<Update<User>, Ok = (), Err = Traced<store::Error>>,
{
    type Ok = Output;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateUserSession,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateUserSession { email } = cmd;

        let email = user::Email::new(email)
            .ok_or_else(|| tracerr::new!(E::WrongCredentials))?;

        let mut user = self
            .store()
            .execute(Select(By::<Option<User>, _>::new(&email)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::WrongCredentials)
            .map_err(tracerr::wrap!())?;

        user.last_login = Some(DateTime::now().coerce());
        self.store()
            .execute(Update(user.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let expires_at =
            (DateTime::now() + self.config().session_ttl).coerce();
        let token = jsonwebtoken::encode::<Session>(
            &jsonwebtoken::Header::default(),
            &Session {
                user_id: user.id,
                expires_at,
            },
            &self.config().jwt_encoding_key,
        )
        .map_err(tracerr::from_and_wrap!(=> E))?;

        // SAFETY: `jsonwebtoken::encode` always returns a valid
        //         `session::Token`.
        #[expect(unsafe_code, reason = "invariants are preserved")]
        let token = unsafe { session::Token::new_unchecked(token) };

        Ok(Output {
            token,
            user,
            expires_at,
        })
    }
}

/// Error of [`CreateUserSession`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Store`] error.
    #[display("`Store` operation failed: {_0}")]
    Store(store::Error),

    /// [`jsonwebtoken`] encoding error.
    #[display("Failed to encode a JSON Web Token: {_0}")]
    JsonWebTokenEncodeError(jsonwebtoken::errors::Error),

    /// No [`User`] matches the provided credentials.
    #[display("Wrong `User` credentials")]
    WrongCredentials,
}
