//! [`Context`]-related definitions.

use derive_more::{Debug, Display, Error as StdError, From};
use service::{
    command::{self, Command as _},
    domain::{user::session, User},
};
use tokio::sync::watch;
use tracerr::Traced;

use crate::Service;

/// Snapshot of the authentication state.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    /// Currently signed-in [`User`], if any.
    pub user: Option<User>,

    /// Indicator whether the initial state is still being resolved.
    pub is_loading: bool,

    /// Indicator whether a [`User`] is signed in.
    pub is_authenticated: bool,

    /// [`session::Token`] of the current session, if any.
    #[debug(skip)]
    pub token: Option<session::Token>,
}

/// Application session context.
///
/// The one explicit session object injected into every page: owns the
/// [`Service`] handle and publishes [`AuthState`] changes to subscribers.
#[derive(Debug)]
pub struct Context {
    /// [`Service`] instance.
    service: Service,

    /// Publisher of [`AuthState`] changes.
    state: watch::Sender<AuthState>,
}

impl Context {
    /// Creates a new [`Context`] in the initial loading state.
    #[must_use]
    pub fn new(service: Service) -> Self {
        let (state, _) = watch::channel(AuthState {
            is_loading: true,
            ..AuthState::default()
        });
        Self { service, state }
    }

    /// Resolves the initial loading state.
    ///
    /// No session is persisted between runs, so the resolved state is always
    /// signed-out.
    pub fn init(&self) {
        drop(self.state.send_replace(AuthState::default()));
    }

    /// Tears the session down on application shutdown.
    ///
    /// Equivalent to signing out: subscribers observe a signed-out state.
    pub fn teardown(&self) {
        drop(self.state.send_replace(AuthState::default()));
    }

    /// Returns the [`Service`] of this [`Context`].
    #[must_use]
    pub fn service(&self) -> &Service {
        &self.service
    }

    /// Returns the current [`AuthState`].
    #[must_use]
    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Returns the currently signed-in [`User`], if any.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    /// Subscribes to [`AuthState`] changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    /// Signs in the [`User`] with the provided email address and publishes
    /// the authenticated [`AuthState`].
    ///
    /// # Errors
    ///
    /// Errors if no [`User`] matches the provided email. The prior state
    /// stays untouched in that case.
    pub async fn login(&self, email: &str) -> Result<User, Error> {
        let out = self
            .service
            .execute(command::CreateUserSession {
                email: email.to_owned(),
            })
            .await?;

        drop(self.state.send_replace(AuthState {
            user: Some(out.user.clone()),
            is_loading: false,
            is_authenticated: true,
            token: Some(out.token),
        }));

        Ok(out.user)
    }

    /// Signs the current [`User`] out and publishes the signed-out
    /// [`AuthState`].
    pub fn logout(&self) {
        drop(self.state.send_replace(AuthState::default()));
    }

    /// Rewrites the profile fields of the currently signed-in [`User`] and
    /// publishes the updated [`AuthState`].
    ///
    /// # Errors
    ///
    /// Errors if nobody is signed in or the update fails. The prior state
    /// stays untouched in that case.
    pub async fn update_me(
        &self,
        first_name: String,
        last_name: String,
        email: String,
    ) -> Result<User, Error> {
        let current = self.current_user().ok_or(Error::NotAuthenticated)?;

        let updated = self
            .service
            .execute(command::UpdateUser {
                actor: Some(current.id),
                user_id: current.id,
                first_name,
                last_name,
                email,
                role: current.role,
                status: current.status,
            })
            .await?;

        let mut next = self.state.borrow().clone();
        next.user = Some(updated.clone());
        drop(self.state.send_replace(next));

        Ok(updated)
    }
}

/// Error of a [`Context`] session operation.
#[derive(Debug, Display, StdError, From)]
pub enum Error {
    /// Signing in failed.
    #[display("failed to sign in: {_0}")]
    SignIn(Traced<command::create_user_session::ExecutionError>),

    /// Profile update failed.
    #[display("failed to update profile: {_0}")]
    UpdateProfile(Traced<command::update_user::ExecutionError>),

    /// No [`User`] is signed in.
    #[display("no user is signed in")]
    NotAuthenticated,
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use secrecy::SecretString;
    use service::{
        command::{Command as _, InviteUser},
        domain::user::Role,
        infra::InMemory,
    };

    use crate::Service;

    use super::Context;

    async fn context_with_user(email: &str) -> Context {
        let secret = SecretString::from("test-secret".to_owned());
        let service = Service::new(
            service::Config::new(&secret, Duration::from_secs(30 * 60)),
            InMemory::new(),
        );
        drop(
            service
                .execute(InviteUser {
                    actor: None,
                    email: email.into(),
                    first_name: "John".into(),
                    last_name: "Doe".into(),
                    role: Role::Admin,
                })
                .await
                .unwrap(),
        );
        Context::new(service)
    }

    #[tokio::test]
    async fn init_resolves_loading_to_signed_out() {
        let context = context_with_user("john@example.com").await;
        assert!(context.state().is_loading);

        context.init();
        let state = context.state();
        assert!(!state.is_loading);
        assert!(!state.is_authenticated);
        assert!(state.user.is_none());
    }

    #[tokio::test]
    async fn login_publishes_the_authenticated_state() {
        let context = context_with_user("john@example.com").await;
        context.init();

        let mut changes = context.subscribe();
        let user = context.login("john@example.com").await.unwrap();

        assert!(changes.has_changed().unwrap());
        let state = changes.borrow_and_update().clone();
        assert!(state.is_authenticated);
        assert_eq!(state.user.unwrap().id, user.id);
        assert!(state.token.is_some());
    }

    #[tokio::test]
    async fn failed_login_leaves_the_prior_state_untouched() {
        let context = context_with_user("john@example.com").await;
        context.init();

        assert!(context.login("nobody@example.com").await.is_err());
        let state = context.state();
        assert!(!state.is_authenticated);
        assert!(state.user.is_none());
    }

    #[tokio::test]
    async fn logout_tears_the_session_down() {
        let context = context_with_user("john@example.com").await;
        context.init();
        drop(context.login("john@example.com").await.unwrap());

        context.logout();
        let state = context.state();
        assert!(!state.is_authenticated);
        assert!(state.user.is_none());
        assert!(state.token.is_none());
    }

    #[tokio::test]
    async fn update_me_republishes_the_updated_user() {
        let context = context_with_user("john@example.com").await;
        context.init();
        drop(context.login("john@example.com").await.unwrap());

        let updated = context
            .update_me(
                "Jonathan".into(),
                "Doe".into(),
                "john@example.com".into(),
            )
            .await
            .unwrap();
        assert_eq!(updated.first_name, "Jonathan");
        assert_eq!(
            context.current_user().unwrap().first_name,
            "Jonathan",
        );
    }

    #[tokio::test]
    async fn update_me_requires_a_signed_in_user() {
        let context = context_with_user("john@example.com").await;
        context.init();

        let err = context
            .update_me("J".into(), "D".into(), "j@d.io".into())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("no user is signed in"));
    }
}
