//! [`Command`] definition.

pub mod authorize_user_session;
pub mod create_user_session;
pub mod delete_user;
pub mod invite_user;
pub mod transition_user_status;
pub mod update_user;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    authorize_user_session::AuthorizeUserSession,
    create_user_session::CreateUserSession, delete_user::DeleteUser,
    invite_user::InviteUser,
    transition_user_status::{StatusAction, TransitionUserStatus},
    update_user::UpdateUser,
};

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use secrecy::SecretString;

    use crate::{
        domain::{audit, user, User},
        infra::InMemory,
        query, read, Config, Query as _, Service,
    };

    use super::{
        Command as _, CreateUserSession, DeleteUser, InviteUser,
        StatusAction, TransitionUserStatus, UpdateUser,
    };

    fn service() -> Service<InMemory> {
        let secret = SecretString::from("test-secret".to_owned());
        Service::new(
            Config::new(&secret, Duration::from_secs(30 * 60)),
            InMemory::new(),
        )
    }

    async fn invite(service: &Service<InMemory>, email: &str) -> User {
        service
            .execute(InviteUser {
                actor: None,
                email: email.into(),
                first_name: "John".into(),
                last_name: "Doe".into(),
                role: user::Role::Surveyor,
            })
            .await
            .unwrap()
    }

    async fn audit_entries(
        service: &Service<InMemory>,
    ) -> Vec<crate::domain::AuditLogEntry> {
        service
            .execute(query::audit::List::by(
                read::audit::list::Selector::default(),
            ))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn invite_creates_an_active_unverified_user() {
        let service = service();
        let user = invite(&service, "john.doe@example.com").await;

        assert_eq!(user.status, user::Status::Active);
        assert!(!user.email_verified);
        assert!(user.last_login.is_none());

        let found = service
            .execute(query::user::ById::by(user.id))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.email.to_string(), "john.doe@example.com");
    }

    #[tokio::test]
    async fn invite_rejects_a_malformed_email() {
        let service = service();
        let err = service
            .execute(InviteUser {
                actor: None,
                email: "not an email".into(),
                first_name: "John".into(),
                last_name: "Doe".into(),
                role: user::Role::Admin,
            })
            .await
            .unwrap_err();
        assert!(err.to_string().contains("not a valid email"));
    }

    #[tokio::test]
    async fn every_mutation_appends_one_correlated_audit_entry() {
        let service = service();
        let user = invite(&service, "john.doe@example.com").await;

        drop(
            service
                .execute(TransitionUserStatus {
                    actor: Some(user.id),
                    user_id: user.id,
                    action: StatusAction::Ban,
                })
                .await
                .unwrap(),
        );
        service
            .execute(DeleteUser {
                actor: Some(user.id),
                user_id: user.id,
            })
            .await
            .unwrap();

        let entries = audit_entries(&service).await;
        assert_eq!(entries.len(), 3);

        let actions: Vec<_> =
            entries.iter().map(|e| e.action.to_string()).collect();
        assert!(actions.contains(&"INVITE".to_owned()));
        assert!(actions.contains(&"BAN".to_owned()));
        assert!(actions.contains(&"DELETE".to_owned()));
        assert!(entries
            .iter()
            .all(|e| e.resource == audit::Resource::User));
        assert!(entries
            .iter()
            .all(|e| e.resource_id.as_deref()
                == Some(user.id.to_string().as_str())));
    }

    #[tokio::test]
    async fn status_transitions_cover_the_whole_lifecycle() {
        let service = service();
        let user = invite(&service, "john.doe@example.com").await;

        let transition = |action| {
            service.execute(TransitionUserStatus {
                actor: None,
                user_id: user.id,
                action,
            })
        };

        let u = transition(StatusAction::Deactivate).await.unwrap();
        assert_eq!(u.status, user::Status::Inactive);

        let u = transition(StatusAction::Activate).await.unwrap();
        assert_eq!(u.status, user::Status::Active);

        let u = transition(StatusAction::Ban).await.unwrap();
        assert_eq!(u.status, user::Status::Banned);

        // Unban reuses the activate action.
        let u = transition(StatusAction::Activate).await.unwrap();
        assert_eq!(u.status, user::Status::Active);
    }

    #[tokio::test]
    async fn update_rewrites_the_profile() {
        let service = service();
        let user = invite(&service, "john.doe@example.com").await;

        let updated = service
            .execute(UpdateUser {
                actor: None,
                user_id: user.id,
                first_name: "Jonathan".into(),
                last_name: "Doe".into(),
                email: "jonathan@example.com".into(),
                role: user::Role::Admin,
                status: user::Status::Inactive,
            })
            .await
            .unwrap();

        assert_eq!(updated.first_name, "Jonathan");
        assert_eq!(updated.role, user::Role::Admin);
        assert!(updated.updated_at >= user.updated_at);
    }

    #[tokio::test]
    async fn deleting_a_missing_user_errors() {
        let service = service();
        let err = service
            .execute(DeleteUser {
                actor: None,
                user_id: user::Id::new(),
            })
            .await
            .unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[tokio::test]
    async fn session_roundtrips_through_the_token() {
        let service = service();
        let user = invite(&service, "john.doe@example.com").await;

        let out = service
            .execute(CreateUserSession {
                email: "john.doe@example.com".into(),
            })
            .await
            .unwrap();
        assert_eq!(out.user.id, user.id);
        assert!(out.user.last_login.is_some());

        let session = service
            .execute(super::AuthorizeUserSession { token: out.token })
            .await
            .unwrap();
        assert_eq!(session.user_id, user.id);
    }

    #[tokio::test]
    async fn unknown_email_cannot_sign_in() {
        let service = service();
        let err = service
            .execute(CreateUserSession {
                email: "nobody@example.com".into(),
            })
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Wrong `User` credentials"));
    }

    #[tokio::test]
    async fn listing_is_newest_first() {
        let service = service();
        drop(invite(&service, "first@example.com").await);
        drop(invite(&service, "second@example.com").await);

        let listed: Vec<User> = service
            .execute(query::users::List::by(
                read::user::list::Selector::default(),
            ))
            .await
            .unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed[0].created_at >= listed[1].created_at);
    }
}
