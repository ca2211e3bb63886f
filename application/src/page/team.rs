//! [`TeamPage`] definitions.

use tracing as log;

use service::{
    command::{
        Command as _, DeleteUser, InviteUser, StatusAction,
        TransitionUserStatus, UpdateUser,
    },
    domain::{
        user::{self, Role, Status},
        AuditLogEntry, User,
    },
    query::{self, Query as _},
    read,
};

use crate::{
    notice::{Notice, Notices},
    Service,
};

/// Number of [`AuditLogEntry`]s fetched for the activity feed.
const AUDIT_FEED_LIMIT: usize = 100;

/// Team management page.
///
/// The one page backed by the record store: every mutation goes through a
/// command (which appends the correlated [`AuditLogEntry`]) and is followed
/// by a refresh.
#[derive(Debug, Default)]
pub struct TeamPage {
    /// Fetched team members.
    users: Vec<User>,

    /// Fetched activity feed, newest first.
    audit: Vec<AuditLogEntry>,

    /// Search term of the filter bar.
    pub search_term: String,

    /// Selected role filter, or [`None`] for all.
    pub role: Option<Role>,

    /// Selected status filter, or [`None`] for all.
    pub status: Option<Status>,

    /// Currently active [`Tab`].
    pub tab: Tab,

    /// Open invite form, if any.
    invite: Option<InviteForm>,

    /// Open edit form, if any.
    edit: Option<EditForm>,

    /// [`User`] whose detail view is open, if any.
    viewing: Option<user::Id>,

    /// Pending [`Notice`]s of this page.
    notices: Notices,
}

/// Tab of the [`TeamPage`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Tab {
    /// Team members list.
    #[default]
    Members,

    /// Activity log feed.
    Activity,
}

/// Form state of the invite dialog.
#[derive(Clone, Debug)]
pub struct InviteForm {
    /// Email address of the invitee.
    pub email: String,

    /// First name of the invitee.
    pub first_name: String,

    /// Last name of the invitee.
    pub last_name: String,

    /// [`Role`] of the invitee.
    pub role: Role,
}

impl Default for InviteForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            role: Role::Surveyor,
        }
    }
}

/// Form state of the edit dialog.
#[derive(Clone, Debug)]
pub struct EditForm {
    /// ID of the edited [`User`].
    pub user_id: user::Id,

    /// Edited first name.
    pub first_name: String,

    /// Edited last name.
    pub last_name: String,

    /// Edited email address.
    pub email: String,

    /// Edited [`Role`].
    pub role: Role,

    /// Edited [`Status`].
    pub status: Status,
}

impl TeamPage {
    /// Creates a new, not yet refreshed [`TeamPage`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the fetched team members.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Returns the fetched activity feed.
    #[must_use]
    pub fn audit_log(&self) -> &[AuditLogEntry] {
        &self.audit
    }

    /// Returns the team members passing the current filters.
    #[must_use]
    pub fn filtered_users(&self) -> Vec<&User> {
        let filter = read::user::list::Filter {
            search: self.search_term.clone(),
            role: self.role,
            status: self.status,
        };
        self.users.iter().filter(|u| filter.matches(u)).collect()
    }

    /// Returns the activity feed entries of the provided actor.
    #[must_use]
    pub fn user_audit(&self, user_id: user::Id) -> Vec<&AuditLogEntry> {
        let filter = read::audit::list::Filter {
            user_id: Some(user_id),
        };
        self.audit.iter().filter(|e| filter.matches(e)).collect()
    }

    /// Refetches team members and the activity feed.
    ///
    /// A failed fetch degrades to an error notice, keeping the previously
    /// fetched state.
    pub async fn refresh(&mut self, service: &Service) {
        let users = service
            .execute(query::users::List::by(read::user::list::Selector {
                order: read::Ordering::CreatedAtDesc,
                limit: None,
            }))
            .await;
        let audit = service
            .execute(query::audit::List::by(read::audit::list::Selector {
                order: read::Ordering::CreatedAtDesc,
                limit: Some(AUDIT_FEED_LIMIT),
            }))
            .await;

        match (users, audit) {
            (Ok(users), Ok(audit)) => {
                self.users = users;
                self.audit = audit;
            }
            (Err(e), _) | (_, Err(e)) => {
                log::warn!("failed to fetch team data: {e}");
                self.notices.push(Notice::error(
                    "Error",
                    "Failed to fetch team data.",
                ));
            }
        }
    }

    /// Opens the invite dialog with a blank form.
    pub fn open_invite(&mut self) {
        self.invite = Some(InviteForm::default());
    }

    /// Returns the open invite form, if any.
    pub fn invite_form_mut(&mut self) -> Option<&mut InviteForm> {
        self.invite.as_mut()
    }

    /// Closes the invite dialog, discarding the form.
    pub fn cancel_invite(&mut self) {
        self.invite = None;
    }

    /// Sends the open invitation and refreshes on success.
    pub async fn send_invite(
        &mut self,
        service: &Service,
        actor: Option<user::Id>,
    ) {
        let Some(form) = self.invite.clone() else {
            return;
        };

        match service
            .execute(InviteUser {
                actor,
                email: form.email,
                first_name: form.first_name,
                last_name: form.last_name,
                role: form.role,
            })
            .await
        {
            Ok(_) => {
                self.invite = None;
                self.refresh(service).await;
            }
            Err(e) => {
                log::warn!("failed to invite user: {e}");
                self.notices
                    .push(Notice::error("Error", "Failed to invite user."));
            }
        }
    }

    /// Opens the edit dialog prefilled from the [`User`] with the provided
    /// ID.
    pub fn open_edit(&mut self, user_id: user::Id) {
        if let Some(user) = self.users.iter().find(|u| u.id == user_id) {
            self.edit = Some(EditForm {
                user_id,
                first_name: user.first_name.clone(),
                last_name: user.last_name.clone(),
                email: user.email.to_string(),
                role: user.role,
                status: user.status,
            });
        }
    }

    /// Returns the open edit form, if any.
    pub fn edit_form_mut(&mut self) -> Option<&mut EditForm> {
        self.edit.as_mut()
    }

    /// Closes the edit dialog, discarding the form.
    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /// Saves the open edit form and refreshes on success.
    pub async fn save_edit(
        &mut self,
        service: &Service,
        actor: Option<user::Id>,
    ) {
        let Some(form) = self.edit.clone() else {
            return;
        };

        match service
            .execute(UpdateUser {
                actor,
                user_id: form.user_id,
                first_name: form.first_name,
                last_name: form.last_name,
                email: form.email,
                role: form.role,
                status: form.status,
            })
            .await
        {
            Ok(_) => {
                self.edit = None;
                self.refresh(service).await;
            }
            Err(e) => {
                log::warn!("failed to update user: {e}");
                self.notices
                    .push(Notice::error("Error", "Failed to update user."));
            }
        }
    }

    /// Applies the provided status transition and refreshes on success.
    ///
    /// No transition is restricted by the actor's role.
    pub async fn user_action(
        &mut self,
        service: &Service,
        actor: Option<user::Id>,
        user_id: user::Id,
        action: StatusAction,
    ) {
        match service
            .execute(TransitionUserStatus {
                actor,
                user_id,
                action,
            })
            .await
        {
            Ok(_) => self.refresh(service).await,
            Err(e) => {
                log::warn!("failed to update user status: {e}");
                self.notices.push(Notice::error(
                    "Error",
                    "Failed to update user status.",
                ));
            }
        }
    }

    /// Permanently deletes the [`User`] with the provided ID and refreshes
    /// on success.
    ///
    /// The data layer asks for no confirmation; that dialog belongs to the
    /// presentation layer.
    pub async fn delete_user(
        &mut self,
        service: &Service,
        actor: Option<user::Id>,
        user_id: user::Id,
    ) {
        match service.execute(DeleteUser { actor, user_id }).await {
            Ok(()) => self.refresh(service).await,
            Err(e) => {
                log::warn!("failed to delete user: {e}");
                self.notices
                    .push(Notice::error("Error", "Failed to delete user."));
            }
        }
    }

    /// Opens the detail view of the [`User`] with the provided ID.
    pub fn open_view(&mut self, user_id: user::Id) {
        self.viewing = Some(user_id);
    }

    /// Returns the [`User`] whose detail view is open, if any.
    #[must_use]
    pub fn viewing(&self) -> Option<&User> {
        self.viewing
            .and_then(|id| self.users.iter().find(|u| u.id == id))
    }

    /// Closes the detail view.
    pub fn close_view(&mut self) {
        self.viewing = None;
    }

    /// Removes and returns all pending [`Notice`]s of this page.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.notices.drain()
    }

    /// Returns the most recent pending [`Notice`], if any.
    #[must_use]
    pub fn last_notice(&self) -> Option<&Notice> {
        self.notices.last()
    }
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use secrecy::SecretString;
    use service::{
        command::StatusAction,
        domain::user::{Role, Status},
        infra::InMemory,
    };

    use crate::Service;

    use super::TeamPage;

    fn service() -> Service {
        let secret = SecretString::from("test-secret".to_owned());
        Service::new(
            service::Config::new(&secret, Duration::from_secs(30 * 60)),
            InMemory::new(),
        )
    }

    async fn invite(page: &mut TeamPage, service: &Service, email: &str) {
        page.open_invite();
        {
            let form = page.invite_form_mut().unwrap();
            form.email = email.into();
            form.first_name = "John".into();
            form.last_name = "Doe".into();
            form.role = Role::Surveyor;
        }
        page.send_invite(service, None).await;
    }

    #[tokio::test]
    async fn inviting_refreshes_members_and_activity() {
        let service = service();
        let mut page = TeamPage::new();
        page.refresh(&service).await;
        assert!(page.users().is_empty());

        invite(&mut page, &service, "john.doe@example.com").await;

        assert_eq!(page.users().len(), 1);
        assert_eq!(page.audit_log().len(), 1);
        assert_eq!(page.audit_log()[0].action.to_string(), "INVITE");
        assert!(page.invite_form_mut().is_none());
    }

    #[tokio::test]
    async fn failed_invite_keeps_the_form_open() {
        let service = service();
        let mut page = TeamPage::new();
        page.refresh(&service).await;

        invite(&mut page, &service, "not an email").await;

        assert!(page.users().is_empty());
        assert!(page.last_notice().is_some());
    }

    #[tokio::test]
    async fn status_actions_round_trip_through_the_store() {
        let service = service();
        let mut page = TeamPage::new();
        page.refresh(&service).await;
        invite(&mut page, &service, "john.doe@example.com").await;
        let id = page.users()[0].id;

        page.user_action(&service, None, id, StatusAction::Ban).await;
        assert_eq!(page.users()[0].status, Status::Banned);

        // Unbanning reuses the activate action.
        page.user_action(&service, None, id, StatusAction::Activate)
            .await;
        assert_eq!(page.users()[0].status, Status::Active);
    }

    #[tokio::test]
    async fn deleting_removes_the_member_and_logs_it() {
        let service = service();
        let mut page = TeamPage::new();
        page.refresh(&service).await;
        invite(&mut page, &service, "john.doe@example.com").await;
        let id = page.users()[0].id;

        page.delete_user(&service, None, id).await;

        assert!(page.users().is_empty());
        assert!(page
            .audit_log()
            .iter()
            .any(|e| e.action.to_string() == "DELETE"));
    }

    #[tokio::test]
    async fn editing_rewrites_the_member() {
        let service = service();
        let mut page = TeamPage::new();
        page.refresh(&service).await;
        invite(&mut page, &service, "john.doe@example.com").await;
        let id = page.users()[0].id;

        page.open_edit(id);
        {
            let form = page.edit_form_mut().unwrap();
            form.first_name = "Jonathan".into();
            form.role = Role::Admin;
        }
        page.save_edit(&service, None).await;

        let user = page.users().iter().find(|u| u.id == id).unwrap();
        assert_eq!(user.first_name, "Jonathan");
        assert_eq!(user.role, Role::Admin);
    }

    #[tokio::test]
    async fn filters_and_per_user_activity_apply_locally() {
        let service = service();
        let mut page = TeamPage::new();
        page.refresh(&service).await;
        invite(&mut page, &service, "john.doe@example.com").await;
        invite(&mut page, &service, "jane.smith@example.com").await;

        page.search_term = "jane".into();
        assert_eq!(page.filtered_users().len(), 1);

        page.search_term = String::new();
        page.role = Some(Role::Admin);
        assert!(page.filtered_users().is_empty());

        // Both invites were performed by the system actor, so no user has
        // activity of their own.
        let id = page.users()[0].id;
        assert!(page.user_audit(id).is_empty());
    }
}
