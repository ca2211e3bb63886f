//! [`UsersPage`] definitions.

use service::{
    command::StatusAction,
    domain::{
        user::{self, Role},
        User,
    },
    read,
};

use crate::notice::{Notice, Notices};

/// User accounts page.
///
/// Operates on a locally seeded collection with optimistic row actions: a
/// status flip or a delete mutates the local state immediately, with no
/// store round-trip and no rollback path.
#[derive(Debug, Default)]
pub struct UsersPage {
    /// Locally held [`User`] collection.
    users: Vec<User>,

    /// Search term of the filter bar.
    pub search_term: String,

    /// Selected role filter, or [`None`] for all.
    pub role: Option<Role>,

    /// Pending [`Notice`]s of this page.
    notices: Notices,
}

impl UsersPage {
    /// Creates a new [`UsersPage`] over the provided collection.
    #[must_use]
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users,
            ..Self::default()
        }
    }

    /// Returns the whole collection.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Returns the collection filtered by the current search term and role.
    #[must_use]
    pub fn filtered(&self) -> Vec<&User> {
        let filter = read::user::list::Filter {
            search: self.search_term.clone(),
            role: self.role,
            status: None,
        };
        self.users.iter().filter(|u| filter.matches(u)).collect()
    }

    /// Optimistically applies the provided status transition to the
    /// [`User`] with the provided ID.
    pub fn apply_action(&mut self, id: user::Id, action: StatusAction) {
        let Some(user) = self.users.iter_mut().find(|u| u.id == id) else {
            return;
        };

        user.status = action.target();
        self.notices.push(Notice::success(
            "Status Updated",
            format!("{} user: {} {}", action.described(), user.first_name, user.last_name),
        ));
    }

    /// Removes the [`User`] with the provided ID from the local collection.
    pub fn delete(&mut self, id: user::Id) {
        self.users.retain(|u| u.id != id);
    }

    /// Removes and returns all pending [`Notice`]s of this page.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.notices.drain()
    }
}

#[cfg(test)]
mod spec {
    use common::DateTime;
    use service::{
        command::StatusAction,
        domain::user::{Email, Id, Role, Status, User},
    };

    use super::UsersPage;

    fn user(first: &str, email: &str, role: Role) -> User {
        let now = DateTime::now();
        User {
            id: Id::new(),
            email: Email::new(email).unwrap(),
            first_name: first.into(),
            last_name: "Doe".into(),
            role,
            status: Status::Active,
            email_verified: true,
            created_at: now.coerce(),
            updated_at: now.coerce(),
            last_login: None,
        }
    }

    #[test]
    fn filters_by_term_and_role() {
        let mut page = UsersPage::new(vec![
            user("John", "john@example.com", Role::Admin),
            user("Jane", "jane@example.com", Role::Surveyor),
        ]);

        page.search_term = "jane".into();
        assert_eq!(page.filtered().len(), 1);

        page.search_term = String::new();
        page.role = Some(Role::Admin);
        assert_eq!(page.filtered().len(), 1);
        assert_eq!(page.filtered()[0].first_name, "John");
    }

    #[test]
    fn row_actions_flip_status_in_place() {
        let mut page =
            UsersPage::new(vec![user("John", "john@example.com", Role::Admin)]);
        let id = page.users()[0].id;

        page.apply_action(id, StatusAction::Ban);
        assert_eq!(page.users()[0].status, Status::Banned);

        page.apply_action(id, StatusAction::Activate);
        assert_eq!(page.users()[0].status, Status::Active);

        page.delete(id);
        assert!(page.users().is_empty());
    }
}
