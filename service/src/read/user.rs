//! [`User`] read model definition.
//!
//! [`User`]: crate::domain::User

pub mod list {
    //! [`User`]s list definitions.

    use crate::{
        domain::user::{Role, Status, User},
        read::Ordering,
    };

    /// Selector of a [`User`]s list.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct Selector {
        /// [`Ordering`] of the listed [`User`]s.
        pub order: Ordering,

        /// Maximum number of [`User`]s to return.
        pub limit: Option<usize>,
    }

    /// In-memory filter over listed [`User`]s.
    ///
    /// All clauses are conjunctive and the whole predicate is recomputed on
    /// every evaluation.
    #[derive(Clone, Debug, Default)]
    pub struct Filter {
        /// Term to match (case-insensitively) against the first name, last
        /// name or email.
        pub search: String,

        /// Exact [`Role`] to match, or [`None`] for any.
        pub role: Option<Role>,

        /// Exact [`Status`] to match, or [`None`] for any.
        pub status: Option<Status>,
    }

    impl Filter {
        /// Checks whether the provided [`User`] passes this [`Filter`].
        #[must_use]
        pub fn matches(&self, user: &User) -> bool {
            let email: &str = user.email.as_ref();

            let term = self.search.to_lowercase();
            let matches_search = term.is_empty()
                || user.first_name.to_lowercase().contains(&term)
                || user.last_name.to_lowercase().contains(&term)
                || email.to_lowercase().contains(&term);

            let matches_role =
                self.role.is_none_or(|role| user.role == role);
            let matches_status =
                self.status.is_none_or(|status| user.status == status);

            matches_search && matches_role && matches_status
        }
    }

    #[cfg(test)]
    mod spec {
        use common::DateTime;

        use crate::domain::user::{Email, Id, Role, Status, User};

        use super::Filter;

        fn user(first: &str, last: &str, email: &str, role: Role) -> User {
            let now = DateTime::now();
            User {
                id: Id::new(),
                email: Email::new(email).unwrap(),
                first_name: first.into(),
                last_name: last.into(),
                role,
                status: Status::Active,
                email_verified: true,
                created_at: now.coerce(),
                updated_at: now.coerce(),
                last_login: None,
            }
        }

        #[test]
        fn searches_name_and_email_case_insensitively() {
            let u = user("John", "Doe", "john.doe@example.com", Role::Admin);

            for term in ["john", "DOE", "doe@example"] {
                let filter = Filter {
                    search: term.into(),
                    ..Filter::default()
                };
                assert!(filter.matches(&u), "term `{term}` did not match");
            }

            let filter = Filter {
                search: "jane".into(),
                ..Filter::default()
            };
            assert!(!filter.matches(&u));
        }

        #[test]
        fn role_and_status_clauses_are_exact() {
            let u = user("Jane", "Smith", "jane@example.com", Role::Surveyor);

            let filter = Filter {
                role: Some(Role::Surveyor),
                status: Some(Status::Active),
                ..Filter::default()
            };
            assert!(filter.matches(&u));

            let filter = Filter {
                role: Some(Role::Admin),
                ..Filter::default()
            };
            assert!(!filter.matches(&u));
        }
    }
}
