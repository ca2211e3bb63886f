//! [`AuditLogEntry`] read model definition.
//!
//! [`AuditLogEntry`]: crate::domain::AuditLogEntry

pub mod list {
    //! [`AuditLogEntry`]s list definitions.

    use crate::{
        domain::{user, AuditLogEntry},
        read::Ordering,
    };

    /// Selector of an [`AuditLogEntry`]s list.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct Selector {
        /// [`Ordering`] of the listed [`AuditLogEntry`]s.
        pub order: Ordering,

        /// Maximum number of [`AuditLogEntry`]s to return.
        pub limit: Option<usize>,
    }

    /// In-memory filter over listed [`AuditLogEntry`]s.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct Filter {
        /// Actor whose [`AuditLogEntry`]s to keep, or [`None`] for all.
        pub user_id: Option<user::Id>,
    }

    impl Filter {
        /// Checks whether the provided [`AuditLogEntry`] passes this
        /// [`Filter`].
        #[must_use]
        pub fn matches(&self, entry: &AuditLogEntry) -> bool {
            self.user_id
                .is_none_or(|id| entry.user_id == Some(id))
        }
    }
}
