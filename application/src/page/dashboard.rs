//! [`Dashboard`] definitions.

use common::DateTime;
use service::domain::{AuditLogEntry, Property, User};

/// Number of [`AuditLogEntry`]s shown as recent activity.
const RECENT_ACTIVITY_LIMIT: usize = 4;

/// Dashboard page with derived statistics.
#[derive(Debug)]
pub struct Dashboard {
    /// Derived [`Stats`].
    pub stats: Stats,

    /// Most recent [`AuditLogEntry`]s, newest first.
    pub recent_activity: Vec<AuditLogEntry>,
}

/// Headline numbers of the [`Dashboard`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Stats {
    /// Total number of users.
    pub total_users: usize,

    /// Total number of properties.
    pub total_properties: usize,

    /// Number of administrative actions performed today (UTC).
    pub actions_today: usize,
}

impl Dashboard {
    /// Derives a new [`Dashboard`] from the provided collections.
    ///
    /// `audit` is expected newest first, the way the activity feed is
    /// fetched.
    #[must_use]
    pub fn gather(
        users: &[User],
        properties: &[Property],
        audit: &[AuditLogEntry],
    ) -> Self {
        let today = DateTime::now().date();

        Self {
            stats: Stats {
                total_users: users.len(),
                total_properties: properties.len(),
                actions_today: audit
                    .iter()
                    .filter(|e| e.created_at.date() == today)
                    .count(),
            },
            recent_activity: audit
                .iter()
                .take(RECENT_ACTIVITY_LIMIT)
                .cloned()
                .collect(),
        }
    }
}

#[cfg(test)]
mod spec {
    use service::domain::{audit, AuditLogEntry};

    use super::Dashboard;

    #[test]
    fn derives_counts_from_the_collections() {
        let entries: Vec<AuditLogEntry> = (0..6)
            .map(|i| {
                AuditLogEntry::new(
                    None,
                    audit::Action::Update,
                    audit::Resource::User,
                    Some(format!("user-{i}")),
                    "Updated user details",
                )
            })
            .collect();

        let dashboard = Dashboard::gather(&[], &[], &entries);
        assert_eq!(dashboard.stats.total_users, 0);
        assert_eq!(dashboard.stats.total_properties, 0);
        assert_eq!(dashboard.stats.actions_today, 6);
        assert_eq!(dashboard.recent_activity.len(), 4);
    }
}
