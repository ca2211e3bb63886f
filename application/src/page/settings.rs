//! [`SettingsPage`] definitions.

use smart_default::SmartDefault;

use crate::notice::{Notice, Notices};

/// System settings page.
///
/// Preferences live in local state only; saving posts a notice without
/// persisting anything externally.
#[derive(Debug, Default)]
pub struct SettingsPage {
    /// Editable [`Preferences`].
    pub preferences: Preferences,

    /// Pending [`Notice`]s of this page.
    notices: Notices,
}

/// System preferences.
#[derive(Clone, Debug, PartialEq, SmartDefault)]
pub struct Preferences {
    /// Display name of the portal.
    #[default("Admin Portal".to_owned())]
    pub system_name: String,

    /// Description of the portal.
    #[default("Property Management Admin Portal".to_owned())]
    pub system_description: String,

    /// Indicator whether maintenance mode is on.
    pub maintenance_mode: bool,

    /// Session timeout, in minutes.
    #[default(30)]
    pub session_timeout: u32,

    /// Minimum password length.
    #[default(8)]
    pub password_min_length: u32,

    /// Indicator whether two-factor authentication is required.
    pub require_two_factor: bool,

    /// Indicator whether password reset is allowed.
    #[default(true)]
    pub allow_password_reset: bool,

    /// Indicator whether email notifications are on.
    #[default(true)]
    pub email_notifications: bool,

    /// Indicator whether system alerts are on.
    #[default(true)]
    pub system_alerts: bool,

    /// Indicator whether user registrations are notified.
    #[default(true)]
    pub user_registration_notify: bool,

    /// Indicator whether property updates are notified.
    pub property_update_notify: bool,

    /// API rate limit, in requests per hour.
    #[default(1000)]
    pub api_rate_limit: u32,

    /// API key rotation period, in days.
    #[default(90)]
    pub api_key_rotation_days: u32,

    /// Indicator whether API calls are logged.
    #[default(true)]
    pub enable_api_logging: bool,

    /// [`BackupFrequency`] of the hosted store.
    pub backup_frequency: BackupFrequency,

    /// Backup retention, in days.
    #[default(30)]
    pub retention_days: u32,

    /// Indicator whether the audit log is enabled.
    #[default(true)]
    pub enable_audit_log: bool,
}

/// Backup frequency of the hosted store.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    PartialEq,
    strum::Display,
    strum::EnumString,
)]
pub enum BackupFrequency {
    /// Daily backups.
    #[default]
    #[strum(serialize = "daily")]
    Daily,

    /// Weekly backups.
    #[strum(serialize = "weekly")]
    Weekly,

    /// Monthly backups.
    #[strum(serialize = "monthly")]
    Monthly,
}

impl SettingsPage {
    /// Creates a new [`SettingsPage`] with default [`Preferences`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves the current [`Preferences`].
    ///
    /// Local state only; nothing is persisted externally.
    pub fn save(&mut self) {
        self.notices.push(Notice::success(
            "Settings saved",
            "System settings have been successfully updated.",
        ));
    }

    /// Resets all [`Preferences`] to their defaults.
    pub fn reset_to_defaults(&mut self) {
        self.preferences = Preferences::default();
        self.notices.push(Notice::success(
            "Settings reset",
            "All settings have been reset to default values.",
        ));
    }

    /// Removes and returns all pending [`Notice`]s of this page.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.notices.drain()
    }
}

#[cfg(test)]
mod spec {
    use super::{BackupFrequency, Preferences, SettingsPage};

    #[test]
    fn defaults_match_the_shipped_preferences() {
        let prefs = Preferences::default();
        assert_eq!(prefs.system_name, "Admin Portal");
        assert_eq!(prefs.session_timeout, 30);
        assert_eq!(prefs.backup_frequency, BackupFrequency::Daily);
        assert!(prefs.enable_audit_log);
        assert!(!prefs.maintenance_mode);
    }

    #[test]
    fn reset_restores_the_defaults() {
        let mut page = SettingsPage::new();
        page.preferences.maintenance_mode = true;
        page.preferences.api_rate_limit = 5;

        page.reset_to_defaults();
        assert_eq!(page.preferences, Preferences::default());
    }
}
