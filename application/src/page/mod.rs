//! Page state machines of the admin portal.

pub mod dashboard;
pub mod profile;
pub mod properties;
pub mod property_edit;
pub mod settings;
pub mod team;
pub mod users;
pub mod wizard;

pub use self::{
    dashboard::Dashboard,
    profile::ProfilePage,
    properties::PropertiesPage,
    property_edit::PropertyEditor,
    settings::SettingsPage,
    team::TeamPage,
    users::UsersPage,
    wizard::Wizard,
};
