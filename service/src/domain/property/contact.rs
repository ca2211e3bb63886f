//! [`Contact`] definitions.

#[cfg(doc)]
use crate::domain::Property;

/// Person attached to a [`Property`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Contact {
    /// First name of this [`Contact`].
    pub first_name: String,

    /// Last name of this [`Contact`].
    pub last_name: String,

    /// [`Title`] of this [`Contact`].
    pub title: Title,

    /// Email address of this [`Contact`], kept as entered.
    pub email: String,

    /// Phone number of this [`Contact`], kept as entered.
    pub phone: String,

    /// Name of the [`Property`] this [`Contact`] was attached to, copied at
    /// creation time and never synchronized afterwards.
    pub property_name: String,

    /// Free-form notes about this [`Contact`].
    pub notes: String,
}

impl Contact {
    /// Creates a new blank [`Contact`] for the [`Property`] with the
    /// provided `property_name`.
    #[must_use]
    pub fn for_property(property_name: &str) -> Self {
        Self {
            property_name: property_name.to_owned(),
            ..Self::default()
        }
    }

    /// Applies the provided [`ContactField`] to this [`Contact`].
    pub fn apply(&mut self, field: ContactField) {
        use ContactField as F;

        match field {
            F::FirstName(name) => self.first_name = name,
            F::LastName(name) => self.last_name = name,
            F::Title(title) => self.title = title,
            F::Email(email) => self.email = email,
            F::Phone(phone) => self.phone = phone,
            F::Notes(notes) => self.notes = notes,
        }
    }
}

/// Single-field update of a [`Contact`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ContactField {
    /// New first name.
    FirstName(String),

    /// New last name.
    LastName(String),

    /// New [`Title`].
    Title(Title),

    /// New email address.
    Email(String),

    /// New phone number.
    Phone(String),

    /// New notes.
    Notes(String),
}

/// Title of a [`Contact`] towards the [`Property`].
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
pub enum Title {
    /// Owner of the [`Property`].
    #[strum(serialize = "owner")]
    Owner,

    /// Tenant of the [`Property`].
    #[strum(serialize = "tenant")]
    Tenant,

    /// Caretaker of the [`Property`].
    #[strum(serialize = "caretaker")]
    Caretaker,

    /// Watchman of the [`Property`].
    #[strum(serialize = "watchman")]
    Watchman,

    /// Property manager.
    #[default]
    #[strum(serialize = "property manager")]
    PropertyManager,
}

#[cfg(test)]
mod spec {
    use super::{Contact, ContactField, Title};

    #[test]
    fn blank_contact_denormalizes_the_property_name() {
        let contact = Contact::for_property("Sunset Apartments");
        assert_eq!(contact.property_name, "Sunset Apartments");
        assert_eq!(contact.title, Title::PropertyManager);
        assert!(contact.first_name.is_empty());
    }

    #[test]
    fn denormalized_name_survives_field_updates() {
        let mut contact = Contact::for_property("Sunset Apartments");
        contact.apply(ContactField::FirstName("John".into()));
        contact.apply(ContactField::Title(Title::Owner));

        assert_eq!(contact.first_name, "John");
        assert_eq!(contact.title, Title::Owner);
        assert_eq!(contact.property_name, "Sunset Apartments");
    }

    #[test]
    fn titles_render_their_wire_spelling() {
        assert_eq!(Title::PropertyManager.to_string(), "property manager");
        assert_eq!("watchman".parse::<Title>().unwrap(), Title::Watchman);
    }
}
