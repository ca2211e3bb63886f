//! [`PropertyEditor`] dialog state.

use service::domain::{
    property::{
        self,
        contact::ContactField,
        draft::{BasicField, ValidationError},
        features::Feature,
        location::LocationField,
        photo,
        unit::{UnitFeature, UnitField},
        Draft, ListingStatus,
    },
    user, Property,
};

/// In-place editor over a single existing [`Property`].
///
/// Opens on a deep clone of the target: no live reference to the canonical
/// entity is held, and nothing reaches the owning list until [`save`] hands
/// the edited aggregate back.
///
/// [`save`]: PropertyEditor::save
#[derive(Debug)]
pub struct PropertyEditor {
    /// ID of the edited [`Property`].
    id: property::Id,

    /// Editable [`ListingStatus`].
    pub listing_status: ListingStatus,

    /// Creation timestamp of the original, carried through unchanged.
    created_at: property::CreationDateTime,

    /// Update timestamp of the original, carried through unchanged.
    updated_at: property::UpdateDateTime,

    /// Creator of the original, carried through unchanged.
    created_by: Option<user::Id>,

    /// Editable working state.
    pub form: Draft,

    /// Currently active [`Tab`].
    pub tab: Tab,
}

impl PropertyEditor {
    /// Opens a new [`PropertyEditor`] over a deep clone of the provided
    /// [`Property`].
    #[must_use]
    pub fn open(property: &Property) -> Self {
        Self {
            id: property.id,
            listing_status: property.listing_status,
            created_at: property.created_at,
            updated_at: property.updated_at,
            created_by: property.created_by,
            form: Draft::from(property),
            tab: Tab::Basic,
        }
    }

    /// Returns the ID of the edited [`Property`].
    #[must_use]
    pub fn id(&self) -> property::Id {
        self.id
    }

    /// Returns the public listing preview URL of the edited [`Property`].
    #[must_use]
    pub fn listing_preview_url(&self) -> String {
        format!("https://listings.example.com/property/{}", self.id)
    }

    /// Applies the provided [`BasicField`] to the working state.
    pub fn update_basic(&mut self, field: BasicField) {
        self.form.update_basic(field);
    }

    /// Sets the provided amenity [`Feature`] flag.
    pub fn update_feature(&mut self, feature: Feature, enabled: bool) {
        self.form.set_feature(feature, enabled);
    }

    /// Appends a new blank unit type template.
    pub fn add_unit(&mut self) {
        self.form.add_unit();
    }

    /// Removes the unit type template at the provided `index`.
    pub fn remove_unit(&mut self, index: usize) {
        self.form.remove_unit(index);
    }

    /// Applies the provided [`UnitField`] to the unit at the provided
    /// `index`.
    pub fn update_unit(&mut self, index: usize, field: UnitField) {
        self.form.update_unit(index, field);
    }

    /// Applies the provided [`UnitFeature`] to the unit at the provided
    /// `index`.
    pub fn update_unit_feature(&mut self, index: usize, feature: UnitFeature) {
        self.form.update_unit_feature(index, feature);
    }

    /// Appends a new blank contact.
    pub fn add_contact(&mut self) {
        self.form.add_contact();
    }

    /// Removes the contact at the provided `index`.
    pub fn remove_contact(&mut self, index: usize) {
        self.form.remove_contact(index);
    }

    /// Applies the provided [`ContactField`] to the contact at the provided
    /// `index`.
    pub fn update_contact(&mut self, index: usize, field: ContactField) {
        self.form.update_contact(index, field);
    }

    /// Appends a new photo.
    pub fn add_photo(&mut self, url: String, caption: Option<String>) {
        self.form.add_photo(url, caption);
    }

    /// Removes the photo with the provided ID.
    pub fn remove_photo(&mut self, id: &photo::Id) {
        self.form.remove_photo(id);
    }

    /// Marks the photo with the provided ID as primary, clearing the flag
    /// on every other photo.
    pub fn set_primary_photo(&mut self, id: &photo::Id) {
        self.form.set_primary_photo(id);
    }

    /// Applies the provided [`LocationField`] to the working location.
    pub fn update_location(&mut self, field: LocationField) {
        self.form.update_location(field);
    }

    /// Validates the working state and returns the edited [`Property`] for
    /// the owning list to commit.
    ///
    /// Timestamps and creator are carried through unchanged: they are
    /// assigned once at creation.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] (e.g. a blank name) leaving the editor
    /// state intact.
    pub fn save(&self) -> Result<Property, ValidationError> {
        self.form.validate_fields()?;

        // SAFETY: `validate_fields()` checked emptiness and the character
        //         class above, and the values are trimmed right here.
        #[expect(unsafe_code, reason = "invariants are preserved")]
        let (name, neighborhood, street, year, units, floors) = unsafe {
            (
                property::Name::new_unchecked(self.form.name.trim()),
                property::Neighborhood::new_unchecked(
                    self.form.neighborhood.trim(),
                ),
                property::Street::new_unchecked(self.form.street.trim()),
                property::Year::new_unchecked(self.form.year.trim()),
                property::UnitsTotal::new_unchecked(self.form.units.trim()),
                property::FloorsTotal::new_unchecked(self.form.floors.trim()),
            )
        };

        Ok(Property {
            id: self.id,
            name,
            neighborhood,
            street,
            year,
            units,
            floors,
            serviced: self.form.serviced,
            unit_details: self.form.unit_details.clone(),
            features: self.form.features.clone(),
            contacts: self.form.contacts.clone(),
            photos: self.form.photos.clone(),
            location: self.form.location.clone(),
            notes: self.form.notes.clone(),
            listing_status: self.listing_status,
            created_at: self.created_at,
            updated_at: self.updated_at,
            created_by: self.created_by,
        })
    }
}

/// Tab of a [`PropertyEditor`] dialog.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Tab {
    /// Basic information.
    #[default]
    Basic,

    /// Unit type templates.
    Units,

    /// Contacts.
    Contacts,

    /// Photos.
    Photos,

    /// Location.
    Location,
}

#[cfg(test)]
mod spec {
    use service::domain::{
        property::{draft::BasicField, unit::UnitField, Draft},
        Property,
    };

    use super::PropertyEditor;

    fn property() -> Property {
        Draft {
            name: "Sunset Apartments".into(),
            neighborhood: "Downtown".into(),
            street: "123 Main Street".into(),
            year: "2020".into(),
            units: "24".into(),
            floors: "6".into(),
            ..Draft::default()
        }
        .to_property(&[], None)
        .unwrap()
    }

    #[test]
    fn editing_never_touches_the_original() {
        let original = property();
        let mut editor = PropertyEditor::open(&original);

        editor.update_basic(BasicField::Name("Renamed Towers".into()));
        editor.add_unit();
        editor.update_unit(0, UnitField::Rent(2500));

        assert_eq!(original.name.to_string(), "Sunset Apartments");
        assert!(original.unit_details.is_empty());

        let saved = editor.save().unwrap();
        assert_eq!(saved.id, original.id);
        assert_eq!(saved.name.to_string(), "Renamed Towers");
        assert_eq!(saved.unit_details[0].rent, 2500);
    }

    #[test]
    fn save_requires_a_name() {
        let original = property();
        let mut editor = PropertyEditor::open(&original);
        editor.update_basic(BasicField::Name(String::new()));

        let err = editor.save().unwrap_err();
        assert_eq!(err.to_string(), "Property name is required");

        // The editor state survives the rejection.
        assert_eq!(editor.form.neighborhood, "Downtown");
    }

    #[test]
    fn timestamps_and_creator_are_carried_through() {
        let original = property();
        let mut editor = PropertyEditor::open(&original);
        editor.update_basic(BasicField::Notes("Repainted".into()));

        let saved = editor.save().unwrap();
        assert_eq!(saved.created_at, original.created_at);
        assert_eq!(saved.updated_at, original.updated_at);
        assert_eq!(saved.created_by, original.created_by);
    }

    #[test]
    fn renaming_does_not_resync_contact_denormalization() {
        let original = property();
        let mut editor = PropertyEditor::open(&original);

        editor.add_contact();
        editor.update_basic(BasicField::Name("Renamed Towers".into()));

        let saved = editor.save().unwrap();
        assert_eq!(saved.contacts[0].property_name, "Sunset Apartments");
    }
}
