//! [`Draft`] of a new [`Property`] and its submission validation.

use std::fmt;

use derive_more::{Display, Error};
use itertools::Itertools as _;

use common::DateTime;

use crate::domain::user;

use super::{
    contact::{Contact, ContactField},
    features::{Feature, Features},
    location::{Location, LocationField},
    photo::{self, Photo},
    unit::{UnitDetail, UnitFeature, UnitField},
    FloorsTotal, Hash, ListingStatus, Name, Neighborhood, Property, Street,
    UnitsTotal, Year,
};

/// Collected, not yet validated state of a new [`Property`].
///
/// Scalar fields are kept exactly as entered. The whole rule set runs only
/// on submission, so a [`Draft`] may hold an incomplete or invalid record at
/// any point before that.
#[derive(Clone, Debug, Default)]
pub struct Draft {
    /// Name, as entered.
    pub name: String,

    /// Neighborhood, as entered.
    pub neighborhood: String,

    /// Street address, as entered.
    pub street: String,

    /// Year built, as entered.
    pub year: String,

    /// Total number of units, as entered.
    pub units: String,

    /// Number of floors, as entered.
    pub floors: String,

    /// Indicator whether the property is serviced.
    pub serviced: bool,

    /// Collected unit type templates.
    pub unit_details: Vec<UnitDetail>,

    /// Collected amenity [`Features`].
    pub features: Features,

    /// Collected [`Contact`]s.
    pub contacts: Vec<Contact>,

    /// Collected [`Photo`]s.
    pub photos: Vec<Photo>,

    /// Collected [`Location`].
    pub location: Location,

    /// Free-form notes.
    pub notes: String,
}

impl Draft {
    /// Applies the provided [`BasicField`] to this [`Draft`].
    pub fn update_basic(&mut self, field: BasicField) {
        use BasicField as F;

        match field {
            F::Name(name) => self.name = name,
            F::Neighborhood(neighborhood) => {
                self.neighborhood = neighborhood;
            }
            F::Street(street) => self.street = street,
            F::Year(year) => self.year = year,
            F::Units(units) => self.units = units,
            F::Floors(floors) => self.floors = floors,
            F::Serviced(serviced) => self.serviced = serviced,
            F::Notes(notes) => self.notes = notes,
        }
    }

    /// Sets the provided amenity [`Feature`] flag.
    pub fn set_feature(&mut self, feature: Feature, enabled: bool) {
        self.features.set(feature, enabled);
    }

    /// Appends a new blank [`UnitDetail`] template.
    pub fn add_unit(&mut self) {
        self.unit_details.push(UnitDetail::default());
    }

    /// Removes the [`UnitDetail`] template at the provided `index`.
    pub fn remove_unit(&mut self, index: usize) {
        if index < self.unit_details.len() {
            drop(self.unit_details.remove(index));
        }
    }

    /// Applies the provided [`UnitField`] to the [`UnitDetail`] at the
    /// provided `index`.
    pub fn update_unit(&mut self, index: usize, field: UnitField) {
        if let Some(unit) = self.unit_details.get_mut(index) {
            unit.apply(field);
        }
    }

    /// Applies the provided [`UnitFeature`] to the [`UnitDetail`] at the
    /// provided `index`.
    pub fn update_unit_feature(&mut self, index: usize, feature: UnitFeature) {
        if let Some(unit) = self.unit_details.get_mut(index) {
            unit.features.apply(feature);
        }
    }

    /// Appends a new blank [`Contact`], denormalizing the currently entered
    /// name into it.
    pub fn add_contact(&mut self) {
        self.contacts.push(Contact::for_property(&self.name));
    }

    /// Removes the [`Contact`] at the provided `index`.
    pub fn remove_contact(&mut self, index: usize) {
        if index < self.contacts.len() {
            drop(self.contacts.remove(index));
        }
    }

    /// Applies the provided [`ContactField`] to the [`Contact`] at the
    /// provided `index`.
    pub fn update_contact(&mut self, index: usize, field: ContactField) {
        if let Some(contact) = self.contacts.get_mut(index) {
            contact.apply(field);
        }
    }

    /// Appends a new [`Photo`].
    ///
    /// The first [`Photo`] becomes primary.
    pub fn add_photo(&mut self, url: String, caption: Option<String>) {
        let is_primary = self.photos.is_empty();
        self.photos.push(Photo::new(url, caption, is_primary));
    }

    /// Removes the [`Photo`] with the provided ID.
    pub fn remove_photo(&mut self, id: &photo::Id) {
        self.photos.retain(|p| p.id != *id);
    }

    /// Marks the [`Photo`] with the provided ID as primary, clearing the
    /// primary flag on every other collected [`Photo`].
    pub fn set_primary_photo(&mut self, id: &photo::Id) {
        photo::set_primary(&mut self.photos, id);
    }

    /// Applies the provided [`LocationField`] to the collected [`Location`].
    pub fn update_location(&mut self, field: LocationField) {
        self.location.apply(field);
    }

    /// Validates the fields of this [`Draft`] without the uniqueness check,
    /// the way an edit of an already existing [`Property`] is validated.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] carrying every violated rule.
    pub fn validate_fields(&self) -> Result<(), ValidationError> {
        self.validate(std::iter::empty())
    }

    /// Validates this [`Draft`] against the full submission rule set.
    ///
    /// `existing` are the names of all already existing [`Property`]s, used
    /// for the case-insensitive uniqueness check.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] carrying EVERY violated rule, not just
    /// the first one.
    pub fn validate<'n>(
        &self,
        existing: impl IntoIterator<Item = &'n Name>,
    ) -> Result<(), ValidationError> {
        use Violation as V;

        let mut violations = Vec::new();

        if self.name.trim().is_empty() {
            violations.push(V::NameRequired);
        }
        if self.neighborhood.trim().is_empty() {
            violations.push(V::NeighborhoodRequired);
        }
        if self.street.trim().is_empty() {
            violations.push(V::StreetRequired);
        }
        if self.year.trim().is_empty() {
            violations.push(V::YearRequired);
        }
        if self.units.trim().is_empty() {
            violations.push(V::UnitsRequired);
        }
        if self.floors.trim().is_empty() {
            violations.push(V::FloorsRequired);
        }

        let name = self.name.trim();
        if existing.into_iter().any(|n| {
            let n: &str = n.as_ref();
            n.eq_ignore_ascii_case(name)
        }) {
            violations.push(V::DuplicateName);
        }

        if !self.name.is_empty() && !super::allowed_chars(&self.name) {
            violations.push(V::NameFormat);
        }
        if !self.neighborhood.is_empty()
            && !super::allowed_chars(&self.neighborhood)
        {
            violations.push(V::NeighborhoodFormat);
        }
        if !self.street.is_empty() && !super::allowed_chars(&self.street) {
            violations.push(V::StreetFormat);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { violations })
        }
    }

    /// Validates this [`Draft`] and builds a new [`Property`] out of it.
    ///
    /// The new [`Property`]'s ID is derived from the content [`Hash`] of the
    /// collected scalar fields.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] carrying every violated rule. The
    /// [`Draft`] stays untouched in that case.
    ///
    /// [`Hash`]: struct@Hash
    pub fn to_property<'n>(
        &self,
        existing: impl IntoIterator<Item = &'n Name>,
        created_by: Option<user::Id>,
    ) -> Result<Property, ValidationError> {
        self.validate(existing)?;

        // SAFETY: `validate()` checked emptiness and the character class
        //         above, and the values are trimmed right here.
        #[expect(unsafe_code, reason = "invariants are preserved")]
        let (name, neighborhood, street, year, units, floors) = unsafe {
            (
                Name::new_unchecked(self.name.trim()),
                Neighborhood::new_unchecked(self.neighborhood.trim()),
                Street::new_unchecked(self.street.trim()),
                Year::new_unchecked(self.year.trim()),
                UnitsTotal::new_unchecked(self.units.trim()),
                FloorsTotal::new_unchecked(self.floors.trim()),
            )
        };

        let hash = Hash::new(
            &name,
            &neighborhood,
            &street,
            &year,
            &units,
            &floors,
            self.serviced,
        );
        let now = DateTime::now();

        Ok(Property {
            id: hash.into(),
            name,
            neighborhood,
            street,
            year,
            units,
            floors,
            serviced: self.serviced,
            unit_details: self.unit_details.clone(),
            features: self.features.clone(),
            contacts: self.contacts.clone(),
            photos: self.photos.clone(),
            location: self.location.clone(),
            notes: self.notes.clone(),
            listing_status: ListingStatus::Listed,
            created_at: now.coerce(),
            updated_at: now.coerce(),
            created_by,
        })
    }
}

impl From<&Property> for Draft {
    fn from(property: &Property) -> Self {
        Self {
            name: property.name.to_string(),
            neighborhood: property.neighborhood.to_string(),
            street: property.street.to_string(),
            year: property.year.to_string(),
            units: property.units.to_string(),
            floors: property.floors.to_string(),
            serviced: property.serviced,
            unit_details: property.unit_details.clone(),
            features: property.features.clone(),
            contacts: property.contacts.clone(),
            photos: property.photos.clone(),
            location: property.location.clone(),
            notes: property.notes.clone(),
        }
    }
}

/// Single basic-info field update of a [`Draft`].
#[derive(Clone, Debug, PartialEq)]
pub enum BasicField {
    /// New name.
    Name(String),

    /// New neighborhood.
    Neighborhood(String),

    /// New street address.
    Street(String),

    /// New year built.
    Year(String),

    /// New total number of units.
    Units(String),

    /// New number of floors.
    Floors(String),

    /// New serviced flag.
    Serviced(bool),

    /// New notes.
    Notes(String),
}

/// Error of validating a [`Draft`] on submission.
///
/// Aggregates every violated rule of the attempted submission.
#[derive(Debug, Error)]
pub struct ValidationError {
    /// All [`Violation`]s of the rejected submission.
    #[error(not(source))]
    violations: Vec<Violation>,
}

impl ValidationError {
    /// Returns all [`Violation`]s of the rejected submission.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.violations
                .iter()
                .format_with(", ", |v, f| f(&format_args!("{v}"))),
        )
    }
}

/// Single violated rule of a [`Draft`] submission.
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
pub enum Violation {
    /// Name is blank.
    #[display("Property name is required")]
    NameRequired,

    /// Neighborhood is blank.
    #[display("Neighborhood is required")]
    NeighborhoodRequired,

    /// Street address is blank.
    #[display("Street address is required")]
    StreetRequired,

    /// Year is blank.
    #[display("Year is required")]
    YearRequired,

    /// Number of units is blank.
    #[display("Number of units is required")]
    UnitsRequired,

    /// Number of floors is blank.
    #[display("Number of floors is required")]
    FloorsRequired,

    /// Name collides with an existing [`Property`] (case-insensitively).
    #[display("A property with this name already exists")]
    DuplicateName,

    /// Name contains characters outside the allowed class.
    #[display(
        "Property name can only contain letters, numbers, spaces, and \
         parentheses"
    )]
    NameFormat,

    /// Neighborhood contains characters outside the allowed class.
    #[display(
        "Neighborhood can only contain letters, numbers, spaces, and \
         parentheses"
    )]
    NeighborhoodFormat,

    /// Street contains characters outside the allowed class.
    #[display(
        "Street can only contain letters, numbers, spaces, and parentheses"
    )]
    StreetFormat,
}

#[cfg(test)]
mod spec {
    use super::{Draft, Name, Violation};

    fn filled() -> Draft {
        Draft {
            name: "Oak Court".into(),
            neighborhood: "Downtown".into(),
            street: "12 Elm Street".into(),
            year: "2020".into(),
            units: "24".into(),
            floors: "6".into(),
            ..Draft::default()
        }
    }

    fn existing() -> Vec<Name> {
        vec![Name::new("Sunset Apartments").unwrap()]
    }

    #[test]
    fn accepts_a_complete_draft() {
        let property = filled().to_property(&existing(), None).unwrap();
        assert_eq!(property.name.to_string(), "Oak Court");
        assert_eq!(property.created_at, property.updated_at.coerce());
    }

    #[test]
    fn reports_every_blank_field_at_once() {
        let err = Draft::default().validate(&existing()).unwrap_err();
        assert_eq!(
            err.violations(),
            &[
                Violation::NameRequired,
                Violation::NeighborhoodRequired,
                Violation::StreetRequired,
                Violation::YearRequired,
                Violation::UnitsRequired,
                Violation::FloorsRequired,
            ],
        );
    }

    #[test]
    fn aggregated_message_names_each_violation() {
        let draft = Draft {
            neighborhood: String::new(),
            ..filled()
        };
        let err = draft.validate(&existing()).unwrap_err();
        assert_eq!(err.to_string(), "Neighborhood is required");

        let draft = Draft {
            name: "Tower #1".into(),
            neighborhood: String::new(),
            ..filled()
        };
        let err = draft.validate(&existing()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Neighborhood is required, Property name can only contain \
             letters, numbers, spaces, and parentheses",
        );
    }

    #[test]
    fn rejects_duplicate_names_case_insensitively() {
        let draft = Draft {
            name: "SUNSET apartments".into(),
            ..filled()
        };
        let err = draft.validate(&existing()).unwrap_err();
        assert_eq!(err.violations(), &[Violation::DuplicateName]);
    }

    #[test]
    fn character_class_allows_parentheses_but_not_punctuation() {
        let ok = Draft {
            name: "Tower (1)".into(),
            ..filled()
        };
        assert!(ok.validate(&existing()).is_ok());

        let bad = Draft {
            name: "Tower #1".into(),
            ..filled()
        };
        let err = bad.validate(&existing()).unwrap_err();
        assert_eq!(err.violations(), &[Violation::NameFormat]);
    }

    #[test]
    fn derived_id_is_content_stable() {
        let a = filled().to_property(&existing(), None).unwrap();
        let b = filled().to_property(&existing(), None).unwrap();
        assert_eq!(a.id, b.id);

        let c = Draft {
            name: "Oak Court 2".into(),
            ..filled()
        }
        .to_property(&existing(), None)
        .unwrap();
        assert_ne!(a.id, c.id);
    }
}
