//! [`Property`] definitions.

pub mod contact;
pub mod draft;
pub mod features;
pub mod location;
pub mod photo;
pub mod unit;

use std::sync::LazyLock;

#[cfg(doc)]
use common::DateTime;
use common::{unit as marker, DateTimeOf};
use derive_more::{AsRef, Display, From, FromStr, Into};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use xxhash_rust::xxh3;

use crate::domain::user;

pub use self::{
    contact::Contact, draft::Draft, features::Features, location::Location,
    photo::Photo, unit::UnitDetail,
};

/// Managed real-estate property.
#[derive(Clone, Debug)]
pub struct Property {
    /// ID of this [`Property`].
    pub id: Id,

    /// [`Name`] of this [`Property`].
    pub name: Name,

    /// [`Neighborhood`] this [`Property`] belongs to.
    pub neighborhood: Neighborhood,

    /// [`Street`] address of this [`Property`].
    pub street: Street,

    /// [`Year`] this [`Property`] was built.
    pub year: Year,

    /// Declared total number of units, as entered.
    pub units: UnitsTotal,

    /// Declared number of floors, as entered.
    pub floors: FloorsTotal,

    /// Indicator whether this [`Property`] is serviced.
    pub serviced: bool,

    /// Unit type templates of this [`Property`].
    pub unit_details: Vec<UnitDetail>,

    /// Amenity [`Features`] of this [`Property`].
    pub features: Features,

    /// [`Contact`]s attached to this [`Property`].
    pub contacts: Vec<Contact>,

    /// [`Photo`]s of this [`Property`].
    pub photos: Vec<Photo>,

    /// Geocoded [`Location`] of this [`Property`], possibly empty.
    pub location: Location,

    /// Free-form notes about this [`Property`].
    pub notes: String,

    /// [`ListingStatus`] of this [`Property`].
    pub listing_status: ListingStatus,

    /// [`DateTime`] when this [`Property`] was created.
    pub created_at: CreationDateTime,

    /// [`DateTime`] when this [`Property`] was last updated.
    pub updated_at: UpdateDateTime,

    /// [`User`] who created this [`Property`], if known.
    ///
    /// [`User`]: crate::domain::User
    pub created_by: Option<user::Id>,
}

impl Property {
    /// Sets the provided amenity [`features::Feature`] flag.
    pub fn set_feature(&mut self, feature: features::Feature, enabled: bool) {
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

    /// Applies the provided [`unit::UnitField`] to the [`UnitDetail`] at the
    /// provided `index`.
    pub fn update_unit(&mut self, index: usize, field: unit::UnitField) {
        if let Some(unit) = self.unit_details.get_mut(index) {
            unit.apply(field);
        }
    }

    /// Applies the provided [`unit::UnitFeature`] to the [`UnitDetail`] at
    /// the provided `index`.
    pub fn update_unit_feature(
        &mut self,
        index: usize,
        feature: unit::UnitFeature,
    ) {
        if let Some(unit) = self.unit_details.get_mut(index) {
            unit.features.apply(feature);
        }
    }

    /// Appends a new blank [`Contact`], denormalizing the current
    /// [`Property`] name into it.
    ///
    /// The denormalized name is NOT kept in sync with later renames.
    pub fn add_contact(&mut self) {
        self.contacts.push(Contact::for_property(self.name.as_ref()));
    }

    /// Removes the [`Contact`] at the provided `index`.
    pub fn remove_contact(&mut self, index: usize) {
        if index < self.contacts.len() {
            drop(self.contacts.remove(index));
        }
    }

    /// Applies the provided [`contact::ContactField`] to the [`Contact`] at
    /// the provided `index`.
    pub fn update_contact(
        &mut self,
        index: usize,
        field: contact::ContactField,
    ) {
        if let Some(contact) = self.contacts.get_mut(index) {
            contact.apply(field);
        }
    }

    /// Appends a new [`Photo`].
    ///
    /// The first [`Photo`] of a [`Property`] becomes primary.
    pub fn add_photo(&mut self, url: String, caption: Option<String>) {
        let is_primary = self.photos.is_empty();
        self.photos.push(Photo::new(url, caption, is_primary));
    }

    /// Removes the [`Photo`] with the provided ID.
    pub fn remove_photo(&mut self, id: &photo::Id) {
        self.photos.retain(|p| p.id != *id);
    }

    /// Marks the [`Photo`] with the provided ID as primary, clearing the
    /// primary flag on every other [`Photo`] of this [`Property`].
    pub fn set_primary_photo(&mut self, id: &photo::Id) {
        photo::set_primary(&mut self.photos, id);
    }

    /// Applies the provided [`location::LocationField`] to the [`Location`]
    /// of this [`Property`].
    pub fn update_location(&mut self, field: location::LocationField) {
        self.location.apply(field);
    }
}

/// ID of a [`Property`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Hash> for Id {
    fn from(hash: Hash) -> Self {
        Self(hash.into())
    }
}

/// Content hash of a [`Property`], used to derive its [`Id`].
///
/// [`Hash`]: struct@Hash
#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, From, Into, PartialEq,
    Serialize,
)]
pub struct Hash(Uuid);

impl Hash {
    /// Calculates a new [`Hash`] for a [`Property`].
    ///
    /// [`Hash`]: struct@Hash
    #[must_use]
    pub fn new(
        name: &Name,
        neighborhood: &Neighborhood,
        street: &Street,
        year: &Year,
        units: &UnitsTotal,
        floors: &FloorsTotal,
        serviced: bool,
    ) -> Self {
        use std::hash::Hash as _;

        // WARNING: Avoid changing the order of the fields in the hasher,
        //          because it changes the IDs derived for identical input.
        let mut hasher = xxh3::Xxh3Builder::new().build();
        name.hash(&mut hasher);
        neighborhood.hash(&mut hasher);
        street.hash(&mut hasher);
        year.hash(&mut hasher);
        units.hash(&mut hasher);
        floors.hash(&mut hasher);
        serviced.hash(&mut hasher);

        Self(Uuid::from_u128(hasher.digest128()))
    }
}

/// Name of a [`Property`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `name` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Name`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && allowed_chars(name)
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

/// Neighborhood of a [`Property`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct Neighborhood(String);

impl Neighborhood {
    /// Creates a new [`Neighborhood`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `name` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a new [`Neighborhood`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Neighborhood`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && allowed_chars(name)
    }
}

impl FromStr for Neighborhood {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Neighborhood`")
    }
}

/// Street address of a [`Property`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct Street(String);

impl Street {
    /// Creates a new [`Street`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `street` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(street: impl Into<String>) -> Self {
        Self(street.into())
    }

    /// Creates a new [`Street`] if the given `street` is valid.
    #[must_use]
    pub fn new(street: impl Into<String>) -> Option<Self> {
        let street = street.into();
        Self::check(&street).then_some(Self(street))
    }

    /// Checks whether the given `street` is a valid [`Street`].
    fn check(street: impl AsRef<str>) -> bool {
        let street = street.as_ref();
        street.trim() == street && !street.is_empty() && allowed_chars(street)
    }
}

impl FromStr for Street {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Street`")
    }
}

/// Checks whether the given `value` contains only letters, digits, spaces
/// and parentheses.
pub(crate) fn allowed_chars(value: &str) -> bool {
    /// Regular expression limiting names and addresses to letters, digits,
    /// spaces and parentheses.
    static REGEX: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^[A-Za-z0-9 ()]+$").expect("valid regex")
    });

    REGEX.is_match(value)
}

/// Year a [`Property`] was built, kept as entered.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct Year(String);

impl Year {
    /// Creates a new [`Year`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `year` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(year: impl Into<String>) -> Self {
        Self(year.into())
    }

    /// Creates a new [`Year`] if the given `year` is valid.
    #[must_use]
    pub fn new(year: impl Into<String>) -> Option<Self> {
        let year = year.into();
        Self::check(&year).then_some(Self(year))
    }

    /// Checks whether the given `year` is a valid [`Year`].
    fn check(year: impl AsRef<str>) -> bool {
        let year = year.as_ref();
        year.trim() == year && !year.is_empty()
    }
}

impl FromStr for Year {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Year`")
    }
}

/// Declared total number of units in a [`Property`], kept as entered.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct UnitsTotal(String);

impl UnitsTotal {
    /// Creates a new [`UnitsTotal`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `units` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(units: impl Into<String>) -> Self {
        Self(units.into())
    }

    /// Creates a new [`UnitsTotal`] if the given `units` is valid.
    #[must_use]
    pub fn new(units: impl Into<String>) -> Option<Self> {
        let units = units.into();
        Self::check(&units).then_some(Self(units))
    }

    /// Checks whether the given `units` is a valid [`UnitsTotal`].
    fn check(units: impl AsRef<str>) -> bool {
        let units = units.as_ref();
        units.trim() == units && !units.is_empty()
    }
}

impl FromStr for UnitsTotal {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `UnitsTotal`")
    }
}

/// Declared number of floors in a [`Property`], kept as entered.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct FloorsTotal(String);

impl FloorsTotal {
    /// Creates a new [`FloorsTotal`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `floors` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(floors: impl Into<String>) -> Self {
        Self(floors.into())
    }

    /// Creates a new [`FloorsTotal`] if the given `floors` is valid.
    #[must_use]
    pub fn new(floors: impl Into<String>) -> Option<Self> {
        let floors = floors.into();
        Self::check(&floors).then_some(Self(floors))
    }

    /// Checks whether the given `floors` is a valid [`FloorsTotal`].
    fn check(floors: impl AsRef<str>) -> bool {
        let floors = floors.as_ref();
        floors.trim() == floors && !floors.is_empty()
    }
}

impl FromStr for FloorsTotal {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `FloorsTotal`")
    }
}

/// Listing status of a [`Property`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Eq,
    PartialEq,
    Serialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ListingStatus {
    /// [`Property`] is publicly advertised.
    #[default]
    Listed,

    /// [`Property`] is withdrawn from advertising.
    Unlisted,
}

impl ListingStatus {
    /// Returns the opposite [`ListingStatus`].
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Listed => Self::Unlisted,
            Self::Unlisted => Self::Listed,
        }
    }
}

/// [`DateTime`] when a [`Property`] was created.
pub type CreationDateTime = DateTimeOf<(Property, marker::Creation)>;

/// [`DateTime`] when a [`Property`] was last updated.
pub type UpdateDateTime = DateTimeOf<(Property, marker::Update)>;

#[cfg(test)]
mod spec {
    use super::{FloorsTotal, ListingStatus, Name, Neighborhood, Street};

    #[test]
    fn name_allows_letters_digits_spaces_parentheses() {
        assert!(Name::new("Tower (1)").is_some());
        assert!(Name::new("Sunset Apartments").is_some());
        assert!(Name::new("Oak Court 42").is_some());
    }

    #[test]
    fn name_rejects_other_characters() {
        assert!(Name::new("Tower #1").is_none());
        assert!(Name::new("Tower-1").is_none());
        assert!(Name::new("").is_none());
        assert!(Name::new("  padded  ").is_none());
    }

    #[test]
    fn neighborhood_and_street_share_the_character_class() {
        assert!(Neighborhood::new("Sunset District").is_some());
        assert!(Neighborhood::new("So#Ho").is_none());
        assert!(Street::new("123 Main Street").is_some());
        assert!(Street::new("123 Main St.").is_none());
    }

    #[test]
    fn free_text_numerics_only_require_content() {
        assert!(FloorsTotal::new("6").is_some());
        assert!(FloorsTotal::new("six").is_some());
        assert!(FloorsTotal::new("").is_none());
        assert!(FloorsTotal::new(" 6").is_none());
    }

    #[test]
    fn listing_status_toggles() {
        assert_eq!(ListingStatus::Listed.toggled(), ListingStatus::Unlisted);
        assert_eq!(ListingStatus::Unlisted.toggled(), ListingStatus::Listed);
        assert_eq!(ListingStatus::Listed.to_string(), "listed");
    }
}
