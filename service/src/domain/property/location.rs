//! [`Location`] definitions.

#[cfg(doc)]
use crate::domain::Property;

/// Geocoded location of a [`Property`].
///
/// Every field is optional: a [`Property`] may carry no location at all.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Location {
    /// Latitude.
    pub lat: Option<f64>,

    /// Longitude.
    pub lng: Option<f64>,

    /// Full formatted address.
    pub formatted_address: Option<String>,

    /// City.
    pub city: Option<String>,

    /// Long country name.
    pub country_long: Option<String>,

    /// Short country code.
    pub country_short: Option<String>,

    /// Free-form description.
    pub description: Option<String>,

    /// Zip code.
    pub zipcode: Option<String>,
}

impl Location {
    /// Indicates whether this [`Location`] carries no data at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Applies the provided [`LocationField`] to this [`Location`].
    pub fn apply(&mut self, field: LocationField) {
        use LocationField as F;

        match field {
            F::Lat(lat) => self.lat = Some(lat),
            F::Lng(lng) => self.lng = Some(lng),
            F::FormattedAddress(addr) => self.formatted_address = Some(addr),
            F::City(city) => self.city = Some(city),
            F::CountryLong(country) => self.country_long = Some(country),
            F::CountryShort(country) => self.country_short = Some(country),
            F::Description(description) => {
                self.description = Some(description);
            }
            F::Zipcode(zipcode) => self.zipcode = Some(zipcode),
        }
    }
}

/// Single-field update of a [`Location`].
#[derive(Clone, Debug, PartialEq)]
pub enum LocationField {
    /// New latitude.
    Lat(f64),

    /// New longitude.
    Lng(f64),

    /// New formatted address.
    FormattedAddress(String),

    /// New city.
    City(String),

    /// New long country name.
    CountryLong(String),

    /// New short country code.
    CountryShort(String),

    /// New description.
    Description(String),

    /// New zip code.
    Zipcode(String),
}

#[cfg(test)]
mod spec {
    use super::{Location, LocationField};

    #[test]
    fn fresh_location_is_empty() {
        assert!(Location::default().is_empty());
    }

    #[test]
    fn any_field_makes_it_non_empty() {
        let mut location = Location::default();
        location.apply(LocationField::City("San Francisco".into()));
        assert!(!location.is_empty());
        assert_eq!(location.city.as_deref(), Some("San Francisco"));
        assert_eq!(location.lat, None);
    }
}
