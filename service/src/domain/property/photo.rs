//! [`Photo`] definitions.

use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(doc)]
use crate::domain::Property;

/// Photo of a [`Property`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Photo {
    /// ID of this [`Photo`].
    pub id: Id,

    /// URL of this [`Photo`].
    pub url: String,

    /// Caption of this [`Photo`], if any.
    pub caption: Option<String>,

    /// Indicator whether this [`Photo`] is the primary one of its
    /// [`Property`].
    ///
    /// At most one [`Photo`] per [`Property`] is meant to be primary, which
    /// is guaranteed only by [`set_primary`] and never validated
    /// independently.
    pub is_primary: bool,
}

impl Photo {
    /// Creates a new [`Photo`] with a random [`Id`].
    #[must_use]
    pub fn new(url: String, caption: Option<String>, is_primary: bool) -> Self {
        Self {
            id: Id::new(),
            url,
            caption,
            is_primary,
        }
    }
}

/// ID of a [`Photo`].
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

/// Marks the [`Photo`] with the provided `id` as primary, clearing the
/// primary flag on every other [`Photo`] in the collection.
pub fn set_primary(photos: &mut [Photo], id: &Id) {
    for photo in photos {
        photo.is_primary = photo.id == *id;
    }
}

#[cfg(test)]
mod spec {
    use super::{set_primary, Photo};

    fn gallery(n: usize) -> Vec<Photo> {
        (0..n)
            .map(|i| {
                Photo::new(format!("https://photos.example.com/{i}"), None, i == 0)
            })
            .collect()
    }

    #[test]
    fn exactly_one_photo_is_primary_after_set_primary() {
        let mut photos = gallery(4);
        let target = photos[2].id;

        set_primary(&mut photos, &target);

        let primary: Vec<_> =
            photos.iter().filter(|p| p.is_primary).collect();
        assert_eq!(primary.len(), 1);
        assert_eq!(primary[0].id, target);
    }

    #[test]
    fn set_primary_is_idempotent() {
        let mut photos = gallery(3);
        let target = photos[1].id;

        set_primary(&mut photos, &target);
        set_primary(&mut photos, &target);

        assert_eq!(photos.iter().filter(|p| p.is_primary).count(), 1);
        assert!(photos[1].is_primary);
    }
}
