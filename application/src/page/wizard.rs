//! [`Wizard`] for creating a new [`Property`].
//!
//! [`Property`]: service::domain::Property

use service::domain::{
    property::{draft::ValidationError, Draft},
    user, Property,
};

/// Six-step guided flow collecting a new [`Property`].
///
/// The flow is strictly linear: no branching, no skipping. Steps perform no
/// field validation of their own; the whole rule set runs once, on
/// submission from [`Step::Review`].
///
/// [`Property`]: service::domain::Property
#[derive(Debug, Default)]
pub struct Wizard {
    /// Current [`Step`] of this [`Wizard`].
    step: Step,

    /// Collected [`Draft`] state.
    pub draft: Draft,
}

impl Wizard {
    /// Creates a new [`Wizard`] at [`Step::BasicInfo`] with a blank
    /// [`Draft`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current [`Step`].
    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }

    /// Advances to the next [`Step`], one at a time.
    ///
    /// Does nothing on [`Step::Review`]: the only way out of it is
    /// [`submit`] or [`back`].
    ///
    /// [`back`]: Wizard::back
    /// [`submit`]: Wizard::submit
    pub fn next(&mut self) {
        if let Some(step) = self.step.succ() {
            self.step = step;
        }
    }

    /// Steps back, or aborts the whole flow when already on
    /// [`Step::BasicInfo`].
    ///
    /// Aborting discards all collected state; nothing is persisted as a
    /// draft.
    pub fn back(&mut self) -> Retreat {
        match self.step.pred() {
            Some(step) => {
                self.step = step;
                Retreat::SteppedBack
            }
            None => Retreat::Aborted,
        }
    }

    /// Submits the collected [`Draft`] from [`Step::Review`], validating it
    /// against the existing `properties`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] aggregating every violated rule; the
    /// [`Wizard`] stays on [`Step::Review`] with its state intact.
    pub fn submit(
        &self,
        properties: &[Property],
        created_by: Option<user::Id>,
    ) -> Result<Property, ValidationError> {
        self.draft
            .to_property(properties.iter().map(|p| &p.name), created_by)
    }
}

/// Step of a [`Wizard`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Step {
    /// Basic information: name, neighborhood, street, year, units, floors,
    /// serviced flag and notes.
    #[default]
    BasicInfo,

    /// Amenity features.
    Features,

    /// Unit type templates.
    Units,

    /// Contacts.
    Contacts,

    /// Photos and location.
    PhotosLocation,

    /// Final review before submission.
    Review,
}

impl Step {
    /// Returns the 1-based number of this [`Step`].
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::BasicInfo => 1,
            Self::Features => 2,
            Self::Units => 3,
            Self::Contacts => 4,
            Self::PhotosLocation => 5,
            Self::Review => 6,
        }
    }

    /// Returns the display title of this [`Step`].
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::BasicInfo => "Basic Info",
            Self::Features => "Features",
            Self::Units => "Units",
            Self::Contacts => "Contacts",
            Self::PhotosLocation => "Photos & Location",
            Self::Review => "Review",
        }
    }

    /// Returns the [`Step`] following this one, if any.
    fn succ(self) -> Option<Self> {
        match self {
            Self::BasicInfo => Some(Self::Features),
            Self::Features => Some(Self::Units),
            Self::Units => Some(Self::Contacts),
            Self::Contacts => Some(Self::PhotosLocation),
            Self::PhotosLocation => Some(Self::Review),
            Self::Review => None,
        }
    }

    /// Returns the [`Step`] preceding this one, if any.
    fn pred(self) -> Option<Self> {
        match self {
            Self::BasicInfo => None,
            Self::Features => Some(Self::BasicInfo),
            Self::Units => Some(Self::Features),
            Self::Contacts => Some(Self::Units),
            Self::PhotosLocation => Some(Self::Contacts),
            Self::Review => Some(Self::PhotosLocation),
        }
    }
}

/// Outcome of stepping a [`Wizard`] back.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Retreat {
    /// Moved one [`Step`] back.
    SteppedBack,

    /// Aborted the whole flow from [`Step::BasicInfo`].
    Aborted,
}
