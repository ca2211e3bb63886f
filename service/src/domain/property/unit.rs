//! [`UnitDetail`] definitions.

use smart_default::SmartDefault;

#[cfg(doc)]
use crate::domain::Property;

/// Unit type template of a [`Property`] (e.g. "Standard Studio"), distinct
/// from a physical unit instance.
///
/// A blank template starts as a one-room, one-bath single unit.
#[derive(Clone, Debug, PartialEq, SmartDefault)]
pub struct UnitDetail {
    /// Display title of this unit type.
    pub title: String,

    /// [`UnitKind`] of this unit type.
    pub kind: UnitKind,

    /// Number of rooms per unit.
    #[default(1)]
    pub rooms: u16,

    /// Number of bathrooms per unit.
    #[default(1)]
    pub baths: u16,

    /// Monthly rent per unit.
    pub rent: u32,

    /// Size of a unit in square feet.
    pub size: u32,

    /// Number of units of this type in the [`Property`].
    #[default(1)]
    pub count: u16,

    /// Indicator whether the master bedroom is ensuite.
    pub master_ensuite: bool,

    /// Indicator whether all bedrooms are ensuite.
    pub all_ensuite: bool,

    /// Per-unit [`UnitFeatures`].
    pub features: UnitFeatures,
}

impl UnitDetail {
    /// Applies the provided [`UnitField`] to this [`UnitDetail`].
    pub fn apply(&mut self, field: UnitField) {
        use UnitField as F;

        match field {
            F::Title(title) => self.title = title,
            F::Kind(kind) => self.kind = kind,
            F::Rooms(rooms) => self.rooms = rooms,
            F::Baths(baths) => self.baths = baths,
            F::Rent(rent) => self.rent = rent,
            F::Size(size) => self.size = size,
            F::Count(count) => self.count = count,
            F::MasterEnsuite(on) => self.master_ensuite = on,
            F::AllEnsuite(on) => self.all_ensuite = on,
        }
    }
}

/// Single-field update of a [`UnitDetail`].
#[derive(Clone, Debug, PartialEq)]
pub enum UnitField {
    /// New title of the unit type.
    Title(String),

    /// New [`UnitKind`] of the unit type.
    Kind(UnitKind),

    /// New number of rooms.
    Rooms(u16),

    /// New number of bathrooms.
    Baths(u16),

    /// New monthly rent.
    Rent(u32),

    /// New size in square feet.
    Size(u32),

    /// New unit count.
    Count(u16),

    /// New master-ensuite flag.
    MasterEnsuite(bool),

    /// New all-ensuite flag.
    AllEnsuite(bool),
}

/// Kind of a [`UnitDetail`].
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
pub enum UnitKind {
    /// Studio unit.
    #[default]
    #[strum(serialize = "studio")]
    Studio,

    /// One bedroom unit.
    #[strum(serialize = "1 bedroom")]
    OneBedroom,

    /// Two bedroom unit.
    #[strum(serialize = "2 bedroom")]
    TwoBedroom,

    /// Three bedroom unit.
    #[strum(serialize = "3 bedroom")]
    ThreeBedroom,

    /// Four bedroom unit.
    #[strum(serialize = "4 bedroom")]
    FourBedroom,

    /// Five or more bedroom unit.
    #[strum(serialize = "5+ bedroom")]
    FivePlusBedroom,
}

/// Per-unit features of a [`UnitDetail`].
#[derive(Clone, Debug, PartialEq, SmartDefault)]
pub struct UnitFeatures {
    /// Balcony.
    pub balcony: bool,

    /// Patio.
    pub patio: bool,

    /// Servant quarters.
    pub sq: bool,

    /// Fitted kitchen.
    pub fitted_kitchen: bool,

    /// [`KitchenPlan`] of the unit.
    pub kitchen: KitchenPlan,

    /// [`ElectricityBilling`] of the unit.
    pub electricity: ElectricityBilling,

    /// [`Flooring`] of the unit.
    #[default(Flooring::Tiles)]
    pub flooring: Flooring,

    /// Fireplace.
    pub fireplace: bool,

    /// Solar water heating.
    pub solar_water: bool,

    /// Intercom.
    pub intercom: bool,

    /// Air conditioning.
    pub air_con: bool,

    /// Dobby (laundry) area.
    pub dobby_area: bool,

    /// Pantry.
    pub pantry: bool,
}

impl UnitFeatures {
    /// Applies the provided [`UnitFeature`] to these [`UnitFeatures`].
    pub fn apply(&mut self, feature: UnitFeature) {
        use UnitFeature as F;

        match feature {
            F::Balcony(on) => self.balcony = on,
            F::Patio(on) => self.patio = on,
            F::Sq(on) => self.sq = on,
            F::FittedKitchen(on) => self.fitted_kitchen = on,
            F::Kitchen(plan) => self.kitchen = plan,
            F::Electricity(billing) => self.electricity = billing,
            F::Flooring(flooring) => self.flooring = flooring,
            F::Fireplace(on) => self.fireplace = on,
            F::SolarWater(on) => self.solar_water = on,
            F::Intercom(on) => self.intercom = on,
            F::AirCon(on) => self.air_con = on,
            F::DobbyArea(on) => self.dobby_area = on,
            F::Pantry(on) => self.pantry = on,
        }
    }
}

/// Single-field update of [`UnitFeatures`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UnitFeature {
    /// New balcony flag.
    Balcony(bool),

    /// New patio flag.
    Patio(bool),

    /// New servant quarters flag.
    Sq(bool),

    /// New fitted kitchen flag.
    FittedKitchen(bool),

    /// New [`KitchenPlan`].
    Kitchen(KitchenPlan),

    /// New [`ElectricityBilling`].
    Electricity(ElectricityBilling),

    /// New [`Flooring`].
    Flooring(Flooring),

    /// New fireplace flag.
    Fireplace(bool),

    /// New solar water heating flag.
    SolarWater(bool),

    /// New intercom flag.
    Intercom(bool),

    /// New air conditioning flag.
    AirCon(bool),

    /// New dobby area flag.
    DobbyArea(bool),

    /// New pantry flag.
    Pantry(bool),
}

/// Kitchen plan of a unit.
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
pub enum KitchenPlan {
    /// Open plan kitchen.
    #[default]
    #[strum(serialize = "open-plan")]
    OpenPlan,

    /// Closed plan kitchen.
    #[strum(serialize = "closed-plan")]
    ClosedPlan,
}

/// Electricity billing of a unit.
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
pub enum ElectricityBilling {
    /// Pre-paid electricity.
    #[default]
    #[strum(serialize = "pre-paid")]
    PrePaid,

    /// Post-paid electricity.
    #[strum(serialize = "post-paid")]
    PostPaid,
}

/// Flooring of a unit.
#[derive(Clone, Copy, Debug, Eq, PartialEq, strum::Display, strum::EnumString)]
pub enum Flooring {
    /// Wooden flooring.
    #[strum(serialize = "wooden")]
    Wooden,

    /// Tiled flooring.
    #[strum(serialize = "tiles")]
    Tiles,
}

#[cfg(test)]
mod spec {
    use super::{
        ElectricityBilling, Flooring, KitchenPlan, UnitDetail, UnitFeature,
        UnitFeatures, UnitField, UnitKind,
    };

    #[test]
    fn fresh_unit_matches_the_blank_template() {
        let unit = UnitDetail::default();
        assert_eq!(unit.kind, UnitKind::Studio);
        assert_eq!((unit.rooms, unit.baths, unit.count), (1, 1, 1));
        assert_eq!((unit.rent, unit.size), (0, 0));
        assert_eq!(unit.features.kitchen, KitchenPlan::OpenPlan);
        assert_eq!(unit.features.electricity, ElectricityBilling::PrePaid);
        assert_eq!(unit.features.flooring, Flooring::Tiles);
        assert!(!unit.master_ensuite);
    }

    #[test]
    fn applies_field_updates() {
        let mut unit = UnitDetail::default();
        unit.apply(UnitField::Title("Standard Studio".into()));
        unit.apply(UnitField::Rent(1800));
        unit.apply(UnitField::Count(8));
        unit.features.apply(UnitFeature::Balcony(true));
        unit.features.apply(UnitFeature::Flooring(Flooring::Wooden));

        assert_eq!(unit.title, "Standard Studio");
        assert_eq!(unit.rent, 1800);
        assert_eq!(unit.count, 8);
        assert!(unit.features.balcony);
        assert_eq!(unit.features.flooring, Flooring::Wooden);
    }

    #[test]
    fn kinds_render_their_wire_spelling() {
        assert_eq!(UnitKind::Studio.to_string(), "studio");
        assert_eq!(UnitKind::OneBedroom.to_string(), "1 bedroom");
        assert_eq!(UnitKind::FivePlusBedroom.to_string(), "5+ bedroom");
        assert_eq!(
            "2 bedroom".parse::<UnitKind>().unwrap(),
            UnitKind::TwoBedroom,
        );
    }
}
