//! Amenity [`Features`] definitions.

use strum::IntoEnumIterator as _;

#[cfg(doc)]
use crate::domain::Property;

/// Amenity flags of a [`Property`].
///
/// Every flag is independent and defaults to `false`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Features {
    /// Swimming pool.
    pub pool: bool,

    /// Gym.
    pub gym: bool,

    /// Sauna.
    pub sauna: bool,

    /// Steam room.
    pub steam_room: bool,

    /// Restaurant.
    pub restaurant: bool,

    /// Shop.
    pub shop: bool,

    /// CCTV surveillance.
    pub cctv: bool,

    /// Borehole water supply.
    pub borehole: bool,

    /// Backup generator.
    pub backup_generator: bool,

    /// Cinema.
    pub cinema: bool,

    /// Entertainment room.
    pub entertainment_room: bool,

    /// Conference room.
    pub conference_room: bool,

    /// Disability access.
    pub disability_access: bool,

    /// Garden.
    pub garden: bool,

    /// Reserved parking.
    pub reserved_parking: bool,

    /// Visitor parking.
    pub visitor_parking: bool,

    /// Elevator.
    pub elevator: bool,

    /// Rooftop lounge.
    pub rooftop_lounge: bool,

    /// Gazebo.
    pub gazebo: bool,

    /// Indoor playground.
    pub indoor_playground: bool,

    /// Outdoor playground.
    pub outdoor_playground: bool,

    /// Pet friendly.
    pub pet_friendly: bool,

    /// Manager on site.
    pub manager_on_site: bool,

    /// Patio.
    pub patio: bool,

    /// Laundry mart.
    pub laundry_mart: bool,

    /// Free water.
    pub free_water: bool,

    /// Free Wi-Fi.
    pub free_wifi: bool,

    /// Manned security.
    pub manned_security: bool,
}

impl Features {
    /// Sets the provided [`Feature`] flag.
    pub fn set(&mut self, feature: Feature, enabled: bool) {
        *self.flag_mut(feature) = enabled;
    }

    /// Returns the provided [`Feature`] flag.
    #[must_use]
    pub fn get(&self, feature: Feature) -> bool {
        *self.flag(feature)
    }

    /// Returns every enabled [`Feature`], in declaration order.
    #[must_use]
    pub fn enabled(&self) -> Vec<Feature> {
        Feature::iter().filter(|f| self.get(*f)).collect()
    }

    /// Returns a shared reference to the flag of the provided [`Feature`].
    fn flag(&self, feature: Feature) -> &bool {
        use Feature as F;

        match feature {
            F::Pool => &self.pool,
            F::Gym => &self.gym,
            F::Sauna => &self.sauna,
            F::SteamRoom => &self.steam_room,
            F::Restaurant => &self.restaurant,
            F::Shop => &self.shop,
            F::Cctv => &self.cctv,
            F::Borehole => &self.borehole,
            F::BackupGenerator => &self.backup_generator,
            F::Cinema => &self.cinema,
            F::EntertainmentRoom => &self.entertainment_room,
            F::ConferenceRoom => &self.conference_room,
            F::DisabilityAccess => &self.disability_access,
            F::Garden => &self.garden,
            F::ReservedParking => &self.reserved_parking,
            F::VisitorParking => &self.visitor_parking,
            F::Elevator => &self.elevator,
            F::RooftopLounge => &self.rooftop_lounge,
            F::Gazebo => &self.gazebo,
            F::IndoorPlayground => &self.indoor_playground,
            F::OutdoorPlayground => &self.outdoor_playground,
            F::PetFriendly => &self.pet_friendly,
            F::ManagerOnSite => &self.manager_on_site,
            F::Patio => &self.patio,
            F::LaundryMart => &self.laundry_mart,
            F::FreeWater => &self.free_water,
            F::FreeWifi => &self.free_wifi,
            F::MannedSecurity => &self.manned_security,
        }
    }

    /// Returns a unique reference to the flag of the provided [`Feature`].
    fn flag_mut(&mut self, feature: Feature) -> &mut bool {
        use Feature as F;

        match feature {
            F::Pool => &mut self.pool,
            F::Gym => &mut self.gym,
            F::Sauna => &mut self.sauna,
            F::SteamRoom => &mut self.steam_room,
            F::Restaurant => &mut self.restaurant,
            F::Shop => &mut self.shop,
            F::Cctv => &mut self.cctv,
            F::Borehole => &mut self.borehole,
            F::BackupGenerator => &mut self.backup_generator,
            F::Cinema => &mut self.cinema,
            F::EntertainmentRoom => &mut self.entertainment_room,
            F::ConferenceRoom => &mut self.conference_room,
            F::DisabilityAccess => &mut self.disability_access,
            F::Garden => &mut self.garden,
            F::ReservedParking => &mut self.reserved_parking,
            F::VisitorParking => &mut self.visitor_parking,
            F::Elevator => &mut self.elevator,
            F::RooftopLounge => &mut self.rooftop_lounge,
            F::Gazebo => &mut self.gazebo,
            F::IndoorPlayground => &mut self.indoor_playground,
            F::OutdoorPlayground => &mut self.outdoor_playground,
            F::PetFriendly => &mut self.pet_friendly,
            F::ManagerOnSite => &mut self.manager_on_site,
            F::Patio => &mut self.patio,
            F::LaundryMart => &mut self.laundry_mart,
            F::FreeWater => &mut self.free_water,
            F::FreeWifi => &mut self.free_wifi,
            F::MannedSecurity => &mut self.manned_security,
        }
    }
}

/// Key of a single [`Features`] flag.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "title_case")]
pub enum Feature {
    /// Swimming pool.
    Pool,

    /// Gym.
    Gym,

    /// Sauna.
    Sauna,

    /// Steam room.
    SteamRoom,

    /// Restaurant.
    Restaurant,

    /// Shop.
    Shop,

    /// CCTV surveillance.
    Cctv,

    /// Borehole water supply.
    Borehole,

    /// Backup generator.
    BackupGenerator,

    /// Cinema.
    Cinema,

    /// Entertainment room.
    EntertainmentRoom,

    /// Conference room.
    ConferenceRoom,

    /// Disability access.
    DisabilityAccess,

    /// Garden.
    Garden,

    /// Reserved parking.
    ReservedParking,

    /// Visitor parking.
    VisitorParking,

    /// Elevator.
    Elevator,

    /// Rooftop lounge.
    RooftopLounge,

    /// Gazebo.
    Gazebo,

    /// Indoor playground.
    IndoorPlayground,

    /// Outdoor playground.
    OutdoorPlayground,

    /// Pet friendly.
    PetFriendly,

    /// Manager on site.
    ManagerOnSite,

    /// Patio.
    Patio,

    /// Laundry mart.
    LaundryMart,

    /// Free water.
    FreeWater,

    /// Free Wi-Fi.
    FreeWifi,

    /// Manned security.
    MannedSecurity,
}

#[cfg(test)]
mod spec {
    use strum::IntoEnumIterator as _;

    use super::{Feature, Features};

    #[test]
    fn all_flags_default_to_false() {
        let features = Features::default();
        assert!(Feature::iter().all(|f| !features.get(f)));
    }

    #[test]
    fn set_and_get_roundtrip_every_flag() {
        let mut features = Features::default();
        for feature in Feature::iter() {
            features.set(feature, true);
            assert!(features.get(feature), "{feature} did not stick");
        }
        assert_eq!(features.enabled().len(), Feature::iter().count());

        features.set(Feature::Pool, false);
        assert!(!features.get(Feature::Pool));
        assert!(!features.enabled().contains(&Feature::Pool));
    }

    #[test]
    fn renders_human_readable_labels() {
        assert_eq!(Feature::SteamRoom.to_string(), "Steam Room");
        assert_eq!(Feature::Cctv.to_string(), "Cctv");
        assert_eq!(Feature::Pool.to_string(), "Pool");
    }
}
