//! Demo fixtures the portal boots with.

use serde_json::json;
use service::{
    domain::{
        property::{
            contact::{Contact, Title},
            location::LocationField,
            unit::{UnitDetail, UnitFeatures, UnitKind},
            Draft,
        },
        Property,
    },
    infra::InMemory,
};

/// Returns the demo [`Property`] collection.
#[expect(clippy::missing_panics_doc, reason = "fixture is valid")]
#[must_use]
pub fn properties() -> Vec<Property> {
    let mut draft = Draft {
        name: "Sunset Apartments".into(),
        neighborhood: "Downtown".into(),
        street: "123 Main Street".into(),
        year: "2020".into(),
        units: "24".into(),
        floors: "6".into(),
        serviced: true,
        notes: "Modern apartment complex with great amenities".into(),
        ..Draft::default()
    };

    draft.features.pool = true;
    draft.features.gym = true;
    draft.features.cctv = true;
    draft.features.backup_generator = true;
    draft.features.disability_access = true;
    draft.features.reserved_parking = true;
    draft.features.visitor_parking = true;
    draft.features.elevator = true;
    draft.features.manager_on_site = true;
    draft.features.laundry_mart = true;
    draft.features.free_wifi = true;
    draft.features.manned_security = true;

    draft.unit_details.push(UnitDetail {
        title: "Standard Studio".into(),
        kind: UnitKind::Studio,
        rooms: 1,
        baths: 1,
        rent: 1800,
        size: 450,
        count: 8,
        master_ensuite: false,
        all_ensuite: true,
        features: UnitFeatures {
            balcony: true,
            fitted_kitchen: true,
            solar_water: true,
            intercom: true,
            air_con: true,
            ..UnitFeatures::default()
        },
    });

    draft.contacts.push(Contact {
        first_name: "John".into(),
        last_name: "Manager".into(),
        title: Title::PropertyManager,
        email: "john@example.com".into(),
        phone: "(555) 123-4567".into(),
        property_name: "Sunset Apartments".into(),
        notes: "Available 9-5 weekdays".into(),
    });

    draft.add_photo(
        "https://images.unsplash.com/photo-1560448204".into(),
        Some("Building exterior".into()),
    );
    draft.add_photo(
        "https://images.unsplash.com/photo-1502672260266".into(),
        Some("Lobby area".into()),
    );

    draft.update_location(LocationField::Lat(37.7749));
    draft.update_location(LocationField::Lng(-122.4194));
    draft.update_location(LocationField::FormattedAddress(
        "123 Main Street, San Francisco, CA 94102".into(),
    ));
    draft.update_location(LocationField::City("San Francisco".into()));
    draft.update_location(LocationField::CountryLong("United States".into()));
    draft.update_location(LocationField::CountryShort("US".into()));
    draft.update_location(LocationField::Description("Downtown location".into()));
    draft.update_location(LocationField::Zipcode("94102".into()));

    vec![draft.to_property(&[], None).expect("fixture is valid")]
}

/// Returns the demo record store.
///
/// User records are deliberately seeded in snake_case (with numeric
/// verification flags), the way the hosted store actually returns them, to
/// keep the DTO boundary honest.
#[must_use]
pub fn store() -> InMemory {
    InMemory::seeded(
        vec![
            json!({
                "id": "5f6f0b5e-27a3-4be8-8df4-3e1a5a1c9b01",
                "email": "john.doe@example.com",
                "first_name": "John",
                "last_name": "Doe",
                "role": "admin",
                "status": "active",
                "email_verified": 1,
                "created_at": "2024-01-15T10:30:00Z",
                "updated_at": "2024-01-15T10:30:00Z",
                "last_login": "2024-01-18T09:15:00Z",
            }),
            json!({
                "id": "8a1cb9a2-40d5-4f6b-9c0e-6a20c4f7d302",
                "email": "jane.smith@example.com",
                "first_name": "Jane",
                "last_name": "Smith",
                "role": "surveyor",
                "status": "active",
                "email_verified": 1,
                "created_at": "2024-01-10T14:20:00Z",
                "updated_at": "2024-01-10T14:20:00Z",
                "last_login": "2024-01-17T16:45:00Z",
            }),
            json!({
                "id": "c3d9e7f1-92b4-4d08-a1c7-58e2b6a4f903",
                "email": "mike.wilson@example.com",
                "first_name": "Mike",
                "last_name": "Wilson",
                "role": "property_manager",
                "status": "inactive",
                "email_verified": 0,
                "created_at": "2024-01-05T11:10:00Z",
                "updated_at": "2024-01-05T11:10:00Z",
            }),
        ],
        vec![json!({
            "id": "e4b8c6d2-71a9-4e35-b0d8-92c5a7e1f604",
            "user_id": "system",
            "action": "INVITE",
            "resource_type": "user",
            "resource_id": "c3d9e7f1-92b4-4d08-a1c7-58e2b6a4f903",
            "details": "Invited new team member: Mike Wilson \
                        (mike.wilson@example.com)",
            "created_at": "2024-01-05T11:10:00Z",
        })],
    )
}

#[cfg(test)]
mod spec {
    use common::operations::{By, Select};
    use service::{
        domain::User,
        infra::Store as _,
        read,
    };

    use super::{properties, store};

    #[test]
    fn the_demo_property_is_fully_populated() {
        let seeded = properties();
        assert_eq!(seeded.len(), 1);

        let property = &seeded[0];
        assert_eq!(property.name.to_string(), "Sunset Apartments");
        assert_eq!(property.unit_details.len(), 1);
        assert_eq!(property.contacts.len(), 1);
        assert_eq!(property.photos.len(), 2);
        assert!(property.photos[0].is_primary);
        assert!(!property.photos[1].is_primary);
        assert!(!property.location.is_empty());
        assert!(property.features.pool);
    }

    #[tokio::test]
    async fn snake_case_seed_records_decode_through_the_adapter() {
        let store = store();
        let users: Vec<User> = store
            .execute(Select(By::new(read::user::list::Selector::default())))
            .await
            .unwrap();

        assert_eq!(users.len(), 3);
        assert_eq!(users[0].first_name, "John");
        assert!(users[0].email_verified);
        assert!(users[2].last_login.is_none());
    }
}
