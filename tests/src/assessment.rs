#![cfg(test)]
use appraisr_common::districts::DistrictRepository;
use appraisr_common::error::EstateError;
use appraisr_common::estate::{Room, RoomSurface};
use appraisr_common::request::{DistrictRequest, PropertyRequest, RoomRequest};
use appraisr_core::assessment::compute_assessment;
use appraisr_core::estate::EstateService;
use appraisr_core::registrar::register_district;
use appraisr_core::registry::InMemoryDistricts;
use rand::seq::SliceRandom;

use crate::util;

fn registry_with(districts: &[(&str, f64)]) -> InMemoryDistricts {
    let registry = InMemoryDistricts::new();
    for (name, price) in districts {
        register_district(&registry, util::district(name, *price)).unwrap();
    }
    registry
}

#[test]
fn house_assessment_end_to_end() -> anyhow::Result<()> {
    let service = EstateService::new(Box::new(InMemoryDistricts::new()));
    service.add_district(DistrictRequest {
        name: "District1".into(),
        unit_price: 2.0,
    })?;

    let assessment = service.get_assessment(util::house1_request("District1"))?;

    assert_eq!(assessment.property_name, "House1");
    assert_eq!(assessment.total_surface, 7.0);
    assert_eq!(assessment.total_price, 14.0);
    assert_eq!(assessment.largest_room, Some(RoomSurface::new("bigger", 4.0)));
    assert_eq!(
        assessment.rooms,
        vec![
            RoomSurface::new("bigger", 4.0),
            RoomSurface::new("medium", 2.0),
            RoomSurface::new("smaller", 1.0),
        ]
    );
    Ok(())
}

#[test]
fn ghost_district_is_not_found() {
    let registry = registry_with(&[("District1", 2.0)]);
    let property = util::property("Ghost", vec![Room::new("hall", 1.0, 1.0).unwrap()]);

    let result = compute_assessment(&property, &registry);

    assert_eq!(result, Err(EstateError::DistrictNotFound("Ghost".into())));
}

#[test]
fn total_surface_ignores_room_order() {
    let registry = registry_with(&[("District1", 3.0)]);
    let mut rng = util::rng(7);

    for count in [1, 2, 5, 17, 64] {
        let mut rooms = util::random_rooms(&mut rng, count);
        let expected: f64 = rooms.iter().map(Room::surface).fold(0.0, |acc, s| acc + s);
        let max_surface = rooms.iter().map(Room::surface).fold(f64::MIN, f64::max);

        for _ in 0..10 {
            rooms.shuffle(&mut rng);
            let property = util::property("District1", rooms.clone());

            let assessment = compute_assessment(&property, &registry).unwrap();

            assert_eq!(assessment.total_surface, expected);
            assert_eq!(assessment.total_price, expected * 3.0);
            let largest = assessment.largest_room.unwrap();
            assert_eq!(largest.surface, max_surface);
            let first_max = rooms.iter().find(|r| r.surface() == max_surface).unwrap();
            assert_eq!(largest.name, first_max.name());
        }
    }
}

#[test]
fn breakdown_mirrors_input_order() {
    let registry = registry_with(&[("District1", 1.5)]);
    let mut rng = util::rng(42);
    let rooms = util::random_rooms(&mut rng, 12);
    let property = util::property("District1", rooms.clone());

    let assessment = compute_assessment(&property, &registry).unwrap();

    let expected: Vec<RoomSurface> = rooms
        .iter()
        .map(|r| RoomSurface::new(r.name(), r.length() * r.width()))
        .collect();
    assert_eq!(assessment.rooms, expected);
}

#[test]
fn price_uses_the_property_district() {
    let registry = registry_with(&[("Cheap", 1.0), ("Dear", 10.0)]);
    let rooms = vec![Room::new("loft", 4.0, 2.5).unwrap()];

    let cheap = compute_assessment(&util::property("Cheap", rooms.clone()), &registry).unwrap();
    let dear = compute_assessment(&util::property("Dear", rooms), &registry).unwrap();

    assert_eq!(cheap.total_price, 10.0);
    assert_eq!(dear.total_price, 100.0);
    assert_eq!(registry.all().len(), 2);
}

#[test]
fn property_without_rooms() {
    let service = EstateService::new(Box::new(registry_with(&[("District1", 2.0)])));

    let assessment = service
        .get_assessment(PropertyRequest {
            name: "Lot".into(),
            district_name: "District1".into(),
            rooms: Vec::new(),
        })
        .unwrap();

    assert_eq!(assessment.largest_room, None);
    assert_eq!(assessment.total_surface, 0.0);
    assert_eq!(assessment.total_price, 0.0);
}

#[test]
fn invalid_room_is_rejected_before_lookup() {
    let service = EstateService::new(Box::new(InMemoryDistricts::new()));

    let err = service
        .get_assessment(PropertyRequest {
            name: "House1".into(),
            district_name: "Ghost".into(),
            rooms: vec![RoomRequest {
                name: "void".into(),
                length: -1.0,
                width: 2.0,
            }],
        })
        .unwrap_err();

    assert!(matches!(err, EstateError::Invalid(_)));
}
