#![cfg(test)]
use appraisr_common::estate::{District, Property, Room};
use appraisr_common::request::{PropertyRequest, RoomRequest};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Dimension in half units between 0.5 and 20. Products and sums of these
/// stay exact in `f64`, so any summation order gives the same total.
pub fn half_unit(rng: &mut StdRng) -> f64 {
    rng.random_range(1..=40) as f64 / 2.0
}

pub fn random_rooms(rng: &mut StdRng, count: usize) -> Vec<Room> {
    (0..count)
        .map(|i| Room::new(format!("room-{i}"), half_unit(rng), half_unit(rng)).unwrap())
        .collect()
}

pub fn property(district: &str, rooms: Vec<Room>) -> Property {
    Property::new("House1", district, rooms).unwrap()
}

pub fn district(name: &str, unit_price: f64) -> District {
    District::new(name, unit_price).unwrap()
}

pub fn house1_request(district_name: &str) -> PropertyRequest {
    let room = |name: &str, length, width| RoomRequest {
        name: name.into(),
        length,
        width,
    };
    PropertyRequest {
        name: "House1".into(),
        district_name: district_name.into(),
        rooms: vec![
            room("bigger", 2.0, 2.0),
            room("medium", 2.0, 1.0),
            room("smaller", 1.0, 1.0),
        ],
    }
}
