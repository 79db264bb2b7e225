#![cfg(test)]
use std::sync::Barrier;
use std::thread;

use appraisr_common::districts::{DistrictLookup, DistrictRepository};
use appraisr_common::error::EstateError;
use appraisr_common::request::DistrictRequest;
use appraisr_core::estate::EstateService;
use appraisr_core::registrar::register_district;
use appraisr_core::registry::InMemoryDistricts;

use crate::util;

#[test]
fn second_registration_of_district1_fails() {
    let service = EstateService::new(Box::new(InMemoryDistricts::new()));
    let request = DistrictRequest {
        name: "District1".into(),
        unit_price: 2.0,
    };

    assert_eq!(
        service.add_district(request.clone()),
        Ok("District was added Successfully")
    );
    assert_eq!(
        service.add_district(request),
        Err(EstateError::DistrictAlreadyExists("District1".into()))
    );
    assert_eq!(service.districts(), vec![util::district("District1", 2.0)]);
}

#[test]
fn registered_district_is_visible_to_lookups() {
    let registry = InMemoryDistricts::new();
    assert_eq!(registry.find("Palermo"), None);

    register_district(&registry, util::district("Palermo", 2500.0)).unwrap();

    assert_eq!(registry.find("Palermo"), Some(util::district("Palermo", 2500.0)));
}

#[test]
fn concurrent_registrations_of_one_name_admit_one() {
    const THREADS: usize = 16;
    let registry = InMemoryDistricts::new();
    let barrier = Barrier::new(THREADS);

    let results: Vec<Result<(), EstateError>> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|i| {
                let registry = &registry;
                let barrier = &barrier;
                s.spawn(move || {
                    barrier.wait();
                    register_district(registry, util::district("Contested", 1.0 + i as f64))
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let winners = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(winners, 1);
    assert!(results
        .iter()
        .filter_map(|r| r.as_ref().err())
        .all(|e| *e == EstateError::DistrictAlreadyExists("Contested".into())));
    assert_eq!(registry.all().len(), 1);
}

#[test]
fn concurrent_registrations_of_distinct_names_all_land() {
    let registry = InMemoryDistricts::new();

    thread::scope(|s| {
        for i in 0..8 {
            let registry = &registry;
            s.spawn(move || {
                register_district(registry, util::district(&format!("District{i}"), 2.0)).unwrap();
            });
        }
    });

    assert_eq!(registry.all().len(), 8);
    assert!(registry.find("District7").is_some());
}
