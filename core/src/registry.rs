use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use appraisr_common::districts::{DistrictLookup, DistrictRepository, DistrictStore};
use appraisr_common::error::EstateError;
use appraisr_common::estate::District;
use tracing::debug;

/// District registry kept in process memory.
///
/// Lookups share a read lock. Inserts take the write lock for both the
/// existence check and the insert, so a name can only be claimed once.
#[derive(Debug, Default)]
pub struct InMemoryDistricts {
    districts: RwLock<HashMap<String, District>>,
}

impl InMemoryDistricts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A panic while holding the lock cannot leave the map half-written, so
    // poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, District>> {
        self.districts.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, District>> {
        self.districts.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DistrictLookup for InMemoryDistricts {
    fn find(&self, name: &str) -> Option<District> {
        let found = self.read().get(name).cloned();
        debug!(district = name, found = found.is_some(), "district lookup");
        found
    }
}

impl DistrictStore for InMemoryDistricts {
    fn insert(&self, district: District) -> Result<(), EstateError> {
        match self.write().entry(district.name().to_string()) {
            Entry::Occupied(entry) => Err(EstateError::DistrictAlreadyExists(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(district);
                Ok(())
            }
        }
    }
}

impl DistrictRepository for InMemoryDistricts {
    fn all(&self) -> Vec<District> {
        let mut districts: Vec<District> = self.read().values().cloned().collect();
        districts.sort_by(|a, b| a.name().cmp(b.name()));
        districts
    }
}
