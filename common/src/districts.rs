//! # District Registry Ports
//!
//! Contracts the estate use cases need from whatever stores districts.
//! Implementations live in `appraisr-core`.

use crate::error::EstateError;
use crate::estate::District;

/// Resolves districts by exact name.
pub trait DistrictLookup {
    /// Retrieves the district registered under `name`.
    ///
    /// # Returns
    /// * `Some(District)` - If a district with this exact name is registered.
    /// * `None` - If the name is unknown.
    fn find(&self, name: &str) -> Option<District>;
}

/// Stores new districts.
pub trait DistrictStore {
    /// Inserts `district` unless its name is already taken.
    ///
    /// Implementations must perform the existence check and the insert as one
    /// atomic step, so that concurrent inserts of one name let exactly one
    /// caller succeed.
    ///
    /// # Errors
    /// * [`EstateError::DistrictAlreadyExists`] - The name is registered already.
    ///   The registry is left unchanged.
    fn insert(&self, district: District) -> Result<(), EstateError>;
}

/// A full district registry: lookups, inserts and listing.
pub trait DistrictRepository: DistrictLookup + DistrictStore {
    /// Every registered district, ordered by name.
    fn all(&self) -> Vec<District>;
}

impl<F> DistrictLookup for F
where
    F: Fn(&str) -> Option<District>,
{
    fn find(&self, name: &str) -> Option<District> {
        self(name)
    }
}
