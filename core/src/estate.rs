use appraisr_common::districts::DistrictRepository;
use appraisr_common::error::EstateError;
use appraisr_common::estate::{Assessment, District, Property};
use appraisr_common::request::{DistrictRequest, PropertyRequest};

use crate::{assessment, registrar};

pub const DISTRICT_ADDED: &str = "District was added Successfully";

/// Entry point for the estate use cases.
///
/// Converts inbound requests into domain models and runs them against the
/// injected district repository.
pub struct EstateService {
    districts: Box<dyn DistrictRepository>,
}

impl EstateService {
    pub fn new(districts: Box<dyn DistrictRepository>) -> Self {
        Self { districts }
    }

    pub fn get_assessment(&self, request: PropertyRequest) -> Result<Assessment, EstateError> {
        let property = Property::try_from(request)?;
        assessment::compute_assessment(&property, self.districts.as_ref())
    }

    /// Registers the requested district and returns a confirmation message.
    pub fn add_district(&self, request: DistrictRequest) -> Result<&'static str, EstateError> {
        let district = District::try_from(request)?;
        registrar::register_district(self.districts.as_ref(), district)?;
        Ok(DISTRICT_ADDED)
    }

    pub fn districts(&self) -> Vec<District> {
        self.districts.all()
    }
}
