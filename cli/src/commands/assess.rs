use appraisr_common::config::Config;
use appraisr_common::request::{PropertyRequest, RoomRequest};
use appraisr_core::estate::EstateService;

use crate::terminal::report;

pub fn assess(
    service: &EstateService,
    property: String,
    district: String,
    rooms: Vec<RoomRequest>,
    cfg: &Config,
) -> anyhow::Result<()> {
    let request = PropertyRequest {
        name: property,
        district_name: district.clone(),
        rooms,
    };
    let assessment = service.get_assessment(request)?;

    report::assessment(&assessment, &district, cfg);
    Ok(())
}
