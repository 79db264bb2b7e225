use appraisr_common::config::Config;
use appraisr_core::estate::EstateService;

use crate::terminal::report;

pub fn districts(service: &EstateService, cfg: &Config) -> anyhow::Result<()> {
    report::districts(&service.districts(), cfg);
    Ok(())
}
