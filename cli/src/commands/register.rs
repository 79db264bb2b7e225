use appraisr_common::config::Config;
use appraisr_common::request::DistrictRequest;
use appraisr_core::estate::EstateService;

use crate::terminal::report;

pub fn register(service: &EstateService, districts: Vec<DistrictRequest>, cfg: &Config) -> anyhow::Result<()> {
    let outcomes: Vec<_> = districts
        .into_iter()
        .map(|request| (request.name.clone(), service.add_district(request)))
        .collect();

    report::registration(&outcomes, cfg);
    report::districts(&service.districts(), cfg);

    let failed: usize = outcomes.iter().filter(|(_, outcome)| outcome.is_err()).count();
    if failed > 0 {
        anyhow::bail!("{failed} of {} districts could not be registered", outcomes.len());
    }
    Ok(())
}
