use appraisr_common::districts::DistrictStore;
use appraisr_common::error::EstateError;
use appraisr_common::estate::District;
use tracing::{info, warn};

/// Registers `district` in `store`. Never overwrites an existing entry.
///
/// # Errors
/// * [`EstateError::DistrictAlreadyExists`] - The name is taken; `store` is unchanged.
pub fn register_district<S>(store: &S, district: District) -> Result<(), EstateError>
where
    S: DistrictStore + ?Sized,
{
    let name = district.name().to_string();
    let unit_price = district.unit_price();

    match store.insert(district) {
        Ok(()) => {
            info!(district = %name, unit_price, "district registered");
            Ok(())
        }
        Err(e) => {
            warn!(district = %name, "district rejected: {e}");
            Err(e)
        }
    }
}
