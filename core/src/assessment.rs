use appraisr_common::districts::DistrictLookup;
use appraisr_common::error::{EstateError, ValidationError};
use appraisr_common::estate::{Assessment, Property, RoomSurface};
use tracing::debug;

/// Computes surfaces and price of `property` using the unit price of its district.
///
/// Surfaces are accumulated in room order so results are reproducible for a
/// given input.
///
/// # Errors
/// * [`EstateError::DistrictNotFound`] - `districts` has no entry for the
///   property's district name.
/// * [`ValidationError::NonFiniteTotal`] - The total surface or the total
///   price overflows.
pub fn compute_assessment<L>(property: &Property, districts: &L) -> Result<Assessment, EstateError>
where
    L: DistrictLookup + ?Sized,
{
    let district = districts
        .find(property.district_name())
        .ok_or_else(|| EstateError::DistrictNotFound(property.district_name().to_string()))?;

    let rooms: Vec<RoomSurface> = property
        .rooms()
        .iter()
        .map(|room| RoomSurface::new(room.name(), room.surface()))
        .collect();

    let total_surface = total_surface(&rooms);
    let total_price = total_surface * district.unit_price();
    for (quantity, value) in [("total surface", total_surface), ("total price", total_price)] {
        if !value.is_finite() {
            return Err(ValidationError::NonFiniteTotal {
                property: property.name().to_string(),
                quantity,
            }
            .into());
        }
    }
    let largest_room = largest_room(&rooms).cloned();

    debug!(
        property = property.name(),
        district = district.name(),
        rooms = rooms.len(),
        total_surface,
        total_price,
        "assessment computed"
    );

    Ok(Assessment {
        property_name: property.name().to_string(),
        total_surface,
        total_price,
        largest_room,
        rooms,
    })
}

fn total_surface(rooms: &[RoomSurface]) -> f64 {
    rooms.iter().fold(0.0, |acc, room| acc + room.surface)
}

/// First room holding the maximum surface. Later rooms only win when strictly larger.
fn largest_room(rooms: &[RoomSurface]) -> Option<&RoomSurface> {
    rooms.iter().fold(None, |best, room| match best {
        Some(current) if current.surface >= room.surface => Some(current),
        _ => Some(room),
    })
}
