//! # Estate Models
//!
//! The entities and value objects of a real-estate assessment.
//!
//! ## Entities
//! * [`room::Room`]: A rectangular space with a derived surface.
//! * [`property::Property`]: A named, ordered collection of rooms located in a district.
//! * [`district::District`]: A named region with a price per unit of surface.
//!
//! ## Value Objects
//! * [`assessment::Assessment`]: The computed surfaces and price of a property.
//! * [`assessment::RoomSurface`]: A room name paired with its surface.
//!
//! Every entity is built through a validating constructor and is immutable afterwards.

pub mod assessment;
pub mod district;
pub mod property;
pub mod room;

pub use assessment::{Assessment, RoomSurface};
pub use district::District;
pub use property::Property;
pub use room::Room;

use crate::error::ValidationError;

pub(crate) fn require_name(value: String, what: &'static str) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyName(what));
    }
    Ok(value)
}
