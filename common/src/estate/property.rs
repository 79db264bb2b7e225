use crate::error::ValidationError;
use crate::estate::{Room, require_name};

/// A named property made of rooms, located in a district.
///
/// Room order is the order the rooms were submitted in and is kept in every
/// derived output.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    name: String,
    district_name: String,
    rooms: Vec<Room>,
}

impl Property {
    pub fn new(
        name: impl Into<String>,
        district_name: impl Into<String>,
        rooms: Vec<Room>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: name.into(),
            district_name: require_name(district_name.into(), "district")?,
            rooms,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn district_name(&self) -> &str {
        &self.district_name
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }
}
