/// A room name paired with its computed surface.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomSurface {
    pub name: String,
    pub surface: f64,
}

impl RoomSurface {
    pub fn new(name: impl Into<String>, surface: f64) -> Self {
        Self {
            name: name.into(),
            surface,
        }
    }
}

/// The valuation of a property.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub property_name: String,
    pub total_surface: f64,
    pub total_price: f64,
    /// `None` only when the property has no rooms.
    pub largest_room: Option<RoomSurface>,
    /// One entry per room, in submission order.
    pub rooms: Vec<RoomSurface>,
}
