use crate::error::ValidationError;

/// A rectangular space measured by its length and width.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    name: String,
    length: f64,
    width: f64,
}

impl Room {
    /// Builds a room, rejecting dimensions that are not finite and strictly
    /// positive, and dimensions whose product overflows.
    pub fn new(name: impl Into<String>, length: f64, width: f64) -> Result<Self, ValidationError> {
        let name = name.into();
        check_dimension(&name, "length", length)?;
        check_dimension(&name, "width", width)?;
        if !(length * width).is_finite() {
            return Err(ValidationError::NonFiniteSurface { room: name });
        }

        Ok(Self {
            name,
            length,
            width,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Length times width, with no rounding or unit conversion.
    pub fn surface(&self) -> f64 {
        self.length * self.width
    }
}

fn check_dimension(room: &str, dimension: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteDimension {
            room: room.to_string(),
            dimension,
        });
    }
    if value <= 0.0 {
        return Err(ValidationError::NonPositiveDimension {
            room: room.to_string(),
            dimension,
            value,
        });
    }
    Ok(())
}
