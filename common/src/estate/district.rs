use crate::error::ValidationError;
use crate::estate::require_name;

/// A named region and its price per unit of surface.
#[derive(Debug, Clone, PartialEq)]
pub struct District {
    name: String,
    unit_price: f64,
}

impl District {
    pub fn new(name: impl Into<String>, unit_price: f64) -> Result<Self, ValidationError> {
        let name = require_name(name.into(), "district")?;
        if !unit_price.is_finite() || unit_price <= 0.0 {
            return Err(ValidationError::InvalidUnitPrice {
                district: name,
                value: unit_price,
            });
        }
        Ok(Self { name, unit_price })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }
}
