//! Error types for the estate use cases.

use thiserror::Error;

/// Rejections raised while building domain models from raw input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A name that must identify something was empty or blank.
    #[error("{0} name must not be empty")]
    EmptyName(&'static str),

    /// A room dimension was zero or negative.
    #[error("room '{room}' has a non-positive {dimension}: {value}")]
    NonPositiveDimension {
        room: String,
        dimension: &'static str,
        value: f64,
    },

    /// A room dimension was NaN or infinite.
    #[error("room '{room}' has a non-finite {dimension}")]
    NonFiniteDimension {
        room: String,
        dimension: &'static str,
    },

    /// A room whose length times width overflows.
    #[error("room '{room}' has a surface too large to represent")]
    NonFiniteSurface { room: String },

    /// An assessment whose total surface or total price overflows.
    #[error("assessment of '{property}' overflows: {quantity} is not finite")]
    NonFiniteTotal {
        property: String,
        quantity: &'static str,
    },

    /// A district unit price was zero, negative or not finite.
    #[error("district '{district}' has an invalid unit price: {value}")]
    InvalidUnitPrice { district: String, value: f64 },
}

/// Failures of the assessment and registration use cases.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstateError {
    /// No district with this name is registered.
    #[error("district '{0}' was not found")]
    DistrictNotFound(String),

    /// A district with this name is already registered.
    #[error("district '{0}' already exists")]
    DistrictAlreadyExists(String),

    /// The request could not be turned into domain models.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Result type for estate operations.
pub type Result<T> = std::result::Result<T, EstateError>;
