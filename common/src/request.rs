//! # Inbound Requests
//!
//! Plain request shapes handed over by a boundary (command line, HTTP, ...)
//! and their field-by-field conversion into validated domain models.
//!
//! Command line text formats:
//! * **Room**: `NAME:LENGTHxWIDTH` (e.g., `kitchen:3.5x4`).
//! * **District**: `NAME=PRICE` (e.g., `Palermo=2500`).

use std::str::FromStr;

use crate::error::ValidationError;
use crate::estate::{District, Property, Room};

#[derive(Debug, Clone, PartialEq)]
pub struct RoomRequest {
    pub name: String,
    pub length: f64,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyRequest {
    pub name: String,
    pub district_name: String,
    pub rooms: Vec<RoomRequest>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DistrictRequest {
    pub name: String,
    pub unit_price: f64,
}

impl TryFrom<RoomRequest> for Room {
    type Error = ValidationError;

    fn try_from(req: RoomRequest) -> Result<Self, Self::Error> {
        Room::new(req.name, req.length, req.width)
    }
}

impl TryFrom<PropertyRequest> for Property {
    type Error = ValidationError;

    fn try_from(req: PropertyRequest) -> Result<Self, Self::Error> {
        let rooms = req
            .rooms
            .into_iter()
            .map(Room::try_from)
            .collect::<Result<Vec<Room>, _>>()?;
        Property::new(req.name, req.district_name, rooms)
    }
}

impl TryFrom<DistrictRequest> for District {
    type Error = ValidationError;

    fn try_from(req: DistrictRequest) -> Result<Self, Self::Error> {
        District::new(req.name, req.unit_price)
    }
}

impl FromStr for RoomRequest {
    type Err = String;

    /// Parses `NAME:LENGTHxWIDTH`. The name may itself contain `:`; the last one splits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, dims) = s
            .rsplit_once(':')
            .ok_or_else(|| format!("invalid room '{s}': expected NAME:LENGTHxWIDTH"))?;
        let (length, width) = dims
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("invalid room '{s}': expected LENGTHxWIDTH after ':'"))?;

        Ok(Self {
            name: name.trim().to_string(),
            length: parse_number(length, s)?,
            width: parse_number(width, s)?,
        })
    }
}

impl FromStr for DistrictRequest {
    type Err = String;

    /// Parses `NAME=PRICE`. The last `=` splits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, price) = s
            .rsplit_once('=')
            .ok_or_else(|| format!("invalid district '{s}': expected NAME=PRICE"))?;

        Ok(Self {
            name: name.trim().to_string(),
            unit_price: parse_number(price, s)?,
        })
    }
}

fn parse_number(raw: &str, whole: &str) -> Result<f64, String> {
    raw.trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid number '{}' in '{whole}': {e}", raw.trim()))
}
