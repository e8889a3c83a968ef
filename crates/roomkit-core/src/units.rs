//! Unit formatting utilities
//!
//! Room geometry is stored in meters. Labels shown to the user are rendered in
//! centimeters (edge lengths) and degrees (corner angles).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Centimeters per meter
pub const CM_PER_METER: f64 = 100.0;

/// Display unit for lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Centimeters
    #[default]
    Centimeters,
    /// Meters
    Meters,
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Centimeters => write!(f, "cm"),
            Self::Meters => write!(f, "m"),
        }
    }
}

impl FromStr for LengthUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cm" | "centimeters" => Ok(Self::Centimeters),
            "m" | "meters" => Ok(Self::Meters),
            _ => Err(format!("Unknown length unit: {}", s)),
        }
    }
}

/// Converts meters to centimeters
pub fn meters_to_cm(meters: f64) -> f64 {
    meters * CM_PER_METER
}

/// Converts centimeters to meters
pub fn cm_to_meters(cm: f64) -> f64 {
    cm / CM_PER_METER
}

/// Format a length given in meters for display, one decimal place.
///
/// * `value_m` - Value in meters
/// * `unit` - Target display unit
pub fn format_length(value_m: f64, unit: LengthUnit) -> String {
    match unit {
        LengthUnit::Centimeters => format!("{:.1} cm", meters_to_cm(value_m)),
        LengthUnit::Meters => format!("{:.1} m", value_m),
    }
}

/// Format an angle in degrees, one decimal place.
pub fn format_angle(degrees: f64) -> String {
    format!("{:.1}°", degrees)
}

/// Format a price total with two decimals.
pub fn format_price(amount: f64) -> String {
    format!("{:.2}$", amount)
}
