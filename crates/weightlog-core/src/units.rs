//! Length units used for user heights.
//!
//! Heights are stored in whatever unit the user entered them in and only
//! converted to meters when BMI is computed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Unit of a length value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LengthUnit {
    #[serde(rename = "mm", alias = "millimeters")]
    Millimeters,
    #[default]
    #[serde(rename = "cm", alias = "centimeters")]
    Centimeters,
    #[serde(rename = "m", alias = "meters")]
    Meters,
    #[serde(rename = "in", alias = "inches")]
    Inches,
    #[serde(rename = "ft", alias = "feet")]
    Feet,
}

impl LengthUnit {
    /// Number of meters in one of this unit.
    pub fn meters_per_unit(&self) -> f64 {
        match self {
            Self::Millimeters => 0.001,
            Self::Centimeters => 0.01,
            Self::Meters => 1.0,
            Self::Inches => 0.0254,
            Self::Feet => 0.3048,
        }
    }

    /// Short symbol ("cm", "in", ...).
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Millimeters => "mm",
            Self::Centimeters => "cm",
            Self::Meters => "m",
            Self::Inches => "in",
            Self::Feet => "ft",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for LengthUnit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mm" | "millimeter" | "millimeters" => Ok(Self::Millimeters),
            "cm" | "centimeter" | "centimeters" => Ok(Self::Centimeters),
            "m" | "meter" | "meters" => Ok(Self::Meters),
            "in" | "inch" | "inches" => Ok(Self::Inches),
            "ft" | "foot" | "feet" => Ok(Self::Feet),
            other => Err(ValidationError::InvalidValue {
                field: "length_unit".to_string(),
                message: format!("unknown unit '{other}'"),
            }),
        }
    }
}

/// A length with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Length {
    pub value: f64,
    #[serde(default)]
    pub unit: LengthUnit,
}

impl Length {
    pub fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    pub fn centimeters(value: f64) -> Self {
        Self::new(value, LengthUnit::Centimeters)
    }

    pub fn meters(value: f64) -> Self {
        Self::new(value, LengthUnit::Meters)
    }

    /// Convert to meters.
    pub fn to_meters(&self) -> f64 {
        self.value * self.unit.meters_per_unit()
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}
