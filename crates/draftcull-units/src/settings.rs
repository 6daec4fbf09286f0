//! Unit settings: the configuration a drawing formats its dimensions with.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, UnitsError};

/// Measurement system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum UnitSystem {
    /// Meters and their decimal subdivisions.
    #[default]
    Metric,
    /// Feet, inches and fractional inches.
    Imperial,
    /// Plain numbers.
    None,
}

/// Preferred length unit.
///
/// Metric drawings honour `Meters`, `Centimeters` and `Millimeters` and pick a
/// unit by magnitude otherwise. Imperial drawings print bare inches for
/// `Inches` and feet plus inches for anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LengthUnit {
    /// Choose by magnitude.
    #[default]
    Adaptive,
    /// Meters.
    Meters,
    /// Centimeters.
    Centimeters,
    /// Millimeters.
    Millimeters,
    /// Feet and inches.
    Feet,
    /// Inches only.
    Inches,
}

/// Smallest fraction of an inch an imperial dimension is rounded to.
///
/// Written as `"NONE"` (1/256), `"1"` (whole inches) or `"1/n"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum ImperialPrecision {
    /// No explicit precision; 1/256 of an inch.
    #[default]
    Finest,
    /// `1/n` of an inch; `1` means whole inches.
    Fraction(u32),
}

impl ImperialPrecision {
    /// Denominator used when rounding.
    pub fn denominator(self) -> u32 {
        match self {
            ImperialPrecision::Finest => 256,
            ImperialPrecision::Fraction(n) => n,
        }
    }
}

impl FromStr for ImperialPrecision {
    type Err = UnitsError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || UnitsError::InvalidPrecision(s.to_string());
        let denominator = match s.trim() {
            "NONE" => return Ok(ImperialPrecision::Finest),
            "1" => 1,
            other => {
                let (_, n) = other.split_once('/').ok_or_else(invalid)?;
                n.trim().parse::<u32>().map_err(|_| invalid())?
            }
        };
        if denominator == 0 {
            return Err(invalid());
        }
        Ok(ImperialPrecision::Fraction(denominator))
    }
}

impl fmt::Display for ImperialPrecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImperialPrecision::Finest => write!(f, "NONE"),
            ImperialPrecision::Fraction(1) => write!(f, "1"),
            ImperialPrecision::Fraction(n) => write!(f, "1/{n}"),
        }
    }
}

impl TryFrom<String> for ImperialPrecision {
    type Error = UnitsError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<ImperialPrecision> for String {
    fn from(p: ImperialPrecision) -> Self {
        p.to_string()
    }
}

/// Unit configuration for formatting drawing dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitSettings {
    /// Measurement system.
    pub system: UnitSystem,
    /// Preferred length unit.
    pub length_unit: LengthUnit,
    /// Factor from scene units to meters, applied before formatting.
    pub scale_length: f64,
    /// Metric rounding step in meters (0 disables snapping).
    pub metric_precision: f64,
    /// Imperial rounding denominator.
    pub imperial_precision: ImperialPrecision,
}

impl Default for UnitSettings {
    fn default() -> Self {
        Self {
            system: UnitSystem::Metric,
            length_unit: LengthUnit::Adaptive,
            scale_length: 1.0,
            metric_precision: 0.0,
            imperial_precision: ImperialPrecision::Finest,
        }
    }
}

impl UnitSettings {
    /// Imperial settings with the given length unit and precision.
    pub fn imperial(length_unit: LengthUnit, precision: ImperialPrecision) -> Self {
        Self {
            system: UnitSystem::Imperial,
            length_unit,
            imperial_precision: precision,
            ..Self::default()
        }
    }

    /// Metric settings with the given length unit.
    pub fn metric(length_unit: LengthUnit) -> Self {
        Self {
            length_unit,
            ..Self::default()
        }
    }

    /// Validate settings.
    pub fn validate(&self) -> Result<()> {
        if !self.scale_length.is_finite() || self.scale_length <= 0.0 {
            return Err(UnitsError::InvalidSettings(
                "scale_length must be a positive number".into(),
            ));
        }
        if !self.metric_precision.is_finite() || self.metric_precision < 0.0 {
            return Err(UnitsError::InvalidSettings(
                "metric_precision must be zero or positive".into(),
            ));
        }
        if self.imperial_precision.denominator() == 0 {
            return Err(UnitsError::InvalidSettings(
                "imperial_precision denominator must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
