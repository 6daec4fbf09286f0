#![warn(missing_docs)]

//! Distance and area formatting for drawing annotations.
//!
//! A drawing carries a [`UnitSettings`] value (usually loaded from a TOML
//! file) and formats every dimension through [`format_distance`]: metric
//! values in meters, centimeters or millimeters, imperial values as feet,
//! inches and reduced fractions of an inch.
//!
//! # Example
//!
//! ```
//! use draftcull_units::{format_distance, FormatOptions, LengthUnit, UnitSettings};
//!
//! let settings = UnitSettings::metric(LengthUnit::Millimeters);
//! let text = format_distance(1.23456, &settings, FormatOptions::LENGTH.with_units());
//! assert_eq!(text, "1235 mm");
//! ```

pub mod error;
pub mod format;
pub mod settings;

pub use error::{Result, UnitsError};
pub use format::{format_distance, FormatOptions};
pub use settings::{ImperialPrecision, LengthUnit, UnitSettings, UnitSystem};
