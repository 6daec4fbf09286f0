//! Annotation text for distances and areas.

use crate::settings::{LengthUnit, UnitSettings, UnitSystem};

/// Inches per meter.
const INCHES_PER_METER: f64 = 39.370_078_740_157_49;
/// Inches per foot when splitting feet off a length.
const INCHES_PER_FOOT: f64 = 11.999;
/// Square inches per square meter.
const SQ_INCHES_PER_SQ_METER: f64 = 1550.0;
/// Square inches per square foot.
const SQ_INCHES_PER_SQ_FOOT: f64 = 143.999;

/// What is being formatted and whether unit suffixes are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Format an area instead of a length.
    pub area: bool,
    /// Leave metric unit suffixes off.
    pub hide_units: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            area: false,
            hide_units: true,
        }
    }
}

impl FormatOptions {
    /// Length with units hidden.
    pub const LENGTH: Self = Self {
        area: false,
        hide_units: true,
    };

    /// Area with units hidden.
    pub const AREA: Self = Self {
        area: true,
        hide_units: true,
    };

    /// Same options with unit suffixes printed.
    pub fn with_units(self) -> Self {
        Self {
            hide_units: false,
            ..self
        }
    }
}

/// Format a distance (or area) given in scene units for a drawing annotation.
pub fn format_distance(value: f64, settings: &UnitSettings, options: FormatOptions) -> String {
    let value = value * settings.scale_length;
    match settings.system {
        UnitSystem::Imperial => format_imperial(value, settings, options),
        UnitSystem::Metric => format_metric(value, settings, options),
        UnitSystem::None => format!("{value:.3}"),
    }
}

fn format_imperial(value: f64, settings: &UnitSettings, options: FormatOptions) -> String {
    if options.area {
        return format!(
            "{:.3} sq. ft.",
            value * SQ_INCHES_PER_SQ_METER / SQ_INCHES_PER_SQ_FOOT
        );
    }

    let mut base = i64::from(settings.imperial_precision.denominator().max(1));
    let mut dec_inches = value * INCHES_PER_METER;

    let mut feet = 0i64;
    if settings.length_unit != LengthUnit::Inches {
        let whole = (dec_inches / INCHES_PER_FOOT).floor();
        dec_inches -= whole * INCHES_PER_FOOT;
        feet = whole as i64;
    }

    let inches_floor = dec_inches.floor();
    let mut inches = inches_floor as i64;
    let mut frac = (base as f64 * (dec_inches - inches_floor)).round_ties_even() as i64;

    if frac != base {
        let cycles = (base as f64).log2() as u32;
        for _ in 0..cycles {
            if frac.rem_euclid(2) != 0 {
                break;
            }
            frac /= 2;
            base /= 2;
        }
    } else {
        frac = 0;
        inches += 1;
    }

    if inches == 12 {
        feet += 1;
        inches = 0;
    }

    let mut text = String::new();
    if feet != 0 {
        text.push_str(&format!("{feet}'"));
    }
    if feet != 0 && inches != 0 {
        text.push_str(" - ");
    }
    if inches != 0 {
        text.push_str(&inches.to_string());
    }
    if inches != 0 && frac != 0 {
        text.push(' ');
    }
    if frac != 0 {
        text.push_str(&format!("{frac}/{base}"));
    }
    if inches != 0 || frac != 0 {
        text.push('"');
    }
    text
}

fn format_metric(value: f64, settings: &UnitSettings, options: FormatOptions) -> String {
    let step = settings.metric_precision;
    let value = if step != 0.0 {
        step * (value / step).round_ties_even()
    } else {
        value
    };

    let unit = match settings.length_unit {
        LengthUnit::Meters | LengthUnit::Centimeters | LengthUnit::Millimeters => {
            settings.length_unit
        }
        _ => {
            let rounded = round_decimal(value, 2);
            if rounded >= 1.0 {
                LengthUnit::Meters
            } else if rounded >= 0.01 {
                LengthUnit::Centimeters
            } else {
                LengthUnit::Millimeters
            }
        }
    };

    let (mut text, suffix) = match unit {
        LengthUnit::Centimeters => (format!("{:.1}", value * 100.0), " cm"),
        LengthUnit::Millimeters => (format!("{:.0}", value * 1000.0), " mm"),
        _ => (format!("{value:.3}"), " m"),
    };
    if !options.hide_units {
        text.push_str(suffix);
    }
    if options.area {
        text.push('\u{00b2}');
    }
    text
}

/// Round to `places` decimals the way decimal formatting does: from the
/// exact binary value, ties to even.
fn round_decimal(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}
