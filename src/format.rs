//! Human-readable size strings for tables and summaries.
//!
//! Sizes use the binary ladder from [`crate::units::InformationUnit`] and stop at `PB`.

use crate::units::InformationUnit;

/// How the scaled number in a size string is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberFormat {
    /// Truncate toward zero: `1.9 KB` renders as `1 KB`.
    Integer,
    /// One decimal place, dropped when the rounded value is whole: `1.5 KB`, `2 KB`.
    Float,
}

impl NumberFormat {
    fn apply(self, value: f64) -> String {
        match self {
            NumberFormat::Integer => format!("{}", value.trunc() as i64),
            NumberFormat::Float => {
                let rounded = (value * 10.0).round_ties_even() / 10.0;
                if rounded.fract() == 0.0 {
                    format!("{:.0}", rounded)
                } else {
                    format!("{:.1}", rounded)
                }
            }
        }
    }
}

const SCALED_UNITS: [InformationUnit; 4] = [
    InformationUnit::KB,
    InformationUnit::MB,
    InformationUnit::GB,
    InformationUnit::TB,
];

/// Formats a byte count into a string like `"13 KB"` or `"4.1 MB"`.
///
/// Counts below 1024 are rendered in whole bytes. Invalid input (negative,
/// NaN or infinite) renders as `"0 Bytes"`.
///
/// # Examples
///
/// ```
/// use horizon_units::format::{filesizeformat, NumberFormat};
/// assert_eq!(filesizeformat(1.0, NumberFormat::Float), "1 Byte");
/// assert_eq!(filesizeformat(1536.0, NumberFormat::Float), "1.5 KB");
/// assert_eq!(filesizeformat(1536.0, NumberFormat::Integer), "1 KB");
/// ```
pub fn filesizeformat(bytes: f64, fmt: NumberFormat) -> String {
    if !bytes.is_finite() || bytes < 0.0 {
        return "0 Bytes".to_string();
    }

    if bytes < 1024.0 {
        let whole = bytes.trunc() as u64;
        return if whole == 1 {
            "1 Byte".to_string()
        } else {
            format!("{} Bytes", whole)
        };
    }

    let unit = SCALED_UNITS
        .into_iter()
        .find(|u| bytes < u.ratio() as f64 * 1024.0)
        .unwrap_or(InformationUnit::PB);

    format!("{} {}", fmt.apply(bytes / unit.ratio() as f64), unit.symbol())
}

/// Scales `value` by `multiplier` bytes and formats it without spaces (`"1.5GB"`).
///
/// A zero result renders as `"0"`; a non-finite `value` renders as an empty string.
pub fn float_cast_filesizeformat(value: f64, multiplier: f64, fmt: NumberFormat) -> String {
    if !value.is_finite() {
        return String::new();
    }

    let formatted = filesizeformat(value * multiplier, fmt).replace(' ', "");
    if formatted == "0Bytes" {
        "0".to_string()
    } else {
        formatted
    }
}

/// Formats a size given in megabytes, truncating to whole units.
///
/// ```
/// use horizon_units::format::mbformat;
/// assert_eq!(mbformat(2048.0), "2GB");
/// ```
pub fn mbformat(mb: f64) -> String {
    float_cast_filesizeformat(mb, InformationUnit::MB.ratio() as f64, NumberFormat::Integer)
}

/// Formats a size given in megabytes with one decimal place.
///
/// ```
/// use horizon_units::format::mb_float_format;
/// assert_eq!(mb_float_format(1536.0), "1.5GB");
/// ```
pub fn mb_float_format(mb: f64) -> String {
    float_cast_filesizeformat(mb, InformationUnit::MB.ratio() as f64, NumberFormat::Float)
}

/// Formats a disk size given in gigabytes with one decimal place.
pub fn diskgbformat(gb: f64) -> String {
    float_cast_filesizeformat(gb, InformationUnit::GB.ratio() as f64, NumberFormat::Float)
}
