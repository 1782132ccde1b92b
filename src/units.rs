//! Information and time units: support queries, comparison, conversion and normalization.
//!
//! Symbols are the short forms used by the dashboard (`B`, `KB`, ... `EB` and
//! `ns`, `s`, `min`, `hr`, `day`, `week`, `month`, `year`). The arithmetic itself is
//! delegated to [`uom`]; the two unit enums below are the adapter between these
//! symbols and the `uom` unit types.
//!
//! Information units are binary: `1 KB == 1024 B`.

use std::fmt;
use std::str::FromStr;

use uom::si::f64::{Information, Time};
use uom::si::information::{byte, exbibyte, gibibyte, kibibyte, mebibyte, pebibyte, tebibyte};
use uom::si::time::{day, hour, minute, nanosecond, second};

use crate::errors::UnitError;
use crate::functions::{format_value, Value};

/// Calendar units `uom` does not ship. A year is the Julian year (365.25 days)
/// and a month is a twelfth of it.
mod calendar {
    unit! {
        system: uom::si;
        quantity: uom::si::time;

        @week: 6.048E5; "wk", "week", "weeks";
        @month: 2.6298E6; "mo", "month", "months";
        @julian_year: 3.15576E7; "a", "year", "years";
    }
}

/// Upper bound (exclusive) of the display range for information units.
const INFORMATION_STEP: f64 = 1024.0;

/// Byte based units on a power-of-1024 ladder, in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InformationUnit {
    B,
    KB,
    MB,
    GB,
    TB,
    PB,
    EB,
}

impl InformationUnit {
    pub const ALL: [InformationUnit; 7] = [
        InformationUnit::B,
        InformationUnit::KB,
        InformationUnit::MB,
        InformationUnit::GB,
        InformationUnit::TB,
        InformationUnit::PB,
        InformationUnit::EB,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            InformationUnit::B => "B",
            InformationUnit::KB => "KB",
            InformationUnit::MB => "MB",
            InformationUnit::GB => "GB",
            InformationUnit::TB => "TB",
            InformationUnit::PB => "PB",
            InformationUnit::EB => "EB",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|u| u.symbol() == symbol)
    }

    /// Number of bytes in one of this unit.
    ///
    /// ```
    /// use horizon_units::units::InformationUnit;
    /// assert_eq!(InformationUnit::MB.ratio(), 1024 * 1024);
    /// ```
    pub fn ratio(self) -> u64 {
        1024_u64.pow(self as u32)
    }

    /// The next larger unit, or `None` at the top of the ladder.
    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self as usize + 1).copied()
    }

    /// The next smaller unit, or `None` at the bottom of the ladder.
    pub fn previous(self) -> Option<Self> {
        (self as usize).checked_sub(1).map(|i| Self::ALL[i])
    }

    fn quantity(self, value: f64) -> Information {
        match self {
            InformationUnit::B => Information::new::<byte>(value),
            InformationUnit::KB => Information::new::<kibibyte>(value),
            InformationUnit::MB => Information::new::<mebibyte>(value),
            InformationUnit::GB => Information::new::<gibibyte>(value),
            InformationUnit::TB => Information::new::<tebibyte>(value),
            InformationUnit::PB => Information::new::<pebibyte>(value),
            InformationUnit::EB => Information::new::<exbibyte>(value),
        }
    }

    fn magnitude(self, q: Information) -> f64 {
        match self {
            InformationUnit::B => q.get::<byte>(),
            InformationUnit::KB => q.get::<kibibyte>(),
            InformationUnit::MB => q.get::<mebibyte>(),
            InformationUnit::GB => q.get::<gibibyte>(),
            InformationUnit::TB => q.get::<tebibyte>(),
            InformationUnit::PB => q.get::<pebibyte>(),
            InformationUnit::EB => q.get::<exbibyte>(),
        }
    }
}

/// Duration units in ascending order. The steps between them are irregular.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimeUnit {
    Ns,
    S,
    Min,
    Hr,
    Day,
    Week,
    Month,
    Year,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 8] = [
        TimeUnit::Ns,
        TimeUnit::S,
        TimeUnit::Min,
        TimeUnit::Hr,
        TimeUnit::Day,
        TimeUnit::Week,
        TimeUnit::Month,
        TimeUnit::Year,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            TimeUnit::Ns => "ns",
            TimeUnit::S => "s",
            TimeUnit::Min => "min",
            TimeUnit::Hr => "hr",
            TimeUnit::Day => "day",
            TimeUnit::Week => "week",
            TimeUnit::Month => "month",
            TimeUnit::Year => "year",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|u| u.symbol() == symbol)
    }

    fn quantity(self, value: f64) -> Time {
        match self {
            TimeUnit::Ns => Time::new::<nanosecond>(value),
            TimeUnit::S => Time::new::<second>(value),
            TimeUnit::Min => Time::new::<minute>(value),
            TimeUnit::Hr => Time::new::<hour>(value),
            TimeUnit::Day => Time::new::<day>(value),
            TimeUnit::Week => Time::new::<calendar::week>(value),
            TimeUnit::Month => Time::new::<calendar::month>(value),
            TimeUnit::Year => Time::new::<calendar::julian_year>(value),
        }
    }

    fn magnitude(self, q: Time) -> f64 {
        match self {
            TimeUnit::Ns => q.get::<nanosecond>(),
            TimeUnit::S => q.get::<second>(),
            TimeUnit::Min => q.get::<minute>(),
            TimeUnit::Hr => q.get::<hour>(),
            TimeUnit::Day => q.get::<day>(),
            TimeUnit::Week => q.get::<calendar::week>(),
            TimeUnit::Month => q.get::<calendar::month>(),
            TimeUnit::Year => q.get::<calendar::julian_year>(),
        }
    }
}

/// A supported unit symbol, resolved to its family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Information(InformationUnit),
    Time(TimeUnit),
}

impl Unit {
    /// Resolves a symbol. Matching is exact and case-sensitive.
    pub fn parse(symbol: &str) -> Option<Unit> {
        InformationUnit::from_symbol(symbol)
            .map(Unit::Information)
            .or_else(|| TimeUnit::from_symbol(symbol).map(Unit::Time))
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Information(u) => u.symbol(),
            Unit::Time(u) => u.symbol(),
        }
    }
}

impl FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::parse(s).ok_or_else(|| UnitError::UnsupportedUnit(s.to_string()))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A value paired with the unit symbol it is expressed in.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    pub value: Value,
    pub unit: String,
}

impl Quantity {
    pub fn new(value: impl Into<Value>, unit: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            unit: unit.into(),
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Returns true if `unit` is a known information or time unit symbol.
///
/// ```
/// use horizon_units::units::is_supported;
/// assert!(is_supported("MB"));
/// assert!(is_supported("hr"));
/// assert!(!is_supported("unknown_unit"));
/// ```
pub fn is_supported(unit: &str) -> bool {
    Unit::parse(unit).is_some()
}

/// Returns whether one `unit_1` is strictly larger than one `unit_2`.
///
/// Both units must belong to the same family.
///
/// # Errors
///
/// * [`UnitError::UnsupportedUnit`] if either symbol is unknown
/// * [`UnitError::IncompatibleUnits`] if one is an information unit and the other a time unit
///
/// # Examples
///
/// ```
/// use horizon_units::units::is_larger;
/// assert!(is_larger("KB", "B").unwrap());
/// assert!(!is_larger("MB", "GB").unwrap());
/// assert!(is_larger("day", "hr").unwrap());
/// ```
pub fn is_larger(unit_1: &str, unit_2: &str) -> Result<bool, UnitError> {
    match (unit_1.parse::<Unit>()?, unit_2.parse::<Unit>()?) {
        (Unit::Information(a), Unit::Information(b)) => Ok(a.quantity(1.0) > b.quantity(1.0)),
        (Unit::Time(a), Unit::Time(b)) => Ok(a.quantity(1.0) > b.quantity(1.0)),
        _ => Err(UnitError::IncompatibleUnits {
            from: unit_1.to_string(),
            to: unit_2.to_string(),
        }),
    }
}

fn convert_magnitude(value: f64, source: Unit, target: Unit) -> Result<f64, UnitError> {
    match (source, target) {
        (Unit::Information(a), Unit::Information(b)) => Ok(b.magnitude(a.quantity(value))),
        (Unit::Time(a), Unit::Time(b)) => Ok(b.magnitude(a.quantity(value))),
        _ => Err(UnitError::IncompatibleUnits {
            from: source.to_string(),
            to: target.to_string(),
        }),
    }
}

/// Converts `value` from `source_unit` to `target_unit`.
///
/// With `fmt` set, integral results are returned as integers and everything
/// else is rounded to one decimal place. Without it the raw magnitude is
/// returned.
///
/// # Errors
///
/// * [`UnitError::UnsupportedUnit`] if either symbol is unknown
/// * [`UnitError::IncompatibleUnits`] if the units belong to different families
///
/// # Examples
///
/// ```
/// use horizon_units::units::{convert, Quantity};
/// assert_eq!(convert(4096.0, "MB", "GB", false).unwrap(), Quantity::new(4, "GB"));
/// assert_eq!(convert(1.5, "hr", "min", true).unwrap(), Quantity::new(90, "min"));
/// ```
pub fn convert(
    value: f64,
    source_unit: &str,
    target_unit: &str,
    fmt: bool,
) -> Result<Quantity, UnitError> {
    let source = source_unit.parse::<Unit>()?;
    let target = target_unit.parse::<Unit>()?;
    let converted = convert_magnitude(value, source, target)?;

    log::debug!("Converted {} {} to {} {}", value, source, converted, target);

    let value = if fmt {
        format_value(converted)
    } else {
        Value::Decimal(converted)
    };
    Ok(Quantity::new(value, target_unit))
}

/// Rescales `value` so that it reads naturally in its unit family.
///
/// # Details
///
/// * Information units step down while the value is below 1 and up while it is
///   at least 1024, stopping at `B` and `EB`.
/// * Time units are first brought to seconds, then promoted through a fixed
///   cascade: minutes from 120 s, hours from 120 min, days from 48 hr. From days
///   exactly one of year (730 days), month (62 days) or week (14 days) is chosen,
///   checked in that order.
/// * Unknown units are passed through untouched.
///
/// The resulting value is formatted like [`convert`] with `fmt` set.
///
/// # Errors
///
/// Returns [`UnitError::NegativeValue`] if `value` is negative or NaN.
///
/// # Examples
///
/// ```
/// use horizon_units::units::{normalize, Quantity};
/// assert_eq!(normalize(1024.0, "KB").unwrap(), Quantity::new(1, "MB"));
/// assert_eq!(normalize(120.0, "s").unwrap(), Quantity::new(2, "min"));
/// assert_eq!(normalize(1.0, "unknown_unit").unwrap(), Quantity::new(1, "unknown_unit"));
/// ```
pub fn normalize(value: f64, unit: &str) -> Result<Quantity, UnitError> {
    if value.is_nan() || value < 0.0 {
        return Err(UnitError::NegativeValue {
            value,
            unit: unit.to_string(),
        });
    }

    match Unit::parse(unit) {
        Some(Unit::Information(u)) => Ok(normalize_information(value, u)),
        Some(Unit::Time(u)) => Ok(normalize_time(value, u)),
        None => {
            log::debug!("Passing through value in unknown unit {}", unit);
            Ok(Quantity::new(format_value(value), unit))
        }
    }
}

fn normalize_information(mut value: f64, mut unit: InformationUnit) -> Quantity {
    while value < 1.0 {
        let Some(prev) = unit.previous() else { break };
        value = prev.magnitude(unit.quantity(value));
        log::trace!("Stepped down to {} {}", value, prev.symbol());
        unit = prev;
    }

    while value >= INFORMATION_STEP {
        let Some(next) = unit.next() else { break };
        value = next.magnitude(unit.quantity(value));
        log::trace!("Stepped up to {} {}", value, next.symbol());
        unit = next;
    }

    Quantity::new(format_value(value), unit.symbol())
}

fn step_time(value: f64, from: TimeUnit, to: TimeUnit) -> (f64, TimeUnit) {
    let value = to.magnitude(from.quantity(value));
    log::trace!("Stepped to {} {}", value, to.symbol());
    (value, to)
}

fn normalize_time(value: f64, unit: TimeUnit) -> Quantity {
    let (mut value, mut unit) = step_time(value, unit, TimeUnit::S);

    if value >= 120.0 {
        (value, unit) = step_time(value, unit, TimeUnit::Min);

        if value >= 120.0 {
            (value, unit) = step_time(value, unit, TimeUnit::Hr);

            if value >= 48.0 {
                (value, unit) = step_time(value, unit, TimeUnit::Day);

                // One branch only; a week or month result is never promoted again.
                if value >= 730.0 {
                    (value, unit) = step_time(value, unit, TimeUnit::Year);
                } else if value >= 62.0 {
                    (value, unit) = step_time(value, unit, TimeUnit::Month);
                } else if value >= 14.0 {
                    (value, unit) = step_time(value, unit, TimeUnit::Week);
                }
            }
        }
    }

    Quantity::new(format_value(value), unit.symbol())
}
