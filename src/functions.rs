use std::cmp::Ordering;
use std::fmt;

/// Number of bytes in one gibibyte.
pub const GI: u64 = 1024 * 1024 * 1024;

/// A numeric value as it is handed back to callers.
///
/// Integral results are kept as integers so they display without a trailing
/// fraction; everything else is a decimal. Equality is numeric, so
/// `Value::Integer(4) == Value::Decimal(4.0)`.
#[derive(Debug, Clone, Copy)]
pub enum Value {
    Integer(i64),
    Decimal(f64),
}

impl Value {
    pub fn as_f64(&self) -> f64 {
        match *self {
            Value::Integer(i) => i as f64,
            Value::Decimal(d) => d,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            _ => self.as_f64() == other.as_f64(),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Decimal(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{}", i),
            Value::Decimal(d) => write!(f, "{}", d),
        }
    }
}

/// Formats a value for display: integral values become integers, anything else
/// is rounded to one decimal place (ties to even).
///
/// # Examples
///
/// ```
/// use horizon_units::functions::{format_value, Value};
/// assert_eq!(format_value(4.0), Value::Integer(4));
/// assert_eq!(format_value(104.8576), Value::Decimal(104.9));
/// ```
pub fn format_value(value: f64) -> Value {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        return Value::Integer(value as i64);
    }
    Value::Decimal((value * 10.0).round_ties_even() / 10.0)
}

/// Converts a byte count to whole gigabytes, rounding up.
///
/// ```
/// use horizon_units::functions::bytes_to_gigabytes;
/// assert_eq!(bytes_to_gigabytes(1), 1);
/// assert_eq!(bytes_to_gigabytes(1024 * 1024 * 1024), 1);
/// assert_eq!(bytes_to_gigabytes(1024 * 1024 * 1024 + 1), 2);
/// ```
pub fn bytes_to_gigabytes(bytes: u64) -> u64 {
    bytes.div_ceil(GI)
}

enum Chunk<'a> {
    Number(&'a str),
    Text(&'a str),
}

fn chunks(s: &str) -> Vec<Chunk<'_>> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut digits = None;

    for (idx, c) in s.char_indices() {
        let is_digit = c.is_ascii_digit();
        match digits {
            Some(prev) if prev != is_digit => {
                out.push(if prev { Chunk::Number(&s[start..idx]) } else { Chunk::Text(&s[start..idx]) });
                start = idx;
            }
            _ => {}
        }
        digits = Some(is_digit);
    }
    if let Some(prev) = digits {
        out.push(if prev { Chunk::Number(&s[start..]) } else { Chunk::Text(&s[start..]) });
    }
    out
}

fn cmp_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Compares two strings in "natural" order: runs of digits are compared by
/// their numeric value, everything else lexically.
///
/// ```
/// use std::cmp::Ordering;
/// use horizon_units::functions::natural_cmp;
/// assert_eq!(natural_cmp("vol2", "vol10"), Ordering::Less);
/// ```
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let (ca, cb) = (chunks(a), chunks(b));

    for (x, y) in ca.iter().zip(cb.iter()) {
        let ord = match (x, y) {
            (Chunk::Number(x), Chunk::Number(y)) => cmp_numeric(x, y),
            (Chunk::Number(x), Chunk::Text(y)) | (Chunk::Text(x), Chunk::Number(y))
            | (Chunk::Text(x), Chunk::Text(y)) => x.cmp(y),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    ca.len().cmp(&cb.len()).then_with(|| a.cmp(b))
}

/// Sorts a slice of strings in natural order. See [`natural_cmp`].
pub fn natural_sort<S: AsRef<str>>(items: &mut [S]) {
    items.sort_by(|a, b| natural_cmp(a.as_ref(), b.as_ref()));
}
