/// Error type representing the failures that can occur while converting or normalizing units.
///
/// Every operation in this crate is a pure computation, so these errors only ever describe
/// bad input: an unknown unit symbol, a pair of units from different families, or a value
/// outside the accepted range.
#[derive(Debug, Clone, PartialEq)]
pub enum UnitError {
    /// The symbol is neither an information unit nor a time unit.
    UnsupportedUnit(String),

    /// The two units belong to different families (e.g. `GB` and `hr`)
    /// and cannot be converted into one another or compared.
    IncompatibleUnits { from: String, to: String },

    /// Normalization was asked to work on a negative (or NaN) value.
    NegativeValue { value: f64, unit: String },

    /// A value supplied on the command line could not be parsed as a number.
    InvalidValue(String),
}

impl std::fmt::Display for UnitError {
    /// Formats the error for display purposes.
    ///
    /// # Examples
    /// ```
    /// use horizon_units::errors::UnitError;
    /// let err = UnitError::UnsupportedUnit("furlong".to_string());
    /// assert_eq!(format!("{}", err), "Unsupported unit: furlong");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitError::UnsupportedUnit(u) => write!(f, "Unsupported unit: {}", u),
            UnitError::IncompatibleUnits { from, to } => {
                write!(f, "Incompatible units: cannot convert {} to {}", from, to)
            }
            UnitError::NegativeValue { value, unit } => {
                write!(f, "Negative value: {} {}", value, unit)
            }
            UnitError::InvalidValue(v) => write!(f, "Invalid value: {}", v),
        }
    }
}

impl std::error::Error for UnitError {}

impl From<std::num::ParseFloatError> for UnitError {
    /// Converts a float parse failure into [`UnitError::InvalidValue`] so that
    /// command line parsing can use the `?` operator.
    fn from(err: std::num::ParseFloatError) -> Self {
        UnitError::InvalidValue(err.to_string())
    }
}
