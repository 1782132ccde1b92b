use crate::format::{filesizeformat, NumberFormat};

/// Provides functionality to format byte counts into human-readable strings with appropriate units.
///
/// The output scales from bytes to petabytes using binary steps (1024 bytes = 1 KB)
/// and follows [`filesizeformat`] with one decimal place.
///
/// # Examples
///
/// ```
/// use horizon_units::traits::ByteSize;
/// let size: u64 = 1024;
/// assert_eq!(size.format_size(), "1 KB");
///
/// let large_size: u64 = 1024 * 1024 * 1024 + 512 * 1024 * 1024;
/// assert_eq!(large_size.format_size(), "1.5 GB");
/// ```
pub trait ByteSize {
    /// Formats the number into a human-readable string with appropriate size units.
    ///
    /// The output will use one of the following units based on the size:
    /// - bytes (0 to 1023, singular for exactly 1)
    /// - KB, MB, GB, TB (1 to 1023.9 of the unit)
    /// - PB (1 PB and above)
    fn format_size(&self) -> String;
}

impl ByteSize for u64 {
    fn format_size(&self) -> String {
        filesizeformat(*self as f64, NumberFormat::Float)
    }
}
