#[macro_use]
extern crate uom;

pub mod args;
pub mod config;
pub mod errors;
pub mod format;
pub mod functions;
pub mod traits;
pub mod units;


pub use errors::UnitError;
pub use functions::Value;
pub use traits::ByteSize;
pub use units::{convert, is_larger, is_supported, normalize, Quantity};

use config::{Command, Config};
use format::filesizeformat;

/*
Executes the operation held by the Config and returns the text to print.
 */
pub fn run(config: &Config) -> Result<String, UnitError> {
    let output = match &config.command {
        Command::Convert { value, from, to } => {
            convert(*value, from, to, config.friendly)?.to_string()
        }
        Command::Normalize { value, unit } => normalize(*value, unit)?.to_string(),
        Command::Compare { first, second } => {
            if is_larger(first, second)? {
                format!("{} is larger than {}", first, second)
            } else {
                format!("{} is not larger than {}", first, second)
            }
        }
        Command::Supported { unit } => {
            if is_supported(unit) {
                format!("{} is supported", unit)
            } else {
                format!("{} is not supported", unit)
            }
        }
        Command::Filesize { bytes, format } => filesizeformat(*bytes, *format),
    };

    Ok(output)
}
