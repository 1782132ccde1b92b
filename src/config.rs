use crate::args::{Args, CommandArgs};
use crate::errors::UnitError;
use crate::format::NumberFormat;
use crate::units::convert;

/// A fully validated operation ready to be executed by [`crate::run`].
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Convert { value: f64, from: String, to: String },
    Normalize { value: f64, unit: String },
    Compare { first: String, second: String },
    Supported { unit: String },
    Filesize { bytes: f64, format: NumberFormat },
}

/// Configuration structure containing runtime settings.
///
/// # Fields
///
/// * `command` - The operation to perform, with numeric input already parsed
/// * `friendly` - Whether converted values are rounded for display
///
#[derive(Debug, Clone)]
pub struct Config {
    pub command: Command,
    pub friendly: bool,
}

impl Config {
    /// Builds a new Config instance from provided command line arguments.
    ///
    /// # Parameters
    ///
    /// * `args` - Reference to Args structure containing command line arguments
    ///
    /// # Details
    ///
    /// Numeric values are parsed here rather than by clap so that every input
    /// error surfaces as a [`UnitError`]. For `filesize`, the value is converted
    /// to bytes up front.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// * A value cannot be parsed as a number
    /// * The `filesize` unit is unknown or is not an information unit
    ///
    pub fn build(args: &Args) -> Result<Config, UnitError> {
        let command = match &args.command {
            CommandArgs::Convert { value, from, to } => Command::Convert {
                value: parse_value(value)?,
                from: from.clone(),
                to: to.clone(),
            },
            CommandArgs::Normalize { value, unit } => Command::Normalize {
                value: parse_value(value)?,
                unit: unit.clone(),
            },
            CommandArgs::Compare { first, second } => Command::Compare {
                first: first.clone(),
                second: second.clone(),
            },
            CommandArgs::Supported { unit } => Command::Supported { unit: unit.clone() },
            CommandArgs::Filesize {
                value,
                unit,
                integer,
            } => {
                let bytes = convert(parse_value(value)?, unit, "B", false)?.value.as_f64();
                let format = if *integer {
                    NumberFormat::Integer
                } else {
                    NumberFormat::Float
                };
                Command::Filesize { bytes, format }
            }
        };

        log::debug!("Resolved command {:?}", command);

        Ok(Config {
            command,
            friendly: !args.raw,
        })
    }
}

fn parse_value(raw: &str) -> Result<f64, UnitError> {
    Ok(raw.trim().parse::<f64>()?)
}
