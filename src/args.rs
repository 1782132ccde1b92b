use clap::{Parser, Subcommand};
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: CommandArgs,

    /// (optional) Print converted values unrounded
    #[arg(short, long, global = true)]
    pub raw: bool,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum CommandArgs {
    /// Convert a value from one unit to another, e.g. `convert 4096 MB GB`
    Convert {
        #[arg(allow_hyphen_values = true)]
        value: String,
        from: String,
        to: String,
    },

    /// Rescale a value to the most readable unit of its family, e.g. `normalize 90 min`
    Normalize {
        #[arg(allow_hyphen_values = true)]
        value: String,
        unit: String,
    },

    /// Report whether the first unit is larger than the second
    Compare { first: String, second: String },

    /// Report whether a unit symbol is supported
    Supported { unit: String },

    /// Format a size as a human-readable string, e.g. `filesize 1536 --unit MB`
    Filesize {
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// (optional) Information unit the value is given in
        #[arg(short = 'u', long = "unit", default_value = "B")]
        unit: String,

        /// (optional) Truncate to whole units instead of one decimal place
        #[arg(short = 'i', long = "integer")]
        integer: bool,
    },
}
