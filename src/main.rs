use std::process;

use clap::Parser;
use log::LevelFilter;

use horizon_units::args::Args;
use horizon_units::config::Config;

fn main() {
    let args = Args::parse();

    // RUST_LOG still takes precedence over the --verbose default
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let config = Config::build(&args).unwrap_or_else(|err| {
        eprintln!("Could not parse arguments: {err}");
        process::exit(1);
    });

    match horizon_units::run(&config) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("Fatal Error: {e}");
            process::exit(1);
        }
    }
}
