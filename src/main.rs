/*
 * gpstime: GPS time, UTC and WN/TOW conversions.
 *
 * This framework is shipped under Mozilla Public V2 license.
 *
 * Documentation:
 *
 *   https://www.gps.gov/technical/icwg/
 *   https://www.iers.org/IERS/EN/Publications/Bulletins/bulletins.html
 */

mod cli;

use std::process::ExitCode;

use env_logger::{Builder, Target};

#[macro_use]
extern crate log;

use cli::Cli;

use gpstime::{
    mode::{ModeError, Request},
    prelude::{Converter, SystemClock},
};

fn run(cli: &Cli) -> Result<String, ModeError> {
    let mode = cli.mode()?;
    let args = cli.mode_args();

    debug!("mode {} with {:?}", mode, args);

    let request = Request::new(mode, &args)?;

    let converter = Converter::default();

    if let Some(latest) = converter.leap_second_table().latest() {
        trace!("latest known leap second: {}", latest);
    }

    request.run(&converter, &SystemClock::default())
}

fn main() -> ExitCode {
    let mut builder = Builder::from_default_env();

    builder
        .target(Target::Stderr)
        .format_timestamp_secs()
        .format_module_path(false)
        .init();

    let cli = Cli::new(std::env::args().collect());

    match run(&cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        },
        Err(e) => {
            debug!("{:?}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        },
    }
}
