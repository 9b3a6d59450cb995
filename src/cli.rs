use clap::{value_parser, Arg, ArgAction, ArgMatches, ColorChoice, Command};

use gpstime::mode::{Mode, ModeError};

pub struct Cli {
    /// Arguments passed by user
    pub matches: ArgMatches,
}

impl Cli {
    /// Build new command line interface from raw program arguments.
    ///
    /// When the program file name is a [Mode] name, that mode is selected
    /// and every argument is a mode argument.
    pub fn new(mut args: Vec<String>) -> Self {
        if let Some(mode) = args.first().and_then(|program| Mode::from_program_name(program)) {
            args.insert(1, mode.name().to_string());
        }

        Self {
            matches: Self::command().get_matches_from(args),
        }
    }

    fn command() -> Command {
        Command::new("gpstime")
            .version(env!("CARGO_PKG_VERSION"))
            .about("GPS time, UTC and GPS week number / time of week conversions")
            .arg_required_else_help(true)
            .color(ColorChoice::Auto)
            .arg(
                Arg::new("mode")
                    .required(true)
                    .value_name("MODE")
                    .value_parser(value_parser!(String))
                    .help(format!("Conversion mode, one of: {}", Mode::names().join(", "))),
            )
            .arg(
                Arg::new("args")
                    .value_name("ARGS")
                    .num_args(0..)
                    .action(ArgAction::Append)
                    .allow_negative_numbers(true)
                    .value_parser(value_parser!(String))
                    .long_help(
                        "Mode arguments: none for current-gps-wn-tow,
one ISO-8601 timestamp (ex: 2016-07-15T17:18:44.000Z) for utc-to-wn-tow, gps-to-wn-tow, utc-to-gps and gps-to-utc,
week number and time of week (ex: 1905 494341) for wn-tow-to-utc and wn-tow-to-gps.",
                    ),
            )
    }

    pub fn mode(&self) -> Result<Mode, ModeError> {
        let name = self
            .matches
            .get_one::<String>("mode")
            .map(String::as_str)
            .unwrap_or_default();
        name.parse()
    }

    pub fn mode_args(&self) -> Vec<String> {
        self.matches
            .get_many::<String>("args")
            .map(|values| values.cloned().collect())
            .unwrap_or_default()
    }
}
