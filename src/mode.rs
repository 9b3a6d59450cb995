//! Conversion modes, as exposed on the command line.
//!
//! A [Mode] names one conversion and declares the arguments it expects.
//! [Request::new] types raw arguments for a [Mode]: every error is raised
//! at that stage, conversions themselves cannot fail.
use std::{fmt, path::Path, str::FromStr};

use log::debug;
use thiserror::Error;

use crate::prelude::{ClockSource, Converter, GpsInstant, UtcInstant, WnTow};

const ISO8601: &str = "iso8601";
const WEEK_NUMBER: &str = "week number (wn)";
const TIME_OF_WEEK: &str = "time of week (tow)";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModeError {
    #[error("unknown mode \"{0}\", must be one of: {modes}", modes = Mode::names().join(", "))]
    InvalidMode(String),
    #[error("mode {mode} requires {expected} argument(s), you provided {provided}. Required args for {mode}: {names}")]
    ArityMismatch {
        mode: Mode,
        expected: usize,
        provided: usize,
        names: String,
    },
    #[error("invalid {name} \"{value}\": {reason}")]
    MalformedArgument {
        name: &'static str,
        value: String,
        reason: String,
    },
    #[error("{0} result can not be represented as a calendar timestamp")]
    OutOfRange(Mode),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Current week number and time of week
    CurrentGpsWnTow,
    /// UTC timestamp to week number and time of week
    UtcToWnTow,
    /// GPS timestamp to week number and time of week
    GpsToWnTow,
    /// Week number and time of week to UTC timestamp
    WnTowToUtc,
    /// Week number and time of week to GPS timestamp
    WnTowToGps,
    /// UTC timestamp to GPS timestamp
    UtcToGps,
    /// GPS timestamp to UTC timestamp
    GpsToUtc,
}

impl Mode {
    pub const ALL: [Mode; 7] = [
        Mode::CurrentGpsWnTow,
        Mode::UtcToWnTow,
        Mode::GpsToWnTow,
        Mode::WnTowToUtc,
        Mode::WnTowToGps,
        Mode::UtcToGps,
        Mode::GpsToUtc,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Mode::CurrentGpsWnTow => "current-gps-wn-tow",
            Mode::UtcToWnTow => "utc-to-wn-tow",
            Mode::GpsToWnTow => "gps-to-wn-tow",
            Mode::WnTowToUtc => "wn-tow-to-utc",
            Mode::WnTowToGps => "wn-tow-to-gps",
            Mode::UtcToGps => "utc-to-gps",
            Mode::GpsToUtc => "gps-to-utc",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|mode| mode.name()).collect()
    }

    /// Names of the expected arguments, in order
    pub fn argument_names(&self) -> &'static [&'static str] {
        match self {
            Mode::CurrentGpsWnTow => &[],
            Mode::UtcToWnTow | Mode::GpsToWnTow | Mode::UtcToGps | Mode::GpsToUtc => &[ISO8601],
            Mode::WnTowToUtc | Mode::WnTowToGps => &[WEEK_NUMBER, TIME_OF_WEEK],
        }
    }

    pub fn arity(&self) -> usize {
        self.argument_names().len()
    }

    /// Mode named by the file name of this program path, when the
    /// binary is invoked through a link named after a mode
    /// (`/usr/local/bin/utc-to-gps`).
    pub fn from_program_name(path: &str) -> Option<Self> {
        let name = Path::new(path).file_name()?.to_str()?;
        Self::from_str(name).ok()
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| ModeError::InvalidMode(s.to_string()))
    }
}

/// A [Mode] with typed arguments, ready to execute.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Request {
    CurrentGpsWnTow,
    UtcToWnTow(UtcInstant),
    GpsToWnTow(GpsInstant),
    WnTowToUtc(WnTow),
    WnTowToGps(WnTow),
    UtcToGps(UtcInstant),
    GpsToUtc(GpsInstant),
}

/// Result of a [Request]
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Output {
    WnTow(WnTow),
    Gps(GpsInstant),
    Utc(UtcInstant),
}

impl Output {
    /// `wn tow` for [WnTow], ISO-8601 for instants.
    /// `None` when an instant lies beyond the calendar range.
    pub fn render(&self) -> Option<String> {
        match self {
            Output::WnTow(wn_tow) => Some(wn_tow.to_string()),
            Output::Gps(t) => t.to_iso8601(),
            Output::Utc(t) => t.to_iso8601(),
        }
    }
}

impl Request {
    /// Types the raw arguments of this [Mode].
    pub fn new<S: AsRef<str>>(mode: Mode, args: &[S]) -> Result<Self, ModeError> {
        if args.len() != mode.arity() {
            return Err(ModeError::ArityMismatch {
                mode,
                expected: mode.arity(),
                provided: args.len(),
                names: mode.argument_names().join(", "),
            });
        }

        let request = match mode {
            Mode::CurrentGpsWnTow => Request::CurrentGpsWnTow,
            Mode::UtcToWnTow => Request::UtcToWnTow(parse_instant(args[0].as_ref())?),
            Mode::GpsToWnTow => Request::GpsToWnTow(parse_instant(args[0].as_ref())?),
            Mode::UtcToGps => Request::UtcToGps(parse_instant(args[0].as_ref())?),
            Mode::GpsToUtc => Request::GpsToUtc(parse_instant(args[0].as_ref())?),
            Mode::WnTowToUtc => {
                Request::WnTowToUtc(parse_wn_tow(args[0].as_ref(), args[1].as_ref())?)
            },
            Mode::WnTowToGps => {
                Request::WnTowToGps(parse_wn_tow(args[0].as_ref(), args[1].as_ref())?)
            },
        };

        debug!("{:?}", request);
        Ok(request)
    }

    pub fn mode(&self) -> Mode {
        match self {
            Request::CurrentGpsWnTow => Mode::CurrentGpsWnTow,
            Request::UtcToWnTow(_) => Mode::UtcToWnTow,
            Request::GpsToWnTow(_) => Mode::GpsToWnTow,
            Request::WnTowToUtc(_) => Mode::WnTowToUtc,
            Request::WnTowToGps(_) => Mode::WnTowToGps,
            Request::UtcToGps(_) => Mode::UtcToGps,
            Request::GpsToUtc(_) => Mode::GpsToUtc,
        }
    }

    pub fn execute(&self, converter: &Converter, clock: &impl ClockSource) -> Output {
        match *self {
            Request::CurrentGpsWnTow => Output::WnTow(converter.current_wn_tow(clock)),
            Request::UtcToWnTow(t) => Output::WnTow(converter.utc_to_wn_tow(t)),
            Request::GpsToWnTow(t) => Output::WnTow(converter.gps_to_wn_tow(t)),
            Request::WnTowToUtc(wn_tow) => Output::Utc(converter.wn_tow_to_utc(wn_tow)),
            Request::WnTowToGps(wn_tow) => Output::Gps(converter.wn_tow_to_gps(wn_tow)),
            Request::UtcToGps(t) => Output::Gps(converter.utc_to_gps(t)),
            Request::GpsToUtc(t) => Output::Utc(converter.gps_to_utc(t)),
        }
    }

    /// Executes and renders the result, as printed on the command line.
    pub fn run(&self, converter: &Converter, clock: &impl ClockSource) -> Result<String, ModeError> {
        self.execute(converter, clock)
            .render()
            .ok_or(ModeError::OutOfRange(self.mode()))
    }
}

fn parse_instant<T: FromStr<Err = chrono::ParseError>>(value: &str) -> Result<T, ModeError> {
    value.parse::<T>().map_err(|e| ModeError::MalformedArgument {
        name: ISO8601,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

fn parse_wn_tow(wn: &str, tow: &str) -> Result<WnTow, ModeError> {
    let wn_value = wn
        .trim()
        .parse::<i64>()
        .map_err(|e| ModeError::MalformedArgument {
            name: WEEK_NUMBER,
            value: wn.to_string(),
            reason: e.to_string(),
        })?;

    let malformed_tow = |reason: String| ModeError::MalformedArgument {
        name: TIME_OF_WEEK,
        value: tow.to_string(),
        reason,
    };

    let tow_value = tow
        .trim()
        .parse::<f64>()
        .map_err(|e| malformed_tow(e.to_string()))?;

    WnTow::new(wn_value, tow_value).map_err(|e| malformed_tow(e.to_string()))
}
