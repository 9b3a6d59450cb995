use std::fmt;

use crate::error::Error;

/// Number of seconds in one day
pub const DAY_SECONDS: i64 = 86_400;

/// Number of seconds in one GPS week
pub const WEEK_SECONDS: i64 = 7 * DAY_SECONDS;

const NANOS_PER_SECOND: i64 = 1_000_000_000;

const WEEK_NANOS: i64 = WEEK_SECONDS * NANOS_PER_SECOND;

/// GPS week number and time of week, always expressed in GPS time.
///
/// The time of week is held in whole nanoseconds, so that any [WnTow]
/// maps to exactly one GPS instant and back.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct WnTow {
    /// Weeks elapsed since the GPS epoch, negative prior to it
    wn: i64,

    /// Nanoseconds elapsed within the week, in [0, 604800e9)
    tow_nanos: i64,
}

impl WnTow {
    /// Builds a new [WnTow]. The time of week is rounded to the nearest
    /// nanosecond and must lie within the week once rounded.
    pub fn new(wn: i64, tow: f64) -> Result<Self, Error> {
        if !tow.is_finite() || tow < 0.0 {
            return Err(Error::TowOutOfRange(tow));
        }

        let tow_nanos = (tow * NANOS_PER_SECOND as f64).round();

        if tow_nanos >= WEEK_NANOS as f64 {
            return Err(Error::TowOutOfRange(tow));
        }

        Ok(Self::from_tow_nanos(wn, tow_nanos as i64))
    }

    /// `tow_nanos` must lie in [0, 604800e9)
    pub(crate) fn from_tow_nanos(wn: i64, tow_nanos: i64) -> Self {
        debug_assert!((0..WEEK_NANOS).contains(&tow_nanos));
        Self { wn, tow_nanos }
    }

    /// Weeks elapsed since the GPS epoch
    pub fn wn(&self) -> i64 {
        self.wn
    }

    /// Seconds elapsed within the week
    pub fn tow(&self) -> f64 {
        self.tow_nanos as f64 / NANOS_PER_SECOND as f64
    }

    pub fn tow_nanos(&self) -> i64 {
        self.tow_nanos
    }

    /// Day of week, 0 being Sunday
    pub fn dow(&self) -> u8 {
        (self.tow_nanos / (DAY_SECONDS * NANOS_PER_SECOND)) as u8
    }
}

/// Formats as `wn tow`
impl fmt::Display for WnTow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.wn, self.tow())
    }
}
