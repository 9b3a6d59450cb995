//! Frame tagged instants.
//!
//! An [Instant] is a clock value: a count of nanoseconds since
//! 1970-01-01T00:00:00, without any leap second inside the count.
//! The same clock value means two different physical instants depending on
//! whether it is read on a GPS or a UTC clock, hence the [TimeFrame] tag.
//! Only the [Converter](crate::prelude::Converter) moves a value
//! from one frame to the other.
use std::{fmt, hash::Hash, marker::PhantomData, str::FromStr};

use chrono::{
    DateTime, NaiveDate, NaiveDateTime, NaiveTime, ParseError, SecondsFormat, TimeZone,
    Utc as ChronoUtc,
};

pub(crate) const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// Zero sized marker of the clock an [Instant] was read on.
pub trait TimeFrame: Copy + Default + fmt::Debug + Eq + Ord + Hash + 'static {
    /// Short name, used in debug traces
    const NAME: &'static str;
}

/// GPS time: continuous, never adjusted for leap seconds.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Gpst;

impl TimeFrame for Gpst {
    const NAME: &'static str = "GPST";
}

/// UTC: civil time, adjusted by leap seconds.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Utc;

impl TimeFrame for Utc {
    const NAME: &'static str = "UTC";
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant<F: TimeFrame> {
    /// nanoseconds since 1970-01-01T00:00:00 on this frame's clock
    nanos: i128,
    frame: PhantomData<F>,
}

/// Clock value read on a GPS clock
pub type GpsInstant = Instant<Gpst>;

/// Clock value read on a UTC clock
pub type UtcInstant = Instant<Utc>;

impl<F: TimeFrame> Instant<F> {
    pub fn from_unix_nanos(nanos: i128) -> Self {
        Self {
            nanos,
            frame: PhantomData,
        }
    }

    pub fn from_unix_seconds(seconds: i64) -> Self {
        Self::from_unix_nanos(seconds as i128 * NANOS_PER_SECOND)
    }

    /// Reads the calendar fields of a [DateTime] as a clock value of this frame.
    pub fn from_datetime(datetime: &DateTime<ChronoUtc>) -> Self {
        let seconds = datetime.timestamp() as i128;
        let subsec = datetime.timestamp_subsec_nanos() as i128;
        Self::from_unix_nanos(seconds * NANOS_PER_SECOND + subsec)
    }

    pub fn unix_nanos(&self) -> i128 {
        self.nanos
    }

    /// Calendar representation, `None` when beyond the calendar range.
    pub fn to_datetime(&self) -> Option<DateTime<ChronoUtc>> {
        let seconds = i64::try_from(self.nanos.div_euclid(NANOS_PER_SECOND)).ok()?;
        let subsec = self.nanos.rem_euclid(NANOS_PER_SECOND) as u32;
        DateTime::from_timestamp(seconds, subsec)
    }

    /// Formats as `YYYY-MM-DDTHH:MM:SS.sssZ`.
    pub fn to_iso8601(&self) -> Option<String> {
        self.to_datetime()
            .map(|datetime| datetime.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

impl<F: TimeFrame> fmt::Display for Instant<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_iso8601() {
            Some(iso) => write!(f, "{}", iso),
            None => write!(
                f,
                "{}s {}",
                self.nanos as f64 / NANOS_PER_SECOND as f64,
                F::NAME
            ),
        }
    }
}

/// Parses an ISO-8601 calendar timestamp.
///
/// Accepts RFC 3339 (`2016-07-15T17:18:44.000Z`, `2016-07-15T19:18:44+02:00`),
/// a date time without zone or a bare date. Strings without a zone are
/// read as they are, on this frame's clock.
impl<F: TimeFrame> FromStr for Instant<F> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let datetime = parse_iso8601(s.trim())?;
        Ok(Self::from_datetime(&datetime))
    }
}

fn parse_iso8601(s: &str) -> Result<DateTime<ChronoUtc>, ParseError> {
    let rfc3339 = match DateTime::parse_from_rfc3339(s) {
        Ok(datetime) => return Ok(datetime.with_timezone(&ChronoUtc)),
        Err(e) => e,
    };

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(ChronoUtc.from_utc_datetime(&naive));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(ChronoUtc.from_utc_datetime(&date.and_time(NaiveTime::MIN)));
    }

    Err(rfc3339)
}
