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

//! Conversions between GPS time, UTC and the GPS week number / time of week
//! (WN/TOW) representation.
//!
//! GPS time is a continuous time scale starting on 1980-01-06T00:00:00 UTC.
//! UTC receives leap seconds, GPS does not: the offset between both scales
//! grows by one second every time the IERS inserts a leap second.
//!
//! ```
//! use gpstime::prelude::*;
//!
//! let converter = Converter::default();
//!
//! let wn_tow = WnTow::new(1905, 494341.0).unwrap();
//! let utc = converter.wn_tow_to_utc(wn_tow);
//!
//! assert_eq!(utc.to_iso8601().unwrap(), "2016-07-15T17:18:44.000Z");
//! ```

mod clock;
mod converter;
mod error;
mod instant;
mod leap;
mod wntow;

pub mod mode;

pub use error::Error;

pub mod prelude {
    pub use crate::clock::{ClockSource, FixedClock, SystemClock};
    pub use crate::converter::{Converter, GPS_EPOCH_UNIX_SECONDS};
    pub use crate::error::Error;
    pub use crate::instant::{GpsInstant, Gpst, Instant, TimeFrame, Utc, UtcInstant};
    pub use crate::leap::LeapSecondTable;
    pub use crate::wntow::{WnTow, DAY_SECONDS, WEEK_SECONDS};
}
