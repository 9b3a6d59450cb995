use log::debug;

use crate::{
    clock::ClockSource,
    instant::{GpsInstant, UtcInstant, NANOS_PER_SECOND},
    leap::LeapSecondTable,
    wntow::{WnTow, WEEK_SECONDS},
};

/// GPS epoch, 1980-01-06T00:00:00, in unix seconds
pub const GPS_EPOCH_UNIX_SECONDS: i64 = 315_964_800;

const GPS_EPOCH_NANOS: i128 = GPS_EPOCH_UNIX_SECONDS as i128 * NANOS_PER_SECOND;

const WEEK_NANOS: i128 = WEEK_SECONDS as i128 * NANOS_PER_SECOND;

/// [Converter] moves instants between GPS time, UTC and [WnTow],
/// accounting for the leap seconds of its [LeapSecondTable].
#[derive(Debug, Default, Clone)]
pub struct Converter {
    table: LeapSecondTable,
}

impl Converter {
    /// Builds a [Converter] on top of this [LeapSecondTable]
    pub fn new(table: LeapSecondTable) -> Self {
        Self { table }
    }

    pub fn leap_second_table(&self) -> &LeapSecondTable {
        &self.table
    }

    /// Leap seconds between GPS time and UTC at this UTC instant
    pub fn leap_seconds_at_utc(&self, t: &UtcInstant) -> u32 {
        self.table.offset_utc(t)
    }

    /// Leap seconds between GPS time and UTC at this GPS instant
    pub fn leap_seconds_at_gps(&self, t: &GpsInstant) -> u32 {
        self.table.offset_gps(t)
    }

    /// Splits a GPS instant into week number and time of week.
    /// Instants prior to the GPS epoch have a negative week number
    /// but still a positive time of week. Week numbers saturate
    /// on the `i64` range.
    pub fn gps_to_wn_tow(&self, t: GpsInstant) -> WnTow {
        let elapsed = t.unix_nanos().saturating_sub(GPS_EPOCH_NANOS);
        let wn = elapsed.div_euclid(WEEK_NANOS);
        let tow_nanos = elapsed.rem_euclid(WEEK_NANOS);

        let wn = i64::try_from(wn).unwrap_or(if wn < 0 { i64::MIN } else { i64::MAX });

        WnTow::from_tow_nanos(wn, tow_nanos as i64)
    }

    /// GPS instant of this week number and time of week.
    pub fn wn_tow_to_gps(&self, wn_tow: WnTow) -> GpsInstant {
        GpsInstant::from_unix_nanos(
            GPS_EPOCH_NANOS + wn_tow.wn() as i128 * WEEK_NANOS + wn_tow.tow_nanos() as i128,
        )
    }

    pub fn utc_to_gps(&self, t: UtcInstant) -> GpsInstant {
        let leap = self.table.offset_utc(&t);
        let gps = GpsInstant::from_unix_nanos(
            t.unix_nanos()
                .saturating_add(leap as i128 * NANOS_PER_SECOND),
        );
        debug!("{} UTC => {} GPST ({} leap seconds)", t, gps, leap);
        gps
    }

    pub fn gps_to_utc(&self, t: GpsInstant) -> UtcInstant {
        let leap = self.table.offset_gps(&t);
        let utc = UtcInstant::from_unix_nanos(
            t.unix_nanos()
                .saturating_sub(leap as i128 * NANOS_PER_SECOND),
        );
        debug!("{} GPST => {} UTC ({} leap seconds)", t, utc, leap);
        utc
    }

    pub fn utc_to_wn_tow(&self, t: UtcInstant) -> WnTow {
        self.gps_to_wn_tow(self.utc_to_gps(t))
    }

    pub fn wn_tow_to_utc(&self, wn_tow: WnTow) -> UtcInstant {
        self.gps_to_utc(self.wn_tow_to_gps(wn_tow))
    }

    /// Current week number and time of week, sampled on this [ClockSource].
    pub fn current_wn_tow(&self, clock: &impl ClockSource) -> WnTow {
        self.utc_to_wn_tow(clock.now())
    }
}
