//! Leap second registry.
//!
//! GPS time and UTC were aligned on the GPS epoch (1980-01-06). Every leap
//! second inserted into UTC since then adds one second between both clocks.
//! The ten leap seconds that preceded the GPS epoch are not part of the table.
use log::trace;

use crate::instant::{GpsInstant, UtcInstant};

/// UTC instants (unix seconds) at which a leap second took effect since the
/// GPS epoch, oldest first.
const GPS_LEAP_SECONDS: [i64; 18] = [
    362_793_600,   // 1981-07-01
    394_329_600,   // 1982-07-01
    425_865_600,   // 1983-07-01
    489_024_000,   // 1985-07-01
    567_993_600,   // 1988-01-01
    631_152_000,   // 1990-01-01
    662_688_000,   // 1991-01-01
    709_948_800,   // 1992-07-01
    741_484_800,   // 1993-07-01
    773_020_800,   // 1994-07-01
    820_454_400,   // 1996-01-01
    867_715_200,   // 1997-07-01
    915_148_800,   // 1999-01-01
    1_136_073_600, // 2006-01-01
    1_230_768_000, // 2009-01-01
    1_341_100_800, // 2012-07-01
    1_435_708_800, // 2015-07-01
    1_483_228_800, // 2017-01-01
];

/// Immutable leap second table, stored newest first.
///
/// The table is a plain value: pass a custom one to the
/// [Converter](crate::prelude::Converter) to account for leap seconds
/// announced after this release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeapSecondTable {
    /// newest first
    entries: Vec<UtcInstant>,
}

impl Default for LeapSecondTable {
    fn default() -> Self {
        Self::gps()
    }
}

impl LeapSecondTable {
    /// Leap seconds inserted since the GPS epoch, up to 2017-01-01.
    pub fn gps() -> Self {
        Self::new(
            GPS_LEAP_SECONDS
                .iter()
                .map(|secs| UtcInstant::from_unix_seconds(*secs)),
        )
    }

    /// Builds a table from leap second insertion instants, in any order.
    /// Duplicates are dropped.
    pub fn new(entries: impl IntoIterator<Item = UtcInstant>) -> Self {
        let mut entries = entries.into_iter().collect::<Vec<_>>();
        entries.sort_unstable_by(|a, b| b.cmp(a));
        entries.dedup();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates insertion instants, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &UtcInstant> + '_ {
        self.entries.iter().rev()
    }

    /// Most recent leap second
    pub fn latest(&self) -> Option<UtcInstant> {
        self.entries.first().copied()
    }

    /// Leap seconds in effect at this UTC instant.
    ///
    /// An instant exactly on an insertion does not count it yet.
    pub fn offset_utc(&self, t: &UtcInstant) -> u32 {
        self.offset_at(t.unix_nanos())
    }

    /// Leap seconds in effect at this GPS instant.
    ///
    /// The GPS clock value is compared against the UTC insertion instants
    /// as is. During the first offset seconds after an insertion (17 to 18 s
    /// of GPS clock for the 2017 one), the GPS clock already reads past it
    /// while UTC does not: conversions within that window are one second
    /// early.
    pub fn offset_gps(&self, t: &GpsInstant) -> u32 {
        self.offset_at(t.unix_nanos())
    }

    fn offset_at(&self, nanos: i128) -> u32 {
        let index = self
            .entries
            .iter()
            .position(|entry| nanos > entry.unix_nanos())
            .unwrap_or(self.entries.len());

        let offset = (self.entries.len() - index) as u32;
        trace!("leap seconds at {}ns: {}", nanos, offset);
        offset
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;

    fn utc(s: &str) -> UtcInstant {
        UtcInstant::from_str(s).unwrap()
    }

    #[test]
    fn builtin_table() {
        let table = LeapSecondTable::gps();
        assert_eq!(table.len(), 18);
        assert!(!table.is_empty());

        let dates = table
            .iter()
            .map(|t| t.to_iso8601().unwrap())
            .collect::<Vec<_>>();

        assert_eq!(
            dates,
            [
                "1981-07-01T00:00:00.000Z",
                "1982-07-01T00:00:00.000Z",
                "1983-07-01T00:00:00.000Z",
                "1985-07-01T00:00:00.000Z",
                "1988-01-01T00:00:00.000Z",
                "1990-01-01T00:00:00.000Z",
                "1991-01-01T00:00:00.000Z",
                "1992-07-01T00:00:00.000Z",
                "1993-07-01T00:00:00.000Z",
                "1994-07-01T00:00:00.000Z",
                "1996-01-01T00:00:00.000Z",
                "1997-07-01T00:00:00.000Z",
                "1999-01-01T00:00:00.000Z",
                "2006-01-01T00:00:00.000Z",
                "2009-01-01T00:00:00.000Z",
                "2012-07-01T00:00:00.000Z",
                "2015-07-01T00:00:00.000Z",
                "2017-01-01T00:00:00.000Z",
            ]
        );

        assert_eq!(table.latest(), Some(utc("2017-01-01T00:00:00Z")));
        assert_eq!(table, LeapSecondTable::default());
    }

    #[test]
    fn offsets() {
        let table = LeapSecondTable::gps();

        for (t, expected) in [
            ("1970-01-01T00:00:00Z", 0),
            ("1980-01-06T00:00:00Z", 0),
            ("1981-06-30T23:59:59Z", 0),
            ("1981-07-01T00:00:01Z", 1),
            ("2000-08-07T04:17:05Z", 13),
            ("2011-08-07T04:17:03Z", 15),
            ("2014-08-07T04:17:02Z", 16),
            ("2016-07-15T17:18:44Z", 17),
            ("2024-03-15T12:00:00Z", 18),
            ("2100-01-01T00:00:00Z", 18),
        ] {
            assert_eq!(table.offset_utc(&utc(t)), expected, "offset at {}", t);
        }
    }

    #[test]
    fn insertion_instant_is_exclusive() {
        let table = LeapSecondTable::gps();
        let insertion = utc("2017-01-01T00:00:00Z");

        assert_eq!(table.offset_utc(&insertion), 17);
        assert_eq!(table.offset_utc(&UtcInstant::from_unix_nanos(insertion.unix_nanos() + 1)), 18);
        assert_eq!(table.offset_utc(&utc("1981-07-01T00:00:00Z")), 0);
    }

    #[test]
    fn frames_share_the_scan() {
        let table = LeapSecondTable::gps();
        let gps = GpsInstant::from_str("2016-12-31T23:59:59.5Z").unwrap();
        let utc = UtcInstant::from_str("2016-12-31T23:59:59.5Z").unwrap();
        assert_eq!(table.offset_gps(&gps), table.offset_utc(&utc));

        let gps = GpsInstant::from_str("2017-01-01T00:00:10Z").unwrap();
        assert_eq!(table.offset_gps(&gps), 18);
    }

    #[test]
    fn extreme_clock_values() {
        let table = LeapSecondTable::gps();
        assert_eq!(table.offset_gps(&GpsInstant::from_unix_nanos(i128::MIN)), 0);
        assert_eq!(table.offset_utc(&UtcInstant::from_unix_nanos(i128::MIN)), 0);
        assert_eq!(table.offset_utc(&UtcInstant::from_unix_nanos(i128::MAX)), 18);
    }

    #[test]
    fn custom_table() {
        let table = LeapSecondTable::new([
            utc("2030-01-01T00:00:00Z"),
            utc("2020-01-01T00:00:00Z"),
            utc("2030-01-01T00:00:00Z"),
            utc("2025-07-01T00:00:00Z"),
        ]);

        assert_eq!(table.len(), 3);
        assert_eq!(table.latest(), Some(utc("2030-01-01T00:00:00Z")));
        assert_eq!(table.offset_utc(&utc("2019-01-01T00:00:00Z")), 0);
        assert_eq!(table.offset_utc(&utc("2026-01-01T00:00:00Z")), 2);
        assert_eq!(table.offset_utc(&utc("2031-01-01T00:00:00Z")), 3);

        let empty = LeapSecondTable::new(Vec::<UtcInstant>::new());
        assert!(empty.is_empty());
        assert_eq!(empty.latest(), None);
        assert_eq!(empty.offset_utc(&utc("2031-01-01T00:00:00Z")), 0);
    }
}
