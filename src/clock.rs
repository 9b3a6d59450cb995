use crate::instant::UtcInstant;

/// [ClockSource] provides "now" to the
/// [Converter](crate::prelude::Converter). It is the only
/// non-deterministic input of this library.
pub trait ClockSource {
    /// Samples the current UTC time.
    fn now(&self) -> UtcInstant;
}

/// Operating system wall clock
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemClock {}

impl ClockSource for SystemClock {
    fn now(&self) -> UtcInstant {
        UtcInstant::from_datetime(&chrono::Utc::now())
    }
}

/// Clock frozen on one instant
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FixedClock(pub UtcInstant);

impl ClockSource for FixedClock {
    fn now(&self) -> UtcInstant {
        self.0
    }
}

/// Implement source for closures
impl<F: Fn() -> UtcInstant> ClockSource for F {
    fn now(&self) -> UtcInstant {
        self()
    }
}
