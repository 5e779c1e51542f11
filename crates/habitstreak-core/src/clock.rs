//! Source of "today" for the streak engine.

use chrono::Local;

use crate::calendar::DayKey;

/// Supplies the current calendar day.
pub trait Clock {
    fn today(&self) -> DayKey;
}

/// Reads the local calendar of the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> DayKey {
        DayKey::from_instant(&Local::now())
    }
}

/// Always reports the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DayKey);

impl Clock for FixedClock {
    fn today(&self) -> DayKey {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> DayKey {
        (**self).today()
    }
}
