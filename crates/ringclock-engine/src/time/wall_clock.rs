use chrono::{DateTime, Local, TimeZone};

/// Source of timezone-aware wall-clock time.
///
/// Read once per frame; implementations must be cheap.
pub trait WallClock {
    type Tz: TimeZone;

    fn now(&self) -> DateTime<Self::Tz>;
}

/// The system clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub const fn new() -> Self {
        Self
    }
}

impl WallClock for SystemClock {
    type Tz = Local;

    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone)]
pub struct FixedClock<Tz: TimeZone> {
    at: DateTime<Tz>,
}

impl<Tz: TimeZone> FixedClock<Tz> {
    pub fn new(at: DateTime<Tz>) -> Self {
        Self { at }
    }
}

impl<Tz: TimeZone> WallClock for FixedClock<Tz> {
    type Tz = Tz;

    fn now(&self) -> DateTime<Tz> {
        self.at.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn system_clock_is_after_2020() {
        assert!(SystemClock::new().now().timestamp() > 1_577_836_800);
    }

    #[test]
    fn fixed_clock_keeps_returning_its_instant() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let t0 = tz.with_ymd_and_hms(2024, 3, 1, 12, 30, 45).unwrap();
        let clock = FixedClock::new(t0);
        assert_eq!(clock.now(), t0);
        assert_eq!(clock.now(), t0);
        assert_eq!(clock.now().offset().local_minus_utc(), 2 * 3600);
    }

    #[test]
    fn fixed_clock_works_with_utc() {
        let t = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(FixedClock::new(t).now().timestamp(), 946_684_800);
    }
}
