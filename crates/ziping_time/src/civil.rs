//! Civil date/time at the fixed UTC+8 offset.
//!
//! Provides `CivilTime`, the canonical civil representation used throughout
//! the engine. All chart computation happens in this single offset; callers
//! never see or choose another one.

use crate::julian::{calendar_to_jd, day_number, jd_to_calendar};

/// Civil calendar date-time at UTC+8.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CivilTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl CivilTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Civil Julian Date: the JD of this wall-clock reading.
    ///
    /// The offset is never subtracted out; every `CivilTime` in the engine is
    /// UTC+8, so these values are mutually comparable and differences are in
    /// days of civil time.
    pub fn to_jd(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Rebuild a `CivilTime` from a civil Julian Date.
    pub fn from_jd(jd: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd);
        let day = day_frac.floor() as u32;
        let total_seconds = day_frac.fract() * 86_400.0;
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = total_seconds % 60.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Integer day count of the civil date (time of day ignored).
    pub fn day_number(&self) -> i64 {
        day_number(self.year, self.month, self.day)
    }
}

impl std::fmt::Display for CivilTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02} +08:00",
            self.year, self.month, self.day, self.hour, self.minute, self.second as u32
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_constructor() {
        let t = CivilTime::new(1990, 2, 4, 10, 14, 0.0);
        assert_eq!(t.year, 1990);
        assert_eq!(t.month, 2);
        assert_eq!(t.day, 4);
        assert_eq!(t.hour, 10);
        assert_eq!(t.minute, 14);
    }

    #[test]
    fn jd_round_trip() {
        let t = CivilTime::new(2024, 2, 4, 16, 27, 0.0);
        let back = CivilTime::from_jd(t.to_jd());
        assert_eq!(back.year, 2024);
        assert_eq!(back.month, 2);
        assert_eq!(back.day, 4);
        assert_eq!(back.hour, 16);
        assert_eq!(back.minute, 27);
        assert!(back.second.abs() < 1e-3);
    }

    #[test]
    fn jd_ordering() {
        let a = CivilTime::new(1990, 2, 3, 23, 59, 59.0);
        let b = CivilTime::new(1990, 2, 4, 0, 0, 0.0);
        assert!(a.to_jd() < b.to_jd());
    }

    #[test]
    fn day_number_ignores_time() {
        let a = CivilTime::new(2000, 1, 1, 0, 0, 0.0);
        let b = CivilTime::new(2000, 1, 1, 23, 59, 59.0);
        assert_eq!(a.day_number(), b.day_number());
        assert_eq!(a.day_number(), 2_451_545);
    }

    #[test]
    fn display_format() {
        let t = CivilTime::new(1990, 2, 4, 10, 14, 0.0);
        assert_eq!(t.to_string(), "1990-02-04 10:14:00 +08:00");
    }
}
