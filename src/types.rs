//! Unit constants and the model epoch.

use std::time::{SystemTime, UNIX_EPOCH};

use bevy::prelude::*;
use thiserror::Error;

/// Kilometres per astronomical unit.
pub const AU_TO_KM: f64 = 149_597_870.7;

/// Kilometres to AU
pub const KM_TO_AU: f64 = 1.0 / AU_TO_KM;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Seconds per day
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Days per Julian year.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Reference epoch 2000-01-01 00:00:00 as a Unix timestamp.
///
/// This is calendar midnight, not J2000.0 (which is noon TT).
pub const EPOCH_2000_UNIX: i64 = 946_684_800;

/// Solar radius in kilometres.
pub const SUN_RADIUS_KM: f64 = 696_340.0;

/// Failure to read the model epoch from the system clock.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EpochError {
    #[error("system clock is set before 1970-01-01")]
    ClockBeforeUnixEpoch,
}

/// The instant the model is evaluated at, read once at startup.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct ModelEpoch {
    /// Unix timestamp the epoch was taken from.
    pub unix_seconds: i64,
    /// Years elapsed since 2000-01-01, counted in whole days.
    pub elapsed_years: f64,
}

impl ModelEpoch {
    /// Epoch for a specific Unix timestamp.
    pub fn at_unix(unix_seconds: i64) -> Self {
        Self {
            unix_seconds,
            elapsed_years: unix_to_elapsed_years(unix_seconds),
        }
    }

    /// Epoch from the system clock.
    pub fn now() -> Result<Self, EpochError> {
        current_unix_seconds().map(Self::at_unix)
    }

    /// Epoch `years` after 2000-01-01, for tests and fixed renders.
    pub fn from_elapsed_years(years: f64) -> Self {
        let days = (years * DAYS_PER_YEAR).round() as i64;
        Self {
            unix_seconds: EPOCH_2000_UNIX + days * SECONDS_PER_DAY,
            elapsed_years: years,
        }
    }

    /// Calendar date of the epoch as `YYYY-MM-DD`.
    pub fn date_string(&self) -> String {
        let (year, month, day) = days_to_ymd(self.unix_seconds.div_euclid(SECONDS_PER_DAY));
        format!("{year:04}-{month:02}-{day:02}")
    }
}

/// Years since 2000-01-01 for a Unix timestamp.
///
/// Partial days are dropped before dividing by the Julian year length.
pub fn unix_to_elapsed_years(unix_seconds: i64) -> f64 {
    let whole_days = (unix_seconds - EPOCH_2000_UNIX).div_euclid(SECONDS_PER_DAY);
    whole_days as f64 / DAYS_PER_YEAR
}

/// Current system time as a Unix timestamp.
pub fn current_unix_seconds() -> Result<i64, EpochError> {
    unix_seconds_at(SystemTime::now())
}

fn unix_seconds_at(time: SystemTime) -> Result<i64, EpochError> {
    time.duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .map_err(|_| EpochError::ClockBeforeUnixEpoch)
}

/// Convert days since Unix epoch to year, month, day
fn days_to_ymd(days: i64) -> (i32, u32, u32) {
    // Algorithm for Gregorian calendar
    let shifted = days + 719_468; // Days from year 0 to 1970

    let era = shifted.div_euclid(146_097);
    let day_of_era = (shifted - era * 146_097) as u32;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let year = (year_of_era as i64 + era * 400) as i32;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let mp = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = if month <= 2 { year + 1 } else { year };

    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_epoch_start_is_zero_years() {
        assert_eq!(unix_to_elapsed_years(EPOCH_2000_UNIX), 0.0);
    }

    #[test]
    fn test_partial_days_are_dropped() {
        // 23 hours after the epoch is still day zero
        let almost_a_day = EPOCH_2000_UNIX + 23 * 3600;
        assert_eq!(unix_to_elapsed_years(almost_a_day), 0.0);

        let one_julian_year = EPOCH_2000_UNIX + 36_525 * SECONDS_PER_DAY / 100;
        assert_relative_eq!(unix_to_elapsed_years(one_julian_year), 1.0, epsilon = 1e-3);
    }

    #[test]
    fn test_before_epoch_rounds_down() {
        let one_second_before = EPOCH_2000_UNIX - 1;
        assert_relative_eq!(
            unix_to_elapsed_years(one_second_before),
            -1.0 / DAYS_PER_YEAR,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_date_string() {
        assert_eq!(ModelEpoch::at_unix(EPOCH_2000_UNIX).date_string(), "2000-01-01");
        // 2024-02-29 00:00:00 UTC
        assert_eq!(ModelEpoch::at_unix(1_709_164_800).date_string(), "2024-02-29");
    }

    #[test]
    fn test_from_elapsed_years_keeps_value() {
        let epoch = ModelEpoch::from_elapsed_years(1.0);
        assert_eq!(epoch.elapsed_years, 1.0);
        assert_eq!(epoch.date_string(), "2000-12-31");
    }

    #[test]
    fn test_now_is_after_2000() {
        let epoch = ModelEpoch::now().unwrap();
        assert!(epoch.elapsed_years > 20.0);
    }

    #[test]
    fn test_clock_before_1970_is_an_error() {
        let before = UNIX_EPOCH - std::time::Duration::from_secs(1);
        assert_eq!(unix_seconds_at(before), Err(EpochError::ClockBeforeUnixEpoch));

        let epoch_2000 = UNIX_EPOCH + std::time::Duration::from_secs(EPOCH_2000_UNIX as u64);
        assert_eq!(unix_seconds_at(epoch_2000), Ok(EPOCH_2000_UNIX));
    }

    #[test]
    fn test_unit_conversions() {
        assert_relative_eq!(AU_TO_KM * KM_TO_AU, 1.0, epsilon = 1e-15);
        assert_relative_eq!(180.0 * DEG_TO_RAD, std::f64::consts::PI);
        assert_relative_eq!(std::f64::consts::PI / DEG_TO_RAD, 180.0);
    }
}
