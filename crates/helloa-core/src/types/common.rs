//! Common helpers shared across the site.

#![allow(clippy::unwrap_used)] // Tests use unwrap for brevity

use chrono::NaiveDate;

/// Format a playback time in seconds as `M:SS`.
///
/// Minutes are not wrapped into hours, so an hour-long episode reads
/// `60:00`. Negative and non-finite input renders as `0:00`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }
    let total = seconds.floor() as u64;
    let minutes = total / 60;
    let secs = total % 60;
    format!("{minutes}:{secs:02}")
}

/// Playback progress as a percentage in `[0, 100]`.
///
/// Zero whenever the duration is unknown, zero, or not finite.
pub fn progress_percent(current: f64, duration: f64) -> f64 {
    if !duration.is_finite() || duration <= 0.0 || !current.is_finite() {
        return 0.0;
    }
    (current / duration * 100.0).clamp(0.0, 100.0)
}

/// How a publish date is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateStyle {
    /// `1/15/2024`
    #[default]
    Short,
    /// `January 15, 2024`
    Long,
}

impl DateStyle {
    /// Render a calendar date in this style.
    pub fn format(self, date: NaiveDate) -> String {
        match self {
            Self::Short => date.format("%-m/%-d/%Y").to_string(),
            Self::Long => date.format("%B %-d, %Y").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(3599.0), "59:59");
        assert_eq!(format_time(3600.0), "60:00");
        assert_eq!(format_time(9.99), "0:09");
    }

    #[test]
    fn test_format_time_degenerate_input() {
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(-12.0), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_progress_without_duration() {
        assert_eq!(progress_percent(42.0, 0.0), 0.0);
        assert_eq!(progress_percent(42.0, -1.0), 0.0);
        assert_eq!(progress_percent(42.0, f64::NAN), 0.0);
        assert_eq!(progress_percent(30.0, 120.0), 25.0);
    }

    #[test]
    fn test_date_styles() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(DateStyle::Short.format(date), "1/15/2024");
        assert_eq!(DateStyle::Long.format(date), "January 15, 2024");
    }

    proptest! {
        #[test]
        fn format_time_seconds_are_two_digits(seconds in 0.0f64..100_000.0) {
            let formatted = format_time(seconds);
            let (_, secs) = formatted.split_once(':').unwrap();
            prop_assert_eq!(secs.len(), 2);
        }

        #[test]
        fn progress_is_zero_when_duration_not_positive(
            current in -1000.0f64..1000.0,
            duration in -1000.0f64..=0.0,
        ) {
            prop_assert!(progress_percent(current, duration).abs() < f64::EPSILON);
        }
    }
}
