//! Accumulated validation of parsed forecast days.

use demeter_schedule::DailyWeather;

use crate::error::ForecastError;

/// Accumulates validation messages and converts them into a single
/// [`ForecastError::Validation`].
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Consume the collector and return `Ok(())` when nothing was recorded,
    /// or a single error that joins every message with `"; "`.
    pub(crate) fn finish(self) -> Result<(), ForecastError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ForecastError::Validation {
                count: self.errors.len(),
                details: self.errors.join("; "),
            })
        }
    }
}

/// Checks that days are strictly chronological.
///
/// # Errors
///
/// Returns [`ForecastError::DuplicateDate`] or [`ForecastError::OutOfOrder`]
/// at the first violation.
pub(crate) fn check_chronology(weather: &[DailyWeather]) -> Result<(), ForecastError> {
    for pair in weather.windows(2) {
        if pair[1].date == pair[0].date {
            return Err(ForecastError::DuplicateDate { date: pair[1].date });
        }
        if pair[1].date < pair[0].date {
            return Err(ForecastError::OutOfOrder {
                prev: pair[0].date,
                next: pair[1].date,
            });
        }
    }
    Ok(())
}

/// Checks per-day values, accumulating every violation.
///
/// Negative rainfall and sunrise on the wrong calendar day are provider
/// mistakes this layer rejects; negative ET₀ passes through because the
/// kernel clamps it.
///
/// # Errors
///
/// Returns a single [`ForecastError::Validation`] listing every failure.
pub(crate) fn check_values(weather: &[DailyWeather]) -> Result<(), ForecastError> {
    let mut collector = ValidationCollector::new();
    for day in weather {
        if let Some(rain) = day.rain_mm {
            if !rain.is_finite() || rain < 0.0 {
                collector.push(format!("{}: invalid rainfall {rain} mm", day.date));
            }
        }
        if let Some(et0) = day.et0_mm {
            if !et0.is_finite() {
                collector.push(format!("{}: non-finite ET0", day.date));
            }
        }
        if let Some(sunrise) = day.sunrise {
            if sunrise.date() != day.date {
                collector.push(format!(
                    "{}: sunrise {sunrise} falls on a different day",
                    day.date
                ));
            }
        }
    }
    collector.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(ymd: (i32, u32, u32)) -> DailyWeather {
        DailyWeather::new(NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2).unwrap())
    }

    #[test]
    fn chronological_days_pass() {
        let weather = vec![day((2024, 7, 1)), day((2024, 7, 2)), day((2024, 7, 4))];
        assert!(check_chronology(&weather).is_ok());
    }

    #[test]
    fn single_day_passes() {
        assert!(check_chronology(&[day((2024, 7, 1))]).is_ok());
    }

    #[test]
    fn negative_rain_is_collected() {
        let weather = vec![day((2024, 7, 1)).with_rain_mm(-3.0)];
        let err = check_values(&weather).unwrap_err();
        assert!(matches!(err, ForecastError::Validation { count: 1, .. }));
    }

    #[test]
    fn negative_et0_passes_through() {
        // The kernel clamps negative ET0 to zero; the provider keeps it.
        let weather = vec![day((2024, 7, 1)).with_et0_mm(-0.2)];
        assert!(check_values(&weather).is_ok());
    }

    #[test]
    fn misdated_sunrise_is_collected() {
        let sunrise = NaiveDate::from_ymd_opt(2024, 7, 2)
            .unwrap()
            .and_hms_opt(5, 40, 0)
            .unwrap();
        let weather = vec![day((2024, 7, 1)).with_sunrise(sunrise)];
        assert!(check_values(&weather).is_err());
    }

    #[test]
    fn multiple_violations_accumulate() {
        let weather = vec![
            day((2024, 7, 1)).with_rain_mm(-1.0),
            day((2024, 7, 2)).with_rain_mm(f64::NAN),
        ];
        let err = check_values(&weather).unwrap_err();
        assert!(matches!(err, ForecastError::Validation { count: 2, .. }));
    }
}
