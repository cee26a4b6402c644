//! Forecast document parsing and orchestration.

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use demeter_schedule::DailyWeather;
use serde::Deserialize;
use tracing::info;

use crate::error::ForecastError;
use crate::validate;

/// One day of the forecast document, as serialised.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ForecastDay {
    /// Calendar day of the forecast row.
    date: NaiveDate,
    /// Reference evapotranspiration in mm/day.
    #[serde(default)]
    et0_mm: Option<f64>,
    /// Rainfall depth in mm.
    #[serde(default)]
    rain_mm: Option<f64>,
    /// Local sunrise on `date`.
    #[serde(default)]
    sunrise: Option<NaiveDateTime>,
}

impl ForecastDay {
    fn into_daily(self) -> DailyWeather {
        DailyWeather {
            date: self.date,
            et0_mm: self.et0_mm,
            rain_mm: self.rain_mm,
            sunrise: self.sunrise,
        }
    }
}

/// Reads and validates a forecast file.
///
/// # Errors
///
/// Returns [`ForecastError`] when the file cannot be read, the JSON does
/// not parse, or the days fail validation.
pub fn read_forecast(path: &Path) -> Result<Vec<DailyWeather>, ForecastError> {
    let text = std::fs::read_to_string(path).map_err(|source| ForecastError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let weather = parse_forecast(&text)?;
    info!(
        path = %path.display(),
        n_days = weather.len(),
        "forecast loaded"
    );
    Ok(weather)
}

/// Parses and validates an in-memory forecast document.
///
/// # Errors
///
/// Returns [`ForecastError`] when the JSON does not parse, days repeat or
/// run backwards, or a value check fails.
pub fn parse_forecast(json: &str) -> Result<Vec<DailyWeather>, ForecastError> {
    let days: Vec<ForecastDay> =
        serde_json::from_str(json).map_err(|source| ForecastError::Parse { source })?;

    let weather: Vec<DailyWeather> = days.into_iter().map(ForecastDay::into_daily).collect();
    validate::check_chronology(&weather)?;
    validate::check_values(&weather)?;
    Ok(weather)
}
