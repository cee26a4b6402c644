//! Daily weather observations consumed by the water-balance driver.

use chrono::{NaiveDate, NaiveDateTime};

/// Fallback sunrise hour used when a day carries no sunrise value.
const DEFAULT_SUNRISE_HOUR: u32 = 6;

/// One day of weather for a zone's location.
///
/// Every field except the date is optional; the driver treats missing ET₀
/// and rainfall as zero and substitutes 06:00 local when sunrise is absent.
/// Date-times are naive local clock values: the kernel never converts time
/// zones, so whatever clock the caller supplies flows through to the output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyWeather {
    /// Calendar day of the observation.
    pub date: NaiveDate,
    /// Reference evapotranspiration ET₀ in mm/day. Negatives clamp to 0.
    pub et0_mm: Option<f64>,
    /// Rainfall depth in mm.
    pub rain_mm: Option<f64>,
    /// Local sunrise on `date`; the day's watering must finish by this time.
    pub sunrise: Option<NaiveDateTime>,
}

impl DailyWeather {
    /// Creates a day with no recorded ET₀, rainfall, or sunrise.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            et0_mm: None,
            rain_mm: None,
            sunrise: None,
        }
    }

    /// Sets the reference evapotranspiration in mm/day.
    pub fn with_et0_mm(mut self, et0_mm: f64) -> Self {
        self.et0_mm = Some(et0_mm);
        self
    }

    /// Sets the rainfall depth in mm.
    pub fn with_rain_mm(mut self, rain_mm: f64) -> Self {
        self.rain_mm = Some(rain_mm);
        self
    }

    /// Sets the local sunrise time.
    pub fn with_sunrise(mut self, sunrise: NaiveDateTime) -> Self {
        self.sunrise = Some(sunrise);
        self
    }

    /// Returns the day's sunrise, or 06:00:00 on `date` when unset.
    pub fn resolved_sunrise(&self) -> NaiveDateTime {
        self.sunrise.unwrap_or_else(|| {
            self.date
                .and_hms_opt(DEFAULT_SUNRISE_HOUR, 0, 0)
                .expect("06:00:00 is a valid time of day")
        })
    }
}
