//! # demeter-forecast
//!
//! Reads a materialised daily weather forecast from a JSON document and
//! bridges it into the scheduling kernel's [`DailyWeather`] rows. The
//! document is an array with one object per day:
//!
//! ```json
//! [
//!   { "date": "2024-07-01", "et0_mm": 4.6, "rain_mm": 0.0,
//!     "sunrise": "2024-07-01T05:43:00" },
//!   { "date": "2024-07-02", "et0_mm": 5.1 }
//! ]
//! ```
//!
//! Days must be strictly chronological; `et0_mm`, `rain_mm`, and `sunrise`
//! are each optional per day, exactly as the kernel tolerates.
//!
//! [`DailyWeather`]: demeter_schedule::DailyWeather

mod error;
mod reader;
mod validate;

pub use error::ForecastError;
pub use reader::{parse_forecast, read_forecast};
