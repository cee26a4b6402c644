//! Soil-water-balance irrigation scheduling.
//!
//! Given one zone's agronomic configuration and a chronologically ordered
//! daily weather forecast, this crate produces a deterministic day-by-day
//! plan of watering events that keeps root-zone soil moisture within
//! agronomic bounds while respecting the infiltration limits of the soil
//! and the delivery rate of the irrigation hardware.
//!
//! # Quick start
//!
//! ```
//! use chrono::NaiveDate;
//! use demeter_schedule::{
//!     DailyWeather, GrassRef, RateSource, SoilRef, Zone, plan_zone_schedule,
//! };
//!
//! let zone = Zone::new("front-lawn", "Front lawn")
//!     .with_grass(GrassRef::new("tall fescue", 0.85))
//!     .with_soil(SoilRef::new(150.0, 25.0))
//!     .with_root_depth_m(0.3)
//!     .with_rate(RateSource::Explicit { rate_mm_per_hr: 9.0 })
//!     .with_initial_depletion_mm(25.0);
//!
//! let start = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
//! let weather: Vec<DailyWeather> = (0..7)
//!     .map(|d| DailyWeather::new(start + chrono::Duration::days(d)).with_et0_mm(2.0))
//!     .collect();
//!
//! let schedule = plan_zone_schedule(&zone, &weather).unwrap();
//! assert!(!schedule.is_empty());
//! ```
//!
//! # Architecture
//!
//! ```text
//! plan_zone_schedule()            (balance.rs)
//!   ├─ Zone::validate()           (zone.rs)
//!   ├─ HydraulicModel::for_zone() (hydraulics.rs)
//!   └─ per day:
//!        ├─ advance depletion
//!        └─ on trigger: plan_cycles()   (cycles.rs)
//! ```
//!
//! The crate performs no I/O and holds no state between calls: identical
//! inputs always produce identical output.

pub mod balance;
pub mod cycles;
pub mod error;
pub mod hydraulics;
pub mod result;
pub mod round;
pub mod weather;
pub mod zone;

pub use balance::plan_zone_schedule;
pub use cycles::plan_cycles;
pub use error::ScheduleError;
pub use hydraulics::{HydraulicModel, soak_minutes};
pub use result::{IrrigationCycle, ScheduleEntry};
pub use round::round1;
pub use weather::DailyWeather;
pub use zone::{GrassRef, Location, RateSource, SoilRef, Zone};
