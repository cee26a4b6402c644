//! Daily soil-water-balance driver.
//!
//! Walks the weather sequence in order, carrying a single depletion
//! accumulator: each day loses crop evapotranspiration, gains effective
//! rainfall, and triggers an irrigation event whenever depletion reaches
//! the readily-available-water threshold.

use tracing::{debug, info};

use crate::cycles::plan_cycles;
use crate::error::ScheduleError;
use crate::hydraulics::HydraulicModel;
use crate::result::ScheduleEntry;
use crate::round::round1;
use crate::weather::DailyWeather;
use crate::zone::Zone;

/// Rainfall below this depth never reaches the root zone; the canopy
/// intercepts it (mm).
const LIGHT_RAIN_THRESHOLD_MM: f64 = 2.0;

/// Fraction of measurable rainfall stored in the root zone after runoff
/// and uneven distribution.
const EFFECTIVE_RAIN_FRACTION: f64 = 0.8;

/// Plans a zone's irrigation schedule over a weather horizon.
///
/// Walks `weather` in the order given, one entry per day, and emits at most
/// one [`ScheduleEntry`] per day, in the same chronological order. A zone
/// whose enabled flag is false yields an empty schedule.
///
/// The function is pure and deterministic: identical inputs produce
/// identical output, and the input zone is never mutated.
///
/// # Errors
///
/// Returns [`ScheduleError`] when the zone's physical configuration is
/// invalid (see [`Zone::validate`]). All weather values are tolerated:
/// missing ET₀ and rainfall count as zero, negative ET₀ clamps to zero, and
/// a missing sunrise defaults to 06:00 local.
pub fn plan_zone_schedule(
    zone: &Zone,
    weather: &[DailyWeather],
) -> Result<Vec<ScheduleEntry>, ScheduleError> {
    zone.validate()?;

    if !zone.enabled {
        debug!(zone = %zone.id, "zone disabled, returning empty schedule");
        return Ok(Vec::new());
    }

    let hydraulics = HydraulicModel::for_zone(zone);
    let rate = hydraulics.precipitation_rate_mm_per_hr();
    let taw_mm = zone.soil.awhc_mm_per_m * zone.root_depth_m;
    let raw_mm = zone.allowable_depletion * taw_mm;

    let mut depletion = zone.initial_depletion_mm.unwrap_or(0.0).clamp(0.0, taw_mm);

    debug!(
        zone = %zone.id,
        taw_mm,
        raw_mm,
        rate_mm_per_hr = rate,
        initial_depletion_mm = depletion,
        n_days = weather.len(),
        "water balance initialised"
    );

    let mut schedule = Vec::new();

    for day in weather {
        let sunrise = day.resolved_sunrise();
        let etc_mm = zone.grass.kc * day.et0_mm.unwrap_or(0.0).max(0.0);
        let rain_mm = effective_rainfall(day.rain_mm.unwrap_or(0.0));

        depletion = (depletion + etc_mm - rain_mm).clamp(0.0, taw_mm);

        if depletion >= raw_mm {
            let before = depletion;
            // Refill to field capacity, capped so low efficiency can never
            // apply more than one TAW's worth of gross water.
            let gross = (before / zone.efficiency).min(taw_mm);
            let runtime_min = gross / rate * 60.0;
            let cycles = plan_cycles(
                runtime_min,
                hydraulics.max_cycle_min(),
                sunrise,
                hydraulics.soak_min(),
            );

            info!(
                zone = %zone.id,
                date = %day.date,
                depletion_mm = round1(before),
                gross_mm = round1(gross),
                n_cycles = cycles.len(),
                "irrigation event scheduled"
            );

            schedule.push(ScheduleEntry::new(
                day.date,
                zone.id.clone(),
                cycles,
                round1(gross),
                round1(before),
                0.0,
            ));

            // The refilled profile still loses this day's ET and keeps its
            // rain, so the accumulator stays continuous into tomorrow.
            depletion = (etc_mm - rain_mm).clamp(0.0, taw_mm);
        }

        depletion = depletion.clamp(0.0, taw_mm);
    }

    debug!(
        zone = %zone.id,
        n_events = schedule.len(),
        final_depletion_mm = round1(depletion),
        "water balance complete"
    );

    Ok(schedule)
}

/// Effective rainfall after interception and runoff discounts.
///
/// Light rain below the threshold contributes nothing; heavier rain is
/// discounted to 80% of the measured depth.
fn effective_rainfall(rain_mm: f64) -> f64 {
    if rain_mm < LIGHT_RAIN_THRESHOLD_MM {
        0.0
    } else {
        EFFECTIVE_RAIN_FRACTION * rain_mm
    }
}
