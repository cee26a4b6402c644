//! Sunrise-anchored run/soak cycle planning.
//!
//! A required runtime is split into equal-length cycles that collectively
//! deliver it without any single run exceeding the soil's infiltration
//! bound. The latest cycle ends exactly at sunrise; earlier cycles pack
//! backwards, each separated from the next by the soak interval.

use chrono::{Duration, NaiveDateTime};

use crate::result::IrrigationCycle;
use crate::round::round1;

/// Plans the cycle sequence for one irrigation event.
///
/// # Arguments
///
/// * `total_runtime_min` - Required total runtime in minutes.
/// * `max_cycle_min` - Longest permissible single run; `None` is unbounded.
/// * `sunrise` - The latest permissible end of watering.
/// * `soak_min` - Idle interval between consecutive cycles, in minutes.
///
/// # Returns
///
/// Cycles in chronological order. Empty when `total_runtime_min <= 0`;
/// otherwise every cycle has the same duration, the final cycle ends at
/// `sunrise`, and consecutive cycles are spaced by exactly `soak_min`.
///
/// Reported durations are rounded to one decimal place, but start times are
/// computed from the exact unrounded split so rounding never accumulates.
/// A long unbounded run may start before midnight of the sunrise's calendar
/// day; callers do not constrain the start date.
pub fn plan_cycles(
    total_runtime_min: f64,
    max_cycle_min: Option<f64>,
    sunrise: NaiveDateTime,
    soak_min: f64,
) -> Vec<IrrigationCycle> {
    if total_runtime_min <= 0.0 {
        return Vec::new();
    }

    let max = match max_cycle_min {
        Some(max) if max > 0.0 && total_runtime_min > max => max,
        // Unbounded, non-positive, or already within bound: one cycle.
        _ => {
            let start = sunrise - exact_minutes(total_runtime_min);
            return vec![IrrigationCycle::new(start, round1(total_runtime_min))];
        }
    };

    let n_cycles = (total_runtime_min / max).ceil() as usize;
    let each = total_runtime_min / n_cycles as f64;

    // Pack backwards from sunrise: offset i counts cycles after this one.
    let mut cycles = Vec::with_capacity(n_cycles);
    for i in (0..n_cycles).rev() {
        let end = sunrise - exact_minutes(i as f64 * (each + soak_min));
        cycles.push(IrrigationCycle::new(
            end - exact_minutes(each),
            round1(each),
        ));
    }
    cycles
}

/// Converts fractional minutes to a duration at millisecond precision.
fn exact_minutes(minutes: f64) -> Duration {
    Duration::milliseconds((minutes * 60_000.0).round() as i64)
}
