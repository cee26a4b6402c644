//! Output types emitted by the scheduling kernel.

use chrono::{NaiveDate, NaiveDateTime};

/// A single sprinkler run.
#[derive(Debug, Clone, PartialEq)]
pub struct IrrigationCycle {
    /// When the valve opens. May fall on the day before the sunrise anchor
    /// when a long unbounded cycle packs backwards past midnight.
    pub start: NaiveDateTime,
    /// Run length in minutes, rounded to one decimal place.
    pub duration_min: f64,
}

impl IrrigationCycle {
    pub(crate) fn new(start: NaiveDateTime, duration_min: f64) -> Self {
        Self {
            start,
            duration_min,
        }
    }
}

/// One day's irrigation event for a zone.
///
/// Depths are rounded to one decimal place. `depletion_after_mm` is 0 by
/// contract: an event always refills the profile to field capacity, even
/// when the gross depth was capped at one TAW.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleEntry {
    /// Calendar day of the event.
    pub date: NaiveDate,
    /// Identifier of the zone being watered.
    pub zone_id: String,
    /// Run cycles in chronological order; never empty.
    pub cycles: Vec<IrrigationCycle>,
    /// Gross water applied in mm.
    pub applied_depth_mm: f64,
    /// Depletion in mm immediately before the event.
    pub depletion_before_mm: f64,
    /// Depletion in mm immediately after the event.
    pub depletion_after_mm: f64,
}

impl ScheduleEntry {
    pub(crate) fn new(
        date: NaiveDate,
        zone_id: String,
        cycles: Vec<IrrigationCycle>,
        applied_depth_mm: f64,
        depletion_before_mm: f64,
        depletion_after_mm: f64,
    ) -> Self {
        Self {
            date,
            zone_id,
            cycles,
            applied_depth_mm,
            depletion_before_mm,
            depletion_after_mm,
        }
    }

    /// Returns the total scheduled runtime in minutes (sum of cycle
    /// durations, each already one-decimal rounded).
    pub fn total_runtime_min(&self) -> f64 {
        self.cycles.iter().map(|c| c.duration_min).sum()
    }
}
