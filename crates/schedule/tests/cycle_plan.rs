//! Cycle-planner behaviour as observed through full schedule runs.

use approx::assert_relative_eq;
use chrono::{Duration, NaiveDate};
use demeter_schedule::{
    DailyWeather, RateSource, ScheduleEntry, SoilRef, Zone, plan_zone_schedule,
};

/// Clay zone under a dense head: 40 mm/hr application against 4 mm/hr
/// infiltration forces many short cycles with hour-long soaks.
fn clay_zone() -> Zone {
    Zone::new("z1", "Clay bed")
        .with_soil(SoilRef::new(150.0, 4.0))
        .with_rate(RateSource::FromFlow {
            flow_l_per_min: 20.0,
            area_m2: 30.0,
        })
        .with_initial_depletion_mm(22.0)
}

fn one_hot_day() -> Vec<DailyWeather> {
    vec![
        DailyWeather::new(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()).with_et0_mm(1.0),
    ]
}

fn single_entry(zone: &Zone) -> ScheduleEntry {
    let mut schedule = plan_zone_schedule(zone, &one_hot_day()).unwrap();
    assert_eq!(schedule.len(), 1);
    schedule.remove(0)
}

#[test]
fn clay_split_cycle_count_and_length() {
    let entry = single_entry(&clay_zone());

    // Gross = (22 + 0.85) / 0.8 = 28.5625 mm; at 40 mm/hr that is
    // 42.84 min of runtime against a 6 min bound: 8 cycles of ~5.36 min.
    assert_eq!(entry.cycles.len(), 8);
    for cycle in &entry.cycles {
        assert_relative_eq!(cycle.duration_min, 5.4);
    }
}

#[test]
fn clay_split_soak_spacing_is_one_hour() {
    let entry = single_entry(&clay_zone());

    // Infiltration below 5 mm/hr soaks for 60 min between runs, so
    // consecutive starts are one cycle plus one soak apart (to within the
    // planner's millisecond offset resolution).
    for pair in entry.cycles.windows(2) {
        let gap_ms = (pair[1].start - pair[0].start).num_milliseconds();
        let cycle_ms = (42.84375f64 / 8.0 * 60_000.0).round() as i64;
        assert!((gap_ms - (cycle_ms + 60 * 60_000)).abs() <= 2);
    }
}

#[test]
fn clay_split_finishes_at_default_sunrise() {
    let entry = single_entry(&clay_zone());

    let sunrise = NaiveDate::from_ymd_opt(2024, 7, 1)
        .unwrap()
        .and_hms_opt(6, 0, 0)
        .unwrap();
    let last = entry.cycles.last().unwrap();
    let exact_cycle = Duration::milliseconds((42.84375f64 / 8.0 * 60_000.0).round() as i64);
    assert_eq!(last.start + exact_cycle, sunrise);
}

#[test]
fn long_event_on_sealed_soil_starts_the_previous_evening() {
    // Zero infiltration leaves the cycle unbounded; a full-TAW refill at
    // 9 mm/hr runs 300 min and must start at 01:00, five hours before the
    // default sunrise.
    let zone = Zone::new("z1", "Sealed bed")
        .with_soil(SoilRef::new(150.0, 0.0))
        .with_rate(RateSource::Explicit {
            rate_mm_per_hr: 9.0,
        })
        .with_initial_depletion_mm(45.0);

    let entry = single_entry(&zone);
    assert_eq!(entry.cycles.len(), 1);
    assert_eq!(
        entry.cycles[0].start,
        NaiveDate::from_ymd_opt(2024, 7, 1)
            .unwrap()
            .and_hms_opt(1, 0, 0)
            .unwrap()
    );
}

#[test]
fn runtime_boundary_between_one_and_two_cycles() {
    // 23 mm depletion on the reference zone: gross 29.8 mm, runtime
    // 198.3 min -- over the 166.7 min bound, so this checks the boundary
    // from the other side with a barely-split event.
    let zone = Zone::new("z1", "Reference")
        .with_rate(RateSource::Explicit {
            rate_mm_per_hr: 9.0,
        })
        .with_initial_depletion_mm(23.0);
    let entry = single_entry(&zone);
    assert_eq!(entry.cycles.len(), 2);

    // And a genuinely small event stays a single cycle: raise the
    // allowable depletion so nothing splits.
    let small = Zone::new("z2", "Small")
        .with_rate(RateSource::Explicit {
            rate_mm_per_hr: 9.0,
        })
        .with_soil(SoilRef::new(150.0, 25.0))
        .with_allowable_depletion(0.5)
        .with_initial_depletion_mm(22.5)
        .with_efficiency(1.0);
    let entry = single_entry(&small);
    // Gross = 23.35 mm, runtime 155.7 min, under the 166.7 min bound.
    assert_eq!(entry.cycles.len(), 1);
}
