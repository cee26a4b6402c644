use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::info;

use demeter_forecast::read_forecast;
use demeter_schedule::{DailyWeather, ScheduleEntry, Zone, plan_zone_schedule};

use crate::cli::PlanArgs;
use crate::config::DemeterConfig;
use crate::convert;

/// Run the planning pipeline: config -> forecast -> per-zone schedules.
pub fn run(config_path: &Path, args: PlanArgs) -> Result<()> {
    let toml_str = std::fs::read_to_string(config_path)
        .with_context(|| format!("failed to read config file: {}", config_path.display()))?;
    let mut config: DemeterConfig =
        toml::from_str(&toml_str).context("failed to parse TOML config")?;

    // CLI overrides
    if let Some(ref weather) = args.weather {
        config.io.weather = Some(weather.clone());
    }
    if let Some(ref output) = args.output {
        config.io.output = Some(output.clone());
    }
    let config = config;

    let weather_path = config.io.weather.as_ref().ok_or_else(|| {
        anyhow::anyhow!("no forecast path: set [io].weather in config or use --weather")
    })?;

    if config.zones.is_empty() {
        bail!("no zones configured: add at least one [[zone]] table");
    }

    let weather = read_forecast(weather_path)
        .with_context(|| format!("failed to read forecast: {}", weather_path.display()))?;

    let mut report = String::new();
    let mut planned = 0usize;
    for zone_toml in &config.zones {
        if let Some(ref only) = args.zone {
            if &zone_toml.id != only {
                continue;
            }
        }
        planned += 1;

        let zone = convert::build_zone(zone_toml)?;
        let schedule = plan_zone_schedule(&zone, &weather)
            .with_context(|| format!("scheduling failed for zone {:?}", zone.id))?;
        info!(
            zone = %zone.id,
            n_days = weather.len(),
            n_events = schedule.len(),
            "zone planned"
        );
        report.push_str(&render_zone_report(&zone, &weather, &schedule));
    }

    if planned == 0 {
        bail!("no zone matched the --zone filter");
    }

    match config.io.output {
        Some(ref path) => {
            std::fs::write(path, &report)
                .with_context(|| format!("failed to write report: {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => print!("{report}"),
    }
    Ok(())
}

/// Renders one zone's schedule as a human-readable block.
fn render_zone_report(zone: &Zone, weather: &[DailyWeather], schedule: &[ScheduleEntry]) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    writeln!(out, "== {} ({}) ==", zone.id, zone.name).expect("writing to String cannot fail");

    if !zone.enabled {
        writeln!(out, "  zone disabled").expect("writing to String cannot fail");
        return out;
    }
    if schedule.is_empty() {
        writeln!(
            out,
            "  no irrigation needed over {} forecast day(s)",
            weather.len()
        )
        .expect("writing to String cannot fail");
        return out;
    }

    for entry in schedule {
        writeln!(
            out,
            "  {}  apply {:.1} mm  (depletion {:.1} -> {:.1})",
            entry.date,
            entry.applied_depth_mm,
            entry.depletion_before_mm,
            entry.depletion_after_mm,
        )
        .expect("writing to String cannot fail");
        for cycle in &entry.cycles {
            writeln!(
                out,
                "    {}  {:>6.1} min",
                cycle.start.format("%Y-%m-%d %H:%M"),
                cycle.duration_min,
            )
            .expect("writing to String cannot fail");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use demeter_schedule::{RateSource, Zone};

    fn test_zone() -> Zone {
        Zone::new("front", "Front lawn")
            .with_rate(RateSource::Explicit {
                rate_mm_per_hr: 9.0,
            })
            .with_initial_depletion_mm(25.0)
    }

    fn test_weather() -> Vec<DailyWeather> {
        vec![
            DailyWeather::new(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()).with_et0_mm(2.0),
        ]
    }

    #[test]
    fn report_lists_events_and_cycles() {
        let zone = test_zone();
        let weather = test_weather();
        let schedule = plan_zone_schedule(&zone, &weather).unwrap();

        let report = render_zone_report(&zone, &weather, &schedule);
        assert!(report.contains("== front (Front lawn) =="));
        assert!(report.contains("2024-07-01  apply 33.4 mm"));
        assert!(report.contains("min"));
    }

    #[test]
    fn report_notes_an_empty_schedule() {
        let zone = test_zone().with_initial_depletion_mm(0.0);
        let weather = test_weather();

        let report = render_zone_report(&zone, &weather, &[]);
        assert!(report.contains("no irrigation needed over 1 forecast day(s)"));
    }

    #[test]
    fn report_notes_a_disabled_zone() {
        let zone = test_zone().with_enabled(false);
        let report = render_zone_report(&zone, &test_weather(), &[]);
        assert!(report.contains("zone disabled"));
    }
}
