//! Pure conversion functions: TOML config records -> kernel `Zone` values.

use anyhow::{Context, Result, bail};

use demeter_agronomy::{grass_by_name, soil_by_name};
use demeter_schedule::{GrassRef, RateSource, SoilRef, Zone};

use crate::config::ZoneToml;

/// Builds a kernel zone from one `[[zone]]` table, resolving grass and soil
/// names against the agronomy catalogues.
pub fn build_zone(toml: &ZoneToml) -> Result<Zone> {
    let grass = grass_by_name(&toml.grass)
        .with_context(|| format!("zone {:?}", toml.id))?;
    let soil = soil_by_name(&toml.soil)
        .with_context(|| format!("zone {:?}", toml.id))?;

    let mut zone = Zone::new(
        toml.id.clone(),
        toml.name.clone().unwrap_or_else(|| toml.id.clone()),
    )
    .with_enabled(toml.enabled)
    .with_grass(GrassRef::new(grass.name, grass.kc))
    .with_soil(SoilRef::new(soil.awhc_mm_per_m, soil.infiltration_mm_per_hr))
    .with_root_depth_m(toml.root_depth_m.unwrap_or(grass.root_depth_m))
    .with_allowable_depletion(toml.allowable_depletion)
    .with_efficiency(toml.efficiency)
    .with_rate(build_rate(toml)?);

    if let Some(depletion) = toml.initial_depletion_mm {
        zone = zone.with_initial_depletion_mm(depletion);
    }
    match (toml.latitude, toml.longitude) {
        (Some(lat), Some(lon)) => zone = zone.with_location(lat, lon),
        (None, None) => {}
        _ => bail!(
            "zone {:?}: latitude and longitude must be set together",
            toml.id
        ),
    }

    zone.validate()
        .with_context(|| format!("zone {:?}", toml.id))?;
    Ok(zone)
}

/// Resolves the precipitation-rate source: an audited rate wins; otherwise
/// both flow and area are required.
fn build_rate(toml: &ZoneToml) -> Result<RateSource> {
    if let Some(rate) = toml.precipitation_rate_mm_per_hr {
        return Ok(RateSource::Explicit {
            rate_mm_per_hr: rate,
        });
    }
    match (toml.flow_l_per_min, toml.area_m2) {
        (Some(flow), Some(area)) => Ok(RateSource::FromFlow {
            flow_l_per_min: flow,
            area_m2: area,
        }),
        _ => bail!(
            "zone {:?}: set precipitation_rate_mm_per_hr, or flow_l_per_min and area_m2",
            toml.id
        ),
    }
}
