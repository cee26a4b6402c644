use std::path::PathBuf;

use serde::Deserialize;

/// Top-level Demeter configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DemeterConfig {
    /// I/O settings.
    #[serde(default)]
    pub io: IoConfig,

    /// Irrigation zones.
    #[serde(rename = "zone", default)]
    pub zones: Vec<ZoneToml>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct IoConfig {
    /// Path to the forecast JSON document.
    pub weather: Option<PathBuf>,
    /// Path for the schedule report; stdout when unset.
    pub output: Option<PathBuf>,
}

/// One `[[zone]]` table.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ZoneToml {
    pub id: String,
    pub name: Option<String>,
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Grass species name, resolved against the agronomy catalogue.
    pub grass: String,
    /// Soil texture name, resolved against the agronomy catalogue.
    pub soil: String,

    /// Root-zone depth in metres; defaults to the species' typical depth.
    pub root_depth_m: Option<f64>,
    #[serde(default = "default_allowable_depletion")]
    pub allowable_depletion: f64,
    #[serde(default = "default_efficiency")]
    pub efficiency: f64,

    /// Audited precipitation rate in mm/hr; overrides flow/area.
    pub precipitation_rate_mm_per_hr: Option<f64>,
    pub flow_l_per_min: Option<f64>,
    pub area_m2: Option<f64>,

    pub initial_depletion_mm: Option<f64>,

    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

fn default_true() -> bool {
    true
}
fn default_allowable_depletion() -> f64 {
    0.5
}
fn default_efficiency() -> f64 {
    0.8
}
