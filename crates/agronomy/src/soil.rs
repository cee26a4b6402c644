//! Soil texture catalogue.

use crate::error::AgronomyError;

/// A soil texture class with the two properties the scheduler needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoilTexture {
    /// USDA texture class name, lower case.
    pub name: &'static str,
    /// Available water-holding capacity, mm of water per metre of depth.
    pub awhc_mm_per_m: f64,
    /// Basic infiltration rate in mm/hr.
    pub infiltration_mm_per_hr: f64,
}

/// Catalogue of USDA soil texture classes.
///
/// AWHC figures are field-capacity-to-wilting-point ranges for settled
/// profiles; infiltration is the steady basic rate after surface sealing.
/// Coarse soils hold little but drain fast; clays hold much and drain
/// slowly enough to force cycled watering.
pub const SOILS: &[SoilTexture] = &[
    SoilTexture {
        name: "sand",
        awhc_mm_per_m: 60.0,
        infiltration_mm_per_hr: 50.0,
    },
    SoilTexture {
        name: "loamy sand",
        awhc_mm_per_m: 90.0,
        infiltration_mm_per_hr: 30.0,
    },
    SoilTexture {
        name: "sandy loam",
        awhc_mm_per_m: 150.0,
        infiltration_mm_per_hr: 25.0,
    },
    SoilTexture {
        name: "loam",
        awhc_mm_per_m: 170.0,
        infiltration_mm_per_hr: 13.0,
    },
    SoilTexture {
        name: "silt loam",
        awhc_mm_per_m: 200.0,
        infiltration_mm_per_hr: 10.0,
    },
    SoilTexture {
        name: "clay loam",
        awhc_mm_per_m: 180.0,
        infiltration_mm_per_hr: 8.0,
    },
    SoilTexture {
        name: "silty clay",
        awhc_mm_per_m: 170.0,
        infiltration_mm_per_hr: 5.0,
    },
    SoilTexture {
        name: "clay",
        awhc_mm_per_m: 160.0,
        infiltration_mm_per_hr: 4.0,
    },
];

/// Looks up a soil texture by name, case-insensitively.
///
/// # Errors
///
/// Returns [`AgronomyError::UnknownSoil`] when no texture matches.
pub fn soil_by_name(name: &str) -> Result<&'static SoilTexture, AgronomyError> {
    let needle = name.trim().to_lowercase();
    SOILS
        .iter()
        .find(|s| s.name == needle)
        .ok_or_else(|| AgronomyError::UnknownSoil {
            name: name.to_string(),
        })
}
