//! Turfgrass species catalogue.

use crate::error::AgronomyError;

/// Growth-season classification of a turfgrass species.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    /// C3 grasses; peak growth in spring and autumn.
    Cool,
    /// C4 grasses; peak growth in summer heat.
    Warm,
}

/// A turfgrass species with its agronomic coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrassSpecies {
    /// Common species name, lower case.
    pub name: &'static str,
    /// Crop coefficient Kc relative to reference ET, mid-season managed turf.
    pub kc: f64,
    /// Typical managed root-zone depth in metres.
    pub root_depth_m: f64,
    /// Growth-season classification.
    pub season: Season,
}

/// Catalogue of common managed turfgrass species.
///
/// Kc values follow FAO-56 turf figures adjusted for mowed lawn conditions;
/// warm-season species transpire markedly less than cool-season species at
/// the same atmospheric demand.
pub const GRASSES: &[GrassSpecies] = &[
    GrassSpecies {
        name: "kentucky bluegrass",
        kc: 0.80,
        root_depth_m: 0.25,
        season: Season::Cool,
    },
    GrassSpecies {
        name: "perennial ryegrass",
        kc: 0.82,
        root_depth_m: 0.20,
        season: Season::Cool,
    },
    GrassSpecies {
        name: "tall fescue",
        kc: 0.85,
        root_depth_m: 0.30,
        season: Season::Cool,
    },
    GrassSpecies {
        name: "fine fescue",
        kc: 0.75,
        root_depth_m: 0.25,
        season: Season::Cool,
    },
    GrassSpecies {
        name: "bermudagrass",
        kc: 0.60,
        root_depth_m: 0.35,
        season: Season::Warm,
    },
    GrassSpecies {
        name: "zoysiagrass",
        kc: 0.55,
        root_depth_m: 0.30,
        season: Season::Warm,
    },
    GrassSpecies {
        name: "st. augustinegrass",
        kc: 0.65,
        root_depth_m: 0.30,
        season: Season::Warm,
    },
    GrassSpecies {
        name: "buffalograss",
        kc: 0.50,
        root_depth_m: 0.35,
        season: Season::Warm,
    },
];

/// Looks up a grass species by name, case-insensitively.
///
/// # Errors
///
/// Returns [`AgronomyError::UnknownGrass`] when no species matches.
pub fn grass_by_name(name: &str) -> Result<&'static GrassSpecies, AgronomyError> {
    let needle = name.trim().to_lowercase();
    GRASSES
        .iter()
        .find(|g| g.name == needle)
        .ok_or_else(|| AgronomyError::UnknownGrass {
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let grass = grass_by_name("Tall Fescue").unwrap();
        assert_eq!(grass.kc, 0.85);
        assert_eq!(grass.season, Season::Cool);
    }

    #[test]
    fn lookup_trims_whitespace() {
        assert!(grass_by_name("  bermudagrass ").is_ok());
    }

    #[test]
    fn unknown_species_is_an_error() {
        assert!(matches!(
            grass_by_name("astroturf").unwrap_err(),
            AgronomyError::UnknownGrass { .. }
        ));
    }

    #[test]
    fn all_entries_are_schedulable() {
        // Every coefficient must satisfy the kernel's zone preconditions.
        for grass in GRASSES {
            assert!(grass.kc > 0.0 && grass.kc <= 1.0, "{}", grass.name);
            assert!(grass.root_depth_m > 0.0, "{}", grass.name);
        }
    }

    #[test]
    fn warm_season_species_transpire_less() {
        let max_warm = GRASSES
            .iter()
            .filter(|g| g.season == Season::Warm)
            .map(|g| g.kc)
            .fold(f64::MIN, f64::max);
        let min_cool = GRASSES
            .iter()
            .filter(|g| g.season == Season::Cool)
            .map(|g| g.kc)
            .fold(f64::MAX, f64::min);
        assert!(max_warm < min_cool);
    }
}
