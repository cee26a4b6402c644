//! Hydraulic derivations from a zone's physical configuration.
//!
//! Everything here is a pure, total function of a validated zone: the rate
//! at which the hardware applies water, the longest single run the soil can
//! absorb without ponding, and the idle soak interval between runs.

use crate::zone::{RateSource, Zone};

/// Derived hydraulic properties of a zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HydraulicModel {
    precipitation_rate_mm_per_hr: f64,
    max_cycle_min: Option<f64>,
    soak_min: f64,
}

impl HydraulicModel {
    /// Derives the hydraulic model for a zone.
    ///
    /// The precipitation rate comes from the zone's [`RateSource`]; the
    /// maximum cycle is the run length that applies exactly one
    /// infiltration-depth's worth of water, or `None` (unbounded) when the
    /// soil reports an infiltration rate of zero.
    pub fn for_zone(zone: &Zone) -> Self {
        let rate = precipitation_rate(&zone.rate);
        let infiltration = zone.soil.infiltration_mm_per_hr;
        let max_cycle_min = if infiltration > 0.0 {
            Some(infiltration / rate * 60.0)
        } else {
            None
        };
        Self {
            precipitation_rate_mm_per_hr: rate,
            max_cycle_min,
            soak_min: soak_minutes(infiltration),
        }
    }

    /// Returns the application rate in mm/hr.
    pub fn precipitation_rate_mm_per_hr(&self) -> f64 {
        self.precipitation_rate_mm_per_hr
    }

    /// Returns the longest permissible single run in minutes, or `None`
    /// when cycles are unbounded.
    pub fn max_cycle_min(&self) -> Option<f64> {
        self.max_cycle_min
    }

    /// Returns the soak interval between cycles in minutes.
    pub fn soak_min(&self) -> f64 {
        self.soak_min
    }
}

/// Resolves a zone's precipitation rate in mm/hr.
///
/// An audited rate is used as-is; otherwise `60 × flow / area`, which holds
/// because 1 L/m² is exactly 1 mm of applied depth.
pub fn precipitation_rate(source: &RateSource) -> f64 {
    match *source {
        RateSource::Explicit { rate_mm_per_hr } => rate_mm_per_hr,
        RateSource::FromFlow {
            flow_l_per_min,
            area_m2,
        } => 60.0 * flow_l_per_min / area_m2,
    }
}

/// Returns the soak interval in minutes for a soil infiltration rate.
///
/// Piecewise constant: tight soils need longer to absorb a cycle's worth of
/// water before the next run starts.
///
/// | infiltration (mm/hr) | soak (min) |
/// |---|---|
/// | ≥ 20 | 15 |
/// | 12–20 | 25 |
/// | 8–12 | 35 |
/// | 5–8 | 45 |
/// | < 5 | 60 |
pub fn soak_minutes(infiltration_mm_per_hr: f64) -> f64 {
    match infiltration_mm_per_hr {
        i if i >= 20.0 => 15.0,
        i if i >= 12.0 => 25.0,
        i if i >= 8.0 => 35.0,
        i if i >= 5.0 => 45.0,
        _ => 60.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zone::SoilRef;
    use approx::assert_relative_eq;

    #[test]
    fn rate_from_flow_and_area() {
        // 15 L/min over 100 m² -> 9 mm/hr.
        let rate = precipitation_rate(&RateSource::FromFlow {
            flow_l_per_min: 15.0,
            area_m2: 100.0,
        });
        assert_relative_eq!(rate, 9.0);
    }

    #[test]
    fn explicit_rate_overrides_derivation() {
        let rate = precipitation_rate(&RateSource::Explicit {
            rate_mm_per_hr: 32.5,
        });
        assert_relative_eq!(rate, 32.5);
    }

    #[test]
    fn max_cycle_bounded_by_infiltration() {
        // Clay at 4 mm/hr under a 40 mm/hr head: (4 / 40) * 60 = 6 min.
        let zone = Zone::new("z1", "z")
            .with_soil(SoilRef::new(160.0, 4.0))
            .with_rate(RateSource::FromFlow {
                flow_l_per_min: 20.0,
                area_m2: 30.0,
            });
        let model = HydraulicModel::for_zone(&zone);
        assert_relative_eq!(model.max_cycle_min().unwrap(), 6.0);
    }

    #[test]
    fn zero_infiltration_is_unbounded() {
        let zone = Zone::new("z1", "z").with_soil(SoilRef::new(150.0, 0.0));
        let model = HydraulicModel::for_zone(&zone);
        assert_eq!(model.max_cycle_min(), None);
    }

    #[test]
    fn soak_table_breakpoints() {
        assert_eq!(soak_minutes(50.0), 15.0);
        assert_eq!(soak_minutes(20.0), 15.0);
        assert_eq!(soak_minutes(19.99), 25.0);
        assert_eq!(soak_minutes(12.0), 25.0);
        assert_eq!(soak_minutes(11.99), 35.0);
        assert_eq!(soak_minutes(8.0), 35.0);
        assert_eq!(soak_minutes(7.99), 45.0);
        assert_eq!(soak_minutes(5.0), 45.0);
        assert_eq!(soak_minutes(4.99), 60.0);
        assert_eq!(soak_minutes(0.0), 60.0);
    }

    #[test]
    fn default_zone_model() {
        // Defaults: 9 mm/hr rate, 25 mm/hr infiltration.
        let model = HydraulicModel::for_zone(&Zone::new("z1", "z"));
        assert_relative_eq!(model.precipitation_rate_mm_per_hr(), 9.0);
        assert_relative_eq!(model.max_cycle_min().unwrap(), 25.0 / 9.0 * 60.0);
        assert_eq!(model.soak_min(), 15.0);
    }
}
