//! Irrigation zone description consumed by the scheduling kernel.

use crate::error::ScheduleError;

/// How a zone's precipitation rate is obtained.
///
/// Sprinkler audits measure the rate directly; otherwise it follows from
/// emitter flow and irrigated area, since 1 L/m² is exactly 1 mm of depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RateSource {
    /// Audited application rate, in mm/hr.
    Explicit {
        /// Precipitation rate in mm/hr.
        rate_mm_per_hr: f64,
    },
    /// Derive the rate as `60 × flow / area`.
    FromFlow {
        /// Total emitter flow in litres per minute.
        flow_l_per_min: f64,
        /// Irrigated area in square metres.
        area_m2: f64,
    },
}

/// Grass reference: species name plus crop coefficient.
#[derive(Debug, Clone, PartialEq)]
pub struct GrassRef {
    /// Species name, carried through for reporting.
    pub name: String,
    /// Crop coefficient Kc relative to reference ET, in (0, 1].
    pub kc: f64,
}

impl GrassRef {
    /// Creates a grass reference.
    pub fn new(name: impl Into<String>, kc: f64) -> Self {
        Self {
            name: name.into(),
            kc,
        }
    }
}

/// Soil reference: the two physical properties the kernel needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoilRef {
    /// Available water-holding capacity, mm per metre of root depth.
    pub awhc_mm_per_m: f64,
    /// Infiltration rate in mm/hr; 0 means unbounded cycles.
    pub infiltration_mm_per_hr: f64,
}

impl SoilRef {
    /// Creates a soil reference.
    pub fn new(awhc_mm_per_m: f64, infiltration_mm_per_hr: f64) -> Self {
        Self {
            awhc_mm_per_m,
            infiltration_mm_per_hr,
        }
    }
}

/// Geographic location, carried through unchanged for downstream consumers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

/// A single irrigation zone.
///
/// Created once by the caller and passed to
/// [`plan_zone_schedule`](crate::plan_zone_schedule) unchanged; the kernel
/// never mutates it. [`Zone::new`] fills in typical managed-turf values so
/// tests and callers only override what differs.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    /// Zone identifier, echoed into every schedule entry.
    pub id: String,
    /// Human-readable label.
    pub name: String,
    /// Whether the zone participates in scheduling. Defaults to `true`.
    pub enabled: bool,
    /// Root-zone depth in metres.
    pub root_depth_m: f64,
    /// Fraction of plant-available water that may deplete before watering,
    /// in (0, 1].
    pub allowable_depletion: f64,
    /// Fraction of gross applied water that becomes net stored water,
    /// in (0, 1].
    pub efficiency: f64,
    /// Precipitation-rate source.
    pub rate: RateSource,
    /// Soil-moisture depletion at the start of the horizon, in mm.
    /// Clamped into `[0, TAW]` on entry; `None` means a full profile.
    pub initial_depletion_mm: Option<f64>,
    /// Grass reference.
    pub grass: GrassRef,
    /// Soil reference.
    pub soil: SoilRef,
    /// Optional geographic location; not used by the kernel.
    pub location: Option<Location>,
}

impl Zone {
    /// Creates a zone with typical managed-turf defaults: enabled, 0.3 m
    /// root zone, 50% allowable depletion, 80% efficiency, a 15 L/min head
    /// over 100 m², tall fescue on a sandy loam.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            enabled: true,
            root_depth_m: 0.3,
            allowable_depletion: 0.5,
            efficiency: 0.8,
            rate: RateSource::FromFlow {
                flow_l_per_min: 15.0,
                area_m2: 100.0,
            },
            initial_depletion_mm: None,
            grass: GrassRef::new("tall fescue", 0.85),
            soil: SoilRef::new(150.0, 25.0),
            location: None,
        }
    }

    /// Sets the enabled flag.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets the root-zone depth in metres.
    pub fn with_root_depth_m(mut self, root_depth_m: f64) -> Self {
        self.root_depth_m = root_depth_m;
        self
    }

    /// Sets the allowable depletion fraction.
    pub fn with_allowable_depletion(mut self, fraction: f64) -> Self {
        self.allowable_depletion = fraction;
        self
    }

    /// Sets the irrigation efficiency.
    pub fn with_efficiency(mut self, efficiency: f64) -> Self {
        self.efficiency = efficiency;
        self
    }

    /// Sets the precipitation-rate source.
    pub fn with_rate(mut self, rate: RateSource) -> Self {
        self.rate = rate;
        self
    }

    /// Sets the initial depletion in mm.
    pub fn with_initial_depletion_mm(mut self, depletion_mm: f64) -> Self {
        self.initial_depletion_mm = Some(depletion_mm);
        self
    }

    /// Sets the grass reference.
    pub fn with_grass(mut self, grass: GrassRef) -> Self {
        self.grass = grass;
        self
    }

    /// Sets the soil reference.
    pub fn with_soil(mut self, soil: SoilRef) -> Self {
        self.soil = soil;
        self
    }

    /// Sets the geographic location.
    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.location = Some(Location {
            latitude,
            longitude,
        });
        self
    }

    /// Validates the zone's physical configuration.
    ///
    /// # Errors
    ///
    /// Returns the first [`ScheduleError`] variant whose precondition fails.
    /// A zone that validates can never make the scheduler emit a non-finite
    /// value.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if !self.root_depth_m.is_finite() || self.root_depth_m <= 0.0 {
            return Err(ScheduleError::NonPositiveRootDepth {
                value: self.root_depth_m,
            });
        }
        if !self.allowable_depletion.is_finite()
            || self.allowable_depletion <= 0.0
            || self.allowable_depletion > 1.0
        {
            return Err(ScheduleError::DepletionFractionOutOfRange {
                value: self.allowable_depletion,
            });
        }
        if !self.efficiency.is_finite() || self.efficiency <= 0.0 || self.efficiency > 1.0 {
            return Err(ScheduleError::EfficiencyOutOfRange {
                value: self.efficiency,
            });
        }
        if !self.grass.kc.is_finite() || self.grass.kc <= 0.0 || self.grass.kc > 1.0 {
            return Err(ScheduleError::KcOutOfRange {
                value: self.grass.kc,
            });
        }
        if !self.soil.awhc_mm_per_m.is_finite() || self.soil.awhc_mm_per_m <= 0.0 {
            return Err(ScheduleError::NonPositiveAwhc {
                value: self.soil.awhc_mm_per_m,
            });
        }
        if !self.soil.infiltration_mm_per_hr.is_finite() || self.soil.infiltration_mm_per_hr < 0.0
        {
            return Err(ScheduleError::NegativeInfiltration {
                value: self.soil.infiltration_mm_per_hr,
            });
        }
        match self.rate {
            RateSource::Explicit { rate_mm_per_hr } => {
                if !rate_mm_per_hr.is_finite() || rate_mm_per_hr <= 0.0 {
                    return Err(ScheduleError::NonPositiveRate {
                        value: rate_mm_per_hr,
                    });
                }
            }
            RateSource::FromFlow {
                flow_l_per_min,
                area_m2,
            } => {
                if !flow_l_per_min.is_finite() || flow_l_per_min <= 0.0 {
                    return Err(ScheduleError::NonPositiveFlowRate {
                        value: flow_l_per_min,
                    });
                }
                if !area_m2.is_finite() || area_m2 <= 0.0 {
                    return Err(ScheduleError::NonPositiveArea { value: area_m2 });
                }
            }
        }
        Ok(())
    }
}
