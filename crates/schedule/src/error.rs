//! Error types for the demeter-schedule crate.

/// Error type for all fallible operations in the demeter-schedule crate.
///
/// Every variant describes an invalid zone configuration. The scheduling
/// algorithm itself is total: once a zone validates, no weather sequence
/// can make planning fail.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ScheduleError {
    /// Returned when the root-zone depth is zero, negative, or non-finite.
    #[error("root depth must be positive, got {value} m")]
    NonPositiveRootDepth {
        /// The invalid root depth in metres.
        value: f64,
    },

    /// Returned when the allowable depletion fraction is outside (0, 1].
    #[error("allowable depletion fraction must be in (0, 1], got {value}")]
    DepletionFractionOutOfRange {
        /// The invalid depletion fraction.
        value: f64,
    },

    /// Returned when the irrigation efficiency is outside (0, 1].
    #[error("irrigation efficiency must be in (0, 1], got {value}")]
    EfficiencyOutOfRange {
        /// The invalid efficiency.
        value: f64,
    },

    /// Returned when the crop coefficient is outside (0, 1].
    #[error("crop coefficient must be in (0, 1], got {value}")]
    KcOutOfRange {
        /// The invalid crop coefficient.
        value: f64,
    },

    /// Returned when the soil water-holding capacity is not positive.
    #[error("soil AWHC must be positive, got {value} mm/m")]
    NonPositiveAwhc {
        /// The invalid AWHC in mm per metre of depth.
        value: f64,
    },

    /// Returned when the soil infiltration rate is negative or non-finite.
    #[error("soil infiltration rate must be >= 0, got {value} mm/hr")]
    NegativeInfiltration {
        /// The invalid infiltration rate in mm/hr.
        value: f64,
    },

    /// Returned when the emitter flow rate is not positive.
    #[error("flow rate must be positive, got {value} L/min")]
    NonPositiveFlowRate {
        /// The invalid flow rate in litres per minute.
        value: f64,
    },

    /// Returned when the irrigated area is not positive.
    #[error("irrigated area must be positive, got {value} m²")]
    NonPositiveArea {
        /// The invalid area in square metres.
        value: f64,
    },

    /// Returned when an explicit precipitation rate is not positive.
    #[error("precipitation rate must be positive, got {value} mm/hr")]
    NonPositiveRate {
        /// The invalid precipitation rate in mm/hr.
        value: f64,
    },
}
