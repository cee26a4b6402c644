//! Error types for the demeter-agronomy crate.

/// Error type for catalogue lookups.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AgronomyError {
    /// Returned when no grass species matches the requested name.
    #[error("unknown grass species: {name:?}")]
    UnknownGrass {
        /// The name that failed to resolve.
        name: String,
    },

    /// Returned when no soil texture matches the requested name.
    #[error("unknown soil texture: {name:?}")]
    UnknownSoil {
        /// The name that failed to resolve.
        name: String,
    },
}
