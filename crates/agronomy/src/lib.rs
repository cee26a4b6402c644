//! # demeter-agronomy
//!
//! Static lookup tables for the physical properties the scheduler needs:
//! crop coefficients and typical root depths per turfgrass species, and
//! water-holding capacity and infiltration rate per soil texture class.
//!
//! Lookup failure is this crate's concern; the scheduling kernel only ever
//! sees resolved numbers.

mod error;
mod grass;
mod soil;

pub use error::AgronomyError;
pub use grass::{GRASSES, GrassSpecies, Season, grass_by_name};
pub use soil::{SOILS, SoilTexture, soil_by_name};
