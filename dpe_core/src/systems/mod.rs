//! # Heating and Hot-Water Systems
//!
//! Generator catalogues with their conventional seasonal efficiencies, the
//! fuels they burn, and the per-fuel conversion constants that turn final
//! energy into primary energy, greenhouse-gas mass and annual cost.
//!
//! - [`fuel`] - fuel identities and conversion-factor tables
//! - [`heating`] - heating generators, regulation levels, emitters
//! - [`dhw`] - domestic-hot-water generators
//!
//! Declared-unknown systems resolve on named default generators so the
//! conservative assumption stays traceable in reports and tests.

pub mod dhw;
pub mod fuel;
pub mod heating;

use serde::{Deserialize, Serialize};

pub use dhw::{DhwGenerator, DhwSystem, TankInsulation, UNKNOWN_DHW_DEFAULT};
pub use fuel::{ConversionFactors, Fuel, FuelFactors};
pub use heating::{
    EmitterType, HeatGenerator, HeatingRegulation, HeatingSystem, NetworkInsulation,
    UNKNOWN_HEATING_DEFAULT,
};

/// Whether a system serves one dwelling or the whole building
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallationMode {
    Individual,
    Collective,
}
