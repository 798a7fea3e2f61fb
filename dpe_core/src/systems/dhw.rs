//! # Domestic Hot Water
//!
//! DHW generator catalogue. A production coupled to the heating boiler
//! borrows its efficiency and fuel; an unknown declaration resolves on
//! [`UNKNOWN_DHW_DEFAULT`] - the standard electric tank, the most common
//! equipment of the existing stock.

use serde::{Deserialize, Serialize};

use super::fuel::Fuel;
use super::heating::HeatGenerator;
use super::InstallationMode;

/// Named default for dwellings whose DHW system is unknown
pub const UNKNOWN_DHW_DEFAULT: DhwGenerator = DhwGenerator::ElectricTank;

/// DHW generator identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DhwGenerator {
    /// Resistance-heated storage tank
    ElectricTank,
    /// Heat-pump water heater
    Thermodynamic,
    /// Instantaneous gas water heater
    GasInstantaneous,
    /// Production coupled to the heating generator
    CoupledToHeating,
    /// Solar collectors with electric backup
    SolarWithBackup,
}

impl DhwGenerator {
    /// All DHW generator variants for UI selection
    pub const ALL: [DhwGenerator; 5] = [
        DhwGenerator::ElectricTank,
        DhwGenerator::Thermodynamic,
        DhwGenerator::GasInstantaneous,
        DhwGenerator::CoupledToHeating,
        DhwGenerator::SolarWithBackup,
    ];

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            DhwGenerator::ElectricTank => "Electric tank",
            DhwGenerator::Thermodynamic => "Heat-pump water heater",
            DhwGenerator::GasInstantaneous => "Instantaneous gas heater",
            DhwGenerator::CoupledToHeating => "Coupled to the boiler",
            DhwGenerator::SolarWithBackup => "Solar with backup",
        }
    }
}

/// Storage and piping insulation quality. Collected for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TankInsulation {
    Good,
    Partial,
    Uninsulated,
    Unknown,
}

/// Declared DHW system of the dwelling.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DhwSystem {
    /// Generator identity, when known
    #[serde(default)]
    pub generator: Option<DhwGenerator>,

    /// The occupant could not identify the system at all
    #[serde(default)]
    pub declared_unknown: bool,

    /// Storage insulation quality
    #[serde(default)]
    pub tank_insulation: Option<TankInsulation>,

    /// Individual or collective production
    #[serde(default)]
    pub installation: Option<InstallationMode>,
}

impl DhwSystem {
    /// Efficiency and fuel the assessment runs on.
    ///
    /// Coupled production borrows the already-resolved heating generator;
    /// unknown or undeclared systems resolve on the electric-tank default.
    pub fn resolve(&self, heating: HeatGenerator) -> (f64, Fuel) {
        let generator = if self.declared_unknown {
            tracing::debug!("hot water declared unknown, assuming electric tank");
            UNKNOWN_DHW_DEFAULT
        } else {
            match self.generator {
                Some(generator) => generator,
                None => {
                    tracing::debug!("hot water undeclared, assuming electric tank");
                    UNKNOWN_DHW_DEFAULT
                }
            }
        };
        match generator {
            DhwGenerator::ElectricTank => (0.85, Fuel::Electricity),
            DhwGenerator::Thermodynamic => (2.80, Fuel::Electricity),
            DhwGenerator::GasInstantaneous => (0.85, Fuel::Gas),
            DhwGenerator::CoupledToHeating => (heating.efficiency(), heating.fuel()),
            DhwGenerator::SolarWithBackup => (3.00, Fuel::Electricity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standalone_generators() {
        let system = DhwSystem {
            generator: Some(DhwGenerator::GasInstantaneous),
            ..Default::default()
        };
        assert_eq!(
            system.resolve(HeatGenerator::OilStandard),
            (0.85, Fuel::Gas)
        );
    }

    #[test]
    fn test_coupled_borrows_heating() {
        let system = DhwSystem {
            generator: Some(DhwGenerator::CoupledToHeating),
            ..Default::default()
        };
        assert_eq!(
            system.resolve(HeatGenerator::GasCondensing),
            (0.97, Fuel::Gas)
        );
        assert_eq!(
            system.resolve(HeatGenerator::PelletBoiler),
            (0.88, Fuel::Wood)
        );
    }

    #[test]
    fn test_unknown_resolves_on_named_default() {
        let unknown = DhwSystem {
            generator: Some(DhwGenerator::Thermodynamic),
            declared_unknown: true,
            ..Default::default()
        };
        assert_eq!(
            unknown.resolve(HeatGenerator::OilStandard),
            (0.85, Fuel::Electricity)
        );
        assert_eq!(
            DhwSystem::default().resolve(HeatGenerator::OilStandard),
            (0.85, Fuel::Electricity)
        );
    }
}
