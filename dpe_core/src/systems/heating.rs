//! # Heating Generators
//!
//! The generator catalogue with conventional seasonal efficiencies per
//! §12–§13 of the method. Each efficiency folds the generation,
//! emission, distribution and regulation factors of a typical individual
//! installation into a single value; heat pumps carry an estimated SCOP
//! instead, which is why their "efficiency" exceeds one.
//!
//! A dwelling declared with an unknown heating system resolves on
//! [`UNKNOWN_HEATING_DEFAULT`] - a standard oil boiler, the conservative
//! assumption for the pre-renovation housing stock this tool targets.

use serde::{Deserialize, Serialize};

use super::fuel::Fuel;
use super::InstallationMode;

/// Named default for dwellings whose heating system is unknown
pub const UNKNOWN_HEATING_DEFAULT: HeatGenerator = HeatGenerator::OilStandard;

/// Heat generator identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatGenerator {
    // gas
    /// Pre-1991 atmospheric gas boiler with pilot flame
    GasClassic,
    /// Standard gas boiler, post-1991
    GasStandard,
    /// Low-temperature gas boiler
    GasLowTemp,
    /// Condensing gas boiler
    GasCondensing,
    // oil
    /// Pre-1991 oil boiler
    OilClassic,
    /// Standard oil boiler with forced-air burner
    OilStandard,
    /// Low-temperature oil boiler
    OilLowTemp,
    /// Condensing oil boiler
    OilCondensing,
    // LPG
    /// Standard LPG/propane boiler
    LpgStandard,
    /// Condensing LPG boiler
    LpgCondensing,
    // direct electric
    /// Certified electric convector
    ElectricConvector,
    /// Certified radiant panel
    ElectricRadiant,
    /// High-inertia electric radiator
    ElectricInertia,
    /// Electric towel rail
    ElectricTowelRail,
    /// Other direct-resistance emitters
    ElectricOther,
    /// Electric underfloor heating
    ElectricUnderfloor,
    // heat pumps
    /// Air/water heat pump sized for zone family H1
    HeatPumpAirWaterH1,
    /// Air/water heat pump sized for zone family H2
    HeatPumpAirWaterH2,
    /// Air/water heat pump sized for zone family H3
    HeatPumpAirWaterH3,
    /// Air/air split or multi-split
    HeatPumpAirAir,
    /// Ground- or water-source heat pump
    HeatPumpGround,
    // wood
    /// Log stove or insert
    WoodLogStove,
    /// Pellet stove
    PelletStove,
    /// Log or chip boiler
    WoodLogBoiler,
    /// Pellet boiler
    PelletBoiler,
    // network
    /// Urban district-heat substation
    DistrictNetwork,
}

impl HeatGenerator {
    /// All heating generator variants for UI selection
    pub const ALL: [HeatGenerator; 26] = [
        HeatGenerator::GasClassic,
        HeatGenerator::GasStandard,
        HeatGenerator::GasLowTemp,
        HeatGenerator::GasCondensing,
        HeatGenerator::OilClassic,
        HeatGenerator::OilStandard,
        HeatGenerator::OilLowTemp,
        HeatGenerator::OilCondensing,
        HeatGenerator::LpgStandard,
        HeatGenerator::LpgCondensing,
        HeatGenerator::ElectricConvector,
        HeatGenerator::ElectricRadiant,
        HeatGenerator::ElectricInertia,
        HeatGenerator::ElectricTowelRail,
        HeatGenerator::ElectricOther,
        HeatGenerator::ElectricUnderfloor,
        HeatGenerator::HeatPumpAirWaterH1,
        HeatGenerator::HeatPumpAirWaterH2,
        HeatGenerator::HeatPumpAirWaterH3,
        HeatGenerator::HeatPumpAirAir,
        HeatGenerator::HeatPumpGround,
        HeatGenerator::WoodLogStove,
        HeatGenerator::PelletStove,
        HeatGenerator::WoodLogBoiler,
        HeatGenerator::PelletBoiler,
        HeatGenerator::DistrictNetwork,
    ];

    /// Conventional seasonal efficiency (SCOP for heat pumps)
    pub fn efficiency(&self) -> f64 {
        match self {
            HeatGenerator::GasClassic => 0.74,
            HeatGenerator::GasStandard => 0.80,
            HeatGenerator::GasLowTemp => 0.88,
            HeatGenerator::GasCondensing => 0.97,
            HeatGenerator::OilClassic => 0.72,
            HeatGenerator::OilStandard => 0.78,
            HeatGenerator::OilLowTemp => 0.87,
            HeatGenerator::OilCondensing => 0.94,
            HeatGenerator::LpgStandard => 0.79,
            HeatGenerator::LpgCondensing => 0.96,
            HeatGenerator::ElectricConvector => 0.940,
            HeatGenerator::ElectricRadiant => 0.960,
            HeatGenerator::ElectricInertia => 0.899,
            HeatGenerator::ElectricTowelRail => 0.912,
            HeatGenerator::ElectricOther => 0.912,
            HeatGenerator::ElectricUnderfloor => 0.969,
            HeatGenerator::HeatPumpAirWaterH1 => 2.20,
            HeatGenerator::HeatPumpAirWaterH2 => 2.60,
            HeatGenerator::HeatPumpAirWaterH3 => 3.00,
            HeatGenerator::HeatPumpAirAir => 2.50,
            HeatGenerator::HeatPumpGround => 3.50,
            HeatGenerator::WoodLogStove => 0.65,
            HeatGenerator::PelletStove => 0.85,
            HeatGenerator::WoodLogBoiler => 0.75,
            HeatGenerator::PelletBoiler => 0.88,
            HeatGenerator::DistrictNetwork => 0.97,
        }
    }

    /// Fuel the generator draws
    pub fn fuel(&self) -> Fuel {
        match self {
            HeatGenerator::GasClassic
            | HeatGenerator::GasStandard
            | HeatGenerator::GasLowTemp
            | HeatGenerator::GasCondensing
            | HeatGenerator::LpgStandard
            | HeatGenerator::LpgCondensing => Fuel::Gas,
            HeatGenerator::OilClassic
            | HeatGenerator::OilStandard
            | HeatGenerator::OilLowTemp
            | HeatGenerator::OilCondensing => Fuel::Oil,
            HeatGenerator::ElectricConvector
            | HeatGenerator::ElectricRadiant
            | HeatGenerator::ElectricInertia
            | HeatGenerator::ElectricTowelRail
            | HeatGenerator::ElectricOther
            | HeatGenerator::ElectricUnderfloor
            | HeatGenerator::HeatPumpAirWaterH1
            | HeatGenerator::HeatPumpAirWaterH2
            | HeatGenerator::HeatPumpAirWaterH3
            | HeatGenerator::HeatPumpAirAir
            | HeatGenerator::HeatPumpGround => Fuel::Electricity,
            HeatGenerator::WoodLogStove
            | HeatGenerator::PelletStove
            | HeatGenerator::WoodLogBoiler
            | HeatGenerator::PelletBoiler => Fuel::Wood,
            HeatGenerator::DistrictNetwork => Fuel::DistrictHeat,
        }
    }
}

/// Regulation quality driving the intermittency factor I0 (§8).
///
/// The six levels of the method for a divided-emitter individual
/// dwelling of light-to-medium inertia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatingRegulation {
    /// No setback equipment at all
    Absent,
    /// Central on/off time clock, no temperature minimum
    TimeClock,
    /// Central regulation without a guaranteed minimum temperature
    CentralNoMinimum,
    /// Central regulation with setback and frost-protection minimum
    CentralWithMinimum,
    /// Room-by-room regulation (thermostatic valves, day/night zones)
    RoomByRoom,
    /// Room-by-room regulation with presence detection
    RoomPresenceDetection,
}

impl HeatingRegulation {
    /// All regulation variants for UI selection
    pub const ALL: [HeatingRegulation; 6] = [
        HeatingRegulation::Absent,
        HeatingRegulation::TimeClock,
        HeatingRegulation::CentralNoMinimum,
        HeatingRegulation::CentralWithMinimum,
        HeatingRegulation::RoomByRoom,
        HeatingRegulation::RoomPresenceDetection,
    ];

    /// Intermittency factor I0
    pub fn intermittency_factor(&self) -> f64 {
        match self {
            HeatingRegulation::Absent => 0.84,
            HeatingRegulation::TimeClock => 0.83,
            HeatingRegulation::CentralNoMinimum => 0.83,
            HeatingRegulation::CentralWithMinimum => 0.81,
            HeatingRegulation::RoomByRoom => 0.77,
            HeatingRegulation::RoomPresenceDetection => 0.75,
        }
    }
}

/// Emitter and distribution family of an individual installation.
/// Collected for the report; the catalogue efficiencies already embed the
/// matching emission and regulation factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmitterType {
    HotWaterRadiatorThermostatic,
    HotWaterRadiator,
    CastIronRadiator,
    HotWaterUnderfloor,
    DuctedAir,
    ElectricConvector,
    ElectricRadiant,
    ElectricInertia,
    ElectricUnderfloor,
}

/// Insulation quality of a collective distribution network.
/// Collected for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkInsulation {
    WellInsulated,
    Partial,
    Uninsulated,
}

/// Declared heating system of the dwelling.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeatingSystem {
    /// Generator identity, when known
    #[serde(default)]
    pub generator: Option<HeatGenerator>,

    /// The occupant could not identify the system at all
    #[serde(default)]
    pub declared_unknown: bool,

    /// Regulation quality
    #[serde(default)]
    pub regulation: Option<HeatingRegulation>,

    /// Individual or collective installation
    #[serde(default)]
    pub installation: Option<InstallationMode>,

    /// Emitter family, individual installations
    #[serde(default)]
    pub emitter: Option<EmitterType>,

    /// Network insulation, collective installations
    #[serde(default)]
    pub network_insulation: Option<NetworkInsulation>,
}

impl HeatingSystem {
    /// Generator the assessment runs on, falling back to the conservative
    /// default when the system is unknown or undeclared.
    pub fn resolved_generator(&self) -> HeatGenerator {
        if self.declared_unknown {
            tracing::debug!("heating declared unknown, assuming standard oil boiler");
            return UNKNOWN_HEATING_DEFAULT;
        }
        match self.generator {
            Some(generator) => generator,
            None => {
                tracing::debug!("heating undeclared, assuming standard oil boiler");
                UNKNOWN_HEATING_DEFAULT
            }
        }
    }

    /// Intermittency factor I0, defaulting to the no-regulation value
    pub fn intermittency_factor(&self) -> f64 {
        match self.regulation {
            Some(regulation) => regulation.intermittency_factor(),
            None => HeatingRegulation::Absent.intermittency_factor(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_spot_values() {
        assert_eq!(HeatGenerator::OilStandard.efficiency(), 0.78);
        assert_eq!(HeatGenerator::GasCondensing.efficiency(), 0.97);
        assert_eq!(HeatGenerator::HeatPumpGround.efficiency(), 3.50);
        assert_eq!(HeatGenerator::WoodLogStove.fuel(), Fuel::Wood);
        assert_eq!(HeatGenerator::DistrictNetwork.fuel(), Fuel::DistrictHeat);
    }

    #[test]
    fn test_unknown_system_resolves_on_named_default() {
        let system = HeatingSystem {
            generator: Some(HeatGenerator::GasCondensing),
            declared_unknown: true,
            ..Default::default()
        };
        // the unknown flag wins over any stale declaration
        assert_eq!(system.resolved_generator(), UNKNOWN_HEATING_DEFAULT);
        assert_eq!(HeatingSystem::default().resolved_generator(), UNKNOWN_HEATING_DEFAULT);
    }

    #[test]
    fn test_intermittency_levels() {
        assert_eq!(HeatingRegulation::Absent.intermittency_factor(), 0.84);
        assert_eq!(
            HeatingRegulation::RoomPresenceDetection.intermittency_factor(),
            0.75
        );
        // an unresolved regulation is treated as absent
        assert_eq!(HeatingSystem::default().intermittency_factor(), 0.84);
    }

    #[test]
    fn test_regulation_monotone() {
        let mut last = 1.0;
        for level in HeatingRegulation::ALL {
            let i0 = level.intermittency_factor();
            assert!(i0 <= last, "{level:?} should not exceed previous level");
            last = i0;
        }
    }
}
