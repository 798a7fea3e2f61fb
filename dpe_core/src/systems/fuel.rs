//! # Fuels and Conversion Factors
//!
//! Per-fuel constants of the 2021 method: the primary-energy factor, the
//! greenhouse-gas content and the reference unit price. The factor set is
//! a frozen value object - the engine closes over an injected instance so
//! callers can pin a price revision without touching process-wide state.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Final-energy carrier of a generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fuel {
    /// Natural gas and LPG
    Gas,
    /// Domestic heating oil
    Oil,
    /// Logs, pellets and chips
    Wood,
    /// Grid electricity
    Electricity,
    /// Urban district-heat network
    DistrictHeat,
    /// No carrier (unserved need)
    None,
}

impl Fuel {
    /// All fuel variants
    pub const ALL: [Fuel; 6] = [
        Fuel::Gas,
        Fuel::Oil,
        Fuel::Wood,
        Fuel::Electricity,
        Fuel::DistrictHeat,
        Fuel::None,
    ];

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Fuel::Gas => "Natural gas",
            Fuel::Oil => "Heating oil",
            Fuel::Wood => "Wood",
            Fuel::Electricity => "Electricity",
            Fuel::DistrictHeat => "District heat",
            Fuel::None => "None",
        }
    }
}

/// Conversion constants for one fuel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelFactors {
    /// Final-to-primary energy factor (kWhep per kWh final)
    pub primary: f64,
    /// Greenhouse-gas content (kgCO2eq per kWh final)
    pub co2_kg_per_kwh: f64,
    /// Reference unit price (€ per kWh final)
    pub price_eur_per_kwh: f64,
}

/// Frozen per-fuel conversion set.
///
/// `Default` carries the 2021 reference values; assessments that must pin
/// another price or factor revision build their own instance and pass it
/// to `assess_with_factors`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionFactors {
    pub gas: FuelFactors,
    pub oil: FuelFactors,
    pub wood: FuelFactors,
    pub electricity: FuelFactors,
    pub district_heat: FuelFactors,
    pub none: FuelFactors,
}

impl ConversionFactors {
    /// Constants for a given fuel
    pub fn for_fuel(&self, fuel: Fuel) -> &FuelFactors {
        match fuel {
            Fuel::Gas => &self.gas,
            Fuel::Oil => &self.oil,
            Fuel::Wood => &self.wood,
            Fuel::Electricity => &self.electricity,
            Fuel::DistrictHeat => &self.district_heat,
            Fuel::None => &self.none,
        }
    }
}

impl Default for ConversionFactors {
    fn default() -> Self {
        ConversionFactors {
            gas: FuelFactors {
                primary: 1.0,
                co2_kg_per_kwh: 0.227,
                price_eur_per_kwh: 0.112,
            },
            oil: FuelFactors {
                primary: 1.0,
                co2_kg_per_kwh: 0.324,
                price_eur_per_kwh: 0.110,
            },
            wood: FuelFactors {
                primary: 1.0,
                co2_kg_per_kwh: 0.030,
                price_eur_per_kwh: 0.060,
            },
            electricity: FuelFactors {
                primary: 2.3,
                co2_kg_per_kwh: 0.064,
                price_eur_per_kwh: 0.206,
            },
            district_heat: FuelFactors {
                primary: 0.6,
                co2_kg_per_kwh: 0.040,
                price_eur_per_kwh: 0.080,
            },
            none: FuelFactors {
                primary: 1.0,
                co2_kg_per_kwh: 0.1,
                price_eur_per_kwh: 0.15,
            },
        }
    }
}

/// Process-wide default factor set, built once
pub static DEFAULT_FACTORS: Lazy<ConversionFactors> = Lazy::new(ConversionFactors::default);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_values() {
        let factors = ConversionFactors::default();
        assert_eq!(factors.for_fuel(Fuel::Electricity).primary, 2.3);
        assert_eq!(factors.for_fuel(Fuel::Oil).co2_kg_per_kwh, 0.324);
        assert_eq!(factors.for_fuel(Fuel::DistrictHeat).primary, 0.6);
    }

    #[test]
    fn test_every_fuel_has_factors() {
        let factors = ConversionFactors::default();
        for fuel in Fuel::ALL {
            let f = factors.for_fuel(fuel);
            assert!(f.primary > 0.0);
            assert!(f.co2_kg_per_kwh > 0.0);
            assert!(f.price_eur_per_kwh > 0.0);
        }
    }

    #[test]
    fn test_factors_roundtrip_json() {
        let factors = ConversionFactors::default();
        let json = serde_json::to_string(&factors).unwrap();
        let back: ConversionFactors = serde_json::from_str(&json).unwrap();
        assert_eq!(factors, back);
    }
}
