//! # Final-Energy Conversion
//!
//! Turns the annual needs into final energy per service, then into the
//! primary-energy indicator, the greenhouse-gas indicator and the annual
//! cost band. Generator efficiencies divide the need; per-fuel constants
//! come from the injected factor set.

use crate::systems::{ConversionFactors, DhwSystem, Fuel, HeatGenerator};

/// Flat auxiliary allowance (fans, pumps, controls), kWh per m² per year,
/// always electric
const AUX_KWH_PER_M2: f64 = 2.5;

/// Half-width of the cost uncertainty band
const COST_BAND: f64 = 0.15;

/// Converted energy figures of one assessment
#[derive(Debug, Clone)]
pub(crate) struct EnergyTotals {
    pub final_heating_kwh: f64,
    pub final_dhw_kwh: f64,
    pub final_aux_kwh: f64,
    /// Primary-energy indicator, kWhep/m²/yr, rounded to the unit
    pub primary_kwh_per_m2: f64,
    /// Greenhouse-gas indicator, kgCO2eq/m²/yr, rounded to 0.1
    pub ghg_kg_per_m2: f64,
    /// Lower bound of the annual cost band, €
    pub cost_low_eur: f64,
    /// Upper bound of the annual cost band, €
    pub cost_high_eur: f64,
}

/// Convert the annual needs for a resolved heating generator and DHW
/// declaration.
pub(crate) fn convert(
    heating_need_kwh: f64,
    dhw_need_kwh: f64,
    reference_area_m2: f64,
    heating: HeatGenerator,
    dhw: &DhwSystem,
    factors: &ConversionFactors,
) -> EnergyTotals {
    let (dhw_efficiency, dhw_fuel) = dhw.resolve(heating);

    let final_heating_kwh = heating_need_kwh / heating.efficiency();
    let final_dhw_kwh = dhw_need_kwh / dhw_efficiency;
    let final_aux_kwh = reference_area_m2 * AUX_KWH_PER_M2;

    let services = [
        (final_heating_kwh, heating.fuel()),
        (final_dhw_kwh, dhw_fuel),
        (final_aux_kwh, Fuel::Electricity),
    ];

    let mut primary = 0.0;
    let mut ghg = 0.0;
    let mut cost = 0.0;
    for (energy_kwh, fuel) in services {
        let f = factors.for_fuel(fuel);
        primary += energy_kwh * f.primary;
        ghg += energy_kwh * f.co2_kg_per_kwh;
        cost += energy_kwh * f.price_eur_per_kwh;
    }

    EnergyTotals {
        final_heating_kwh,
        final_dhw_kwh,
        final_aux_kwh,
        primary_kwh_per_m2: (primary / reference_area_m2).round(),
        ghg_kg_per_m2: (ghg / reference_area_m2 * 10.0).round() / 10.0,
        cost_low_eur: (cost * (1.0 - COST_BAND)).round(),
        cost_high_eur: (cost * (1.0 + COST_BAND)).round(),
    }
}
