//! # Annual Demand
//!
//! Degree-day heating need and occupancy-driven hot-water need. Both are
//! closed-form annual figures: free heat from the sun and from occupancy
//! is credited against the heating need with a fixed utilization factor
//! instead of an hourly balance.

/// Seasonal solar flux through vertical glazing, W/m²
const SOLAR_FLUX: f64 = 50.0;

/// Mean solar transmission of the glazing stock
const SOLAR_TRANSMISSION: f64 = 0.55;

/// Orientation and shading allowance on solar gains
const SOLAR_ORIENTATION: f64 = 0.7;

/// Conventional internal gains, W per m² of habitable surface
const INTERNAL_GAIN_W_PER_M2: f64 = 8.0;

/// Utilization factor credited to free gains over the heating season
const GAIN_UTILIZATION: f64 = 0.75;

/// Habitable surface assumed per occupant, m²
const AREA_PER_OCCUPANT_M2: f64 = 25.0;

/// Daily hot-water draw per occupant, m³
const DAILY_DRAW_M3: f64 = 0.056;

/// Specific heat of water, kJ/(kg·K) - with the 40 K rise and the kJ→kWh
/// conversion this prices one cubic meter of draw
const WATER_SPECIFIC_HEAT: f64 = 4.186;

/// Temperature rise from cold inlet to tap, K
const DHW_TEMPERATURE_RISE: f64 = 40.0;

/// Mean solar gains over the heating season, W
pub(crate) fn solar_gains_w(glazed_area_m2: f64) -> f64 {
    glazed_area_m2 * SOLAR_FLUX * SOLAR_TRANSMISSION * SOLAR_ORIENTATION
}

/// Mean internal gains, W
pub(crate) fn internal_gains_w(reference_area_m2: f64) -> f64 {
    reference_area_m2 * INTERNAL_GAIN_W_PER_M2
}

/// Annual heating need Bch in kWh, floored at zero.
pub(crate) fn heating_need_kwh(
    heat_loss_w_per_k: f64,
    degree_days: f64,
    altitude_factor: f64,
    intermittency: f64,
    free_gains_w: f64,
) -> f64 {
    let gross = heat_loss_w_per_k * degree_days * 24.0 / 1000.0 * altitude_factor * intermittency;
    (gross - free_gains_w * GAIN_UTILIZATION).max(0.0)
}

/// Conventional occupancy, never below one person
pub(crate) fn occupants_estimate(reference_area_m2: f64) -> u32 {
    let estimate = (reference_area_m2 / AREA_PER_OCCUPANT_M2).round();
    (estimate as u32).max(1)
}

/// Annual domestic-hot-water need Becs in kWh
pub(crate) fn dhw_need_kwh(occupants: u32) -> f64 {
    f64::from(occupants) * 365.0 * DAILY_DRAW_M3 * WATER_SPECIFIC_HEAT * DHW_TEMPERATURE_RISE
        / 3.6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solar_and_internal_gains() {
        assert!((solar_gains_w(10.0) - 192.5).abs() < 1e-9);
        assert!((internal_gains_w(20.0) - 160.0).abs() < 1e-9);
    }

    #[test]
    fn test_heating_need_floors_at_zero() {
        // tiny losses, huge gains
        assert_eq!(heating_need_kwh(0.5, 1500.0, 1.0, 0.75, 10_000.0), 0.0);
    }

    #[test]
    fn test_heating_need_reference_case() {
        let need = heating_need_kwh(39.66, 3500.0, 1.0, 0.84, 160.0);
        assert!((need - 2678.4).abs() < 0.1, "Bch = {need}");
    }

    #[test]
    fn test_occupancy_floor() {
        assert_eq!(occupants_estimate(5.0), 1);
        assert_eq!(occupants_estimate(20.0), 1);
        assert_eq!(occupants_estimate(25.0), 1);
        assert_eq!(occupants_estimate(60.0), 2);
        assert_eq!(occupants_estimate(100.0), 4);
    }

    #[test]
    fn test_dhw_need_per_occupant() {
        let one = dhw_need_kwh(1);
        assert!((one - 950.7).abs() < 0.1, "Becs = {one}");
        assert!((dhw_need_kwh(3) - 3.0 * one).abs() < 1e-9);
    }
}
