//! # Assessment Engine
//!
//! The single top-to-bottom pass that turns a [`Dwelling`] snapshot into
//! an [`EnergyReport`]: per-element transmittances, loss aggregation with
//! junction terms, degree-day demand, final-energy conversion and the
//! double-threshold classification. The pass is a pure function of its
//! input - no state survives between invocations, and concurrent
//! assessments of different snapshots never interfere.
//!
//! ## Example
//!
//! ```rust
//! use dpe_core::climate::ClimateZone;
//! use dpe_core::dwelling::{Dwelling, Room, SnapshotMetadata};
//! use dpe_core::engine::assess;
//!
//! let dwelling = Dwelling {
//!     meta: SnapshotMetadata::default(),
//!     climate_zone: ClimateZone::H2b,
//!     altitude_m: 150.0,
//!     heated_levels: 1,
//!     rooms: vec![Room { name: "Salon".into(), surface_m2: 45.0, ceiling_height_m: 2.5 }],
//!     walls: vec![],
//!     floors: vec![],
//!     roofs: vec![],
//!     openings: vec![],
//!     ventilation: Default::default(),
//!     heating: Default::default(),
//!     dhw: Default::default(),
//! };
//!
//! let report = assess(&dwelling).unwrap();
//! println!("grade {} - {} kWhep/m²/yr", report.grade, report.primary_energy_kwh_per_m2);
//! ```

mod conversion;
mod demand;
mod losses;

use serde::{Deserialize, Serialize};

use crate::bridges::BridgeContribution;
use crate::climate::altitude_factor;
use crate::dwelling::{Dwelling, MIN_REFERENCE_AREA_M2};
use crate::errors::{DpeError, DpeResult};
use crate::rating::EnergyClass;
use crate::systems::fuel::DEFAULT_FACTORS;
use crate::systems::ConversionFactors;

pub use losses::LossBreakdown;

/// Complete assessment result, consumed by the report and persistence
/// layers.
///
/// Indicators carry the rounding of the published method: the
/// primary-energy index to the unit, the GHG index to 0.1, the cost
/// bounds to the euro. Needs and final energies stay unrounded for the
/// detail tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyReport {
    /// Reference floor area S_ref, m²
    pub reference_floor_area_m2: f64,

    /// Final grade: the worse of the two component classes
    pub grade: EnergyClass,

    /// Primary-energy indicator, kWhep/m²/yr
    pub primary_energy_kwh_per_m2: f64,
    /// Class on the primary-energy axis
    pub energy_class: EnergyClass,

    /// Greenhouse-gas indicator, kgCO2eq/m²/yr
    pub ghg_kg_per_m2: f64,
    /// Class on the GHG axis
    pub ghg_class: EnergyClass,

    /// Annual cost band, €
    pub cost_range_low_eur: f64,
    pub cost_range_high_eur: f64,

    /// Conventional occupancy behind the hot-water need
    pub occupants_estimate: u32,

    /// Building heat-loss coefficient H, W/K
    pub heat_loss_w_per_k: f64,
    /// Annual heating need Bch, kWh
    pub heating_need_kwh: f64,
    /// Annual hot-water need Becs, kWh
    pub dhw_need_kwh: f64,

    /// Final energy per service, kWh
    pub final_energy_heating_kwh: f64,
    pub final_energy_dhw_kwh: f64,
    pub final_energy_aux_kwh: f64,

    /// Junction terms, empty when the no-wall surcharge applied
    pub thermal_bridges: Vec<BridgeContribution>,

    /// Share of each loss category, whole percent
    pub loss_breakdown: LossBreakdown,
}

/// Assess a dwelling with the default 2021 conversion factors.
pub fn assess(dwelling: &Dwelling) -> DpeResult<EnergyReport> {
    assess_with_factors(dwelling, &DEFAULT_FACTORS)
}

/// Assess a dwelling against a pinned conversion-factor set.
pub fn assess_with_factors(
    dwelling: &Dwelling,
    factors: &ConversionFactors,
) -> DpeResult<EnergyReport> {
    let reference_area_m2 = dwelling.reference_floor_area();
    if reference_area_m2 < MIN_REFERENCE_AREA_M2 {
        return Err(DpeError::InsufficientFloorArea {
            area_m2: reference_area_m2,
        });
    }

    let summary = losses::aggregate(dwelling, reference_area_m2);

    let free_gains_w = demand::solar_gains_w(summary.glazed_area_m2)
        + demand::internal_gains_w(reference_area_m2);
    let heating_need_kwh = demand::heating_need_kwh(
        summary.total_w_per_k,
        dwelling.climate_zone.degree_days(),
        altitude_factor(dwelling.altitude_m),
        dwelling.heating.intermittency_factor(),
        free_gains_w,
    );

    let occupants = demand::occupants_estimate(reference_area_m2);
    let dhw_need_kwh = demand::dhw_need_kwh(occupants);

    let generator = dwelling.heating.resolved_generator();
    let totals = conversion::convert(
        heating_need_kwh,
        dhw_need_kwh,
        reference_area_m2,
        generator,
        &dwelling.dhw,
        factors,
    );

    let energy_class = EnergyClass::from_primary_energy(totals.primary_kwh_per_m2);
    let ghg_class = EnergyClass::from_ghg(totals.ghg_kg_per_m2);

    Ok(EnergyReport {
        reference_floor_area_m2: reference_area_m2,
        grade: EnergyClass::worse_of(energy_class, ghg_class),
        primary_energy_kwh_per_m2: totals.primary_kwh_per_m2,
        energy_class,
        ghg_kg_per_m2: totals.ghg_kg_per_m2,
        ghg_class,
        cost_range_low_eur: totals.cost_low_eur,
        cost_range_high_eur: totals.cost_high_eur,
        occupants_estimate: occupants,
        heat_loss_w_per_k: summary.total_w_per_k,
        heating_need_kwh,
        dhw_need_kwh,
        final_energy_heating_kwh: totals.final_heating_kwh,
        final_energy_dhw_kwh: totals.final_dhw_kwh,
        final_energy_aux_kwh: totals.final_aux_kwh,
        loss_breakdown: summary.breakdown(),
        thermal_bridges: summary.bridges.contributions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridges::Junction;
    use crate::climate::ClimateZone;
    use crate::dwelling::{Room, SnapshotMetadata};
    use crate::envelope::{
        Adjacency, Glazing, Opening, OpeningKind, WallInsulation, WallMaterial, WallSegment,
    };
    use crate::systems::{DhwSystem, HeatingSystem};
    use crate::ventilation::{VentilationKind, VentilationSystem};

    /// One 20 m² room, a single uninsulated block wall of 8 m × 2.5 m,
    /// window-opening ventilation, unknown heating and hot water, zone
    /// H1a at 100 m, one heated level.
    fn reference_dwelling() -> Dwelling {
        Dwelling {
            meta: SnapshotMetadata::default(),
            climate_zone: ClimateZone::H1a,
            altitude_m: 100.0,
            heated_levels: 1,
            rooms: vec![Room {
                name: "Salon".into(),
                surface_m2: 20.0,
                ceiling_height_m: 2.5,
            }],
            walls: vec![WallSegment {
                material: WallMaterial::ConcreteBlock,
                insulation: WallInsulation::None,
                length_m: 8.0,
                height_m: 2.5,
                adjacency: Adjacency::Exterior,
                orientation: None,
                insulation_thickness_m: None,
                insulation_year: None,
            }],
            floors: vec![],
            roofs: vec![],
            openings: vec![],
            ventilation: VentilationSystem {
                kind: Some(VentilationKind::WindowOpening),
                period: None,
            },
            heating: HeatingSystem {
                declared_unknown: true,
                ..Default::default()
            },
            dhw: DhwSystem {
                declared_unknown: true,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_reference_scenario() {
        let report = assess(&reference_dwelling()).unwrap();

        assert_eq!(report.reference_floor_area_m2, 20.0);
        assert_eq!(report.thermal_bridges.len(), 1);
        assert_eq!(report.thermal_bridges[0].junction, Junction::PartitionWall);
        assert_eq!(report.thermal_bridges[0].loss_w_per_k, 1.5);

        assert!((report.heat_loss_w_per_k - 39.66).abs() < 0.01);
        assert!((report.heating_need_kwh - 2678.4).abs() < 0.5);
        assert_eq!(report.occupants_estimate, 1);
        assert!((report.dhw_need_kwh - 950.7).abs() < 0.1);

        assert!((report.final_energy_heating_kwh - 3433.9).abs() < 0.5);
        assert!((report.final_energy_dhw_kwh - 1118.5).abs() < 0.5);
        assert_eq!(report.final_energy_aux_kwh, 50.0);

        assert_eq!(report.primary_energy_kwh_per_m2, 306.0);
        assert!((report.ghg_kg_per_m2 - 59.4).abs() < 0.05);

        // both component classes land in the same ordinal bracket
        assert_eq!(report.energy_class, report.ghg_class);
        assert_eq!(report.grade, report.energy_class);

        assert!((report.cost_range_low_eur - 526.0).abs() <= 1.0);
        assert!((report.cost_range_high_eur - 711.0).abs() <= 1.0);
    }

    #[test]
    fn test_determinism() {
        let dwelling = reference_dwelling();
        let a = serde_json::to_string(&assess(&dwelling).unwrap()).unwrap();
        let b = serde_json::to_string(&assess(&dwelling).unwrap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_insufficient_floor_area() {
        let mut dwelling = reference_dwelling();
        dwelling.rooms[0].surface_m2 = 4.0;
        let err = assess(&dwelling).unwrap_err();
        assert!(err.is_insufficient_data());
        assert_eq!(
            err,
            DpeError::InsufficientFloorArea { area_m2: 4.0 }
        );
    }

    #[test]
    fn test_bridge_fallback_exclusivity() {
        let mut dwelling = reference_dwelling();
        dwelling.walls.clear();
        dwelling.openings.push(Opening {
            kind: OpeningKind::Window,
            width_m: 1.0,
            height_m: 1.0,
            count: 1,
            glazing: Some(Glazing::Single),
            frame: None,
            adjacency: Adjacency::Exterior,
            door_material: None,
            glazed_fraction_pct: 0.0,
            mask: None,
            orientation: None,
        });
        let report = assess(&dwelling).unwrap();
        assert!(report.thermal_bridges.is_empty());
        // envelope is the single 5.8 W/K window; surcharge exactly +10 %
        let envelope = 5.8;
        let expected = envelope * 1.10 + 0.34 * 1.20 * 20.0;
        assert!((report.heat_loss_w_per_k - expected).abs() < 1e-9);
    }

    #[test]
    fn test_surcharge_never_applied_with_walls() {
        let report = assess(&reference_dwelling()).unwrap();
        // wall 30 W/K + bridges 1.5 + ventilation 8.16, no ×1.10 anywhere
        assert!((report.heat_loss_w_per_k - (30.0 + 1.5 + 8.16)).abs() < 1e-9);
    }

    #[test]
    fn test_monotonicity_worse_glazing() {
        let mut good = reference_dwelling();
        good.openings.push(Opening {
            kind: OpeningKind::Window,
            width_m: 1.2,
            height_m: 1.2,
            count: 2,
            glazing: Some(Glazing::Triple),
            frame: None,
            adjacency: Adjacency::Exterior,
            door_material: None,
            glazed_fraction_pct: 0.0,
            mask: None,
            orientation: None,
        });
        let mut bad = good.clone();
        bad.openings[0].glazing = Some(Glazing::Single);

        let good_report = assess(&good).unwrap();
        let bad_report = assess(&bad).unwrap();

        assert!(bad_report.heat_loss_w_per_k > good_report.heat_loss_w_per_k);
        assert!(bad_report.heating_need_kwh >= good_report.heating_need_kwh);
        assert!(
            bad_report.primary_energy_kwh_per_m2 >= good_report.primary_energy_kwh_per_m2
        );
        assert!(bad_report.grade >= good_report.grade);
    }

    #[test]
    fn test_monotonicity_wall_insulation_removed() {
        let mut insulated = reference_dwelling();
        insulated.walls[0].insulation = WallInsulation::Exterior;
        let insulated_report = assess(&insulated).unwrap();
        let bare_report = assess(&reference_dwelling()).unwrap();
        assert!(bare_report.heat_loss_w_per_k > insulated_report.heat_loss_w_per_k);
        assert!(bare_report.grade >= insulated_report.grade);
    }

    #[test]
    fn test_grade_tiebreak_diverging_axes() {
        // A log stove burns a lot of low-carbon energy: the two axes
        // disagree by several classes and the worse one must win.
        let mut dwelling = reference_dwelling();
        dwelling.heating = HeatingSystem {
            generator: Some(crate::systems::HeatGenerator::WoodLogStove),
            ..Default::default()
        };
        let report = assess(&dwelling).unwrap();
        assert_eq!(report.energy_class, EnergyClass::F);
        assert_eq!(report.ghg_class, EnergyClass::B);
        assert_eq!(report.grade, EnergyClass::F);
        assert_eq!(
            report.grade.rank(),
            report.energy_class.rank().max(report.ghg_class.rank())
        );
    }

    #[test]
    fn test_loss_shares_follow_elements() {
        let mut dwelling = reference_dwelling();
        dwelling.openings.push(Opening {
            kind: OpeningKind::Window,
            width_m: 2.0,
            height_m: 1.5,
            count: 2,
            glazing: Some(Glazing::Single),
            frame: None,
            adjacency: Adjacency::Exterior,
            door_material: None,
            glazed_fraction_pct: 0.0,
            mask: None,
            orientation: None,
        });
        let report = assess(&dwelling).unwrap();
        assert!(report.loss_breakdown.glazing > 0.0);
        assert_eq!(report.loss_breakdown.floor, 0.0);
        assert_eq!(report.loss_breakdown.roof, 0.0);
    }

    #[test]
    fn test_report_json_roundtrip() {
        let report = assess(&reference_dwelling()).unwrap();
        let json = serde_json::to_string_pretty(&report).unwrap();
        let back: EnergyReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report.grade, back.grade);
        assert_eq!(report.thermal_bridges, back.thermal_bridges);
        assert_eq!(report.loss_breakdown, back.loss_breakdown);
    }
}
