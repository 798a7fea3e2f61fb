//! # Lower Floors
//!
//! Transmittance of the lowest floor (Upb), then the effective
//! ground-coupled coefficient (Ue) for crawlspace, cellar and
//! slab-on-grade exposures.
//!
//! Resolution order for Upb follows §3.2.2 of the method: bare structure
//! coefficient, exact thickness when declared, insulation-era table when
//! only a year is known, oldest era bracket when the slab is declared
//! insulated with no evidence at all.

use serde::{Deserialize, Serialize};

use super::{expand_year, round2, SlabInsulation};
use crate::climate::ZoneFamily;

/// Thermal conductivity assumed for floor insulation layers (W/m·K)
const FLOOR_LAMBDA: f64 = 0.042;

/// Insulation-era table for floors: upper-bound year per row, one column
/// per zone family. Rows ascend; the first bracket containing the year
/// wins, the last row is open-ended.
const FLOOR_ERA_TABLE: [(u32, [f64; 3]); 8] = [
    (1974, [2.0, 2.0, 2.0]),
    (1977, [0.9, 0.95, 1.0]),
    (1982, [0.9, 0.95, 1.0]),
    (1988, [0.8, 0.74, 0.89]),
    (2000, [0.5, 0.63, 0.56]),
    (2005, [0.3, 0.3, 0.47]),
    (2012, [0.27, 0.27, 0.40]),
    (u32::MAX, [0.23, 0.23, 0.25]),
];

/// Structure of the lowest floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloorStructure {
    /// Massive or shuttered concrete slab
    SolidSlab,
    /// Concrete joists with hollow-block infill and compression table
    BeamAndInfill,
    /// Timber joists carrying a concrete infill
    TimberConcrete,
    /// Insulating polystyrene-infill floor system
    PolystyreneInfill,
    /// Timber joists and boarding
    TimberJoists,
    /// Unrecognized declaration - bare-slab default
    Other,
}

impl FloorStructure {
    /// All floor structure variants for UI selection
    pub const ALL: [FloorStructure; 6] = [
        FloorStructure::SolidSlab,
        FloorStructure::BeamAndInfill,
        FloorStructure::TimberConcrete,
        FloorStructure::PolystyreneInfill,
        FloorStructure::TimberJoists,
        FloorStructure::Other,
    ];

    /// Uninsulated transmittance Upb0 (W/m²K)
    pub fn base_u(&self) -> f64 {
        match self {
            FloorStructure::SolidSlab => 2.0,
            FloorStructure::BeamAndInfill => 1.6,
            FloorStructure::TimberConcrete => 1.1,
            FloorStructure::PolystyreneInfill => 0.45,
            FloorStructure::TimberJoists => 0.8,
            FloorStructure::Other => 2.0,
        }
    }

    /// Heavyweight structures participate in the floor/wall junction
    /// bridge; lightweight (timber, integrated-insulation) ones do not.
    pub fn is_heavyweight(&self) -> bool {
        match self {
            FloorStructure::SolidSlab
            | FloorStructure::BeamAndInfill
            | FloorStructure::TimberConcrete
            | FloorStructure::Other => true,
            FloorStructure::PolystyreneInfill | FloorStructure::TimberJoists => false,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            FloorStructure::SolidSlab => "Solid concrete slab",
            FloorStructure::BeamAndInfill => "Concrete beam-and-infill",
            FloorStructure::TimberConcrete => "Timber-concrete composite",
            FloorStructure::PolystyreneInfill => "Polystyrene-infill system",
            FloorStructure::TimberJoists => "Timber joists",
            FloorStructure::Other => "Other / unknown",
        }
    }
}

/// What lies below the floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloorExposure {
    /// Ventilated crawlspace
    Crawlspace,
    /// Enclosed unheated cellar or basement
    UnheatedCellar,
    /// Slab poured on grade
    SlabOnGrade,
    /// Open air (pilotis, passageway)
    OpenAir,
    /// Other unheated room (garage, storage)
    UnheatedRoom,
}

impl FloorExposure {
    /// Ground-coupled exposures replace Upb with the effective Ue
    pub fn is_ground_coupled(&self) -> bool {
        matches!(
            self,
            FloorExposure::Crawlspace | FloorExposure::UnheatedCellar | FloorExposure::SlabOnGrade
        )
    }
}

/// Effective ground-coupled coefficient Ue for a raw Upb.
///
/// Discrete step lookup, not an interpolation, for the median envelope
/// ratio 2S/P ≈ 5 m. Slab-on-grade couples more strongly to the ground
/// than a ventilated void, hence its own break points.
pub fn ground_effective_u(upb: f64, exposure: FloorExposure) -> f64 {
    if exposure == FloorExposure::SlabOnGrade {
        return if upb >= 2.0 {
            0.60
        } else if upb >= 1.5 {
            0.46
        } else if upb >= 0.85 {
            0.38
        } else if upb >= 0.6 {
            0.32
        } else {
            0.27
        };
    }
    // crawlspace / unheated cellar
    if upb >= 3.0 {
        0.39
    } else if upb >= 1.4 {
        0.36
    } else if upb >= 0.8 {
        0.34
    } else if upb >= 0.45 {
        0.32
    } else {
        0.30
    }
}

/// Era-table coefficient for an insulation year and zone family
pub(crate) fn floor_era_u(year: u32, family: ZoneFamily) -> f64 {
    let expanded = expand_year(year);
    let row = FLOOR_ERA_TABLE
        .iter()
        .find(|(max, _)| expanded <= *max)
        .map(|(_, values)| values)
        .unwrap_or(&FLOOR_ERA_TABLE[FLOOR_ERA_TABLE.len() - 1].1);
    row[family.column()]
}

/// One lower-floor slab, as declared by the description workflow.
///
/// A non-positive surface falls back to the dwelling's reference floor
/// area when losses are aggregated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorSlab {
    /// Structure of the slab
    pub structure: FloorStructure,

    /// What lies below
    pub exposure: FloorExposure,

    /// Insulation description
    #[serde(default = "default_slab_insulation")]
    pub insulation: SlabInsulation,

    /// Slab surface in m²
    pub surface_m2: f64,

    /// Declared insulation thickness in meters
    #[serde(default)]
    pub insulation_thickness_m: Option<f64>,

    /// Declared insulation year (two-digit declarations accepted)
    #[serde(default)]
    pub insulation_year: Option<u32>,
}

fn default_slab_insulation() -> SlabInsulation {
    SlabInsulation::None
}

impl FloorSlab {
    /// Raw transmittance Upb (W/m²K), before ground coupling
    pub fn raw_u(&self, family: ZoneFamily) -> f64 {
        let base = self.structure.base_u();
        if self.insulation == SlabInsulation::None {
            return base;
        }
        if let Some(e) = self.insulation_thickness_m {
            if e > 0.0 {
                return round2(1.0 / (1.0 / base + e / FLOOR_LAMBDA));
            }
        }
        if let Some(year) = self.insulation_year {
            return base.min(floor_era_u(year, family));
        }
        // Insulated with no thickness and no year: the era value can never
        // beat the bare slab, so the oldest bracket caps the estimate.
        base.min(FLOOR_ERA_TABLE[0].1[family.column()])
    }

    /// Effective transmittance after ground coupling (W/m²K)
    pub fn effective_u(&self, family: ZoneFamily) -> f64 {
        let upb = self.raw_u(family);
        if self.exposure.is_ground_coupled() {
            ground_effective_u(upb, self.exposure)
        } else {
            upb
        }
    }

    /// Envelope loss contribution Ue·S in W/K
    pub fn heat_loss(&self, family: ZoneFamily, reference_area_m2: f64) -> f64 {
        let surface = if self.surface_m2 > 0.0 {
            self.surface_m2
        } else {
            reference_area_m2
        };
        self.effective_u(family) * surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slab(structure: FloorStructure, exposure: FloorExposure) -> FloorSlab {
        FloorSlab {
            structure,
            exposure,
            insulation: SlabInsulation::None,
            surface_m2: 50.0,
            insulation_thickness_m: None,
            insulation_year: None,
        }
    }

    #[test]
    fn test_bare_slab() {
        let s = slab(FloorStructure::SolidSlab, FloorExposure::OpenAir);
        assert_eq!(s.raw_u(ZoneFamily::H1), 2.0);
        assert_eq!(s.effective_u(ZoneFamily::H1), 2.0);
    }

    #[test]
    fn test_thickness_beats_era_table() {
        let mut s = slab(FloorStructure::SolidSlab, FloorExposure::OpenAir);
        s.insulation = SlabInsulation::Interior;
        s.insulation_thickness_m = Some(0.10);
        s.insulation_year = Some(1990);
        // 1/(1/2.0 + 0.10/0.042) = 0.3471... -> 0.35
        assert_eq!(s.raw_u(ZoneFamily::H1), 0.35);
    }

    #[test]
    fn test_era_lookup_first_match_wins() {
        assert_eq!(floor_era_u(1976, ZoneFamily::H1), 0.9);
        assert_eq!(floor_era_u(1982, ZoneFamily::H2), 0.95);
        assert_eq!(floor_era_u(2013, ZoneFamily::H3), 0.25);
        // two-digit year expands before the bracket search
        assert_eq!(floor_era_u(82, ZoneFamily::H1), 0.9);
        assert_eq!(floor_era_u(5, ZoneFamily::H1), 0.3);
    }

    #[test]
    fn test_era_value_capped_by_bare_structure() {
        let mut s = slab(FloorStructure::PolystyreneInfill, FloorExposure::OpenAir);
        s.insulation = SlabInsulation::Interior;
        s.insulation_year = Some(1976);
        // tabulated 0.9 would exceed the bare 0.45 coefficient
        assert_eq!(s.raw_u(ZoneFamily::H1), 0.45);
    }

    #[test]
    fn test_no_evidence_falls_back_to_oldest_bracket() {
        let mut s = slab(FloorStructure::SolidSlab, FloorExposure::OpenAir);
        s.insulation = SlabInsulation::Unknown;
        assert_eq!(s.raw_u(ZoneFamily::H1), 2.0);
    }

    #[test]
    fn test_ground_coupling_steps() {
        assert_eq!(
            ground_effective_u(2.0, FloorExposure::SlabOnGrade),
            0.60
        );
        assert_eq!(
            ground_effective_u(0.7, FloorExposure::SlabOnGrade),
            0.32
        );
        assert_eq!(ground_effective_u(2.0, FloorExposure::Crawlspace), 0.36);
        assert_eq!(
            ground_effective_u(0.3, FloorExposure::UnheatedCellar),
            0.30
        );
    }

    #[test]
    fn test_open_air_uses_raw_upb() {
        let s = slab(FloorStructure::BeamAndInfill, FloorExposure::OpenAir);
        assert_eq!(s.effective_u(ZoneFamily::H1), 1.6);
        let s = slab(FloorStructure::BeamAndInfill, FloorExposure::Crawlspace);
        assert_eq!(s.effective_u(ZoneFamily::H1), 0.36);
    }

    #[test]
    fn test_surface_fallback() {
        let mut s = slab(FloorStructure::SolidSlab, FloorExposure::SlabOnGrade);
        s.surface_m2 = 0.0;
        assert!((s.heat_loss(ZoneFamily::H1, 20.0) - 0.60 * 20.0).abs() < 1e-9);
    }
}
