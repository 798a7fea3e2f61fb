//! # Upper Floors and Roofs
//!
//! Transmittance of the upper envelope (Uph). Two era-table families
//! exist: pitched roofs and attic floors on one hand, flat roofs on the
//! other, whose heavier build-up keeps a higher coefficient for the same
//! insulation era. A surface under an unheated room resolves on the
//! flat-roof family regardless of its own structure; a surface under a
//! heated room loses nothing at all.

use serde::{Deserialize, Serialize};

use super::{expand_year, round2, SlabInsulation};
use crate::climate::ZoneFamily;

/// Thermal conductivity assumed for roof insulation layers (W/m·K)
const ROOF_LAMBDA: f64 = 0.040;

/// Era table for attic floors and pitched roofs
const ATTIC_ERA_TABLE: [(u32, [f64; 3]); 8] = [
    (1974, [2.5, 2.5, 2.5]),
    (1977, [0.5, 0.53, 0.56]),
    (1982, [0.5, 0.53, 0.56]),
    (1988, [0.3, 0.32, 0.33]),
    (2000, [0.25, 0.26, 0.3]),
    (2005, [0.23, 0.23, 0.3]),
    (2012, [0.2, 0.2, 0.25]),
    (u32::MAX, [0.14, 0.14, 0.14]),
];

/// Era table for flat roofs
const FLAT_ERA_TABLE: [(u32, [f64; 3]); 8] = [
    (1974, [2.5, 2.5, 2.5]),
    (1977, [0.75, 0.79, 0.83]),
    (1982, [0.75, 0.79, 0.83]),
    (1988, [0.55, 0.58, 0.61]),
    (2000, [0.40, 0.42, 0.44]),
    (2005, [0.30, 0.30, 0.30]),
    (2012, [0.27, 0.27, 0.27]),
    (u32::MAX, [0.14, 0.14, 0.14]),
];

/// Era-table family a roof surface resolves on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoofTableFamily {
    Attic,
    FlatRoof,
}

/// Structure of the upper floor or roof
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoofStructure {
    /// Unconverted attic over a masonry ceiling
    LostAttic,
    /// Converted attic, insulated along the rafters
    ConvertedAttic,
    /// Flat roof (slope under 5°)
    FlatRoof,
    /// Metal deck roof
    MetalDeck,
    /// Plasterboard suspended ceiling
    PlasterCeiling,
    /// Thatched roof
    Thatch,
    /// Unrecognized declaration
    Other,
}

impl RoofStructure {
    /// All roof structure variants for UI selection
    pub const ALL: [RoofStructure; 7] = [
        RoofStructure::LostAttic,
        RoofStructure::ConvertedAttic,
        RoofStructure::FlatRoof,
        RoofStructure::MetalDeck,
        RoofStructure::PlasterCeiling,
        RoofStructure::Thatch,
        RoofStructure::Other,
    ];

    /// Uninsulated transmittance Uph0 (W/m²K)
    pub fn base_u(&self) -> f64 {
        match self {
            RoofStructure::Thatch => 0.24,
            RoofStructure::LostAttic
            | RoofStructure::ConvertedAttic
            | RoofStructure::FlatRoof
            | RoofStructure::MetalDeck
            | RoofStructure::PlasterCeiling
            | RoofStructure::Other => 2.5,
        }
    }

    /// Heavyweight structures participate in the roof/wall junction bridge
    pub fn is_heavyweight(&self) -> bool {
        matches!(
            self,
            RoofStructure::LostAttic | RoofStructure::FlatRoof | RoofStructure::Other
        )
    }

    /// Era-table family of the structure itself
    pub fn table_family(&self) -> RoofTableFamily {
        match self {
            RoofStructure::FlatRoof | RoofStructure::PlasterCeiling => RoofTableFamily::FlatRoof,
            RoofStructure::LostAttic
            | RoofStructure::ConvertedAttic
            | RoofStructure::MetalDeck
            | RoofStructure::Thatch
            | RoofStructure::Other => RoofTableFamily::Attic,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            RoofStructure::LostAttic => "Lost attic",
            RoofStructure::ConvertedAttic => "Converted attic",
            RoofStructure::FlatRoof => "Flat roof",
            RoofStructure::MetalDeck => "Metal deck",
            RoofStructure::PlasterCeiling => "Plasterboard ceiling",
            RoofStructure::Thatch => "Thatch",
            RoofStructure::Other => "Other / unknown",
        }
    }
}

/// What lies above the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoofSituation {
    /// Outside air directly above
    Exterior,
    /// Unheated attic above
    UnheatedAttic,
    /// Unheated room above - resolves on the flat-roof era family
    UnheatedRoomAbove,
    /// Heated room above - no deperdition through this surface
    HeatedRoomAbove,
}

impl Default for RoofSituation {
    fn default() -> Self {
        RoofSituation::Exterior
    }
}

/// Era-table coefficient for an insulation year, zone family and table
/// family
pub(crate) fn roof_era_u(year: u32, family: ZoneFamily, table: RoofTableFamily) -> f64 {
    let rows = match table {
        RoofTableFamily::Attic => &ATTIC_ERA_TABLE,
        RoofTableFamily::FlatRoof => &FLAT_ERA_TABLE,
    };
    let expanded = expand_year(year);
    let row = rows
        .iter()
        .find(|(max, _)| expanded <= *max)
        .map(|(_, values)| values)
        .unwrap_or(&rows[rows.len() - 1].1);
    row[family.column()]
}

/// One upper-floor or roof surface, as declared by the description
/// workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoofSurface {
    /// Structure of the surface
    pub structure: RoofStructure,

    /// Insulation description
    #[serde(default = "default_slab_insulation")]
    pub insulation: SlabInsulation,

    /// What lies above
    #[serde(default)]
    pub situation: RoofSituation,

    /// Surface in m²; non-positive falls back to the reference floor area
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

impl RoofSurface {
    /// Era-table family after the situation override
    fn resolved_table(&self) -> RoofTableFamily {
        if self.situation == RoofSituation::UnheatedRoomAbove {
            RoofTableFamily::FlatRoof
        } else {
            self.structure.table_family()
        }
    }

    /// Transmittance Uph (W/m²K)
    pub fn u_value(&self, family: ZoneFamily) -> f64 {
        let base = self.structure.base_u();
        if self.insulation == SlabInsulation::None {
            return base;
        }
        if let Some(e) = self.insulation_thickness_m {
            if e > 0.0 {
                return round2(1.0 / (1.0 / base + e / ROOF_LAMBDA));
            }
        }
        let table = self.resolved_table();
        if let Some(year) = self.insulation_year {
            return base.min(roof_era_u(year, family, table));
        }
        // no thickness, no year: oldest bracket caps the estimate
        let rows = match table {
            RoofTableFamily::Attic => &ATTIC_ERA_TABLE,
            RoofTableFamily::FlatRoof => &FLAT_ERA_TABLE,
        };
        base.min(rows[0].1[family.column()])
    }

    /// Envelope loss contribution U·S in W/K; zero under a heated room
    pub fn heat_loss(&self, family: ZoneFamily, reference_area_m2: f64) -> f64 {
        if self.situation == RoofSituation::HeatedRoomAbove {
            return 0.0;
        }
        let surface = if self.surface_m2 > 0.0 {
            self.surface_m2
        } else {
            reference_area_m2
        };
        self.u_value(family) * surface
    }
}
