//! # Envelope Elements
//!
//! Transmittance resolution for every element of the thermal envelope.
//! Each submodule owns one element family - its construction enums, its
//! element struct, and the lookup that turns a description into a U-value
//! (W/m²K):
//!
//! - [`walls`] - opaque vertical walls (material × insulation table)
//! - [`floors`] - lower floors, including ground-coupled corrections
//! - [`roofs`] - upper floors and roofs (attic and flat-roof era tables)
//! - [`openings`] - windows, french doors, roof windows and doors
//!
//! Shared here: the adjacency enumeration with its exposure factor (b),
//! the insulation-position key used by the thermal-bridge matrices, and
//! the two-digit year expansion rule applied wherever an installation year
//! is declared.

pub mod floors;
pub mod openings;
pub mod roofs;
pub mod walls;

use serde::{Deserialize, Serialize};

pub use floors::{FloorExposure, FloorSlab, FloorStructure};
pub use openings::{DoorMaterial, FrameMaterial, Glazing, Opening, OpeningKind, SolarMask};
pub use roofs::{RoofSituation, RoofStructure, RoofSurface};
pub use walls::{WallInsulation, WallMaterial, WallSegment};

/// What lies on the far side of a wall or door.
///
/// The exposure factor b is the fraction of the full interior/exterior
/// temperature difference actually seen across the element: 1.0 against
/// outside air, 0.0 against another heated dwelling, intermediate values
/// for unheated buffer spaces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Adjacency {
    /// Outside air: b = 1.00
    Exterior,
    /// Circulation space opening directly to the outside: b = 1.00
    OpenCirculation,
    /// Unheated attic: b = 0.90
    UnheatedAttic,
    /// Unheated cellar or basement: b = 0.80
    UnheatedCellar,
    /// Attached unheated garage: b = 0.75
    UnheatedGarage,
    /// Enclosed circulation with no direct outside opening: b = 0.60
    ClosedCirculation,
    /// Glazed, unheated buffer space (veranda, closed loggia): b = 0.60
    SolarBuffer,
    /// Wall enclosing a ventilated crawlspace: b = 0.50
    CrawlspaceWall,
    /// Unheated space with known interior/exterior envelope areas.
    ///
    /// b = Aue / (Aiu + Aue), the method's simplification when both the
    /// area toward the heated volume (Aiu) and the area toward the
    /// outside (Aue) were measured.
    CalculatedUnheated { aiu_m2: f64, aue_m2: f64 },
    /// Shared partition against another heated dwelling: b = 0.00
    HeatedAdjoining,
}

impl Default for Adjacency {
    fn default() -> Self {
        Adjacency::Exterior
    }
}

impl Adjacency {
    /// Exposure factor b for the element behind this adjacency
    pub fn exposure_factor(&self) -> f64 {
        match self {
            Adjacency::Exterior | Adjacency::OpenCirculation => 1.0,
            Adjacency::UnheatedAttic => 0.90,
            Adjacency::UnheatedCellar => 0.80,
            Adjacency::UnheatedGarage => 0.75,
            Adjacency::ClosedCirculation | Adjacency::SolarBuffer => 0.60,
            Adjacency::CrawlspaceWall => 0.50,
            Adjacency::CalculatedUnheated { aiu_m2, aue_m2 } => {
                // Non-positive declared areas fall back to 1 m² each
                let aiu = if *aiu_m2 > 0.0 { *aiu_m2 } else { 1.0 };
                let aue = if *aue_m2 > 0.0 { *aue_m2 } else { 1.0 };
                aue / (aiu + aue)
            }
            Adjacency::HeatedAdjoining => 0.0,
        }
    }

    /// True when the element loses heat through this adjacency.
    ///
    /// Fully protected elements (b = 0) are excluded from every
    /// thermal-bridge length sum; the calculated-unheated case always
    /// counts as deperditive.
    pub fn is_deperditive(&self) -> bool {
        !matches!(self, Adjacency::HeatedAdjoining)
    }
}

/// Compass orientation of a facade element.
///
/// Collected by the description workflow for the report; the annual
/// approximation of the engine does not weight losses or gains by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

/// Insulation description shared by floor slabs and roof surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlabInsulation {
    /// No insulation layer
    None,
    /// Interior side: under the screed (floors) / under the ceiling (roofs)
    Interior,
    /// Exterior side: underside of the slab (floors) / above the deck (roofs)
    Exterior,
    /// Insulated on both sides
    Combined,
    /// Declared insulated, position unknown - the method assumes exterior
    Unknown,
}

impl SlabInsulation {
    /// Position key for the Ψ junction matrices
    pub fn bridge_position(&self) -> InsulationPosition {
        match self {
            SlabInsulation::None => InsulationPosition::None,
            SlabInsulation::Interior => InsulationPosition::Interior,
            SlabInsulation::Exterior | SlabInsulation::Unknown => InsulationPosition::Exterior,
            SlabInsulation::Combined => InsulationPosition::Combined,
        }
    }
}

/// Insulation position key of the forfait Ψ matrices.
///
/// Distributed-in-mass wall insulation has no junction treatment of its
/// own and maps onto the uninsulated column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsulationPosition {
    None,
    Interior,
    Exterior,
    Combined,
}

impl InsulationPosition {
    /// Select this position's cell from a (none, interior, exterior,
    /// combined) table row.
    pub(crate) fn pick(&self, row: (f64, f64, f64, f64)) -> f64 {
        match self {
            InsulationPosition::None => row.0,
            InsulationPosition::Interior => row.1,
            InsulationPosition::Exterior => row.2,
            InsulationPosition::Combined => row.3,
        }
    }
}

/// Expand a declared installation year to a full calendar year.
///
/// Two-digit declarations are common on older paperwork: values of 75 and
/// above belong to the twentieth century, values below 75 to the
/// twenty-first. Four-digit values pass through unchanged, so `82` reads
/// as 1982 while `5` reads as 2005.
pub fn expand_year(raw: u32) -> u32 {
    if raw >= 100 {
        raw
    } else if raw >= 75 {
        1900 + raw
    } else {
        2000 + raw
    }
}

/// Round a transmittance to 2 decimals, the method's published precision
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exposure_factors_bounded() {
        assert_eq!(Adjacency::Exterior.exposure_factor(), 1.0);
        assert_eq!(Adjacency::HeatedAdjoining.exposure_factor(), 0.0);
        assert_eq!(Adjacency::CrawlspaceWall.exposure_factor(), 0.5);
    }

    #[test]
    fn test_calculated_unheated_ratio() {
        let adj = Adjacency::CalculatedUnheated {
            aiu_m2: 10.0,
            aue_m2: 30.0,
        };
        assert!((adj.exposure_factor() - 0.75).abs() < 1e-12);

        // degenerate declarations fall back to 1 m² each side
        let adj = Adjacency::CalculatedUnheated {
            aiu_m2: 0.0,
            aue_m2: 0.0,
        };
        assert_eq!(adj.exposure_factor(), 0.5);
    }

    #[test]
    fn test_deperditive_walls() {
        assert!(Adjacency::Exterior.is_deperditive());
        assert!(Adjacency::CalculatedUnheated {
            aiu_m2: 1.0,
            aue_m2: 1.0
        }
        .is_deperditive());
        assert!(!Adjacency::HeatedAdjoining.is_deperditive());
    }

    #[test]
    fn test_year_expansion() {
        assert_eq!(expand_year(82), 1982);
        assert_eq!(expand_year(5), 2005);
        assert_eq!(expand_year(75), 1975);
        assert_eq!(expand_year(74), 2074);
        assert_eq!(expand_year(1995), 1995);
    }
}
