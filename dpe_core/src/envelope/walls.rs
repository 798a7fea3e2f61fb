//! # Opaque Walls
//!
//! Wall transmittance per the (material × insulation) forfait table of the
//! 3CL-DPE 2021 method. The table carries one row per recognized
//! construction material; declarations the workflow could not match land on
//! the generic masonry-block row, the method's documented default.

use serde::{Deserialize, Serialize};

use super::{Adjacency, InsulationPosition, Orientation};

/// Load-bearing material of an opaque wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WallMaterial {
    /// Rubble or dressed stone
    Stone,
    /// Solid fired brick
    SolidBrick,
    /// Hollow brick
    HollowBrick,
    /// Cast or shuttered concrete
    SolidConcrete,
    /// Concrete masonry block
    ConcreteBlock,
    /// Timber frame
    TimberFrame,
    /// Pre-1948 composite masonry (adobe, timber-and-infill, ...)
    Heritage,
    /// Unrecognized declaration - resolved on the masonry-block row
    Other,
}

impl WallMaterial {
    /// All wall material variants for UI selection
    pub const ALL: [WallMaterial; 8] = [
        WallMaterial::Stone,
        WallMaterial::SolidBrick,
        WallMaterial::HollowBrick,
        WallMaterial::SolidConcrete,
        WallMaterial::ConcreteBlock,
        WallMaterial::TimberFrame,
        WallMaterial::Heritage,
        WallMaterial::Other,
    ];

    /// Transmittance (W/m²K) for this material under a given insulation
    /// scheme.
    pub fn u_value(&self, insulation: WallInsulation) -> f64 {
        // Columns: bare, interior, exterior, distributed-in-mass
        let row = match self {
            WallMaterial::Stone => (2.5, 0.36, 0.28, 0.45),
            WallMaterial::SolidBrick => (1.8, 0.35, 0.27, 0.40),
            WallMaterial::HollowBrick => (1.2, 0.35, 0.27, 0.35),
            WallMaterial::SolidConcrete => (2.2, 0.35, 0.27, 0.35),
            WallMaterial::ConcreteBlock => (1.5, 0.35, 0.27, 0.35),
            WallMaterial::TimberFrame => (0.7, 0.27, 0.25, 0.25),
            WallMaterial::Heritage => (2.0, 0.40, 0.35, 0.50),
            // generic masonry fallback row
            WallMaterial::Other => (1.5, 0.35, 0.27, 0.35),
        };
        match insulation {
            WallInsulation::None => row.0,
            WallInsulation::Interior => row.1,
            WallInsulation::Exterior => row.2,
            WallInsulation::Distributed => row.3,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            WallMaterial::Stone => "Stone",
            WallMaterial::SolidBrick => "Solid brick",
            WallMaterial::HollowBrick => "Hollow brick",
            WallMaterial::SolidConcrete => "Solid concrete",
            WallMaterial::ConcreteBlock => "Concrete block",
            WallMaterial::TimberFrame => "Timber frame",
            WallMaterial::Heritage => "Pre-1948 composite",
            WallMaterial::Other => "Other / unknown",
        }
    }
}

/// Insulation scheme of an opaque wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WallInsulation {
    /// No insulation layer
    None,
    /// Interior lining (ITI)
    Interior,
    /// Exterior cladding (ITE)
    Exterior,
    /// Distributed in the mass (cellular concrete, honeycomb brick)
    Distributed,
}

impl Default for WallInsulation {
    fn default() -> Self {
        WallInsulation::None
    }
}

impl WallInsulation {
    /// Position key for the Ψ junction matrices.
    ///
    /// Distributed insulation offers no junction treatment and keys the
    /// uninsulated column.
    pub fn bridge_position(&self) -> InsulationPosition {
        match self {
            WallInsulation::None | WallInsulation::Distributed => InsulationPosition::None,
            WallInsulation::Interior => InsulationPosition::Interior,
            WallInsulation::Exterior => InsulationPosition::Exterior,
        }
    }
}

/// One run of opaque wall, as declared by the description workflow.
///
/// ## JSON Example
///
/// ```json
/// {
///   "material": "concrete_block",
///   "insulation": "none",
///   "length_m": 8.0,
///   "height_m": 2.5,
///   "adjacency": "exterior"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallSegment {
    /// Load-bearing material
    pub material: WallMaterial,

    /// Insulation scheme
    #[serde(default)]
    pub insulation: WallInsulation,

    /// Horizontal length in meters
    pub length_m: f64,

    /// Story height in meters; non-positive declarations fall back to 2.5
    pub height_m: f64,

    /// What lies behind the wall
    #[serde(default)]
    pub adjacency: Adjacency,

    /// Facade orientation, kept for the report
    #[serde(default)]
    pub orientation: Option<Orientation>,

    /// Declared insulation thickness (m); informative only for walls,
    /// the forfait table already embeds typical thicknesses
    #[serde(default)]
    pub insulation_thickness_m: Option<f64>,

    /// Declared insulation year; informative only for walls
    #[serde(default)]
    pub insulation_year: Option<u32>,
}

impl WallSegment {
    /// Deperditive surface in m²
    pub fn area_m2(&self) -> f64 {
        let height = if self.height_m > 0.0 {
            self.height_m
        } else {
            2.5
        };
        self.length_m.max(0.0) * height
    }

    /// Transmittance of the wall (W/m²K)
    pub fn u_value(&self) -> f64 {
        self.material.u_value(self.insulation)
    }

    /// Envelope loss contribution U·S·b in W/K
    pub fn heat_loss(&self) -> f64 {
        self.u_value() * self.area_m2() * self.adjacency.exposure_factor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_table() {
        assert_eq!(
            WallMaterial::Stone.u_value(WallInsulation::None),
            2.5
        );
        assert_eq!(
            WallMaterial::ConcreteBlock.u_value(WallInsulation::Interior),
            0.35
        );
        assert_eq!(
            WallMaterial::TimberFrame.u_value(WallInsulation::Exterior),
            0.25
        );
        // unmatched material resolves on the masonry-block row
        assert_eq!(
            WallMaterial::Other.u_value(WallInsulation::None),
            WallMaterial::ConcreteBlock.u_value(WallInsulation::None)
        );
    }

    #[test]
    fn test_wall_loss_with_exposure() {
        let wall = WallSegment {
            material: WallMaterial::ConcreteBlock,
            insulation: WallInsulation::None,
            length_m: 8.0,
            height_m: 2.5,
            adjacency: Adjacency::Exterior,
            orientation: None,
            insulation_thickness_m: None,
            insulation_year: None,
        };
        assert!((wall.heat_loss() - 30.0).abs() < 1e-9);

        let protected = WallSegment {
            adjacency: Adjacency::HeatedAdjoining,
            ..wall.clone()
        };
        assert_eq!(protected.heat_loss(), 0.0);
    }

    #[test]
    fn test_default_height() {
        let wall = WallSegment {
            material: WallMaterial::Stone,
            insulation: WallInsulation::None,
            length_m: 4.0,
            height_m: 0.0,
            adjacency: Adjacency::Exterior,
            orientation: None,
            insulation_thickness_m: None,
            insulation_year: None,
        };
        assert!((wall.area_m2() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_distributed_keys_uninsulated_bridge_column() {
        assert_eq!(
            WallInsulation::Distributed.bridge_position(),
            InsulationPosition::None
        );
    }
}
