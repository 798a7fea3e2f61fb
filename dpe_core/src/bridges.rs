//! # Thermal Bridges
//!
//! Linear junction losses per §3.4 of the method, estimated from forfait
//! Ψ matrices keyed by insulation position. Five junction families are
//! covered; floor/wall and roof/wall junctions only exist for heavyweight
//! structures, and the partition-wall length is taken as a fixed quarter
//! of the deperditive wall length - the method's structural-partition
//! proxy for dwellings described without interior plans.
//!
//! When no wall at all was declared there is nothing to anchor the
//! junction lengths to; the caller applies a flat +10 % envelope
//! surcharge instead, never both.

use serde::{Deserialize, Serialize};

use crate::envelope::{FloorSlab, InsulationPosition, Opening, RoofSurface, WallSegment};

/// Junction family of a linear bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Junction {
    /// Lowest floor meeting the facade
    FloorWall,
    /// Upper floor or roof meeting the facade
    RoofWall,
    /// Intermediate floors meeting the facade
    IntermediateFloorWall,
    /// Interior load-bearing partitions meeting the facade
    PartitionWall,
    /// Window and door frames meeting the facade
    OpeningWall,
}

impl Junction {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Junction::FloorWall => "Lower floor / wall",
            Junction::RoofWall => "Upper floor / wall",
            Junction::IntermediateFloorWall => "Intermediate floor / wall",
            Junction::PartitionWall => "Partition / wall",
            Junction::OpeningWall => "Frame / wall",
        }
    }
}

/// One resolved junction term
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeContribution {
    /// Junction family
    pub junction: Junction,
    /// Junction length in meters, rounded to 0.1 m
    pub length_m: f64,
    /// Linear coefficient Ψ in W/(m·K)
    pub psi_w_per_mk: f64,
    /// Ψ·L loss in W/K, rounded to 0.1 W/K
    pub loss_w_per_k: f64,
}

/// All junction terms of a dwelling with their rounded total
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BridgeEstimate {
    /// Individual junction terms, in resolution order
    pub contributions: Vec<BridgeContribution>,
    /// Sum of the rounded terms, rounded to 0.1 W/K
    pub total_w_per_k: f64,
}

/// Ψ lower-floor/wall, by (floor insulation, wall insulation)
fn floor_wall_psi(floor: InsulationPosition, wall: InsulationPosition) -> f64 {
    let row = match floor {
        InsulationPosition::None => (0.39, 0.31, 0.49, 0.31),
        InsulationPosition::Interior => (0.47, 0.08, 0.48, 0.08),
        InsulationPosition::Exterior => (0.80, 0.71, 0.64, 0.45),
        InsulationPosition::Combined => (0.47, 0.08, 0.48, 0.08),
    };
    wall.pick(row)
}

/// Ψ upper-floor/wall, by (roof insulation, wall insulation)
fn roof_wall_psi(roof: InsulationPosition, wall: InsulationPosition) -> f64 {
    let row = match roof {
        InsulationPosition::None => (0.30, 0.27, 0.55, 0.27),
        InsulationPosition::Interior => (0.83, 0.07, 0.76, 0.07),
        InsulationPosition::Exterior => (0.40, 0.75, 0.58, 0.58),
        InsulationPosition::Combined => (0.40, 0.07, 0.58, 0.07),
    };
    wall.pick(row)
}

/// Ψ intermediate-floor/wall, by wall insulation
fn intermediate_floor_psi(wall: InsulationPosition) -> f64 {
    wall.pick((0.86, 0.92, 0.13, 0.13))
}

/// Ψ partition/wall, by wall insulation
fn partition_psi(wall: InsulationPosition) -> f64 {
    wall.pick((0.73, 0.82, 0.13, 0.13))
}

/// Ψ frame/wall, by wall insulation
fn opening_psi(wall: InsulationPosition) -> f64 {
    wall.pick((0.45, 0.35, 0.10, 0.10))
}

/// Round a length or loss to the 0.1 precision of the method
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Insulation position occurring most often among deperditive walls.
/// Ties resolve on the first-encountered scheme; no walls resolve on
/// uninsulated.
fn dominant_wall_insulation(walls: &[&WallSegment]) -> InsulationPosition {
    let mut counts: Vec<(InsulationPosition, usize)> = Vec::new();
    for wall in walls {
        let position = wall.insulation.bridge_position();
        match counts.iter_mut().find(|(p, _)| *p == position) {
            Some((_, n)) => *n += 1,
            None => counts.push((position, 1)),
        }
    }
    let mut dominant = InsulationPosition::None;
    let mut best = 0usize;
    for (position, n) in counts {
        if n > best {
            best = n;
            dominant = position;
        }
    }
    dominant
}

/// Estimate every junction term of the dwelling.
///
/// Returns an empty estimate when no wall was declared; the aggregation
/// then falls back to the flat envelope surcharge.
pub fn estimate(
    walls: &[WallSegment],
    openings: &[Opening],
    floors: &[FloorSlab],
    roofs: &[RoofSurface],
    heated_levels: u32,
) -> BridgeEstimate {
    if walls.is_empty() {
        return BridgeEstimate::default();
    }
    let deperditive: Vec<&WallSegment> = walls
        .iter()
        .filter(|w| w.adjacency.is_deperditive())
        .collect();
    let wall_length: f64 = deperditive.iter().map(|w| w.length_m.max(0.0)).sum();
    let wall_iso = dominant_wall_insulation(&deperditive);

    // First heavyweight element fixes the junction's insulation key
    let floor_iso = floors
        .iter()
        .find(|f| f.structure.is_heavyweight())
        .map(|f| f.insulation.bridge_position());
    let roof_iso = roofs
        .iter()
        .find(|r| r.structure.is_heavyweight())
        .map(|r| r.insulation.bridge_position());

    let opening_length: f64 = openings.iter().map(|o| o.junction_length_m()).sum();

    let mut contributions = Vec::new();
    let mut push = |junction: Junction, length_m: f64, psi: f64| {
        let length = round1(length_m);
        contributions.push(BridgeContribution {
            junction,
            length_m: length,
            psi_w_per_mk: psi,
            loss_w_per_k: round1(length * psi),
        });
    };

    if wall_length > 0.0 {
        if let Some(floor_iso) = floor_iso {
            push(
                Junction::FloorWall,
                wall_length,
                floor_wall_psi(floor_iso, wall_iso),
            );
        }
        if let Some(roof_iso) = roof_iso {
            push(
                Junction::RoofWall,
                wall_length,
                roof_wall_psi(roof_iso, wall_iso),
            );
        }
        if heated_levels > 1 {
            push(
                Junction::IntermediateFloorWall,
                wall_length * f64::from(heated_levels - 1),
                intermediate_floor_psi(wall_iso),
            );
        }
        push(
            Junction::PartitionWall,
            wall_length * 0.25,
            partition_psi(wall_iso),
        );
    }
    if opening_length > 0.0 {
        push(Junction::OpeningWall, opening_length, opening_psi(wall_iso));
    }

    let total = round1(contributions.iter().map(|c| c.loss_w_per_k).sum());
    BridgeEstimate {
        contributions,
        total_w_per_k: total,
    }
}
