//! # Heat-Loss Aggregation
//!
//! Sums the per-element envelope losses, adds junction losses (or the flat
//! surcharge when no wall was declared - never both), adds the air-renewal
//! loss, and derives the per-category shares shown on the report.

use serde::{Deserialize, Serialize};

use crate::bridges::{self, BridgeEstimate};
use crate::dwelling::Dwelling;

/// Volumetric heat capacity of air, Wh/(m³·K)
const AIR_HEAT_CAPACITY: f64 = 0.34;

/// Flat junction surcharge applied when no wall was declared
const NO_WALL_BRIDGE_SURCHARGE: f64 = 1.10;

/// Aggregated losses of one dwelling, all in W/K
#[derive(Debug, Clone)]
pub(crate) struct LossSummary {
    /// Opaque walls, U·S·b
    pub walls_w_per_k: f64,
    /// Lower floors, Ue·S
    pub floors_w_per_k: f64,
    /// Upper floors and roofs, U·S
    pub roofs_w_per_k: f64,
    /// Windows and doors, Uw·S·b
    pub glazing_w_per_k: f64,
    /// Junction terms, empty when the surcharge path applies
    pub bridges: BridgeEstimate,
    /// Envelope total including junctions or the surcharge
    pub envelope_with_bridges_w_per_k: f64,
    /// Air renewal, 0.34·Qvar·S_ref
    pub ventilation_w_per_k: f64,
    /// Building heat-loss coefficient H
    pub total_w_per_k: f64,
    /// Glazed surface collecting solar gains, m²
    pub glazed_area_m2: f64,
}

/// Share of each loss category on the report, in whole percent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LossBreakdown {
    /// Walls including junction losses
    pub walls: f64,
    /// Lower floors
    pub floor: f64,
    /// Upper floors and roofs
    pub roof: f64,
    /// Windows and doors
    pub glazing: f64,
    /// Air renewal
    pub ventilation: f64,
}

/// Aggregate every loss of the dwelling.
pub(crate) fn aggregate(dwelling: &Dwelling, reference_area_m2: f64) -> LossSummary {
    let family = dwelling.climate_zone.family();

    let walls_w_per_k: f64 = dwelling.walls.iter().map(|w| w.heat_loss()).sum();
    let floors_w_per_k: f64 = dwelling
        .floors
        .iter()
        .map(|f| f.heat_loss(family, reference_area_m2))
        .sum();
    let roofs_w_per_k: f64 = dwelling
        .roofs
        .iter()
        .map(|r| r.heat_loss(family, reference_area_m2))
        .sum();
    let glazing_w_per_k: f64 = dwelling.openings.iter().map(|o| o.heat_loss()).sum();
    let glazed_area_m2: f64 = dwelling
        .openings
        .iter()
        .filter(|o| o.counts_as_glazed())
        .map(|o| o.area_m2())
        .sum();

    let envelope = walls_w_per_k + floors_w_per_k + roofs_w_per_k + glazing_w_per_k;

    // Junction estimate and flat surcharge are mutually exclusive
    let (bridges, envelope_with_bridges_w_per_k) = if dwelling.walls.is_empty() {
        (BridgeEstimate::default(), envelope * NO_WALL_BRIDGE_SURCHARGE)
    } else {
        let estimate = bridges::estimate(
            &dwelling.walls,
            &dwelling.openings,
            &dwelling.floors,
            &dwelling.roofs,
            dwelling.effective_levels(),
        );
        let with_bridges = envelope + estimate.total_w_per_k;
        (estimate, with_bridges)
    };

    let ventilation_w_per_k =
        AIR_HEAT_CAPACITY * dwelling.ventilation.air_renewal_coefficient() * reference_area_m2;

    let summary = LossSummary {
        walls_w_per_k,
        floors_w_per_k,
        roofs_w_per_k,
        glazing_w_per_k,
        bridges,
        envelope_with_bridges_w_per_k,
        ventilation_w_per_k,
        total_w_per_k: envelope_with_bridges_w_per_k + ventilation_w_per_k,
        glazed_area_m2,
    };
    tracing::debug!(
        envelope = summary.envelope_with_bridges_w_per_k,
        ventilation = summary.ventilation_w_per_k,
        total = summary.total_w_per_k,
        "aggregated dwelling heat loss"
    );
    summary
}

impl LossSummary {
    /// Per-category shares for the report. Junction losses count with the
    /// walls that anchor them; the denominator is floored at 1 W/K so a
    /// degenerate dwelling still yields finite shares.
    pub(crate) fn breakdown(&self) -> LossBreakdown {
        let walls = self.walls_w_per_k + self.bridges.total_w_per_k;
        let total = (walls
            + self.floors_w_per_k
            + self.roofs_w_per_k
            + self.glazing_w_per_k
            + self.ventilation_w_per_k)
            .max(1.0);
        let share = |category: f64| (category / total * 100.0).round();
        LossBreakdown {
            walls: share(walls),
            floor: share(self.floors_w_per_k),
            roof: share(self.roofs_w_per_k),
            glazing: share(self.glazing_w_per_k),
            ventilation: share(self.ventilation_w_per_k),
        }
    }
}
