//! # Dwelling Snapshot
//!
//! The validated input structure handed over by the description workflow.
//! A snapshot is immutable for the duration of an assessment - the engine
//! reads it, never writes it - so batch runs over many dwellings can share
//! nothing and still be evaluated in parallel.
//!
//! ## Structure
//!
//! ```text
//! Dwelling
//! ├── meta: SnapshotMetadata (id, creation timestamp)
//! ├── climate_zone, altitude_m, heated_levels
//! ├── rooms: Vec<Room> (drives the reference floor area)
//! ├── walls / floors / roofs / openings: envelope elements
//! └── ventilation / heating / dhw: system declarations
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::climate::ClimateZone;
use crate::envelope::{FloorSlab, Opening, RoofSurface, WallSegment};
use crate::systems::{DhwSystem, HeatingSystem};
use crate::ventilation::VentilationSystem;

/// Smallest reference floor area the method will rate (m²)
pub const MIN_REFERENCE_AREA_M2: f64 = 5.0;

/// Identity of a snapshot, assigned by the collection workflow and kept
/// through the persistence layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    /// Stable snapshot identifier
    pub id: Uuid,
    /// Creation time of the snapshot
    pub created: DateTime<Utc>,
}

impl Default for SnapshotMetadata {
    fn default() -> Self {
        SnapshotMetadata {
            id: Uuid::new_v4(),
            created: Utc::now(),
        }
    }
}

/// One declared habitable room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Room label (e.g. "Salon")
    #[serde(default)]
    pub name: String,

    /// Habitable surface in m²
    pub surface_m2: f64,

    /// Ceiling height in meters
    #[serde(default = "default_ceiling_height")]
    pub ceiling_height_m: f64,
}

fn default_ceiling_height() -> f64 {
    2.5
}

/// Full dwelling description, the engine's sole input.
///
/// ## JSON Example
///
/// ```json
/// {
///   "climate_zone": "H1a",
///   "altitude_m": 100.0,
///   "heated_levels": 1,
///   "rooms": [{ "name": "Salon", "surface_m2": 20.0 }],
///   "walls": [],
///   "floors": [],
///   "roofs": [],
///   "openings": [],
///   "ventilation": {},
///   "heating": { "declared_unknown": true },
///   "dhw": { "declared_unknown": true }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dwelling {
    /// Snapshot identity, carried through to the report consumers
    #[serde(default)]
    pub meta: SnapshotMetadata,

    /// Conventional climate zone
    pub climate_zone: ClimateZone,

    /// Altitude of the building in meters
    #[serde(default)]
    pub altitude_m: f64,

    /// Number of heated levels; zero reads as one
    #[serde(default = "default_levels")]
    pub heated_levels: u32,

    /// Declared habitable rooms
    pub rooms: Vec<Room>,

    /// Opaque wall runs
    #[serde(default)]
    pub walls: Vec<WallSegment>,

    /// Lower floor slabs
    #[serde(default)]
    pub floors: Vec<FloorSlab>,

    /// Upper floors and roofs
    #[serde(default)]
    pub roofs: Vec<RoofSurface>,

    /// Windows and doors
    #[serde(default)]
    pub openings: Vec<Opening>,

    /// Ventilation declaration
    #[serde(default)]
    pub ventilation: VentilationSystem,

    /// Heating declaration
    #[serde(default)]
    pub heating: HeatingSystem,

    /// Domestic-hot-water declaration
    #[serde(default)]
    pub dhw: DhwSystem,
}

fn default_levels() -> u32 {
    1
}

impl Dwelling {
    /// Reference floor area S_ref: the sum of declared room surfaces,
    /// negative declarations ignored
    pub fn reference_floor_area(&self) -> f64 {
        self.rooms.iter().map(|r| r.surface_m2.max(0.0)).sum()
    }

    /// Heated levels with the zero-declaration guard applied
    pub fn effective_levels(&self) -> u32 {
        self.heated_levels.max(1)
    }
}
