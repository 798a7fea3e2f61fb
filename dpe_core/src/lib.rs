//! # dpe_core - Dwelling Energy-Performance Engine
//!
//! `dpe_core` estimates a dwelling's regulatory energy-performance grade
//! with a simplified variant of the French 3CL-DPE 2021 conventional
//! method. It is the computational heart of OpenDPE: the description
//! workflow, map-based enrichment, report rendering and persistence all
//! live elsewhere and talk to this crate through one pair of
//! JSON-serializable structures.
//!
//! The result is indicative and non-opposable - a guidance figure for
//! non-experts, not a certified diagnostic.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: one pure function from snapshot to report
//! - **JSON-First**: all inputs and outputs implement Serialize/Deserialize
//! - **Total**: every table lookup has a documented conservative fallback;
//!   the only non-result is the insufficient-floor-area outcome
//! - **Frozen constants**: coefficient tables are immutable data, injected
//!   where a caller may legitimately pin them (conversion factors)
//!
//! ## Quick Start
//!
//! ```rust
//! use dpe_core::climate::ClimateZone;
//! use dpe_core::dwelling::{Dwelling, Room, SnapshotMetadata};
//!
//! let dwelling = Dwelling {
//!     meta: SnapshotMetadata::default(),
//!     climate_zone: ClimateZone::H1a,
//!     altitude_m: 100.0,
//!     heated_levels: 1,
//!     rooms: vec![Room { name: "Salon".into(), surface_m2: 20.0, ceiling_height_m: 2.5 }],
//!     walls: vec![],
//!     floors: vec![],
//!     roofs: vec![],
//!     openings: vec![],
//!     ventilation: Default::default(),
//!     heating: Default::default(),
//!     dhw: Default::default(),
//! };
//!
//! let report = dpe_core::assess(&dwelling).unwrap();
//! println!("grade {}", report.grade);
//! ```
//!
//! ## Modules
//!
//! - [`dwelling`] - the input snapshot structure
//! - [`climate`] - climate zones and degree-days
//! - [`envelope`] - per-element transmittance resolution
//! - [`bridges`] - linear junction losses
//! - [`ventilation`] - air-renewal coefficients
//! - [`systems`] - heating and hot-water generators, fuels
//! - [`engine`] - the assessment pass and its report
//! - [`rating`] - the double-threshold classification
//! - [`errors`] - structured error types

pub mod bridges;
pub mod climate;
pub mod dwelling;
pub mod engine;
pub mod envelope;
pub mod errors;
pub mod rating;
pub mod systems;
pub mod ventilation;

// Re-export commonly used types at crate root for convenience
pub use dwelling::Dwelling;
pub use engine::{assess, assess_with_factors, EnergyReport};
pub use errors::{DpeError, DpeResult};
pub use rating::EnergyClass;
