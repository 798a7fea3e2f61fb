//! # Windows and Doors
//!
//! Transmittance of glazed and mixed openings (Uw). Windows resolve on the
//! glazing table alone; doors carry an opaque coefficient per leaf
//! material, prorated against the glazing when a glazed fraction is
//! declared. Only doors see an adjacency factor - windows are assumed to
//! face the outside.

use serde::{Deserialize, Serialize};

use super::{round2, Adjacency, Orientation};

/// Kind of opening
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpeningKind {
    /// Casement or sliding window
    Window,
    /// Glazed door-height window
    FrenchDoor,
    /// Roof window
    RoofWindow,
    /// Fully opaque door
    SolidDoor,
    /// Door with a partial glazed panel
    GlazedDoor,
}

impl OpeningKind {
    /// All opening kind variants for UI selection
    pub const ALL: [OpeningKind; 5] = [
        OpeningKind::Window,
        OpeningKind::FrenchDoor,
        OpeningKind::RoofWindow,
        OpeningKind::SolidDoor,
        OpeningKind::GlazedDoor,
    ];

    /// Doors resolve on the leaf-material table and carry an adjacency
    pub fn is_door(&self) -> bool {
        matches!(self, OpeningKind::SolidDoor | OpeningKind::GlazedDoor)
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            OpeningKind::Window => "Window",
            OpeningKind::FrenchDoor => "French door",
            OpeningKind::RoofWindow => "Roof window",
            OpeningKind::SolidDoor => "Solid door",
            OpeningKind::GlazedDoor => "Partially glazed door",
        }
    }
}

/// Glazing category, identifiable on site by counting flame reflections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Glazing {
    /// Single glazing
    Single,
    /// Air-filled double glazing, typically pre-2000
    DoubleOld,
    /// Argon / low-emissivity double glazing
    DoubleRecent,
    /// Triple glazing
    Triple,
}

impl Glazing {
    /// All glazing variants for UI selection
    pub const ALL: [Glazing; 4] = [
        Glazing::Single,
        Glazing::DoubleOld,
        Glazing::DoubleRecent,
        Glazing::Triple,
    ];

    /// Transmittance (W/m²K)
    pub fn u_value(&self) -> f64 {
        match self {
            Glazing::Single => 5.8,
            Glazing::DoubleOld => 2.9,
            Glazing::DoubleRecent => 1.4,
            Glazing::Triple => 0.8,
        }
    }
}

/// Frame material. Collected for the report; the simplified glazing table
/// already averages over frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameMaterial {
    Wood,
    Pvc,
    MetalNoBreak,
    MetalThermalBreak,
}

/// Door leaf material with its opaque reference coefficient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoorMaterial {
    /// Solid timber leaf
    SolidWood,
    /// Timber sandwich with insulating core
    InsulatedWood,
    /// Plain steel leaf
    Steel,
    /// Steel leaf with thermal break
    InsulatedSteel,
    /// Plain aluminium leaf
    Aluminium,
    /// Aluminium leaf with thermal break
    AluminiumThermalBreak,
    /// PVC leaf
    Pvc,
    /// Unrecognized declaration
    Other,
}

impl DoorMaterial {
    /// Opaque transmittance of the leaf (W/m²K)
    pub fn opaque_u(&self) -> f64 {
        match self {
            DoorMaterial::SolidWood => 1.5,
            DoorMaterial::InsulatedWood => 0.8,
            DoorMaterial::Steel => 4.0,
            DoorMaterial::InsulatedSteel => 1.2,
            DoorMaterial::Aluminium => 3.5,
            DoorMaterial::AluminiumThermalBreak => 1.8,
            DoorMaterial::Pvc => 1.2,
            DoorMaterial::Other => 2.0,
        }
    }
}

/// Near-mask category in front of the opening. Collected for the report;
/// the annual approximation applies a fixed utilization factor to solar
/// gains instead of integrating masks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolarMask {
    None,
    OverhangUnder1m,
    Overhang1To2m,
    Overhang2To3m,
    OverhangOver3m,
    Loggia,
    SideWall,
}

/// One opening (window, french door, roof window or door), as declared by
/// the description workflow.
///
/// ## JSON Example
///
/// ```json
/// {
///   "kind": "window",
///   "width_m": 1.2,
///   "height_m": 1.2,
///   "count": 2,
///   "glazing": "double_recent",
///   "frame": "pvc"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Opening {
    /// Kind of opening
    pub kind: OpeningKind,

    /// Leaf width in meters; non-positive falls back to 1.2
    pub width_m: f64,

    /// Leaf height in meters; non-positive falls back to 1.2
    pub height_m: f64,

    /// Number of identical openings; zero counts as one
    #[serde(default = "default_count")]
    pub count: u32,

    /// Glazing category; missing resolves on older double glazing
    #[serde(default)]
    pub glazing: Option<Glazing>,

    /// Frame material, kept for the report
    #[serde(default)]
    pub frame: Option<FrameMaterial>,

    /// What lies behind the opening; applied to doors only
    #[serde(default)]
    pub adjacency: Adjacency,

    /// Door leaf material; missing resolves on the default leaf
    #[serde(default)]
    pub door_material: Option<DoorMaterial>,

    /// Glazed fraction of a door leaf, percent of the leaf surface
    #[serde(default)]
    pub glazed_fraction_pct: f64,

    /// Near-mask category, kept for the report
    #[serde(default)]
    pub mask: Option<SolarMask>,

    /// Facade orientation, kept for the report
    #[serde(default)]
    pub orientation: Option<Orientation>,
}

fn default_count() -> u32 {
    1
}

impl Opening {
    fn width(&self) -> f64 {
        if self.width_m > 0.0 {
            self.width_m
        } else {
            1.2
        }
    }

    fn height(&self) -> f64 {
        if self.height_m > 0.0 {
            self.height_m
        } else {
            1.2
        }
    }

    fn effective_count(&self) -> f64 {
        if self.count == 0 {
            1.0
        } else {
            f64::from(self.count)
        }
    }

    /// Total surface over all identical openings, m²
    pub fn area_m2(&self) -> f64 {
        self.width() * self.height() * self.effective_count()
    }

    /// Resolved glazing coefficient, defaulting to older double glazing
    fn glazing_u(&self) -> f64 {
        match self.glazing {
            Some(glazing) => glazing.u_value(),
            None => {
                tracing::debug!("opening without glazing category, assuming older double glazing");
                Glazing::DoubleOld.u_value()
            }
        }
    }

    /// Transmittance Uw of the opening (W/m²K)
    pub fn u_value(&self) -> f64 {
        if !self.kind.is_door() {
            return self.glazing_u();
        }
        let opaque = self
            .door_material
            .unwrap_or(DoorMaterial::Other)
            .opaque_u();
        let fraction = self.glazed_fraction_pct / 100.0;
        if fraction <= 0.0 {
            return opaque;
        }
        round2(opaque * (1.0 - fraction) + self.glazing_u() * fraction)
    }

    /// Exposure factor; windows always face the outside
    pub fn exposure_factor(&self) -> f64 {
        if self.kind.is_door() {
            self.adjacency.exposure_factor()
        } else {
            1.0
        }
    }

    /// Envelope loss contribution Uw·S·b in W/K
    pub fn heat_loss(&self) -> f64 {
        self.u_value() * self.area_m2() * self.exposure_factor()
    }

    /// Glazed surfaces collect solar gains; doors do not
    pub fn counts_as_glazed(&self) -> bool {
        !self.kind.is_door()
    }

    /// Total frame-to-wall junction length over all identical openings, m.
    ///
    /// Door-height leaves meet the wall on three sides only.
    pub fn junction_length_m(&self) -> f64 {
        let perimeter = match self.kind {
            OpeningKind::SolidDoor | OpeningKind::FrenchDoor => {
                2.0 * self.height() + self.width()
            }
            OpeningKind::Window | OpeningKind::RoofWindow | OpeningKind::GlazedDoor => {
                2.0 * (self.width() + self.height())
            }
        };
        perimeter * self.effective_count()
    }
}
