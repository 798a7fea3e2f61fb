//! # Climate Zones
//!
//! The eight conventional French climate zones of the 3CL-DPE 2021 method,
//! each bound to a fixed annual heating degree-day constant (DJU). The
//! coarser three-way family (H1/H2/H3) selects the column of the
//! insulation-era lookup tables for floors and roofs.

use serde::{Deserialize, Serialize};

/// Conventional climate zone (arrêté du 31/03/2021, annexe 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClimateZone {
    H1a,
    H1b,
    H1c,
    H2a,
    H2b,
    H2c,
    H2d,
    H3,
}

impl ClimateZone {
    /// All climate zone variants for UI selection
    pub const ALL: [ClimateZone; 8] = [
        ClimateZone::H1a,
        ClimateZone::H1b,
        ClimateZone::H1c,
        ClimateZone::H2a,
        ClimateZone::H2b,
        ClimateZone::H2c,
        ClimateZone::H2d,
        ClimateZone::H3,
    ];

    /// Annual heating degree-days (base 18 °C) for the zone
    pub fn degree_days(&self) -> f64 {
        match self {
            ClimateZone::H1a => 3500.0,
            ClimateZone::H1b => 3200.0,
            ClimateZone::H1c => 2900.0,
            ClimateZone::H2a => 2400.0,
            ClimateZone::H2b => 2300.0,
            ClimateZone::H2c => 2000.0,
            ClimateZone::H2d => 2700.0,
            ClimateZone::H3 => 1500.0,
        }
    }

    /// Three-way zone family used as column key in the era tables
    pub fn family(&self) -> ZoneFamily {
        match self {
            ClimateZone::H1a | ClimateZone::H1b | ClimateZone::H1c => ZoneFamily::H1,
            ClimateZone::H2a | ClimateZone::H2b | ClimateZone::H2c | ClimateZone::H2d => {
                ZoneFamily::H2
            }
            ClimateZone::H3 => ZoneFamily::H3,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            ClimateZone::H1a => "H1a",
            ClimateZone::H1b => "H1b",
            ClimateZone::H1c => "H1c",
            ClimateZone::H2a => "H2a",
            ClimateZone::H2b => "H2b",
            ClimateZone::H2c => "H2c",
            ClimateZone::H2d => "H2d",
            ClimateZone::H3 => "H3",
        }
    }
}

impl std::fmt::Display for ClimateZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Coarse zone family - column key of the floor/roof era tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneFamily {
    H1,
    H2,
    H3,
}

impl ZoneFamily {
    /// Column index into the era-table rows
    pub(crate) fn column(&self) -> usize {
        match self {
            ZoneFamily::H1 => 0,
            ZoneFamily::H2 => 1,
            ZoneFamily::H3 => 2,
        }
    }
}

/// Altitude correction on the degree-day total.
///
/// Dwellings above 400 m see a longer, colder heating season than the zone
/// average; the method applies a flat multiplier per altitude band.
pub fn altitude_factor(altitude_m: f64) -> f64 {
    if altitude_m > 800.0 {
        1.30
    } else if altitude_m > 400.0 {
        1.12
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_days() {
        assert_eq!(ClimateZone::H1a.degree_days(), 3500.0);
        assert_eq!(ClimateZone::H3.degree_days(), 1500.0);
    }

    #[test]
    fn test_zone_families() {
        assert_eq!(ClimateZone::H1c.family(), ZoneFamily::H1);
        assert_eq!(ClimateZone::H2d.family(), ZoneFamily::H2);
        assert_eq!(ClimateZone::H3.family(), ZoneFamily::H3);
    }

    #[test]
    fn test_altitude_bands() {
        assert_eq!(altitude_factor(100.0), 1.0);
        assert_eq!(altitude_factor(400.0), 1.0);
        assert_eq!(altitude_factor(401.0), 1.12);
        assert_eq!(altitude_factor(800.0), 1.12);
        assert_eq!(altitude_factor(1200.0), 1.30);
    }
}
