//! # Ventilation
//!
//! Conventional air-renewal coefficient Qvar (m³/h per m² of habitable
//! surface) per §4 of the method. The table is keyed by system kind and,
//! for powered systems, by the installation period of the extraction unit;
//! hygro-controlled variants share their pre-2001 cell across the two
//! oldest periods, double-flow systems only distinguish before and after
//! 2012. A declaration without a period resolves on the oldest - least
//! favorable - bucket.

use serde::{Deserialize, Serialize};

/// Ventilation system kind, the full catalogue of §4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VentilationKind {
    // natural / passive
    /// Renewal by manually opening windows, no dedicated system
    WindowOpening,
    /// High and low fixed air vents, no fan
    HighLowVents,
    /// Natural stack-duct ventilation
    NaturalDuct,
    /// Natural stack ducts with humidity-controlled inlets
    NaturalDuctHumidity,
    // simple flow
    /// Constant-rate simple-flow mechanical extraction
    SimpleFlowAuto,
    /// Simple flow, humidity-controlled inlets (hygro A)
    SimpleFlowHygroA,
    /// Simple flow, humidity-controlled inlets and outlets (hygro B)
    SimpleFlowHygroB,
    /// Gas-coupled extraction in the kitchen
    SimpleFlowGas,
    /// Low-pressure constant-rate extraction
    LowPressureAuto,
    /// Low-pressure, hygro A
    LowPressureHygroA,
    /// Low-pressure, hygro B
    LowPressureHygroB,
    /// Mechanical extractor retrofitted on an existing natural duct
    DuctRetrofit,
    // double flow
    /// Per-dwelling double flow with heat exchanger
    DoubleFlowIndividual,
    /// Building-wide double flow with heat exchanger
    DoubleFlowCollective,
    /// Double flow without heat recovery
    DoubleFlowNoExchanger,
    /// Earth tube supply without exchanger
    EarthTubeNoExchanger,
    /// Earth tube supply with air/air exchanger
    EarthTubeWithExchanger,
    // hybrid
    /// Natural ventilation assisted by a low-pressure extractor
    HybridAuto,
    /// Hybrid with humidity-controlled inlets
    HybridHygro,
}

impl VentilationKind {
    /// All ventilation kind variants for UI selection
    pub const ALL: [VentilationKind; 19] = [
        VentilationKind::WindowOpening,
        VentilationKind::HighLowVents,
        VentilationKind::NaturalDuct,
        VentilationKind::NaturalDuctHumidity,
        VentilationKind::SimpleFlowAuto,
        VentilationKind::SimpleFlowHygroA,
        VentilationKind::SimpleFlowHygroB,
        VentilationKind::SimpleFlowGas,
        VentilationKind::LowPressureAuto,
        VentilationKind::LowPressureHygroA,
        VentilationKind::LowPressureHygroB,
        VentilationKind::DuctRetrofit,
        VentilationKind::DoubleFlowIndividual,
        VentilationKind::DoubleFlowCollective,
        VentilationKind::DoubleFlowNoExchanger,
        VentilationKind::EarthTubeNoExchanger,
        VentilationKind::EarthTubeWithExchanger,
        VentilationKind::HybridAuto,
        VentilationKind::HybridHygro,
    ];
}

/// Installation period of the extraction unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallPeriod {
    Before1982,
    From1982To2000,
    From2001To2012,
    After2012,
}

/// Declared ventilation of the dwelling.
///
/// A missing kind resolves on manual window opening, a missing period on
/// the oldest bucket of the declared system.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VentilationSystem {
    /// System kind
    #[serde(default)]
    pub kind: Option<VentilationKind>,

    /// Installation period of the unit, powered systems only
    #[serde(default)]
    pub period: Option<InstallPeriod>,
}

impl VentilationSystem {
    /// Conventional air-renewal coefficient Qvar, m³/(h·m²)
    pub fn air_renewal_coefficient(&self) -> f64 {
        use InstallPeriod::*;
        use VentilationKind::*;

        let kind = match self.kind {
            Some(kind) => kind,
            None => {
                tracing::debug!("ventilation undeclared, assuming manual window opening");
                return 1.20;
            }
        };
        let p = self.period;

        match kind {
            WindowOpening => 1.20,
            HighLowVents | NaturalDuct => 2.23,
            NaturalDuctHumidity => 1.24,

            SimpleFlowAuto => match p {
                None | Some(Before1982) => 1.97,
                Some(From1982To2000) => 1.65,
                Some(From2001To2012) => 1.50,
                Some(After2012) => 1.32,
            },
            SimpleFlowHygroA => match p {
                None | Some(Before1982) | Some(From1982To2000) => 1.50,
                Some(From2001To2012) => 1.44,
                Some(After2012) => 1.16,
            },
            SimpleFlowHygroB => match p {
                None | Some(Before1982) | Some(From1982To2000) => 1.36,
                Some(From2001To2012) => 1.24,
                Some(After2012) => 1.09,
            },
            SimpleFlowGas => match p {
                None | Some(Before1982) | Some(From1982To2000) => 1.59,
                Some(From2001To2012) => 1.53,
                Some(After2012) => 1.22,
            },
            LowPressureAuto => 1.97,
            LowPressureHygroA => 1.30,
            LowPressureHygroB => 1.24,
            DuctRetrofit => match p {
                Some(After2012) => 1.97,
                _ => 2.24,
            },

            DoubleFlowIndividual => match p {
                Some(After2012) => 0.26,
                _ => 0.60,
            },
            DoubleFlowCollective => match p {
                Some(After2012) => 0.46,
                _ => 0.75,
            },
            DoubleFlowNoExchanger => match p {
                Some(After2012) => 1.32,
                _ => 1.65,
            },
            EarthTubeNoExchanger => match p {
                Some(After2012) => 1.32,
                _ => 1.65,
            },
            EarthTubeWithExchanger => match p {
                Some(After2012) => 0.26,
                _ => 0.60,
            },

            HybridAuto | HybridHygro => match p {
                None | Some(Before1982) | Some(From1982To2000) => 1.52,
                Some(From2001To2012) => 1.33,
                Some(After2012) => 1.17,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system(kind: VentilationKind, period: Option<InstallPeriod>) -> VentilationSystem {
        VentilationSystem {
            kind: Some(kind),
            period,
        }
    }

    #[test]
    fn test_passive_rates() {
        assert_eq!(
            system(VentilationKind::WindowOpening, None).air_renewal_coefficient(),
            1.20
        );
        assert_eq!(
            system(VentilationKind::HighLowVents, None).air_renewal_coefficient(),
            2.23
        );
    }

    #[test]
    fn test_simple_flow_periods() {
        let k = VentilationKind::SimpleFlowAuto;
        assert_eq!(
            system(k, Some(InstallPeriod::Before1982)).air_renewal_coefficient(),
            1.97
        );
        assert_eq!(
            system(k, Some(InstallPeriod::From2001To2012)).air_renewal_coefficient(),
            1.50
        );
        assert_eq!(
            system(k, Some(InstallPeriod::After2012)).air_renewal_coefficient(),
            1.32
        );
    }

    #[test]
    fn test_hygro_shares_oldest_cell() {
        let k = VentilationKind::SimpleFlowHygroB;
        assert_eq!(
            system(k, Some(InstallPeriod::Before1982)).air_renewal_coefficient(),
            system(k, Some(InstallPeriod::From1982To2000)).air_renewal_coefficient()
        );
    }

    #[test]
    fn test_double_flow_two_buckets() {
        let k = VentilationKind::DoubleFlowIndividual;
        assert_eq!(
            system(k, Some(InstallPeriod::From2001To2012)).air_renewal_coefficient(),
            0.60
        );
        assert_eq!(
            system(k, Some(InstallPeriod::After2012)).air_renewal_coefficient(),
            0.26
        );
    }

    #[test]
    fn test_missing_period_is_least_favorable() {
        for kind in VentilationKind::ALL {
            let undated = system(kind, None).air_renewal_coefficient();
            for period in [
                InstallPeriod::Before1982,
                InstallPeriod::From1982To2000,
                InstallPeriod::From2001To2012,
                InstallPeriod::After2012,
            ] {
                assert!(
                    system(kind, Some(period)).air_renewal_coefficient() <= undated,
                    "{kind:?} dated worse than undated"
                );
            }
        }
    }

    #[test]
    fn test_undeclared_system_fallback() {
        assert_eq!(VentilationSystem::default().air_renewal_coefficient(), 1.20);
    }
}
