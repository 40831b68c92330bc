//! Coefficient Estimation
//!
//! Derives the coherence coefficient kappa from the resultant
//! statistics. The system shipped three formula revisions over its
//! life; all three are kept as selectable modes rather than branching
//! on global flags.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::circular::CircularStats;

/// Saturation ceiling for kappa
pub const KAPPA_CEILING: f64 = 10.0;
/// Below this resultant length the sequence is treated as fully random
pub const R_RANDOM_FLOOR: f64 = 0.001;
/// Above this resultant length the sequence is treated as maximally coherent
pub const R_SATURATION: f64 = 0.999;

/// Formula revision used to derive kappa from the resultant statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CoefficientMode {
    /// kappa = R, no further transform
    Simple,
    /// kappa = R(2 - R^2) / (1 - R^2), guarded and clamped to the ceiling
    ClosedForm,
    /// Closed form with the circular standard deviation added to the denominator
    SigmaCorrected,
}

/// Estimated coefficient, before report rounding
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coefficient {
    pub kappa: f64,
    pub r: f64,
}

impl CoefficientMode {
    /// Derive kappa from the resultant statistics. Numeric edge cases
    /// are absorbed by the guards and never surface as errors.
    pub fn estimate(&self, stats: &CircularStats) -> Coefficient {
        let out = match self {
            CoefficientMode::Simple => Coefficient {
                kappa: stats.r,
                r: stats.r,
            },
            CoefficientMode::ClosedForm => Self::closed_form(stats.r, 0.0),
            CoefficientMode::SigmaCorrected => Self::closed_form(stats.r, stats.sigma),
        };
        debug!(n = stats.n, r = out.r, kappa = out.kappa, "coefficient estimated");
        out
    }

    fn closed_form(r: f64, sigma: f64) -> Coefficient {
        if r < R_RANDOM_FLOOR {
            return Coefficient { kappa: 0.0, r: 0.0 };
        }
        if r > R_SATURATION {
            return Coefficient {
                kappa: KAPPA_CEILING,
                r: 1.0,
            };
        }

        let denominator = (1.0 - r * r) + sigma;
        if denominator <= 0.0 || !denominator.is_finite() {
            return Coefficient {
                kappa: KAPPA_CEILING,
                r,
            };
        }

        let kappa = (r * (2.0 - r * r)) / denominator;
        Coefficient {
            kappa: kappa.min(KAPPA_CEILING),
            r,
        }
    }
}
