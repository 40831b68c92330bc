//! Circular Statistics
//!
//! Resultant-vector statistics over the directional samples of a
//! choice sequence. Timeouts never contribute a direction; they are
//! filtered out before the sums. R is clamped to [0, 1] so that
//! downstream formulas can divide by (1 - R^2) safely.

use serde::{Deserialize, Serialize};

use super::choice::Choice;

/// Resultant-vector statistics for one choice sequence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircularStats {
    /// Directional sample count (timeouts excluded)
    pub n: usize,
    pub sum_cos: f64,
    pub sum_sin: f64,
    /// Mean resultant length, in [0, 1]; 0 when there are no directional samples
    pub r: f64,
    /// Mean direction, atan2(sum_sin, sum_cos)
    pub mean_direction: f64,
    /// Circular standard deviation around the mean direction
    pub sigma: f64,
}

impl CircularStats {
    pub fn from_choices(choices: &[Choice]) -> Self {
        let angles: Vec<f64> = choices.iter().filter_map(Choice::angle).collect();
        Self::from_angles(&angles)
    }

    pub fn from_angles(angles: &[f64]) -> Self {
        let n = angles.len();
        if n == 0 {
            return Self {
                n: 0,
                sum_cos: 0.0,
                sum_sin: 0.0,
                r: 0.0,
                mean_direction: 0.0,
                sigma: 0.0,
            };
        }

        let mut sum_cos = 0.0;
        let mut sum_sin = 0.0;
        for theta in angles {
            sum_cos += theta.cos();
            sum_sin += theta.sin();
        }

        let r = ((sum_cos * sum_cos + sum_sin * sum_sin).sqrt() / n as f64).clamp(0.0, 1.0);
        let mean_direction = sum_sin.atan2(sum_cos);

        // Deviations are wrapped into (-PI, PI] before squaring
        let squared_deviation: f64 = angles
            .iter()
            .map(|theta| {
                let d = theta - mean_direction;
                let wrapped = d.sin().atan2(d.cos());
                wrapped * wrapped
            })
            .sum();
        let sigma = (squared_deviation / n as f64).sqrt();

        Self {
            n,
            sum_cos,
            sum_sin,
            r,
            mean_direction,
            sigma,
        }
    }
}
