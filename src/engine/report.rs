//! Coherence Report
//!
//! The immutable output value object and its pure assembler. Assembly
//! operates only on already-computed values; it never calls back into
//! the validator or the calculator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::choice::Choice;
use super::classify::{Classification, CoherenceLevel};
use super::estimator::Coefficient;

/// Timeouts beyond this count flag difficulty deciding under time pressure
pub const TIMEOUT_OVERLOAD_THRESHOLD: usize = 5;

/// Kappa value that maps to a full presentation bar
const BAR_FULL_SCALE: f64 = 1.5;

/// Per-symbol tallies with percentage shares of the directional total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceTally {
    pub a_count: usize,
    pub b_count: usize,
    pub timeout_count: usize,
    pub total: usize,
    /// Share of A among directional choices, one decimal place, e.g. "60.0%"
    pub a_percentage: String,
    /// Share of B among directional choices, one decimal place
    pub b_percentage: String,
}

impl ChoiceTally {
    pub fn from_choices(choices: &[Choice]) -> Self {
        let a_count = choices.iter().filter(|c| matches!(c, Choice::A)).count();
        let b_count = choices.iter().filter(|c| matches!(c, Choice::B)).count();
        let timeout_count = choices.len() - a_count - b_count;

        let directional = a_count + b_count;
        let (a_pct, b_pct) = if directional == 0 {
            (0.0, 0.0)
        } else {
            (
                a_count as f64 * 100.0 / directional as f64,
                b_count as f64 * 100.0 / directional as f64,
            )
        };

        Self {
            a_count,
            b_count,
            timeout_count,
            total: choices.len(),
            a_percentage: format!("{a_pct:.1}%"),
            b_percentage: format!("{b_pct:.1}%"),
        }
    }

    pub fn directional_count(&self) -> usize {
        self.a_count + self.b_count
    }
}

/// Final engine output; assembled once per invocation and never mutated.
///
/// Both count semantics observed across the source's revisions are
/// exposed: `total_count` includes timeouts, `directional_count` does not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoherenceReport {
    pub kappa: f64,
    pub r: f64,
    pub total_count: usize,
    pub directional_count: usize,
    pub level: CoherenceLevel,
    pub description: String,
    pub color: String,
    pub emoji: String,
    pub statistics: ChoiceTally,
    pub timeout_overload: bool,
    pub timestamp: DateTime<Utc>,
}

impl CoherenceReport {
    /// Pure assembly over already-computed values. Rounding to the
    /// configured number of decimal places happens here and only here.
    pub fn assemble(
        coefficient: Coefficient,
        classification: Classification,
        tally: ChoiceTally,
        round_digits: u32,
    ) -> Self {
        Self {
            kappa: round_to(coefficient.kappa, round_digits),
            r: round_to(coefficient.r, round_digits),
            total_count: tally.total,
            directional_count: tally.directional_count(),
            level: classification.level,
            description: classification.description,
            color: classification.color,
            emoji: classification.emoji,
            timeout_overload: tally.timeout_count > TIMEOUT_OVERLOAD_THRESHOLD,
            statistics: tally,
            timestamp: Utc::now(),
        }
    }

    /// Presentation scale for a 0-100% coherence bar; kappa at or above
    /// 1.5 fills the bar.
    pub fn bar_percent(&self) -> f64 {
        ((self.kappa / BAR_FULL_SCALE) * 100.0).min(100.0)
    }
}

/// Round to a fixed number of decimal places for report stability
pub(crate) fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}
