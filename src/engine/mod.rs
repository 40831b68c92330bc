//! Coherence Engine
//!
//! Circular-statistics scoring of binary decision sequences. Each
//! choice becomes a point on the unit circle (A at 0, B at 180
//! degrees), the mean resultant length R measures how tightly the
//! sequence clusters around one direction, and the kappa coefficient
//! plus a four-tier qualitative level summarize the pattern.
//!
//! The engine is stateless and synchronous; every call computes a
//! fresh report from its own input.

mod choice;
mod circular;
mod classify;
mod estimator;
mod report;
mod session;
mod validate;

pub use choice::{Alphabet, Choice};
pub use circular::CircularStats;
pub use classify::{Classification, ClassificationPreset, CoherenceLevel};
pub use estimator::{Coefficient, CoefficientMode, KAPPA_CEILING};
pub use report::{ChoiceTally, CoherenceReport, TIMEOUT_OVERLOAD_THRESHOLD};
pub use session::CoherenceSession;
pub use validate::{validate_choices, validate_symbols};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Policy for zero-length input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyPolicy {
    /// Empty input yields the degenerate zero report (historical behavior)
    ZeroReport,
    /// Empty input fails with [`Error::EmptySequence`]
    Reject,
}

/// Engine configuration: formula revision, threshold preset, accepted
/// alphabet, empty-input policy, and report rounding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub coefficient_mode: CoefficientMode,
    pub classification_preset: ClassificationPreset,
    pub alphabet: Alphabet,
    pub empty_policy: EmptyPolicy,
    /// Decimal places kept in the reported kappa and R (3 or 4 across
    /// the source's revisions)
    pub round_digits: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            coefficient_mode: CoefficientMode::ClosedForm,
            classification_preset: ClassificationPreset::FourLevelKappa,
            alphabet: Alphabet::two_symbol(),
            empty_policy: EmptyPolicy::ZeroReport,
            round_digits: 4,
        }
    }
}

/// Stateless scoring engine
#[derive(Debug, Clone, Default)]
pub struct CoherenceEngine {
    config: EngineConfig,
}

impl CoherenceEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validate, decode, and score a raw symbol sequence. This is the
    /// engine's single logical boundary call for untyped callers.
    pub fn report_from_symbols<S: AsRef<str>>(
        &self,
        symbols: &[S],
        expected_len: Option<usize>,
    ) -> Result<CoherenceReport> {
        validate::validate_symbols(symbols, &self.config.alphabet, expected_len)?;
        let choices: Vec<Choice> = symbols
            .iter()
            .filter_map(|s| self.config.alphabet.decode(s.as_ref()))
            .collect();
        self.score(&choices)
    }

    /// Score an already-typed choice sequence.
    pub fn generate_report(&self, choices: &[Choice]) -> Result<CoherenceReport> {
        self.generate_report_checked(choices, None)
    }

    /// Score a typed choice sequence under an expected-length constraint.
    pub fn generate_report_checked(
        &self,
        choices: &[Choice],
        expected_len: Option<usize>,
    ) -> Result<CoherenceReport> {
        validate::validate_choices(choices, &self.config.alphabet, expected_len)?;
        self.score(choices)
    }

    fn score(&self, choices: &[Choice]) -> Result<CoherenceReport> {
        if choices.is_empty() && self.config.empty_policy == EmptyPolicy::Reject {
            return Err(Error::EmptySequence);
        }

        let stats = CircularStats::from_choices(choices);
        let coefficient = self.config.coefficient_mode.estimate(&stats);
        let classification = self.config.classification_preset.classify(coefficient.kappa);
        let tally = ChoiceTally::from_choices(choices);

        debug!(
            total = tally.total,
            directional = stats.n,
            kappa = coefficient.kappa,
            level = ?classification.level,
            "coherence report assembled"
        );

        Ok(CoherenceReport::assemble(
            coefficient,
            classification,
            tally,
            self.config.round_digits,
        ))
    }
}
