//! Decision Session
//!
//! Incremental decision log for diary-style callers that record one
//! choice at a time and re-score after each. Re-scoring recomputes
//! from the full log; the computation is cheap and deterministic, so
//! nothing is cached.

use tracing::trace;

use crate::error::Result;

use super::{Choice, CoherenceEngine, CoherenceReport};

/// Growing choice log bound to an engine configuration
#[derive(Debug, Clone, Default)]
pub struct CoherenceSession {
    engine: CoherenceEngine,
    choices: Vec<Choice>,
}

impl CoherenceSession {
    pub fn new(engine: CoherenceEngine) -> Self {
        Self {
            engine,
            choices: Vec::new(),
        }
    }

    /// Append one decision to the log.
    pub fn record(&mut self, choice: Choice) {
        trace!(?choice, position = self.choices.len(), "decision recorded");
        self.choices.push(choice);
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// The most recent `n` decisions, oldest first.
    pub fn recent(&self, n: usize) -> &[Choice] {
        let start = self.choices.len().saturating_sub(n);
        &self.choices[start..]
    }

    /// Score the current log.
    pub fn report(&self) -> Result<CoherenceReport> {
        self.engine.generate_report(&self.choices)
    }

    /// Clear the log, keeping the engine configuration.
    pub fn reset(&mut self) {
        self.choices.clear();
    }
}
