//! Decision Coherence Core
//!
//! Circular-statistics engine that scores how directionally consistent
//! a sequence of binary decisions is:
//! - Two-point angular mapping (A at 0, B at 180 degrees)
//! - Mean resultant length R with kappa coefficient estimation
//! - Three formula revisions kept as selectable modes
//! - Four-tier qualitative classification in two threshold presets
//! - Immutable, serializable coherence reports with choice tallies
//!
//! The engine is pure and synchronous. HTTP handling, persistence,
//! and natural-language report prose belong to callers.

pub mod engine;
pub mod error;

// Re-exports for convenience
pub use engine::{
    Alphabet, Choice, ChoiceTally, CircularStats, Classification, ClassificationPreset,
    CoefficientMode, CoherenceEngine, CoherenceLevel, CoherenceReport, CoherenceSession,
    EmptyPolicy, EngineConfig,
};
pub use error::{Error, Result};
