//! Coherence Classification
//!
//! Buckets the estimated coefficient into a qualitative level. Two
//! threshold tables shipped over the system's life; both are kept as
//! named presets, selected alongside the coefficient mode. Boundaries
//! are inclusive on the lower bound.

use serde::{Deserialize, Serialize};

/// Threshold table applied to the estimated coefficient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClassificationPreset {
    /// Kappa thresholds, paired with the closed-form estimator
    FourLevelKappa,
    /// Resultant-length thresholds, paired with the simple and
    /// sigma-corrected estimators
    FourLevelR,
}

/// Qualitative coherence level across both presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CoherenceLevel {
    High,
    Moderate,
    Low,
    Random,
    Chaotic,
    Oscillating,
    Coherent,
    ExtremelyCoherent,
}

/// Classification outcome with its presentation metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub level: CoherenceLevel,
    pub description: String,
    pub color: String,
    pub emoji: String,
}

impl ClassificationPreset {
    pub fn classify(&self, value: f64) -> Classification {
        let level = match self {
            ClassificationPreset::FourLevelKappa => {
                if value >= 1.0 {
                    CoherenceLevel::High
                } else if value >= 0.5 {
                    CoherenceLevel::Moderate
                } else if value >= 0.3 {
                    CoherenceLevel::Low
                } else {
                    CoherenceLevel::Random
                }
            }
            ClassificationPreset::FourLevelR => {
                if value < 0.20 {
                    CoherenceLevel::Chaotic
                } else if value < 0.50 {
                    CoherenceLevel::Oscillating
                } else if value < 0.80 {
                    CoherenceLevel::Coherent
                } else {
                    CoherenceLevel::ExtremelyCoherent
                }
            }
        };
        Classification::for_level(level)
    }
}

impl Classification {
    fn for_level(level: CoherenceLevel) -> Self {
        let (description, color, emoji) = match level {
            CoherenceLevel::High => (
                "Strongly directional and consistent decision pattern",
                "#10b981",
                "🎯",
            ),
            CoherenceLevel::Moderate => ("Discernible pattern with a clear trend", "#f59e0b", "📊"),
            CoherenceLevel::Low => ("Slight detectable trend", "#ef4444", "📈"),
            CoherenceLevel::Random => (
                "No detectable pattern, decisions close to random",
                "#6b7280",
                "🎲",
            ),
            CoherenceLevel::Chaotic => ("High variability without a stable direction", "#6b7280", "🌪️"),
            CoherenceLevel::Oscillating => (
                "Creative oscillation between the alternatives",
                "#10b981",
                "🎨",
            ),
            CoherenceLevel::Coherent => ("Stable directional pattern", "#3b82f6", "🌿"),
            CoherenceLevel::ExtremelyCoherent => ("Extremely coherent and rigid pattern", "#ef4444", "🔥"),
        };
        Self {
            level,
            description: description.to_string(),
            color: color.to_string(),
            emoji: emoji.to_string(),
        }
    }
}
