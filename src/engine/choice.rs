//! Choice Alphabet
//!
//! The two-point decision alphabet and its mapping onto the unit circle.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// A single recorded decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Choice {
    /// First alternative, placed at 0 rad
    A,
    /// Second alternative, placed at PI rad
    B,
    /// No response within the allotted time; tallied but never directional
    Timeout,
}

impl Choice {
    /// Angular position on the unit circle. Timeouts carry no direction.
    pub fn angle(&self) -> Option<f64> {
        match self {
            Choice::A => Some(0.0),
            Choice::B => Some(PI),
            Choice::Timeout => None,
        }
    }

    /// Decode the legacy degree convention used by the deployed games:
    /// 0 is A, 180 is B, an absent value is a timeout. Any other degree
    /// is out of domain.
    pub fn from_degrees(degrees: Option<i64>) -> Option<Choice> {
        match degrees {
            Some(0) => Some(Choice::A),
            Some(180) => Some(Choice::B),
            None => Some(Choice::Timeout),
            Some(_) => None,
        }
    }

    pub fn is_directional(&self) -> bool {
        !matches!(self, Choice::Timeout)
    }
}

/// Symbol labels accepted from callers and their decoding into [`Choice`]s.
///
/// Two-symbol alphabets accept only the A and B labels; three-symbol
/// alphabets additionally accept a timeout sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alphabet {
    a_label: String,
    b_label: String,
    timeout_label: Option<String>,
}

impl Alphabet {
    /// Two-symbol alphabet with the default "A"/"B" labels.
    pub fn two_symbol() -> Self {
        Self {
            a_label: "A".to_string(),
            b_label: "B".to_string(),
            timeout_label: None,
        }
    }

    /// Three-symbol alphabet that also accepts the "timeout" sentinel.
    pub fn three_symbol() -> Self {
        Self {
            timeout_label: Some("timeout".to_string()),
            ..Self::two_symbol()
        }
    }

    /// Replace the alternative labels, e.g. "Azul"/"Vermelho".
    pub fn with_labels(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.a_label = a.into();
        self.b_label = b.into();
        self
    }

    /// Replace the timeout sentinel label; implies three-symbol mode.
    pub fn with_timeout_label(mut self, label: impl Into<String>) -> Self {
        self.timeout_label = Some(label.into());
        self
    }

    pub fn accepts_timeout(&self) -> bool {
        self.timeout_label.is_some()
    }

    /// Decode one raw symbol, `None` when it is outside the alphabet.
    pub fn decode(&self, symbol: &str) -> Option<Choice> {
        if symbol == self.a_label {
            Some(Choice::A)
        } else if symbol == self.b_label {
            Some(Choice::B)
        } else if self.timeout_label.as_deref() == Some(symbol) {
            Some(Choice::Timeout)
        } else {
            None
        }
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::two_symbol()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_mapping() {
        assert_eq!(Choice::A.angle(), Some(0.0));
        assert_eq!(Choice::B.angle(), Some(PI));
        assert_eq!(Choice::Timeout.angle(), None);
    }

    #[test]
    fn test_degree_decoding() {
        assert_eq!(Choice::from_degrees(Some(0)), Some(Choice::A));
        assert_eq!(Choice::from_degrees(Some(180)), Some(Choice::B));
        assert_eq!(Choice::from_degrees(None), Some(Choice::Timeout));
        assert_eq!(Choice::from_degrees(Some(90)), None);
    }

    #[test]
    fn test_two_symbol_rejects_timeout_label() {
        let alphabet = Alphabet::two_symbol();
        assert_eq!(alphabet.decode("A"), Some(Choice::A));
        assert_eq!(alphabet.decode("B"), Some(Choice::B));
        assert_eq!(alphabet.decode("timeout"), None);
        assert_eq!(alphabet.decode("C"), None);
    }

    #[test]
    fn test_custom_labels() {
        let alphabet = Alphabet::three_symbol().with_labels("Azul", "Vermelho");
        assert_eq!(alphabet.decode("Azul"), Some(Choice::A));
        assert_eq!(alphabet.decode("Vermelho"), Some(Choice::B));
        assert_eq!(alphabet.decode("timeout"), Some(Choice::Timeout));
        assert_eq!(alphabet.decode("A"), None);
    }
}
