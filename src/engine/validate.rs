//! Input Validation
//!
//! Membership and length checks over raw symbol sequences and typed
//! choice sequences. Checks are pure and side-effect free; failures
//! carry every offending value in input order.

use tracing::warn;

use crate::error::{Error, Result};

use super::choice::{Alphabet, Choice};

/// Validate a raw symbol sequence against the active alphabet. The
/// expected-length constraint, when supplied, is checked first.
pub fn validate_symbols<S: AsRef<str>>(
    symbols: &[S],
    alphabet: &Alphabet,
    expected_len: Option<usize>,
) -> Result<()> {
    check_expected_len(symbols.len(), expected_len)?;

    let invalid: Vec<&str> = symbols
        .iter()
        .map(|s| s.as_ref())
        .filter(|s| alphabet.decode(s).is_none())
        .collect();
    if !invalid.is_empty() {
        let symbols = invalid.join(", ");
        warn!(%symbols, "rejecting choice sequence with unknown symbols");
        return Err(Error::InvalidInput { symbols });
    }

    Ok(())
}

/// Validate a typed choice sequence. A timeout under a two-symbol
/// alphabet is out of domain, same as an unknown raw symbol.
pub fn validate_choices(
    choices: &[Choice],
    alphabet: &Alphabet,
    expected_len: Option<usize>,
) -> Result<()> {
    check_expected_len(choices.len(), expected_len)?;

    if !alphabet.accepts_timeout() {
        let timeouts = choices.iter().filter(|c| !c.is_directional()).count();
        if timeouts > 0 {
            warn!(timeouts, "rejecting timeouts under a two-symbol alphabet");
            return Err(Error::InvalidInput {
                symbols: vec!["timeout"; timeouts].join(", "),
            });
        }
    }

    Ok(())
}

fn check_expected_len(actual: usize, expected: Option<usize>) -> Result<()> {
    match expected {
        Some(expected) if expected != actual => Err(Error::LengthMismatch { expected, actual }),
        _ => Ok(()),
    }
}
