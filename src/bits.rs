//! Bit symbols and input validation.
//!
//! Every encoder accepts its input as text. A valid input is a (possibly
//! empty) string made only of `'0'` and `'1'`; anything else is rejected
//! before any level is produced.

use std::fmt;

use tracing::warn;

use crate::error::{Error, Result};

/// A single binary symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bit {
    /// The symbol `'0'`.
    Zero,
    /// The symbol `'1'`.
    One,
}

impl Bit {
    /// Parse one symbol, returning `None` for anything but `'0'`/`'1'`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Bit::Zero),
            '1' => Some(Bit::One),
            _ => None,
        }
    }

    /// `true` for [`Bit::One`].
    pub fn is_one(self) -> bool {
        self == Bit::One
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Bit::Zero => "0",
            Bit::One => "1",
        })
    }
}

/// Parse a binary string into bits.
///
/// The empty string parses to an empty vector.
///
/// # Errors
/// Returns [`Error::InvalidSymbol`] for the first character that is not
/// `'0'` or `'1'`.
pub fn parse_bits(input: &str) -> Result<Vec<Bit>> {
    input
        .chars()
        .enumerate()
        .map(|(position, found)| {
            Bit::from_char(found).ok_or(Error::InvalidSymbol { position, found })
        })
        .collect()
}

/// Check that `input` is a binary string, reporting a diagnostic if not.
///
/// The empty string is valid.
pub fn validate(input: &str) -> bool {
    let first_bad = input
        .chars()
        .enumerate()
        .find(|&(_, c)| Bit::from_char(c).is_none());
    match first_bad {
        None => true,
        Some((position, found)) => {
            report(&Error::InvalidSymbol { position, found });
            false
        }
    }
}

/// Parse for the lenient encoders: a rejected input is logged and yields `None`.
pub(crate) fn parse_or_report(input: &str) -> Option<Vec<Bit>> {
    parse_bits(input).map_err(|err| report(&err)).ok()
}

fn report(err: &Error) {
    warn!(%err, "input must be a binary string containing only '0's and '1's");
}
