//! Non-Return-to-Zero codes.
//!
//! Both variants emit one level per bit and never rest at zero.
//!
//! - **NRZ-L** maps the bit straight to a level: `0 -> -1`, `1 -> +1`.
//! - **NRZ-I** encodes a `1` as a transition: the running level flips sign
//!   on every `1` and holds on every `0`. The receiver only needs to detect
//!   changes, so the code is immune to a swapped pair of wires.

use tracing::warn;

use crate::bits::{parse_or_report, Bit};
use crate::error::{Error, Result};
use crate::level::Level;

/// Default NRZ-I level before the first bit.
pub const DEFAULT_INITIAL_LEVEL: i8 = 1;

/// NRZ-L encode an input string.
///
/// Returns an empty signal if `bits` is not a binary string.
pub fn nrz_l(bits: &str) -> Vec<Level> {
    parse_or_report(bits)
        .map(|bits| nrz_l_bits(&bits))
        .unwrap_or_default()
}

/// NRZ-I encode an input string starting from `initial_level`.
///
/// An `initial_level` other than `1` or `-1` is replaced by
/// [`DEFAULT_INITIAL_LEVEL`] with a warning. Returns an empty signal if
/// `bits` is not a binary string.
pub fn nrz_i(bits: &str, initial_level: i8) -> Vec<Level> {
    let Some(bits) = parse_or_report(bits) else {
        return Vec::new();
    };
    NrziEncoder::new(initial_level)
        .unwrap_or_else(|err| {
            warn!(%err, default = DEFAULT_INITIAL_LEVEL, "using default NRZ-I initial level");
            NrziEncoder::default()
        })
        .encode(&bits)
}

pub(crate) fn nrz_l_bits(bits: &[Bit]) -> Vec<Level> {
    bits.iter().map(|&b| Level::from_bit(b)).collect()
}

fn polarity(initial_level: i8) -> Result<Level> {
    match initial_level {
        1 => Ok(Level::High),
        -1 => Ok(Level::Low),
        other => Err(Error::InvalidInitialLevel(other)),
    }
}

/// NRZ-I encoder state: the level currently on the line, always `-1` or `+1`.
#[derive(Clone, Copy, Debug)]
pub struct NrziEncoder {
    level: Level,
}

impl NrziEncoder {
    /// Create an encoder holding `initial_level` before the first bit.
    ///
    /// # Errors
    /// Returns [`Error::InvalidInitialLevel`] unless `initial_level` is `1` or `-1`.
    pub fn new(initial_level: i8) -> Result<Self> {
        Ok(Self {
            level: polarity(initial_level)?,
        })
    }

    /// Encode one bit and return the level emitted for it.
    pub fn push(&mut self, bit: Bit) -> Level {
        if bit.is_one() {
            self.level = self.level.inverted();
        }
        self.level
    }

    /// Encode a bit sequence.
    pub fn encode(mut self, bits: &[Bit]) -> Vec<Level> {
        bits.iter().map(|&b| self.push(b)).collect()
    }
}

impl Default for NrziEncoder {
    fn default() -> Self {
        Self { level: Level::High }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_nrz_l_reference() {
        assert_eq!(nrz_l("11001"), [1i8, 1, -1, -1, 1]);
    }

    #[test]
    fn test_nrz_i_reference() {
        assert_eq!(nrz_i("11001", 1), [-1i8, 1, 1, 1, -1]);
        assert_eq!(nrz_i("11001", -1), [1i8, -1, -1, -1, 1]);
    }

    #[test]
    fn test_nrz_i_zeros_hold_initial_level() {
        assert_eq!(nrz_i("000", 1), [1i8, 1, 1]);
        assert_eq!(nrz_i("000", -1), [-1i8, -1, -1]);
    }

    #[test]
    fn test_nrz_i_bad_initial_level_falls_back() {
        assert_eq!(nrz_i("11001", 0), nrz_i("11001", 1));
        assert_eq!(nrz_i("11001", 5), nrz_i("11001", 1));
    }

    #[test]
    fn test_encoder_rejects_rest_level_seed() {
        assert_eq!(
            NrziEncoder::new(0).unwrap_err(),
            Error::InvalidInitialLevel(0)
        );
        assert_eq!(
            NrziEncoder::new(2).unwrap_err(),
            Error::InvalidInitialLevel(2)
        );

        let out = NrziEncoder::new(-1)
            .unwrap()
            .encode(&[Bit::One, Bit::Zero, Bit::One]);
        assert_eq!(out, [1i8, 1, -1]);
        assert_eq!(NrziEncoder::default().encode(&[Bit::Zero]), [1i8]);
    }

    #[test]
    fn test_invalid_and_empty() {
        assert!(nrz_l("").is_empty());
        assert!(nrz_i("", -1).is_empty());
        assert!(nrz_l("102").is_empty());
        assert!(nrz_i("1x", 1).is_empty());
    }

    #[test]
    fn test_encoder_does_not_share_state() {
        let first = nrz_i("1", 1);
        let second = nrz_i("1", 1);
        assert_eq!(first, second);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_nrz_l_pointwise(input in "[01]{0,64}") {
            let out = nrz_l(&input);
            prop_assert_eq!(out.len(), input.len());
            for (c, level) in input.chars().zip(&out) {
                let expected = if c == '1' { Level::High } else { Level::Low };
                prop_assert_eq!(*level, expected);
            }
        }

        #[test]
        fn prop_nrz_i_flips_once_per_one(
            input in "[01]{0,64}",
            initial in prop::sample::select(vec![1i8, -1]),
        ) {
            let out = nrz_i(&input, initial);
            prop_assert_eq!(out.len(), input.len());

            let start = Level::try_from(initial).unwrap();
            let mut prev = start;
            let mut flips = 0;
            for (c, &level) in input.chars().zip(&out) {
                prop_assert_ne!(level, Level::Zero);
                if level != prev {
                    flips += 1;
                    prop_assert_eq!(c, '1');
                } else {
                    prop_assert_eq!(c, '0');
                }
                prev = level;
            }
            prop_assert_eq!(flips, input.matches('1').count());
        }
    }
}
