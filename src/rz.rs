//! Return-to-Zero.
//!
//! Each bit occupies two half-bit samples: the polar level of the bit,
//! then a forced return to `0`.

use crate::bits::{parse_or_report, Bit};
use crate::level::Level;

/// RZ encode an input string.
///
/// Returns an empty signal if `bits` is not a binary string.
pub fn rz(bits: &str) -> Vec<Level> {
    parse_or_report(bits)
        .map(|bits| rz_bits(&bits))
        .unwrap_or_default()
}

pub(crate) fn rz_bits(bits: &[Bit]) -> Vec<Level> {
    let mut out = Vec::with_capacity(bits.len() * 2);
    for &bit in bits {
        out.extend_from_slice(&[Level::from_bit(bit), Level::Zero]);
    }
    out
}
