//! Manchester and Differential Manchester.
//!
//! Both codes put a transition in the middle of every bit, which gives the
//! receiver a clock edge per bit at the cost of twice the bandwidth.
//!
//! # Manchester
//!
//! The direction of the mid-bit transition carries the bit:
//!
//! ```text
//! 0  ->  +1 -1   (high to low)
//! 1  ->  -1 +1   (low to high)
//! ```
//!
//! This is the IEEE 802.3 convention; G. E. Thomas uses the opposite one.
//!
//! # Differential Manchester
//!
//! The mid-bit transition is always present and carries no data. The bit is
//! carried by the *boundary*: a `0` starts with a transition away from the
//! level the previous bit ended on, a `1` starts on the same level. Only the
//! presence of transitions matters, so absolute polarity is irrelevant.
//!
//! The state carried between bits is the direction of the previous mid-bit
//! transition (`true` = low-to-high, i.e. the previous bit ended high).

use crate::bits::{parse_or_report, Bit};
use crate::level::Level;

/// Default Differential Manchester state before the first bit.
pub const DEFAULT_INITIAL_TRANSITION_IS_LH: bool = true;

/// Manchester encode an input string.
///
/// Returns an empty signal if `bits` is not a binary string.
pub fn manchester(bits: &str) -> Vec<Level> {
    parse_or_report(bits)
        .map(|bits| manchester_bits(&bits))
        .unwrap_or_default()
}

/// Differential Manchester encode an input string.
///
/// `initial_transition_is_lh` is the direction assumed for the transition
/// preceding the first bit. Returns an empty signal if `bits` is not a binary
/// string.
pub fn differential_manchester(bits: &str, initial_transition_is_lh: bool) -> Vec<Level> {
    parse_or_report(bits)
        .map(|bits| DiffManchesterEncoder::new(initial_transition_is_lh).encode(&bits))
        .unwrap_or_default()
}

pub(crate) fn manchester_bits(bits: &[Bit]) -> Vec<Level> {
    let mut out = Vec::with_capacity(bits.len() * 2);
    for &bit in bits {
        let pair = match bit {
            Bit::Zero => [Level::High, Level::Low],
            Bit::One => [Level::Low, Level::High],
        };
        out.extend_from_slice(&pair);
    }
    out
}

/// Differential Manchester encoder state.
#[derive(Clone, Copy, Debug)]
pub struct DiffManchesterEncoder {
    /// Level the previous bit ended on.
    end: Level,
}

impl DiffManchesterEncoder {
    /// Create an encoder whose previous transition was low-to-high when
    /// `transition_is_lh` is set, high-to-low otherwise.
    pub fn new(transition_is_lh: bool) -> Self {
        Self {
            end: if transition_is_lh {
                Level::High
            } else {
                Level::Low
            },
        }
    }

    /// Whether the last emitted mid-bit transition was low-to-high.
    pub fn transition_is_lh(&self) -> bool {
        self.end == Level::High
    }

    /// Encode one bit into its two half-bit levels.
    pub fn push(&mut self, bit: Bit) -> [Level; 2] {
        let start = match bit {
            Bit::Zero => self.end.inverted(),
            Bit::One => self.end,
        };
        self.end = start.inverted();
        [start, self.end]
    }

    /// Encode a bit sequence.
    pub fn encode(mut self, bits: &[Bit]) -> Vec<Level> {
        let mut out = Vec::with_capacity(bits.len() * 2);
        for &bit in bits {
            out.extend_from_slice(&self.push(bit));
        }
        out
    }
}
