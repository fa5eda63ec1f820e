//! Scheme selection and the strict encoding entry point.

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::bits::{parse_bits, Bit};
use crate::error::{Error, Result};
use crate::level::Level;
use crate::manchester::{
    manchester_bits, DiffManchesterEncoder, DEFAULT_INITIAL_TRANSITION_IS_LH,
};
use crate::nrz::{nrz_l_bits, NrziEncoder, DEFAULT_INITIAL_LEVEL};
use crate::rz::rz_bits;

/// A line-encoding scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// Non-Return-to-Zero, Level.
    NrzL,
    /// Non-Return-to-Zero, Invert on ones.
    NrzI,
    /// Return-to-Zero.
    Rz,
    /// Manchester (IEEE 802.3 polarity).
    Manchester,
    /// Differential Manchester.
    DifferentialManchester,
}

impl Scheme {
    /// Every scheme, in presentation order.
    pub const ALL: [Scheme; 5] = [
        Scheme::NrzL,
        Scheme::NrzI,
        Scheme::Rz,
        Scheme::Manchester,
        Scheme::DifferentialManchester,
    ];

    /// Canonical snake_case name.
    pub fn name(self) -> &'static str {
        match self {
            Scheme::NrzL => "nrz_l",
            Scheme::NrzI => "nrz_i",
            Scheme::Rz => "rz",
            Scheme::Manchester => "manchester",
            Scheme::DifferentialManchester => "differential_manchester",
        }
    }

    /// Output samples produced per input bit.
    pub fn samples_per_bit(self) -> usize {
        match self {
            Scheme::NrzL | Scheme::NrzI => 1,
            Scheme::Rz | Scheme::Manchester | Scheme::DifferentialManchester => 2,
        }
    }

    /// Encode a binary string.
    ///
    /// # Errors
    /// Returns [`Error::InvalidSymbol`] if `bits` is not a binary string and
    /// [`Error::InvalidInitialLevel`] if this is [`Scheme::NrzI`] and
    /// `config.initial_level` is not `1` or `-1`.
    pub fn encode(self, bits: &str, config: &EncoderConfig) -> Result<Vec<Level>> {
        let bits = parse_bits(bits)?;
        if self == Scheme::NrzI {
            NrziEncoder::new(config.initial_level)?;
        }
        Ok(self.encode_bits(&bits, config))
    }

    /// Encode already-parsed bits.
    ///
    /// An invalid NRZ-I `initial_level` is treated as `+1`.
    pub fn encode_bits(self, bits: &[Bit], config: &EncoderConfig) -> Vec<Level> {
        trace!(scheme = %self, bits = bits.len(), "encoding");
        match self {
            Scheme::NrzL => nrz_l_bits(bits),
            Scheme::NrzI => NrziEncoder::new(config.initial_level)
                .unwrap_or_default()
                .encode(bits),
            Scheme::Rz => rz_bits(bits),
            Scheme::Manchester => manchester_bits(bits),
            Scheme::DifferentialManchester => {
                DiffManchesterEncoder::new(config.initial_transition_is_lh).encode(bits)
            }
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|&c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "nrzl" => Ok(Scheme::NrzL),
            "nrzi" => Ok(Scheme::NrzI),
            "rz" => Ok(Scheme::Rz),
            "manchester" => Ok(Scheme::Manchester),
            "differentialmanchester" | "diffmanchester" => Ok(Scheme::DifferentialManchester),
            _ => Err(Error::UnknownScheme(s.to_string())),
        }
    }
}

/// Per-call encoder parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncoderConfig {
    /// NRZ-I level before the first bit; `1` or `-1`.
    pub initial_level: i8,
    /// Differential Manchester: whether the transition preceding the first
    /// bit was low-to-high.
    pub initial_transition_is_lh: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            initial_level: DEFAULT_INITIAL_LEVEL,
            initial_transition_is_lh: DEFAULT_INITIAL_TRANSITION_IS_LH,
        }
    }
}

/// Encode `bits` with `scheme` and the default configuration.
///
/// # Errors
/// See [`Scheme::encode`].
pub fn encode(scheme: Scheme, bits: &str) -> Result<Vec<Level>> {
    scheme.encode(bits, &EncoderConfig::default())
}
