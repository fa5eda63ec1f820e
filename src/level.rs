//! Signal levels.

use std::fmt;

use crate::bits::Bit;
use crate::error::Error;

/// An abstract line voltage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(i8)]
pub enum Level {
    /// Negative voltage, `-1`.
    Low = -1,
    /// Rest voltage, `0`.
    Zero = 0,
    /// Positive voltage, `+1`.
    High = 1,
}

impl Level {
    /// Integer value of this level.
    pub const fn value(self) -> i8 {
        self as i8
    }

    /// Opposite polarity. `Zero` has none and maps to itself.
    pub const fn inverted(self) -> Self {
        match self {
            Level::Low => Level::High,
            Level::Zero => Level::Zero,
            Level::High => Level::Low,
        }
    }

    /// Polar mapping `0 -> Low`, `1 -> High`.
    pub const fn from_bit(bit: Bit) -> Self {
        match bit {
            Bit::Zero => Level::Low,
            Bit::One => Level::High,
        }
    }
}

impl From<Level> for i8 {
    fn from(level: Level) -> Self {
        level.value()
    }
}

impl TryFrom<i8> for Level {
    type Error = Error;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Level::Low),
            0 => Ok(Level::Zero),
            1 => Ok(Level::High),
            other => Err(Error::InvalidLevel(other)),
        }
    }
}

impl PartialEq<i8> for Level {
    fn eq(&self, other: &i8) -> bool {
        self.value() == *other
    }
}

impl PartialEq<Level> for i8 {
    fn eq(&self, other: &Level) -> bool {
        *self == other.value()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Flatten a signal to its integer levels.
pub fn to_values(signal: &[Level]) -> Vec<i8> {
    signal.iter().map(|&l| l.value()).collect()
}
