//! # Line Codes
//!
//! *Turning bits into voltages on a wire.*
//!
//! ## Intuition First
//!
//! A wire does not carry `0`s and `1`s, it carries a voltage that changes over
//! time. A line code is the rule that decides which voltage to put on the wire
//! for each bit. The simplest rule ("high for 1, low for 0") works until the
//! data contains a long run of identical bits: the line goes flat and the
//! receiver loses track of where one bit ends and the next begins.
//!
//! Every other scheme here trades bandwidth or complexity for a property the
//! simple rule lacks: transitions the receiver can lock its clock to, or
//! independence from which wire is which.
//!
//! ## The Schemes
//!
//! ```text
//! bits            1     1     0     0     1
//! NRZ-L          +1    +1    -1    -1    +1
//! NRZ-I (+1)     -1    +1    +1    +1    -1      flip on 1
//! RZ            +1 0  +1 0  -1 0  -1 0  +1 0     rest at zero mid-bit
//! Manchester    -1+1  -1+1  +1-1  +1-1  -1+1     mid-bit edge direction
//! Diff. Man.    +1-1  -1+1  -1+1  -1+1  +1-1     boundary edge presence
//! ```
//!
//! | Scheme | Samples/bit | State | Self-clocking |
//! |---|---|---|---|
//! | NRZ-L | 1 | none | no |
//! | NRZ-I | 1 | current level | no |
//! | RZ | 2 | none | on 1s and 0s |
//! | Manchester | 2 | none | yes |
//! | Differential Manchester | 2 | last mid-bit edge | yes |
//!
//! ## Two Entry Points
//!
//! The free functions ([`nrz_l`], [`nrz_i`], [`rz`], [`manchester`],
//! [`differential_manchester`]) never fail: input that is not a binary string
//! is reported through `tracing` and encodes to an empty signal. When a caller
//! needs to tell "nothing to encode" apart from "rejected", use
//! [`Scheme::encode`], which returns an [`Error`].
//!
//! Each call starts from its own configuration. No state survives between
//! calls, so every function is safe to call from any number of threads.
//!
//! ## References
//!
//! - Stallings, W. *Data and Computer Communications*, ch. 5 "Signal Encoding Techniques".
//! - IEEE 802.3, clause 7: Manchester polarity used here.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bits;
pub mod error;
pub mod level;
pub mod manchester;
pub mod nrz;
pub mod rz;
pub mod scheme;
pub mod waveform;

pub use bits::{parse_bits, validate, Bit};
pub use error::{Error, Result};
pub use level::Level;
pub use manchester::{differential_manchester, manchester, DiffManchesterEncoder};
pub use nrz::{nrz_i, nrz_l, NrziEncoder};
pub use rz::rz;
pub use scheme::{encode, EncoderConfig, Scheme};
