//! Wipe patterns and write-buffer filling

use crate::error::{Error, Result};
use rand::rngs::OsRng;
use rand::RngCore;
use std::fmt;

/// Pattern code for an ALL-ZERO pass
pub const CODE_ZERO: char = 'Z';

/// Pattern code for an ALL-ONE pass
pub const CODE_ONE: char = 'O';

/// Pattern code for a RANDOM pass
pub const CODE_RANDOM: char = 'R';

/// Fill pattern applied to the write buffer for one pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Every byte set to 0x00
    Zero,
    /// Every byte set to 0xFF
    One,
    /// Every byte drawn from the OS cryptographic random source
    Random,
}

impl Pattern {
    /// Resolve a single-character pattern code (case-insensitive).
    ///
    /// Unrecognized codes are a configuration defect and surface as
    /// [`Error::InvalidPattern`] at fill time, not when the code
    /// sequence is first parsed.
    pub fn from_code(code: char) -> Result<Self> {
        match code.to_ascii_uppercase() {
            CODE_ZERO => Ok(Pattern::Zero),
            CODE_ONE => Ok(Pattern::One),
            CODE_RANDOM => Ok(Pattern::Random),
            other => Err(Error::InvalidPattern(other)),
        }
    }

    /// Fill the write buffer for one pass.
    ///
    /// The buffer is filled once per pass and reused for every chunk,
    /// so a RANDOM pass writes the same random block repeatedly.
    pub fn fill(&self, buf: &mut [u8]) {
        match self {
            Pattern::Zero => buf.fill(0x00),
            Pattern::One => buf.fill(0xFF),
            Pattern::Random => OsRng.fill_bytes(buf),
        }
    }

    /// Single-character code for this pattern
    pub fn code(&self) -> char {
        match self {
            Pattern::Zero => CODE_ZERO,
            Pattern::One => CODE_ONE,
            Pattern::Random => CODE_RANDOM,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Pattern::Zero => "ALL-ZERO",
            Pattern::One => "ALL-ONE",
            Pattern::Random => "RANDOM",
        };
        f.write_str(name)
    }
}
