use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use derive_more::{Display, Error, From, IsVariant};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("mode is not a valid octal number")]
pub struct InvalidModeError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("mode has bits set outside of 0o777")]
pub struct ModeRangeError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum ModeError {
    // EINVAL
    Invalid(InvalidModeError),
    // ERANGE
    Range(ModeRangeError),
}

/// The permission bits a new directory is created with, before the process umask is applied.
///
/// # Invariants
/// - No bits outside of `0o777` are set.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mode(u16);

impl Mode {
    pub const MASK: u32 = 0o777;

    pub const ALL: Mode = Mode(0o777);

    pub const fn new(bits: u32) -> Result<Mode, ModeRangeError> {
        if bits & !Self::MASK != 0 {
            return Err(ModeRangeError);
        }
        Ok(Mode(bits as u16))
    }

    pub const fn bits(&self) -> u32 {
        self.0 as u32
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::ALL
    }
}

impl TryFrom<u32> for Mode {
    type Error = ModeRangeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Mode::new(value)
    }
}

const fn is_space(ch: u8) -> bool {
    matches!(ch, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

// Parses the way strtoumax(s, &end, 8) does, then insists that nothing is left over. Overflow is
// reported before leftovers, and a negative number wraps around.
impl FromStr for Mode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let start = bytes.iter().take_while(|ch| is_space(**ch)).count();

        match &bytes[start..] {
            [b'-', digits @ ..] => Mode::parse_digits(digits, true),
            [b'+', digits @ ..] => Mode::parse_digits(digits, false),
            digits => Mode::parse_digits(digits, false),
        }
    }
}

impl Mode {
    fn parse_digits(bytes: &[u8], negative: bool) -> Result<Mode, ModeError> {
        let digits = bytes.iter().take_while(|ch| matches!(**ch, b'0'..=b'7')).count();
        if digits == 0 {
            Err(InvalidModeError)?
        }

        let mut value: Option<u64> = Some(0);
        for ch in &bytes[..digits] {
            value = value
                .and_then(|v| v.checked_mul(8))
                .and_then(|v| v.checked_add(u64::from(ch - b'0')));
        }

        let Some(value) = value else {
            return Err(ModeRangeError.into());
        };
        if digits != bytes.len() {
            Err(InvalidModeError)?
        }

        let value = if negative { value.wrapping_neg() } else { value };
        if value & !u64::from(Self::MASK) != 0 {
            Err(ModeRangeError)?
        }
        Ok(Mode(value as u16))
    }
}

impl Debug for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Mode(0o{:03o})", self.0)
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "0o{:03o}", self.0)
    }
}
