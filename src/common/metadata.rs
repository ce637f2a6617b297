use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::{Deref, Not};
use std::str::FromStr;

use tracing::warn;

use super::codec::Mode;
use super::ec::BlockPlan;
use super::error::{QRError, QRResult};
use super::mask::MaskPattern;
use super::version_db::{
    ALIGNMENT_PATTERN_POSITIONS, BLOCK_GROUPS, BYTE_CAPACITY, DATA_CODEWORDS, REMAINDER_BITS,
    TOTAL_CODEWORDS, VERSION_INFO,
};

// Metadata
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Metadata {
    ver: Option<Version>,
    ecl: Option<ECLevel>,
    mask: Option<MaskPattern>,
}

impl Metadata {
    pub fn new(ver: Option<Version>, ecl: Option<ECLevel>, mask: Option<MaskPattern>) -> Self {
        Self { ver, ecl, mask }
    }

    pub fn version(&self) -> Option<Version> {
        self.ver
    }

    pub fn ec_level(&self) -> Option<ECLevel> {
        self.ecl
    }

    pub fn mask(&self) -> Option<MaskPattern> {
        self.mask
    }
}

impl Display for Metadata {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        f.write_str("{ Version: ")?;
        match self.ver {
            Some(v) => write!(f, "{}", *v)?,
            None => f.write_str("None")?,
        }
        f.write_str(", Ec level: ")?;
        match self.ecl {
            Some(e) => write!(f, "{e:?}")?,
            None => f.write_str("None")?,
        }
        f.write_str(", Mask: ")?;
        match self.mask {
            Some(m) => write!(f, "{}", *m)?,
            None => f.write_str("None")?,
        }
        f.write_str(" }")
    }
}

// Version
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
pub struct Version(usize);

impl Version {
    pub fn new(ver: usize) -> QRResult<Self> {
        match ver {
            1..=40 => Ok(Self(ver)),
            _ => Err(QRError::InvalidVersion(ver)),
        }
    }

    /// Smallest version whose byte mode capacity at `ecl` holds `len` bytes.
    pub fn min_for(len: usize, ecl: ECLevel) -> QRResult<Self> {
        (1..=40)
            .map(Self)
            .find(|v| v.byte_capacity(ecl) >= len)
            .ok_or(QRError::CapacityExceeded { len, ec_level: ecl, version: 40 })
    }

    fn index(self) -> usize {
        debug_assert!((1..=40).contains(&self.0), "Invalid version {}", self.0);
        self.0 - 1
    }

    pub const fn width(self) -> usize {
        self.0 * 4 + 17
    }

    pub fn total_codewords(self) -> usize {
        TOTAL_CODEWORDS[self.index()]
    }

    pub fn data_codewords(self, ecl: ECLevel) -> usize {
        DATA_CODEWORDS[ecl as usize][self.index()]
    }

    pub fn data_bit_capacity(self, ecl: ECLevel) -> usize {
        self.data_codewords(ecl) << 3
    }

    pub fn byte_capacity(self, ecl: ECLevel) -> usize {
        BYTE_CAPACITY[ecl as usize][self.index()]
    }

    pub fn block_plan(self, ecl: ECLevel) -> BlockPlan {
        BlockPlan::new(BLOCK_GROUPS[ecl as usize][self.index()])
    }

    pub fn ecc_per_block(self, ecl: ECLevel) -> usize {
        self.block_plan(ecl).ecc_per_block()
    }

    pub fn alignment_pattern(self) -> &'static [i16] {
        ALIGNMENT_PATTERN_POSITIONS[self.index()]
    }

    pub fn remainder_bits(self) -> usize {
        REMAINDER_BITS[self.index()]
    }

    pub fn has_version_info(self) -> bool {
        self.0 >= 7
    }

    pub fn info(self) -> u32 {
        VERSION_INFO[self.index()]
    }

    pub fn mode_bits(self) -> usize {
        4
    }

    pub fn char_cnt_bits(self, mode: Mode) -> usize {
        match mode {
            Mode::Byte => match self.0 {
                1..=9 => 8,
                _ => 16,
            },
        }
    }
}

impl Deref for Version {
    type Target = usize;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}", self.0)
    }
}


// Error correction level
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
pub enum ECLevel {
    L = 0,
    M = 1,
    Q = 2,
    H = 3,
}

impl ECLevel {
    pub const ALL: [ECLevel; 4] = [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H];

    /// Lenient parser for user input. Unrecognized selectors fall back to `M`.
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_else(|err| {
            warn!("{err}, using M");
            ECLevel::M
        })
    }
}

impl Default for ECLevel {
    fn default() -> Self {
        Self::M
    }
}

impl FromStr for ECLevel {
    type Err = QRError;

    // Matches on the first letter only, so "low" or "high" are accepted too
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('L') => Ok(Self::L),
            Some('M') => Ok(Self::M),
            Some('Q') => Ok(Self::Q),
            Some('H') => Ok(Self::H),
            _ => Err(QRError::InvalidECLevel(s.to_string())),
        }
    }
}


// Color
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    pub fn select<T>(&self, light: T, dark: T) -> T {
        match self {
            Self::Light => light,
            Self::Dark => dark,
        }
    }
}

impl From<bool> for Color {
    fn from(bit: bool) -> Self {
        if bit {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

impl Not for Color {
    type Output = Self;
    fn not(self) -> Self::Output {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}
