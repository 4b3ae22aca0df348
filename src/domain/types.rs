//! Core domain types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{EnergyError, EnergyResult};

/// Largest QAM bit depth for which `M - 1` is exact in an `f64`
pub const QAM_MAX_EXACT_BITS: u32 = 53;

/// Largest PAM bit depth for which `M² - 1` is exact in an `f64`
pub const PAM_MAX_EXACT_BITS: u32 = 26;

/// Constellation family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modulation {
    /// Square quadrature amplitude modulation (2D grid)
    Qam,
    /// Pulse amplitude modulation (1D levels)
    Pam,
}

impl Modulation {
    pub const ALL: [Modulation; 2] = [Modulation::Qam, Modulation::Pam];

    pub fn name(&self) -> &'static str {
        match self {
            Modulation::Qam => "QAM",
            Modulation::Pam => "PAM",
        }
    }

    /// Smallest bit depth the checked API accepts
    pub fn min_bits_per_symbol(&self) -> u32 {
        match self {
            Modulation::Qam => 0,
            Modulation::Pam => 1,
        }
    }

    /// Largest bit depth the checked API accepts
    pub fn max_bits_per_symbol(&self) -> u32 {
        match self {
            Modulation::Qam => QAM_MAX_EXACT_BITS,
            Modulation::Pam => PAM_MAX_EXACT_BITS,
        }
    }
}

impl fmt::Display for Modulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Modulation {
    type Err = EnergyError;

    fn from_str(s: &str) -> EnergyResult<Self> {
        let s = s.trim();
        Modulation::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| EnergyError::Parse(format!("Unknown modulation: '{s}'")))
    }
}

/// Bits carried by one symbol; the modulation order is `2^bps`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitsPerSymbol(u32);

impl BitsPerSymbol {
    /// Derive the bit depth from a modulation order (`4` → 2 bits).
    pub fn from_order(order: u64) -> EnergyResult<Self> {
        if !order.is_power_of_two() {
            return Err(EnergyError::InvalidArgument(format!(
                "modulation order must be a power of two, got {order}"
            )));
        }
        Ok(Self(order.trailing_zeros()))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

/// A validated (modulation, bit depth) pair such as 16-QAM
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModulationScheme {
    modulation: Modulation,
    bits_per_symbol: u32,
}

impl ModulationScheme {
    pub fn new(modulation: Modulation, bits_per_symbol: u32) -> EnergyResult<Self> {
        let min = modulation.min_bits_per_symbol();
        let max = modulation.max_bits_per_symbol();
        if !(min..=max).contains(&bits_per_symbol) {
            log::warn!("rejecting {modulation} with {bits_per_symbol} bits per symbol");
            return Err(EnergyError::InvalidArgument(format!(
                "{modulation} requires {min} <= bits per symbol <= {max}, got {bits_per_symbol}"
            )));
        }
        Ok(Self {
            modulation,
            bits_per_symbol,
        })
    }

    pub fn qam(bits_per_symbol: u32) -> EnergyResult<Self> {
        Self::new(Modulation::Qam, bits_per_symbol)
    }

    pub fn pam(bits_per_symbol: u32) -> EnergyResult<Self> {
        Self::new(Modulation::Pam, bits_per_symbol)
    }

    pub fn modulation(&self) -> Modulation {
        self.modulation
    }

    pub fn bits_per_symbol(&self) -> u32 {
        self.bits_per_symbol
    }

    /// Modulation order `M`. Always fits: the accepted range tops out at 53 bits.
    pub fn order(&self) -> u64 {
        1u64 << self.bits_per_symbol
    }

    /// True for QAM with an even bit depth, i.e. a true square grid
    pub fn is_square(&self) -> bool {
        self.modulation == Modulation::Qam && self.bits_per_symbol % 2 == 0
    }
}

impl fmt::Display for ModulationScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.order(), self.modulation)
    }
}

/// Parse labels like `"16-QAM"`, `"64qam"` or `"4 PAM"`
impl FromStr for ModulationScheme {
    type Err = EnergyError;

    fn from_str(s: &str) -> EnergyResult<Self> {
        let trimmed = s.trim();
        let digits_end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(|| EnergyError::Parse(format!("Missing modulation in '{s}'")))?;
        if digits_end == 0 {
            return Err(EnergyError::Parse(format!(
                "Missing modulation order in '{s}'"
            )));
        }
        let digits = &trimmed[..digits_end];
        let order = digits
            .parse::<u64>()
            .map_err(|e| EnergyError::Parse(format!("Failed to parse order '{digits}': {e}")))?;
        // One separator at most: a single '-' or a run of whitespace
        let rest = &trimmed[digits_end..];
        let name = rest.strip_prefix('-').unwrap_or_else(|| rest.trim_start());
        if name.starts_with(|c: char| c == '-' || c.is_whitespace()) {
            return Err(EnergyError::Parse(format!(
                "Malformed separator in '{s}'"
            )));
        }
        let modulation: Modulation = name.parse()?;
        let bps = BitsPerSymbol::from_order(order)?;
        Self::new(modulation, bps.get())
    }
}
