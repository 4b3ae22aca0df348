//! Average symbol energy of normalized QAM and PAM constellations
//!
//! Both families place amplitudes on the odd integers: `±1, ±3, ..., ±(√M-1)`
//! on each axis for square QAM, `±1, ±3, ..., ±(M-1)` for PAM. The functions
//! here return the closed-form average so a transmitter can scale symbols
//! to unit power.
//!
//! `qam_energy` and `pam_energy` are permissive and compute for any bit
//! depth. The `try_` variants validate the bit depth first and fail with
//! `EnergyError::InvalidArgument`.

use crate::domain::{EnergyError, EnergyResult, Modulation, ModulationScheme};

/// `2^exp - 1` without going through a rounded `2^exp` while it fits in a u64
fn pow2_minus_one(exp: u32) -> f64 {
    if exp < u64::BITS {
        ((1u64 << exp) - 1) as f64
    } else {
        2f64.powf(exp as f64) - 1.0
    }
}

/// Average energy of a square M-QAM constellation, `(2/3)(M - 1)` with `M = 2^bps`.
///
/// Odd `bps` is computed as well even though it does not describe a square
/// grid. `bps = 0` gives `0.0`.
pub fn qam_energy(bps: u32) -> f64 {
    2.0 * pow2_minus_one(bps) / 3.0
}

/// RMS amplitude of an M-PAM constellation with `M = 2^bps`.
///
/// The mean square of the `2^(bps-1)` positive levels `1, 3, ..., M-1` is
/// `(M² - 1) / 3`; this returns its square root. Note the value is an
/// amplitude, not a power, despite the name.
///
/// `bps = 0` has no levels and gives `0.0`.
pub fn pam_energy(bps: u32) -> f64 {
    if bps == 0 {
        return 0.0;
    }
    (pow2_minus_one(bps.saturating_mul(2)) / 3.0).sqrt()
}

/// Energy for either family, using the permissive functions
pub fn symbol_energy(modulation: Modulation, bps: u32) -> f64 {
    match modulation {
        Modulation::Qam => qam_energy(bps),
        Modulation::Pam => pam_energy(bps),
    }
}

fn checked_bits(modulation: Modulation, bps: i64) -> EnergyResult<u32> {
    let min = modulation.min_bits_per_symbol();
    let max = modulation.max_bits_per_symbol();
    if bps < i64::from(min) || bps > i64::from(max) {
        log::warn!("{modulation} energy requested for {bps} bits per symbol");
        return Err(EnergyError::InvalidArgument(format!(
            "{modulation} requires {min} <= bits per symbol <= {max}, got {bps}"
        )));
    }
    Ok(bps as u32)
}

/// `qam_energy` for `0 <= bps <= 53`
pub fn try_qam_energy(bps: i64) -> EnergyResult<f64> {
    checked_bits(Modulation::Qam, bps).map(qam_energy)
}

/// `pam_energy` for `1 <= bps <= 26`
pub fn try_pam_energy(bps: i64) -> EnergyResult<f64> {
    checked_bits(Modulation::Pam, bps).map(pam_energy)
}

/// Energy of an already-validated scheme
pub fn scheme_energy(scheme: &ModulationScheme) -> f64 {
    symbol_energy(scheme.modulation(), scheme.bits_per_symbol())
}
