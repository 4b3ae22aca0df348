//! Precomputed energy lookup keyed by bit depth

use crate::domain::{EnergyError, EnergyResult, Modulation, NormalizationConfig, MAX_TABLE_BITS};

use super::energy::{pam_energy, qam_energy, symbol_energy};

/// Energies for both families, precomputed for `0..=max_bits`.
///
/// Lookups past the table fall through to the direct computation, so a
/// table never changes a result, only where it comes from.
#[derive(Debug, Clone)]
pub struct EnergyTable {
    qam: Vec<f64>,
    pam: Vec<f64>,
}

impl EnergyTable {
    /// Precompute `0..=max_bits`; `max_bits` may not exceed `MAX_TABLE_BITS`.
    pub fn new(max_bits: u32) -> EnergyResult<Self> {
        if max_bits > MAX_TABLE_BITS {
            log::warn!("energy table of {max_bits} bits requested");
            return Err(EnergyError::InvalidArgument(format!(
                "energy table may cover at most {MAX_TABLE_BITS} bits per symbol, got {max_bits}"
            )));
        }
        Ok(Self::build(max_bits))
    }

    /// Table sized by a profile's `table_max_bits`
    pub fn from_config(config: &NormalizationConfig) -> EnergyResult<Self> {
        config.validate()?;
        Self::new(config.table_max_bits)
    }

    fn build(max_bits: u32) -> Self {
        let qam = (0..=max_bits).map(qam_energy).collect();
        let pam = (0..=max_bits).map(pam_energy).collect();
        log::debug!("energy table built for 0..={max_bits} bits per symbol");
        Self { qam, pam }
    }

    pub fn max_bits(&self) -> u32 {
        (self.qam.len() - 1) as u32
    }

    pub fn get(&self, modulation: Modulation, bps: u32) -> f64 {
        let cached = match modulation {
            Modulation::Qam => &self.qam,
            Modulation::Pam => &self.pam,
        };
        cached
            .get(bps as usize)
            .copied()
            .unwrap_or_else(|| symbol_energy(modulation, bps))
    }
}

impl Default for EnergyTable {
    fn default() -> Self {
        Self::build(16)
    }
}
