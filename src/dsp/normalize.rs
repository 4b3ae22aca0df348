//! Unit-power normalization of constellation symbols
//!
//! QAM energy is a power, so the scale is `1/sqrt(energy)`. PAM energy is
//! already an RMS amplitude, so the scale is `1/energy`. Either way the
//! scaled constellation has unit average power.

use num_complex::Complex64;

use crate::domain::{
    EnergyError, EnergyResult, Modulation, ModulationScheme, NormalizationConfig,
};

use super::energy::scheme_energy;

/// Scales symbols of one constellation to unit average power
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalizer {
    scheme: ModulationScheme,
    energy: f64,
    scale: f64,
}

impl Normalizer {
    pub fn new(scheme: ModulationScheme) -> EnergyResult<Self> {
        let energy = scheme_energy(&scheme);
        let rms = match scheme.modulation() {
            Modulation::Qam => energy.sqrt(),
            Modulation::Pam => energy,
        };
        if !(rms > 0.0 && rms.is_finite()) {
            log::warn!("{scheme} has average energy {energy}, cannot normalize");
            return Err(EnergyError::InvalidArgument(format!(
                "{scheme} has no usable average energy ({energy})"
            )));
        }
        let scale = 1.0 / rms;
        log::debug!("normalizer for {scheme}: energy={energy}, scale={scale}");
        Ok(Self {
            scheme,
            energy,
            scale,
        })
    }

    pub fn from_config(config: &NormalizationConfig) -> EnergyResult<Self> {
        config.validate()?;
        Self::new(config.scheme()?)
    }

    pub fn scheme(&self) -> ModulationScheme {
        self.scheme
    }

    /// The value returned by the energy function for this scheme
    pub fn energy(&self) -> f64 {
        self.energy
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn apply(&self, symbol: Complex64) -> Complex64 {
        symbol * self.scale
    }

    pub fn apply_real(&self, amplitude: f64) -> f64 {
        amplitude * self.scale
    }

    pub fn normalize_in_place(&self, symbols: &mut [Complex64]) {
        for s in symbols.iter_mut() {
            *s *= self.scale;
        }
    }
}
