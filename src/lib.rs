//! Symbol energy of normalized QAM and PAM constellations
//!
//! Closed-form average energies used to normalize transmit power in a
//! simulated communications chain.
//!
//! ## Layout
//!
//! - `domain/` - Modulation types, errors, and normalization profiles
//! - `dsp/` - Energy functions, lookup table, and symbol normalizer (pure, no I/O)

pub mod domain;
pub mod dsp;

pub use domain::{EnergyError, EnergyResult, Modulation, ModulationScheme, NormalizationConfig};
pub use dsp::{pam_energy, qam_energy, try_pam_energy, try_qam_energy, EnergyTable, Normalizer};
