//! Digital Signal Processing
//!
//! Pure functions for constellation energy and power normalization. No I/O.

pub mod energy;
pub mod normalize;
pub mod table;

// Re-export commonly used items
pub use energy::{pam_energy, qam_energy, symbol_energy, try_pam_energy, try_qam_energy};
pub use normalize::Normalizer;
pub use table::EnergyTable;
