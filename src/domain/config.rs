//! Normalization profiles
//!
//! A profile names the constellation a transmit chain normalizes against,
//! plus how far the energy lookup table is precomputed. Profiles are stored
//! as pretty-printed JSON files.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{EnergyError, EnergyResult};
use super::types::{Modulation, ModulationScheme};

/// Upper bound on how many bit depths an energy table may precompute
pub const MAX_TABLE_BITS: u32 = 64;

fn default_table_max_bits() -> u32 {
    16
}

/// A saved normalization profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizationConfig {
    /// Profile name (e.g., "HF 16-QAM", "Baseband 4-PAM")
    pub name: String,
    pub modulation: Modulation,
    pub bits_per_symbol: u32,
    /// Highest bit depth precomputed by the energy table
    #[serde(default = "default_table_max_bits")]
    pub table_max_bits: u32,
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            modulation: Modulation::Qam,
            bits_per_symbol: 4,
            table_max_bits: default_table_max_bits(),
        }
    }
}

impl NormalizationConfig {
    /// The validated constellation this profile describes
    pub fn scheme(&self) -> EnergyResult<ModulationScheme> {
        ModulationScheme::new(self.modulation, self.bits_per_symbol)
            .map_err(|e| EnergyError::Config(format!("Profile '{}': {e}", self.name)))
    }

    pub fn validate(&self) -> EnergyResult<()> {
        if self.name.trim().is_empty() {
            return Err(EnergyError::Config(
                "Profile name cannot be empty".to_string(),
            ));
        }
        if self.table_max_bits > MAX_TABLE_BITS {
            return Err(EnergyError::Config(format!(
                "Profile '{}': table_max_bits {} exceeds {MAX_TABLE_BITS}",
                self.name, self.table_max_bits
            )));
        }
        self.scheme().map(|_| ())
    }

    pub fn from_json(json: &str) -> EnergyResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| EnergyError::Config(format!("Deserialization error: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> EnergyResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| EnergyError::Config(format!("Serialization error: {e}")))
    }

    pub fn load(path: impl AsRef<Path>) -> EnergyResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            EnergyError::Config(format!("Failed to read {}: {e}", path.display()))
        })?;
        let config = Self::from_json(&json)?;
        log::debug!("loaded profile '{}' from {}", config.name, path.display());
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> EnergyResult<()> {
        self.validate()?;
        let path = path.as_ref();
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|e| {
            EnergyError::Config(format!("Failed to write {}: {e}", path.display()))
        })
    }
}
