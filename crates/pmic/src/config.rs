//! Driver configuration.
//!
//! This module defines where the driver finds the PMIC. It provides:
//! 1. **Defaults:** The Tegra X1 wiring (controller I2C5, device address `0x3C`).
//! 2. **Structure:** `PmicConfig`, deserializable from JSON with every field optional.
//! 3. **Validation:** Rejection of addresses outside the 7-bit range.
//!
//! The settle delay and register map are properties of the chip, not of the board, and are
//! therefore not configurable.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::common::PmicError;

/// Default configuration constants.
mod defaults {
    use crate::common::constants::{PMIC_I2C_ADDR, PMIC_I2C_BUS};

    /// I2C controller the PMIC hangs off.
    pub const BUS: u8 = PMIC_I2C_BUS;

    /// 7-bit device address.
    pub const ADDRESS: u8 = PMIC_I2C_ADDR;

    /// Largest valid 7-bit I2C address.
    pub const MAX_ADDRESS: u8 = 0x7F;
}

/// Location of the PMIC on the board.
///
/// # Examples
///
/// ```
/// use max77620_core::config::PmicConfig;
///
/// let config = PmicConfig::from_json(r#"{ "bus": 1 }"#).unwrap();
/// assert_eq!(config.bus, 1);
/// assert_eq!(config.address, 0x3C);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PmicConfig {
    /// I2C controller number
    #[serde(default = "PmicConfig::default_bus")]
    pub bus: u8,

    /// 7-bit device address
    #[serde(default = "PmicConfig::default_address")]
    pub address: u8,
}

impl PmicConfig {
    /// Returns the default I2C controller number.
    const fn default_bus() -> u8 {
        defaults::BUS
    }

    /// Returns the default device address.
    const fn default_address() -> u8 {
        defaults::ADDRESS
    }

    /// Parses and validates a JSON configuration.
    ///
    /// # Arguments
    ///
    /// * `json` - Configuration document; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PmicError::Json`] if the document does not parse and [`PmicError::Config`] if
    /// it fails [`validate`](Self::validate).
    pub fn from_json(json: &str) -> Result<Self, PmicError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a JSON configuration file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`PmicError::Io`] if the file cannot be read, otherwise as
    /// [`from_json`](Self::from_json).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PmicError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Checks that the device address fits in 7 bits.
    ///
    /// # Errors
    ///
    /// Returns [`PmicError::Config`] for an address above `0x7F`.
    pub fn validate(&self) -> Result<(), PmicError> {
        if self.address > defaults::MAX_ADDRESS {
            return Err(PmicError::Config(format!(
                "device address {:#04x} is not a 7-bit address",
                self.address
            )));
        }
        Ok(())
    }
}

impl Default for PmicConfig {
    fn default() -> Self {
        Self {
            bus: defaults::BUS,
            address: defaults::ADDRESS,
        }
    }
}
