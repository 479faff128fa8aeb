//! Driver Error Definitions.
//!
//! This module defines the error taxonomy for the driver. It provides:
//! 1. **Lookup Errors:** Regulator ids outside the rail table.
//! 2. **Range Errors:** Voltage requests outside a rail's `[min, max]` window.
//! 3. **Bus Errors:** Failed I2C transactions, tagged with the register involved.
//! 4. **Configuration Errors:** Unreadable or malformed configuration files.
//!
//! Every operation separates "the operation failed" (an `Err`) from "the answer is no"
//! (`Ok(false)`), so an inactive rail is never confused with a failed query.

use thiserror::Error;

/// Errors reported by the MAX77620 driver.
#[derive(Debug, Error)]
pub enum PmicError {
    /// The regulator id is not an index into the rail table.
    ///
    /// Ids are valid in `0..count`; `id == count` is rejected like any other
    /// out-of-range value.
    #[error("regulator id {id} out of range (table has {count} rails)")]
    InvalidRegulator {
        /// The rejected id.
        id: usize,
        /// Number of rails in the table.
        count: usize,
    },

    /// No rail in the table carries the given name.
    #[error("unknown regulator {0:?}")]
    UnknownRegulator(String),

    /// The requested voltage lies outside the rail's supported window.
    ///
    /// No bus transaction is issued when this is returned.
    #[error("{name}: {requested} uV outside [{min}, {max}] uV")]
    VoltageOutOfRange {
        /// Rail name (e.g. `"ldo2"`).
        name: &'static str,
        /// Requested output in microvolts.
        requested: u32,
        /// Minimum supported output in microvolts.
        min: u32,
        /// Maximum supported output in microvolts.
        max: u32,
    },

    /// An I2C transaction with the PMIC failed.
    #[error("i2c transaction on register {reg:#04x} failed: {message}")]
    Bus {
        /// Register address the transaction targeted.
        reg: u8,
        /// Description of the underlying controller error.
        message: String,
    },

    /// The configuration could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration parsed but holds an unusable value.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<std::convert::Infallible> for PmicError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

impl PmicError {
    /// Wraps a bus controller error for the given register.
    ///
    /// # Arguments
    ///
    /// * `reg` - Register address the transaction targeted.
    /// * `err` - The controller's error value.
    pub fn bus(reg: u8, err: &impl std::fmt::Debug) -> Self {
        Self::Bus {
            reg,
            message: format!("{err:?}"),
        }
    }
}
