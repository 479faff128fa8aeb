//! Register-file model of the MAX77620.
//!
//! This module lets the driver run without hardware. It provides:
//! 1. **Device Model:** `SimulatedPmic`, 256 byte registers behind an [`I2cController`] that
//!    only answers on its own bus and address.
//! 2. **Transaction Log:** Every successful read and write in issue order.
//! 3. **Status Derivation:** A rail's status bit follows writes to its power-mode field, so an enable
//!    is visible through `STATSD` and the LDO configuration registers.
//! 4. **Fault Injection:** Per-register failures for exercising error paths.
//! 5. **Timing:** `RecordingTimer`, which records settle delays instead of sleeping.
//!
//! [`I2cController`]: crate::bus::I2cController

/// Simulated PMIC device.
pub mod pmic;

/// Delay recorder.
pub mod timer;

pub use pmic::{SimBusError, SimulatedPmic, Transaction};
pub use timer::RecordingTimer;
