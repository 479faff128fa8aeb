//! MAX77620 power-management IC driver library.
//!
//! This crate drives the MAX77620 regulator controller found on Tegra X1 boards with the following:
//! 1. **Common:** Register map constants, field masks, and the `PmicError` taxonomy.
//! 2. **Regulators:** The static per-rail descriptor table (SD and LDO rails) and validated ids.
//! 3. **Bus:** The two byte-level I2C primitives and the busy-wait timer the driver is built on.
//! 4. **Driver:** Status, sequencing, voltage, enable, and boot-default operations.
//! 5. **Simulation:** A register-file model of the chip for host-side dry runs and tests.
//! 6. **Configuration:** Bus identifier and device address, loadable from JSON.

/// Bus seams (I2C byte primitives, settle timer) and the optional `embedded-hal` adapter.
pub mod bus;
/// Register map constants, errors, and shared helpers.
pub mod common;
/// Driver configuration (bus identifier, device address).
pub mod config;
/// The regulator driver and its operations.
pub mod driver;
/// Regulator descriptors, ids, and the static rail table.
pub mod regulator;
/// Register-file model of the PMIC and a recording timer.
pub mod sim;

/// Error type returned by every fallible driver operation.
pub use crate::common::PmicError;
/// Root configuration type; use `PmicConfig::default()` or deserialize from JSON.
pub use crate::config::PmicConfig;
/// The driver; construct with `Max77620::new`.
pub use crate::driver::{DefaultsReport, DefaultsStep, Max77620};
/// Rail descriptor, id, and the static table.
pub use crate::regulator::{REGULATORS, RegulatorDescriptor, RegulatorId, RegulatorKind};
