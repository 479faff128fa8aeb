//! MAX77620 regulator driver.
//!
//! This module implements every operation the firmware performs on the PMIC. It provides:
//! 1. **Register Access:** Single-byte reads and writes to the configured bus and address.
//! 2. **Status:** Whether a rail is up, decoded from `STATSD` (SD) or the LDO config register.
//! 3. **Sequencing:** Programming a rail's FPS slot from its table entry.
//! 4. **Voltage:** Range-checked, rounded-up selector writes followed by the settle delay.
//! 5. **Enable:** Power-mode field updates followed by the settle delay.
//! 6. **Boot Defaults:** Sequencing, default voltage, and enable for every rail except SD0.
//!
//! Operations are stateless request/response pairs against the rail table; the driver only
//! owns its bus, its timer, and the bus location.

use tracing::{debug, info, trace, warn};

use crate::bus::{I2cController, Timer};
use crate::common::PmicError;
use crate::common::constants::{REG_CID4, REG_SD_CFG2, SD_CFG2_BOOT_VALUE, SETTLE_DELAY_US};
use crate::config::PmicConfig;
use crate::regulator::{REGULATORS, RegulatorDescriptor, RegulatorId};

/// Rail left untouched by [`Max77620::apply_defaults`]; it powers the CPU running the firmware.
pub const BOOT_SKIPPED_RAIL: RegulatorId = RegulatorId::SD0;

/// Per-rail step of [`Max77620::apply_defaults`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultsStep {
    /// Programming the FPS slot.
    Sequencing,
    /// Setting the default voltage.
    Voltage,
    /// Enabling a sequenced rail.
    Enable,
}

/// A boot-default step that failed on one rail.
#[derive(Debug)]
pub struct RailFailure {
    /// The rail.
    pub id: RegulatorId,
    /// The step that failed.
    pub step: DefaultsStep,
    /// The error it returned.
    pub error: PmicError,
}

/// Outcome of [`Max77620::apply_defaults`].
#[derive(Debug, Default)]
pub struct DefaultsReport {
    /// Rails on which every step succeeded.
    pub configured: Vec<RegulatorId>,
    /// Rails whose enable write succeeded (those with an FPS source).
    pub enabled: Vec<RegulatorId>,
    /// Every failed step, in issue order. Later steps and rails still ran.
    pub failures: Vec<RailFailure>,
    /// Error from the final `SD_CFG2` write, if it failed.
    pub sd_cfg2_error: Option<PmicError>,
}

impl DefaultsReport {
    /// Returns true if every rail and the final global write succeeded.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.sd_cfg2_error.is_none()
    }
}

/// Converts any id-like value into a validated [`RegulatorId`].
fn resolve<I>(id: I) -> Result<RegulatorId, PmicError>
where
    I: TryInto<RegulatorId>,
    PmicError: From<I::Error>,
{
    Ok(id.try_into()?)
}

/// Driver for one MAX77620.
///
/// Per-rail operations accept either a [`RegulatorId`] or a raw `usize` index; raw indices
/// are validated against the table and rejected with [`PmicError::InvalidRegulator`] before
/// any bus traffic.
#[derive(Debug)]
pub struct Max77620<B, T> {
    /// I2C controller the PMIC is reached through.
    bus: B,
    /// Delay source for the settle wait.
    timer: T,
    /// Bus number and device address.
    config: PmicConfig,
}

impl<B, T> Max77620<B, T> {
    /// Creates a driver for the PMIC at its default location (I2C5, address `0x3C`).
    ///
    /// # Arguments
    ///
    /// * `bus` - I2C controller.
    /// * `timer` - Delay source used for the settle wait.
    pub fn new(bus: B, timer: T) -> Self {
        Self::with_config(bus, timer, PmicConfig::default())
    }

    /// Creates a driver for a PMIC at the location given by `config`.
    pub const fn with_config(bus: B, timer: T, config: PmicConfig) -> Self {
        Self { bus, timer, config }
    }

    /// Returns the bus location in use.
    pub const fn config(&self) -> &PmicConfig {
        &self.config
    }

    /// Returns the rail table.
    #[allow(clippy::unused_self)]
    pub fn regulators(&self) -> &'static [RegulatorDescriptor] {
        &REGULATORS
    }

    /// Returns the bus.
    pub const fn bus(&self) -> &B {
        &self.bus
    }

    /// Returns the bus mutably, e.g. to preload or inspect a simulated device.
    pub const fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Returns the timer.
    pub const fn timer(&self) -> &T {
        &self.timer
    }

    /// Consumes the driver and returns the bus and timer.
    pub fn release(self) -> (B, T) {
        (self.bus, self.timer)
    }
}

impl<B: I2cController, T: Timer> Max77620<B, T> {
    /// Writes one byte to a PMIC register.
    ///
    /// # Errors
    ///
    /// Returns [`PmicError::Bus`] if the transaction fails.
    pub fn write_register(&mut self, reg: u8, value: u8) -> Result<(), PmicError> {
        trace!("write {reg:#04x} <- {value:#04x}");
        self.bus
            .send_byte(self.config.bus, self.config.address, reg, value)
            .map_err(|e| PmicError::bus(reg, &e))
    }

    /// Reads one byte from a PMIC register.
    ///
    /// # Errors
    ///
    /// Returns [`PmicError::Bus`] if the transaction fails.
    pub fn read_register(&mut self, reg: u8) -> Result<u8, PmicError> {
        let value = self
            .bus
            .recv_byte(self.config.bus, self.config.address, reg)
            .map_err(|e| PmicError::bus(reg, &e))?;
        trace!("read {reg:#04x} -> {value:#04x}");
        Ok(value)
    }

    /// Reports whether a rail is up.
    ///
    /// SD rails are up when their bit in `STATSD` is clear; LDO rails are up when bit 3 of
    /// their configuration register is set. `Ok(false)` means "inactive", never "failed".
    ///
    /// # Errors
    ///
    /// Returns [`PmicError::InvalidRegulator`] for an unknown id and [`PmicError::Bus`] if the
    /// read fails.
    pub fn status<I>(&mut self, id: I) -> Result<bool, PmicError>
    where
        I: TryInto<RegulatorId>,
        PmicError: From<I::Error>,
    {
        let rail = resolve(id)?.descriptor();
        let status = self.read_register(rail.status_register())?;
        let active = rail.is_active(status);
        debug!(rail = rail.name, active, "status");
        Ok(active)
    }

    /// Programs a rail's FPS slot with its source, power-up period, and power-down period.
    ///
    /// No read-back is performed.
    ///
    /// # Errors
    ///
    /// Returns [`PmicError::InvalidRegulator`] for an unknown id and [`PmicError::Bus`] if the
    /// write fails.
    pub fn configure_sequencing<I>(&mut self, id: I) -> Result<(), PmicError>
    where
        I: TryInto<RegulatorId>,
        PmicError: From<I::Error>,
    {
        let rail = resolve(id)?.descriptor();
        self.write_register(rail.fps_reg, rail.fps_config_byte())?;
        debug!(rail = rail.name, src = ?rail.fps_src, "sequencing configured");
        Ok(())
    }

    /// Sets a rail's output voltage.
    ///
    /// The selector is rounded up so the output is never below the request. Only the bits
    /// covered by the rail's voltage mask are changed. Blocks for the settle delay after the
    /// write.
    ///
    /// # Arguments
    ///
    /// * `id` - Rail to program.
    /// * `uv` - Requested output in microvolts.
    ///
    /// # Errors
    ///
    /// Returns [`PmicError::VoltageOutOfRange`] without touching the bus if `uv` is outside the
    /// rail's window, [`PmicError::InvalidRegulator`] for an unknown id, and
    /// [`PmicError::Bus`] if a transaction fails.
    pub fn set_voltage<I>(&mut self, id: I, uv: u32) -> Result<(), PmicError>
    where
        I: TryInto<RegulatorId>,
        PmicError: From<I::Error>,
    {
        let rail = resolve(id)?.descriptor();
        let Some(steps) = rail.voltage_selector(uv) else {
            return Err(PmicError::VoltageOutOfRange {
                name: rail.name,
                requested: uv,
                min: rail.min_uv,
                max: rail.max_uv,
            });
        };

        let current = self.read_register(rail.volt_reg)?;
        self.write_register(rail.volt_reg, rail.apply_selector(current, steps))?;
        self.timer.sleep_us(SETTLE_DELAY_US);

        debug!(rail = rail.name, uv, steps, "voltage set");
        Ok(())
    }

    /// Reads back a rail's programmed output voltage in microvolts.
    ///
    /// # Errors
    ///
    /// Returns [`PmicError::InvalidRegulator`] for an unknown id and [`PmicError::Bus`] if the
    /// read fails.
    pub fn voltage<I>(&mut self, id: I) -> Result<u32, PmicError>
    where
        I: TryInto<RegulatorId>,
        PmicError: From<I::Error>,
    {
        let rail = resolve(id)?.descriptor();
        let raw = self.read_register(rail.volt_reg)?;
        Ok(rail.selector_voltage(raw))
    }

    /// Enables or disables a rail.
    ///
    /// The power-mode field lives in the configuration register on SD rails and in the
    /// voltage register on LDO rails. Enabling sets the field to normal mode (`0b11`);
    /// disabling clears it. Blocks for the settle delay after the write.
    ///
    /// # Errors
    ///
    /// Returns [`PmicError::InvalidRegulator`] for an unknown id and [`PmicError::Bus`] if a
    /// transaction fails.
    pub fn set_enabled<I>(&mut self, id: I, enable: bool) -> Result<(), PmicError>
    where
        I: TryInto<RegulatorId>,
        PmicError: From<I::Error>,
    {
        let rail = resolve(id)?.descriptor();
        let reg = rail.enable_register();

        let current = self.read_register(reg)?;
        self.write_register(reg, rail.apply_enable(current, enable))?;
        self.timer.sleep_us(SETTLE_DELAY_US);

        debug!(rail = rail.name, enable, "power mode updated");
        Ok(())
    }

    /// Reports whether a rail's power-mode field is non-zero.
    ///
    /// # Errors
    ///
    /// Returns [`PmicError::InvalidRegulator`] for an unknown id and [`PmicError::Bus`] if the
    /// read fails.
    pub fn is_enabled<I>(&mut self, id: I) -> Result<bool, PmicError>
    where
        I: TryInto<RegulatorId>,
        PmicError: From<I::Error>,
    {
        let rail = resolve(id)?.descriptor();
        let value = self.read_register(rail.enable_register())?;
        Ok(value & rail.enable_mask != 0)
    }

    /// Applies the boot configuration to every rail except SD0.
    ///
    /// For each rail: reads `CID4` (the PMIC must see a read before a rail is reconfigured),
    /// programs its FPS slot, sets its default voltage, and enables it if it has an FPS source.
    /// Finally writes `0x04` to `SD_CFG2`.
    ///
    /// Every step runs regardless of earlier failures. A failed step is logged and recorded in
    /// the report; a failed `CID4` read is only logged.
    pub fn apply_defaults(&mut self) -> DefaultsReport {
        info!("Applying MAX77620 boot defaults");
        let mut report = DefaultsReport::default();

        for id in RegulatorId::all().filter(|&id| id != BOOT_SKIPPED_RAIL) {
            self.apply_rail_defaults(id, &mut report);
        }

        if let Err(error) = self.write_register(REG_SD_CFG2, SD_CFG2_BOOT_VALUE) {
            warn!(%error, "failed to write SD_CFG2");
            report.sd_cfg2_error = Some(error);
        }

        info!(
            configured = report.configured.len(),
            enabled = report.enabled.len(),
            failed = report.failures.len(),
            "Boot defaults applied"
        );
        report
    }

    /// Applies the boot configuration to one rail, recording the outcome in `report`.
    fn apply_rail_defaults(&mut self, id: RegulatorId, report: &mut DefaultsReport) {
        let rail = id.descriptor();
        let failed_before = report.failures.len();

        if let Err(error) = self.read_register(REG_CID4) {
            warn!(rail = %id, %error, "CID4 read failed");
        }

        if let Err(error) = self.configure_sequencing(id) {
            record(report, id, DefaultsStep::Sequencing, error);
        }
        if let Err(error) = self.set_voltage(id, rail.default_uv) {
            record(report, id, DefaultsStep::Voltage, error);
        }
        if rail.is_sequenced() {
            match self.set_enabled(id, true) {
                Ok(()) => report.enabled.push(id),
                Err(error) => record(report, id, DefaultsStep::Enable, error),
            }
        }

        if report.failures.len() == failed_before {
            report.configured.push(id);
        }
    }
}

/// Logs a failed step and adds it to `report`.
fn record(report: &mut DefaultsReport, id: RegulatorId, step: DefaultsStep, error: PmicError) {
    warn!(rail = %id, ?step, %error, "boot default step failed");
    report.failures.push(RailFailure { id, step, error });
}
