//! Simulated MAX77620.
//!
//! A flat file of 256 byte registers. Reads return the stored byte, writes store it. When a
//! write lands on a rail's power-mode register, that rail's status bit is re-derived:
//!
//! * `STATSD` carries one active-low bit per SD rail, set while the rail's power mode is off.
//! * Bit 3 of each LDO's secondary configuration register is set while the rail is on.
//!
//! Preloaded status registers take precedence over the derived bits, so a rail can be modelled
//! as enabled but not OK until its power mode is written again.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;
use tracing::trace;

use crate::bus::I2cController;
use crate::common::constants::{
    LDO_CFG2_STATUS_BIT, PMIC_I2C_ADDR, PMIC_I2C_BUS, REG_STATSD, REGISTER_COUNT,
};
use crate::regulator::{REGULATORS, RegulatorDescriptor, RegulatorKind};

/// One completed bus transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Transaction {
    /// A register read and the value returned.
    Read {
        /// Register address.
        reg: u8,
        /// Value returned to the driver.
        value: u8,
    },
    /// A register write and the value stored.
    Write {
        /// Register address.
        reg: u8,
        /// Value written by the driver.
        value: u8,
    },
}

impl Transaction {
    /// Returns the register the transaction addressed.
    pub const fn reg(&self) -> u8 {
        match self {
            Self::Read { reg, .. } | Self::Write { reg, .. } => *reg,
        }
    }

    /// Returns true for writes.
    pub const fn is_write(&self) -> bool {
        matches!(self, Self::Write { .. })
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { reg, value } => write!(f, "R {reg:#04x} -> {value:#04x}"),
            Self::Write { reg, value } => write!(f, "W {reg:#04x} <- {value:#04x}"),
        }
    }
}

/// Failures reported by the simulated bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimBusError {
    /// Nothing answered at the addressed bus and device.
    #[error("no acknowledge from device {addr:#04x} on bus {bus}")]
    NoAck {
        /// Controller number used.
        bus: u8,
        /// Device address used.
        addr: u8,
    },
    /// A failure injected with [`SimulatedPmic::fail_register`].
    #[error("injected failure on register {0:#04x}")]
    Injected(u8),
}

/// Register-file model of the PMIC with a transaction log.
#[derive(Debug, Clone)]
pub struct SimulatedPmic {
    /// Controller number the device answers on.
    bus: u8,
    /// Device address the device answers on.
    address: u8,
    /// Register contents.
    regs: [u8; REGISTER_COUNT],
    /// Completed transactions in issue order.
    log: Vec<Transaction>,
    /// Registers whose transactions fail.
    failing: BTreeSet<u8>,
}

impl SimulatedPmic {
    /// Creates a device at the default location with every rail off.
    pub fn new() -> Self {
        Self::at(PMIC_I2C_BUS, PMIC_I2C_ADDR)
    }

    /// Creates a device answering on `bus` at `address` with every rail off.
    pub fn at(bus: u8, address: u8) -> Self {
        let mut pmic = Self {
            bus,
            address,
            regs: [0; REGISTER_COUNT],
            log: Vec::new(),
            failing: BTreeSet::new(),
        };
        for rail in &REGULATORS {
            pmic.refresh_rail(rail);
        }
        pmic
    }

    /// Preloads register contents without logging them.
    ///
    /// Status bits of rails whose power mode is preloaded are re-derived, unless the status
    /// register itself is part of the preload.
    #[must_use]
    pub fn with_registers(mut self, values: impl IntoIterator<Item = (u8, u8)>) -> Self {
        let values: Vec<(u8, u8)> = values.into_iter().collect();
        for &(reg, value) in &values {
            self.regs[reg as usize] = value;
            self.refresh_rails_controlled_by(reg);
        }
        for &(reg, value) in &values {
            self.regs[reg as usize] = value;
        }
        self
    }

    /// Sets one register without logging it.
    ///
    /// Behaves like a one-entry [`with_registers`](Self::with_registers).
    pub fn set_register(&mut self, reg: u8, value: u8) {
        self.regs[reg as usize] = value;
        self.refresh_rails_controlled_by(reg);
        self.regs[reg as usize] = value;
    }

    /// Returns the current contents of a register.
    pub const fn register(&self, reg: u8) -> u8 {
        self.regs[reg as usize]
    }

    /// Returns the whole register file.
    pub const fn registers(&self) -> &[u8; REGISTER_COUNT] {
        &self.regs
    }

    /// Returns the completed transactions in issue order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.log
    }

    /// Returns `(reg, value)` for every completed write, in order.
    pub fn writes(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.log.iter().filter_map(|t| match *t {
            Transaction::Write { reg, value } => Some((reg, value)),
            Transaction::Read { .. } => None,
        })
    }

    /// Empties the transaction log.
    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    /// Makes every later transaction on `reg` fail with [`SimBusError::Injected`].
    pub fn fail_register(&mut self, reg: u8) {
        let _ = self.failing.insert(reg);
    }

    /// Checks addressing and injected faults for a transaction.
    fn check(&self, bus: u8, addr: u8, reg: u8) -> Result<(), SimBusError> {
        if bus != self.bus || addr != self.address {
            return Err(SimBusError::NoAck { bus, addr });
        }
        if self.failing.contains(&reg) {
            return Err(SimBusError::Injected(reg));
        }
        Ok(())
    }

    /// Re-derives the status bit of every rail whose power-mode field lives in `reg`.
    fn refresh_rails_controlled_by(&mut self, reg: u8) {
        for rail in REGULATORS.iter().filter(|r| r.enable_register() == reg) {
            self.refresh_rail(rail);
        }
    }

    /// Re-derives one rail's status bit from its power-mode field.
    fn refresh_rail(&mut self, rail: &RegulatorDescriptor) {
        let on = self.regs[rail.enable_register() as usize] & rail.enable_mask != 0;
        match rail.kind {
            RegulatorKind::Switching => {
                let statsd = &mut self.regs[REG_STATSD as usize];
                if on {
                    *statsd &= !rail.status_mask;
                } else {
                    *statsd |= rail.status_mask;
                }
            }
            RegulatorKind::Linear => {
                let cfg2 = &mut self.regs[rail.cfg_reg as usize];
                if on {
                    *cfg2 |= LDO_CFG2_STATUS_BIT;
                } else {
                    *cfg2 &= !LDO_CFG2_STATUS_BIT;
                }
            }
        }
    }
}

impl Default for SimulatedPmic {
    fn default() -> Self {
        Self::new()
    }
}

impl I2cController for SimulatedPmic {
    type Error = SimBusError;

    fn send_byte(&mut self, bus: u8, addr: u8, reg: u8, value: u8) -> Result<(), Self::Error> {
        self.check(bus, addr, reg)?;
        self.regs[reg as usize] = value;
        self.refresh_rails_controlled_by(reg);
        self.log.push(Transaction::Write { reg, value });
        trace!("sim write {reg:#04x} <- {value:#04x}");
        Ok(())
    }

    fn recv_byte(&mut self, bus: u8, addr: u8, reg: u8) -> Result<u8, Self::Error> {
        self.check(bus, addr, reg)?;
        let value = self.regs[reg as usize];
        self.log.push(Transaction::Read { reg, value });
        Ok(value)
    }
}
