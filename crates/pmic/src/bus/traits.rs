//! Bus collaborator traits.
//!
//! This module defines the two collaborators the driver depends on. It provides:
//! 1. **I2C:** `send_byte` and `recv_byte`, each a single addressed register transaction on a
//!    numbered controller.
//! 2. **Timer:** `sleep_us`, a blocking delay used after regulator writes.
//!
//! Both traits are implemented for `&mut T`, so a driver can borrow a bus it does not own.

use std::fmt;

/// A controller able to issue single-byte register transactions.
pub trait I2cController {
    /// Error reported by a failed transaction.
    type Error: fmt::Debug;

    /// Writes `value` to register `reg` of the device at 7-bit address `addr` on controller `bus`.
    fn send_byte(&mut self, bus: u8, addr: u8, reg: u8, value: u8) -> Result<(), Self::Error>;

    /// Reads register `reg` of the device at 7-bit address `addr` on controller `bus`.
    fn recv_byte(&mut self, bus: u8, addr: u8, reg: u8) -> Result<u8, Self::Error>;
}

/// A blocking delay source.
pub trait Timer {
    /// Blocks for at least `us` microseconds.
    fn sleep_us(&mut self, us: u32);
}

impl<T: I2cController + ?Sized> I2cController for &mut T {
    type Error = T::Error;

    fn send_byte(&mut self, bus: u8, addr: u8, reg: u8, value: u8) -> Result<(), Self::Error> {
        (**self).send_byte(bus, addr, reg, value)
    }

    fn recv_byte(&mut self, bus: u8, addr: u8, reg: u8) -> Result<u8, Self::Error> {
        (**self).recv_byte(bus, addr, reg)
    }
}

impl<T: Timer + ?Sized> Timer for &mut T {
    fn sleep_us(&mut self, us: u32) {
        (**self).sleep_us(us);
    }
}
