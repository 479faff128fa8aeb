//! `embedded-hal` adapters.
//!
//! `HalBus` turns an `embedded_hal::i2c::I2c` implementation into an [`I2cController`], and
//! `HalDelay` turns an `embedded_hal::delay::DelayNs` implementation into a [`Timer`].
//!
//! An `embedded-hal` bus handle already names one controller, so the `bus` argument of
//! [`I2cController`] is ignored by `HalBus`.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use super::traits::{I2cController, Timer};

/// [`I2cController`] over an `embedded-hal` I2C bus.
#[derive(Debug)]
pub struct HalBus<I2C> {
    i2c: I2C,
}

impl<I2C> HalBus<I2C> {
    /// Wraps an I2C bus handle.
    pub const fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Returns the wrapped bus handle.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> I2cController for HalBus<I2C> {
    type Error = I2C::Error;

    fn send_byte(&mut self, _bus: u8, addr: u8, reg: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c.write(addr, &[reg, value])
    }

    fn recv_byte(&mut self, _bus: u8, addr: u8, reg: u8) -> Result<u8, Self::Error> {
        let mut buf = [0u8; 1];
        self.i2c.write_read(addr, &[reg], &mut buf)?;
        Ok(buf[0])
    }
}

/// [`Timer`] over an `embedded-hal` delay source.
#[derive(Debug)]
pub struct HalDelay<D> {
    delay: D,
}

impl<D> HalDelay<D> {
    /// Wraps a delay source.
    pub const fn new(delay: D) -> Self {
        Self { delay }
    }
}

impl<D: DelayNs> Timer for HalDelay<D> {
    fn sleep_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }
}
