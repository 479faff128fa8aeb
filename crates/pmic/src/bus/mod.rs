//! Bus and timer seams.
//!
//! The driver never talks to hardware directly. It is generic over:
//! 1. **I2C:** An [`I2cController`] providing single-byte register reads and writes.
//! 2. **Timing:** A [`Timer`] providing the busy-wait used as the settle delay.
//!
//! With the `embedded-hal` feature, [`hal`] adapts any `embedded-hal` 1.0 I2C bus and delay
//! source onto these traits.

/// Byte-level I2C and delay traits.
pub mod traits;

/// Adapters from `embedded-hal` 1.0 traits.
#[cfg(feature = "embedded-hal")]
pub mod hal;

pub use traits::{I2cController, Timer};
