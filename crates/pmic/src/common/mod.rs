//! Common definitions shared by every part of the driver.
//!
//! This module provides the fundamental building blocks used across the crate. It includes:
//! 1. **Constants:** The MAX77620 register map, field masks, and timing values.
//! 2. **Error Handling:** The `PmicError` type returned by all fallible operations.
//! 3. **Bit Helpers:** Masked read-modify-write of byte registers.

/// MAX77620 register addresses, field masks, and timing constants.
pub mod constants;

/// Error types for driver operations.
pub mod error;

pub use error::PmicError;

/// Replaces the bits of `current` selected by `mask` with the same bits of `value`.
///
/// Bits outside `mask` are preserved.
///
/// # Examples
///
/// ```
/// use max77620_core::common::update_field;
///
/// assert_eq!(update_field(0b1010_1010, 0x0F, 0x05), 0b1010_0101);
/// ```
#[inline]
pub const fn update_field(current: u8, mask: u8, value: u8) -> u8 {
    (current & !mask) | (value & mask)
}
