//! MAX77620 Register Map and Field Constants.
//!
//! This module defines the hardware constants the driver is built on. It includes:
//! 1. **Bus Constants:** The I2C controller and 7-bit device address the PMIC answers on.
//! 2. **Register Addresses:** Voltage, configuration, status, and flexible power sequencer (FPS) registers.
//! 3. **Field Masks:** Voltage selector widths and power-mode (enable) fields per rail kind.
//! 4. **Sequencing Constants:** FPS source codes and field positions.
//! 5. **Timing Constants:** The settle delay after a regulator write.

/// I2C controller the PMIC is wired to on Tegra X1 boards (I2C5).
pub const PMIC_I2C_BUS: u8 = 5;

/// 7-bit I2C device address of the MAX77620.
pub const PMIC_I2C_ADDR: u8 = 0x3C;

/// Wait after a voltage or enable write before the output is considered stable, in microseconds.
pub const SETTLE_DELAY_US: u32 = 1000;

/// Number of byte-wide registers addressable on the device.
pub const REGISTER_COUNT: usize = 256;

/// Switching regulator status register (one "not OK" bit per SD rail).
pub const REG_STATSD: u8 = 0x14;

/// SD0 voltage register.
pub const REG_SD0: u8 = 0x16;
/// SD1 voltage register.
pub const REG_SD1: u8 = 0x17;
/// SD2 voltage register.
pub const REG_SD2: u8 = 0x18;
/// SD3 voltage register.
pub const REG_SD3: u8 = 0x19;

/// SD0 configuration register.
pub const REG_SD0_CFG: u8 = 0x1D;
/// SD1 configuration register.
pub const REG_SD1_CFG: u8 = 0x1E;
/// SD2 configuration register.
pub const REG_SD2_CFG: u8 = 0x1F;
/// SD3 configuration register.
pub const REG_SD3_CFG: u8 = 0x20;

/// Global switching regulator configuration register.
pub const REG_SD_CFG2: u8 = 0x22;

/// Value written to `SD_CFG2` at the end of the boot defaults.
pub const SD_CFG2_BOOT_VALUE: u8 = 0x04;

/// LDO0 configuration register (power mode and voltage).
pub const REG_LDO0_CFG: u8 = 0x23;
/// LDO0 secondary configuration register.
pub const REG_LDO0_CFG2: u8 = 0x24;
/// LDO1 configuration register.
pub const REG_LDO1_CFG: u8 = 0x25;
/// LDO1 secondary configuration register.
pub const REG_LDO1_CFG2: u8 = 0x26;
/// LDO2 configuration register.
pub const REG_LDO2_CFG: u8 = 0x27;
/// LDO2 secondary configuration register.
pub const REG_LDO2_CFG2: u8 = 0x28;
/// LDO3 configuration register.
pub const REG_LDO3_CFG: u8 = 0x29;
/// LDO3 secondary configuration register.
pub const REG_LDO3_CFG2: u8 = 0x2A;
/// LDO4 configuration register.
pub const REG_LDO4_CFG: u8 = 0x2B;
/// LDO4 secondary configuration register.
pub const REG_LDO4_CFG2: u8 = 0x2C;
/// LDO5 configuration register.
pub const REG_LDO5_CFG: u8 = 0x2D;
/// LDO5 secondary configuration register.
pub const REG_LDO5_CFG2: u8 = 0x2E;
/// LDO6 configuration register.
pub const REG_LDO6_CFG: u8 = 0x2F;
/// LDO6 secondary configuration register.
pub const REG_LDO6_CFG2: u8 = 0x30;
/// LDO7 configuration register.
pub const REG_LDO7_CFG: u8 = 0x31;
/// LDO7 secondary configuration register.
pub const REG_LDO7_CFG2: u8 = 0x32;
/// LDO8 configuration register.
pub const REG_LDO8_CFG: u8 = 0x33;
/// LDO8 secondary configuration register.
pub const REG_LDO8_CFG2: u8 = 0x34;

/// FPS slot register for LDO0.
pub const REG_FPS_LDO0: u8 = 0x46;
/// FPS slot register for LDO1.
pub const REG_FPS_LDO1: u8 = 0x47;
/// FPS slot register for LDO2.
pub const REG_FPS_LDO2: u8 = 0x48;
/// FPS slot register for LDO3.
pub const REG_FPS_LDO3: u8 = 0x49;
/// FPS slot register for LDO4.
pub const REG_FPS_LDO4: u8 = 0x4A;
/// FPS slot register for LDO5.
pub const REG_FPS_LDO5: u8 = 0x4B;
/// FPS slot register for LDO6.
pub const REG_FPS_LDO6: u8 = 0x4C;
/// FPS slot register for LDO7.
pub const REG_FPS_LDO7: u8 = 0x4D;
/// FPS slot register for LDO8.
pub const REG_FPS_LDO8: u8 = 0x4E;
/// FPS slot register for SD0.
pub const REG_FPS_SD0: u8 = 0x4F;
/// FPS slot register for SD1.
pub const REG_FPS_SD1: u8 = 0x50;
/// FPS slot register for SD2.
pub const REG_FPS_SD2: u8 = 0x51;
/// FPS slot register for SD3.
pub const REG_FPS_SD3: u8 = 0x52;

/// Chip identification register 4 (OTP option). Read before reconfiguring a rail.
pub const REG_CID4: u8 = 0x5C;

/// SD0 voltage selector width (6 bits).
pub const SD0_VOLT_MASK: u8 = 0x3F;
/// SD1 voltage selector width (7 bits).
pub const SD1_VOLT_MASK: u8 = 0x7F;
/// SD2/SD3 voltage selector width (full byte).
pub const SDX_VOLT_MASK: u8 = 0xFF;
/// LDO voltage selector width (6 bits).
pub const LDO_VOLT_MASK: u8 = 0x3F;

/// Power-mode field in the SD configuration register (bits 5:4).
pub const SD_POWER_MODE_MASK: u8 = 0x30;
/// Bit position of the SD power-mode field.
pub const SD_POWER_MODE_SHIFT: u8 = 4;
/// Power-mode field in the LDO configuration register (bits 7:6).
pub const LDO_POWER_MODE_MASK: u8 = 0xC0;
/// Bit position of the LDO power-mode field.
pub const LDO_POWER_MODE_SHIFT: u8 = 6;

/// Power-mode value written when enabling a rail (normal mode, `0b11`).
pub const POWER_MODE_NORMAL: u8 = 0b11;

/// Bit in an LDO's secondary configuration register reporting the rail as up.
pub const LDO_CFG2_STATUS_BIT: u8 = 1 << 3;

/// Bit position of the FPS source field in an FPS slot register (bits 7:6).
pub const FPS_SRC_SHIFT: u8 = 6;
/// Bit position of the power-up period field (bits 5:3).
pub const FPS_PU_PERIOD_SHIFT: u8 = 3;
/// Width mask of the power-up and power-down period fields.
pub const FPS_PERIOD_MASK: u8 = 0x07;

/// FPS source 0.
pub const FPS_SRC_0: u8 = 0;
/// FPS source 1.
pub const FPS_SRC_1: u8 = 1;
/// FPS source 2.
pub const FPS_SRC_2: u8 = 2;
/// Rail not controlled by any FPS source.
pub const FPS_SRC_NONE: u8 = 3;
