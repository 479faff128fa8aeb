//! Regulator descriptor.
//!
//! A `RegulatorDescriptor` carries everything the driver needs to know about one physical
//! rail: where its registers live, how its voltage selector is encoded, which bits enable it,
//! how its status is reported, and which flexible power sequencer (FPS) slot it occupies.

use serde::Serialize;
use std::fmt;

use crate::common::constants::{
    FPS_PERIOD_MASK, FPS_PU_PERIOD_SHIFT, FPS_SRC_0, FPS_SRC_1, FPS_SRC_2, FPS_SRC_NONE,
    FPS_SRC_SHIFT, LDO_CFG2_STATUS_BIT, POWER_MODE_NORMAL, REG_STATSD,
};
use crate::common::update_field;

/// Regulator topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegulatorKind {
    /// Step-down switching converter (SD rails).
    Switching,
    /// Low-dropout linear regulator (LDO rails).
    Linear,
}

impl fmt::Display for RegulatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Switching => write!(f, "SD"),
            Self::Linear => write!(f, "LDO"),
        }
    }
}

/// Flexible power sequencer source a rail follows on power-up and power-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FpsSource {
    /// FPS source 0.
    Src0,
    /// FPS source 1.
    Src1,
    /// FPS source 2.
    Src2,
    /// Not sequenced; the rail is only switched by software.
    None,
}

impl FpsSource {
    /// Returns the 2-bit source code written into an FPS slot register.
    pub const fn code(self) -> u8 {
        match self {
            Self::Src0 => FPS_SRC_0,
            Self::Src1 => FPS_SRC_1,
            Self::Src2 => FPS_SRC_2,
            Self::None => FPS_SRC_NONE,
        }
    }
}

/// Static description of one regulator rail.
///
/// All voltages are in microvolts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegulatorDescriptor {
    /// Switching or linear.
    pub kind: RegulatorKind,
    /// Rail name as printed on schematics (`"sd0"`, `"ldo4"`, ...).
    pub name: &'static str,
    /// Output change per selector step.
    pub step_uv: u32,
    /// Output at selector 0.
    pub min_uv: u32,
    /// Output programmed by the boot defaults.
    pub default_uv: u32,
    /// Highest output the rail may be programmed to.
    pub max_uv: u32,
    /// Register holding the voltage selector. For LDO rails it also holds the power mode.
    pub volt_reg: u8,
    /// Configuration register. For LDO rails it also reports the rail status.
    pub cfg_reg: u8,
    /// Bits of `volt_reg` occupied by the voltage selector.
    pub volt_mask: u8,
    /// Bits of the enable register occupied by the power-mode field.
    pub enable_mask: u8,
    /// Bit position of the power-mode field.
    pub enable_shift: u8,
    /// Bit of `STATSD` that is set while an SD rail is *not* OK. Zero for LDO rails.
    pub status_mask: u8,
    /// FPS slot register for this rail.
    pub fps_reg: u8,
    /// FPS source the rail follows.
    pub fps_src: FpsSource,
    /// Power-down period code (3 bits).
    pub pd_period: u8,
    /// Power-up period code (3 bits).
    pub pu_period: u8,
}

impl RegulatorDescriptor {
    /// Returns true if `uv` lies within `[min_uv, max_uv]`.
    #[inline]
    pub const fn supports(&self, uv: u32) -> bool {
        uv >= self.min_uv && uv <= self.max_uv
    }

    /// Computes the selector step count for a requested output.
    ///
    /// Rounds up, so the programmed output is never below the request:
    /// `steps = ceil((uv - min_uv) / step_uv)`. Returns `None` if `uv` is outside the
    /// rail's window. The count is not masked; callers apply `volt_mask` when writing.
    pub const fn voltage_selector(&self, uv: u32) -> Option<u32> {
        if !self.supports(uv) {
            return None;
        }
        Some((uv - self.min_uv).div_ceil(self.step_uv))
    }

    /// Decodes a raw voltage register value to microvolts.
    pub const fn selector_voltage(&self, raw: u8) -> u32 {
        self.min_uv + (raw & self.volt_mask) as u32 * self.step_uv
    }

    /// Encodes the FPS slot byte: source in bits 7:6, power-up period in 5:3, power-down in 2:0.
    pub const fn fps_config_byte(&self) -> u8 {
        (self.fps_src.code() << FPS_SRC_SHIFT)
            | ((self.pu_period & FPS_PERIOD_MASK) << FPS_PU_PERIOD_SHIFT)
            | (self.pd_period & FPS_PERIOD_MASK)
    }

    /// Returns true if an FPS source controls this rail.
    pub const fn is_sequenced(&self) -> bool {
        !matches!(self.fps_src, FpsSource::None)
    }

    /// Register read to determine whether the rail is up.
    ///
    /// SD rails share `STATSD`; LDO rails report through their configuration register.
    pub const fn status_register(&self) -> u8 {
        match self.kind {
            RegulatorKind::Switching => REG_STATSD,
            RegulatorKind::Linear => self.cfg_reg,
        }
    }

    /// Interprets a status register value.
    ///
    /// The SD status bit is active-low; the LDO status bit is active-high.
    pub const fn is_active(&self, status: u8) -> bool {
        match self.kind {
            RegulatorKind::Switching => status & self.status_mask == 0,
            RegulatorKind::Linear => status & LDO_CFG2_STATUS_BIT != 0,
        }
    }

    /// Register holding the power-mode field.
    ///
    /// SD rails keep it in the configuration register, LDO rails in the voltage register.
    pub const fn enable_register(&self) -> u8 {
        match self.kind {
            RegulatorKind::Switching => self.cfg_reg,
            RegulatorKind::Linear => self.volt_reg,
        }
    }

    /// Returns `current` with the power-mode field set to normal mode or cleared.
    pub const fn apply_enable(&self, current: u8, enable: bool) -> u8 {
        if enable {
            update_field(
                current,
                self.enable_mask,
                POWER_MODE_NORMAL << self.enable_shift,
            )
        } else {
            current & !self.enable_mask
        }
    }

    /// Returns `current` with the voltage selector field replaced by `steps & volt_mask`.
    pub const fn apply_selector(&self, current: u8, steps: u32) -> u8 {
        update_field(current, self.volt_mask, (steps & self.volt_mask as u32) as u8)
    }
}

impl fmt::Display for RegulatorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) {}..{} uV step {} uV",
            self.name, self.kind, self.min_uv, self.max_uv, self.step_uv
        )
    }
}
