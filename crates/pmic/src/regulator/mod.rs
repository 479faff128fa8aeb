//! Regulator rails.
//!
//! This module describes the rails the PMIC provides. It includes:
//! 1. **Descriptors:** Per-rail register addresses, voltage encoding, enable and status bits.
//! 2. **Table:** The immutable `REGULATORS` array, one entry per physical rail.
//! 3. **Ids:** `RegulatorId`, an index into the table that is validated on construction.

/// Rail descriptor type and its register-level helpers.
pub mod descriptor;

/// The static rail table.
pub mod table;

pub use descriptor::{FpsSource, RegulatorDescriptor, RegulatorKind};
pub use table::{REGULATOR_COUNT, REGULATORS};

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::common::PmicError;

/// Index of a rail in [`REGULATORS`].
///
/// Always in `0..REGULATOR_COUNT`; an out-of-range id cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RegulatorId(usize);

impl RegulatorId {
    /// SD0, normally the CPU rail.
    pub const SD0: Self = Self(0);
    /// SD1.
    pub const SD1: Self = Self(1);
    /// SD2.
    pub const SD2: Self = Self(2);
    /// SD3.
    pub const SD3: Self = Self(3);
    /// LDO0.
    pub const LDO0: Self = Self(4);
    /// LDO1.
    pub const LDO1: Self = Self(5);
    /// LDO2.
    pub const LDO2: Self = Self(6);
    /// LDO3.
    pub const LDO3: Self = Self(7);
    /// LDO4.
    pub const LDO4: Self = Self(8);
    /// LDO5.
    pub const LDO5: Self = Self(9);
    /// LDO6.
    pub const LDO6: Self = Self(10);
    /// LDO7.
    pub const LDO7: Self = Self(11);
    /// LDO8.
    pub const LDO8: Self = Self(12);

    /// Validates a raw index.
    ///
    /// Returns `None` for `index >= REGULATOR_COUNT`, including `index == REGULATOR_COUNT`.
    pub const fn new(index: usize) -> Option<Self> {
        if index < REGULATOR_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Looks up a rail by name (`"sd0"`, `"ldo7"`, ...). Case-insensitive.
    pub fn by_name(name: &str) -> Option<Self> {
        REGULATORS
            .iter()
            .position(|r| r.name.eq_ignore_ascii_case(name))
            .map(Self)
    }

    /// Iterates over every rail id in table order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..REGULATOR_COUNT).map(Self)
    }

    /// Returns the raw table index.
    pub const fn index(self) -> usize {
        self.0
    }

    /// Returns the rail's descriptor.
    pub fn descriptor(self) -> &'static RegulatorDescriptor {
        &REGULATORS[self.0]
    }
}

impl TryFrom<usize> for RegulatorId {
    type Error = PmicError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index).ok_or(PmicError::InvalidRegulator {
            id: index,
            count: REGULATOR_COUNT,
        })
    }
}

impl FromStr for RegulatorId {
    type Err = PmicError;

    /// Parses either a rail name or a decimal table index.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(index) = s.parse::<usize>() {
            return Self::try_from(index);
        }
        Self::by_name(s).ok_or_else(|| PmicError::UnknownRegulator(s.to_string()))
    }
}

impl fmt::Display for RegulatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.descriptor().name)
    }
}
