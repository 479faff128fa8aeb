//! # Enable Tests

use crate::common::harness::TestContext;
use max77620_core::sim::Transaction;
use max77620_core::{PmicError, RegulatorId};
use pretty_assertions::assert_eq;

#[test]
fn enabling_sd_rail_sets_normal_mode_in_cfg_register() {
    let mut ctx = TestContext::with_registers(&[(0x1E, 0x0F)]);
    ctx.driver.set_enabled(RegulatorId::SD1, true).unwrap();

    assert_eq!(
        ctx.log(),
        vec![
            Transaction::Read { reg: 0x1E, value: 0x0F },
            Transaction::Write { reg: 0x1E, value: 0x3F },
        ]
    );
    assert_eq!(ctx.delays(), vec![1000]);
    assert!(ctx.driver.status(RegulatorId::SD1).unwrap());
}

#[test]
fn disabling_sd_rail_clears_only_the_mode_field() {
    let mut ctx = TestContext::with_registers(&[(0x1E, 0x3F)]);
    ctx.driver.set_enabled(RegulatorId::SD1, false).unwrap();

    assert_eq!(ctx.reg(0x1E), 0x0F);
    assert!(!ctx.driver.status(RegulatorId::SD1).unwrap());
}

#[test]
fn enabling_ldo_rail_updates_voltage_register() {
    let mut ctx = TestContext::with_registers(&[(0x27, 0x14)]);
    ctx.driver.set_enabled(RegulatorId::LDO2, true).unwrap();

    assert_eq!(ctx.writes(), vec![(0x27, 0xD4)]);
    assert!(ctx.driver.status(RegulatorId::LDO2).unwrap());
    assert_eq!(ctx.driver.voltage(RegulatorId::LDO2).unwrap(), 1_800_000);
}

#[test]
fn disabling_ldo_rail_keeps_voltage() {
    let mut ctx = TestContext::with_registers(&[(0x27, 0xD4)]);
    ctx.driver.set_enabled(RegulatorId::LDO2, false).unwrap();

    assert_eq!(ctx.reg(0x27), 0x14);
    assert!(!ctx.driver.status(RegulatorId::LDO2).unwrap());
}

#[test]
fn is_enabled_reflects_power_mode_field() {
    let mut ctx = TestContext::new();
    assert!(!ctx.driver.is_enabled(RegulatorId::LDO5).unwrap());

    ctx.driver.set_enabled(RegulatorId::LDO5, true).unwrap();
    assert!(ctx.driver.is_enabled(RegulatorId::LDO5).unwrap());

    ctx.driver.set_enabled(RegulatorId::LDO5, false).unwrap();
    assert!(!ctx.driver.is_enabled(RegulatorId::LDO5).unwrap());
}

#[test]
fn enabling_twice_is_idempotent() {
    let mut ctx = TestContext::new();
    ctx.driver.set_enabled(RegulatorId::SD3, true).unwrap();
    ctx.driver.set_enabled(RegulatorId::SD3, true).unwrap();

    assert_eq!(ctx.writes(), vec![(0x20, 0x30), (0x20, 0x30)]);
    assert_eq!(ctx.delays(), vec![1000, 1000]);
}

#[test]
fn invalid_id_is_rejected() {
    let mut ctx = TestContext::new();
    let err = ctx.driver.set_enabled(13usize, true).unwrap_err();

    assert!(matches!(err, PmicError::InvalidRegulator { .. }));
    assert!(ctx.log().is_empty());
    assert!(ctx.delays().is_empty());
}
