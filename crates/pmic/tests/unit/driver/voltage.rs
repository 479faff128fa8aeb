//! # Voltage Tests
//!
//! Selector rounding, masked read-modify-write, range rejection, and read-back.

use crate::common::harness::TestContext;
use max77620_core::regulator::{REGULATOR_COUNT, REGULATORS};
use max77620_core::sim::Transaction;
use max77620_core::{PmicError, RegulatorId};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn sd1_keeps_bits_above_mask() {
    let mut ctx = TestContext::with_registers(&[(0x17, 0x80)]);
    ctx.driver.set_voltage(RegulatorId::SD1, 1_100_000).unwrap();

    assert_eq!(
        ctx.log(),
        vec![
            Transaction::Read { reg: 0x17, value: 0x80 },
            Transaction::Write { reg: 0x17, value: 0xA8 },
        ]
    );
    assert_eq!(ctx.delays(), vec![1000]);
}

#[test]
fn ldo2_keeps_power_mode_bits() {
    let mut ctx = TestContext::with_registers(&[(0x27, 0xC0)]);
    ctx.driver.set_voltage(RegulatorId::LDO2, 3_300_000).unwrap();

    assert_eq!(ctx.reg(0x27), 0xF2);
    assert!(ctx.driver.status(RegulatorId::LDO2).unwrap());
}

#[test]
fn request_between_steps_rounds_up() {
    let mut ctx = TestContext::new();
    ctx.driver.set_voltage(RegulatorId::LDO2, 825_000).unwrap();

    assert_eq!(ctx.reg(0x27), 0x01);
    assert_eq!(ctx.driver.voltage(RegulatorId::LDO2).unwrap(), 850_000);
}

#[test]
fn minimum_and_maximum_are_accepted() {
    let mut ctx = TestContext::new();
    ctx.driver.set_voltage(RegulatorId::SD2, 600_000).unwrap();
    assert_eq!(ctx.reg(0x18), 0x00);

    ctx.driver.set_voltage(RegulatorId::SD2, 1_350_000).unwrap();
    assert_eq!(ctx.reg(0x18), 60);
}

#[test]
fn above_maximum_is_rejected_before_any_traffic() {
    let mut ctx = TestContext::new();
    let err = ctx
        .driver
        .set_voltage(RegulatorId::LDO2, 3_350_000)
        .unwrap_err();

    assert!(matches!(
        err,
        PmicError::VoltageOutOfRange {
            name: "ldo2",
            requested: 3_350_000,
            min: 800_000,
            max: 3_300_000,
        }
    ));
    assert!(ctx.log().is_empty());
    assert!(ctx.delays().is_empty());
}

#[test]
fn below_minimum_is_rejected_before_any_traffic() {
    let mut ctx = TestContext::new();
    let err = ctx.driver.set_voltage(RegulatorId::SD1, 0).unwrap_err();

    assert!(matches!(err, PmicError::VoltageOutOfRange { name: "sd1", .. }));
    assert!(ctx.log().is_empty());
}

#[test]
fn ldo6_accepts_its_maximum_and_rejects_above() {
    let mut ctx = TestContext::new();
    ctx.driver.set_voltage(RegulatorId::LDO6, 2_900_000).unwrap();
    assert_eq!(ctx.reg(0x2F), 0x2A);
    assert!(ctx.driver.set_voltage(RegulatorId::LDO6, 2_950_000).is_err());
}

#[test]
fn invalid_id_is_rejected() {
    let mut ctx = TestContext::new();
    let err = ctx.driver.set_voltage(13usize, 1_000_000).unwrap_err();

    assert!(matches!(err, PmicError::InvalidRegulator { id: 13, .. }));
    assert!(ctx.log().is_empty());
}

/// Rails whose full selector range fits their voltage field.
fn rail_without_wrap() -> impl Strategy<Value = (usize, u32)> {
    (0..REGULATOR_COUNT)
        .prop_filter("selector range exceeds mask", |&i| {
            let r = &REGULATORS[i];
            r.voltage_selector(r.max_uv)
                .is_some_and(|steps| steps <= u32::from(r.volt_mask))
        })
        .prop_flat_map(|i| {
            let r = &REGULATORS[i];
            (Just(i), r.min_uv..=r.max_uv)
        })
}

proptest! {
    #[test]
    fn read_back_is_within_one_step_above_request((index, uv) in rail_without_wrap()) {
        let mut ctx = TestContext::new();
        let rail = &REGULATORS[index];

        ctx.driver.set_voltage(index, uv).unwrap();
        let programmed = ctx.driver.voltage(index).unwrap();

        prop_assert!(programmed >= uv);
        prop_assert!(programmed - uv < rail.step_uv);
    }
}
