//! # Status Tests

use crate::common::harness::TestContext;
use crate::common::mocks::{MockDelay, MockI2c};
use max77620_core::sim::Transaction;
use max77620_core::{Max77620, PmicError, RegulatorId};
use rstest::rstest;

#[test]
fn fresh_device_reports_every_rail_inactive() {
    let mut ctx = TestContext::new();
    for id in RegulatorId::all() {
        assert!(!ctx.driver.status(id).unwrap(), "{id}");
    }
}

#[test]
fn status_reads_one_register_and_never_waits() {
    let mut ctx = TestContext::new();
    let _ = ctx.driver.status(RegulatorId::SD2).unwrap();

    assert_eq!(ctx.log(), vec![Transaction::Read { reg: 0x14, value: 0xF0 }]);
    assert!(ctx.delays().is_empty());
}

#[test]
fn sd_rail_active_once_its_power_mode_is_set() {
    let mut ctx = TestContext::with_registers(&[(0x1E, 0x30)]);
    assert!(ctx.driver.status(RegulatorId::SD1).unwrap());
    assert!(!ctx.driver.status(RegulatorId::SD2).unwrap());
}

#[test]
fn ldo_rail_reports_through_its_cfg2_register() {
    let mut ctx = TestContext::with_registers(&[(0x29, 0xEE)]);
    assert!(ctx.driver.status(RegulatorId::LDO3).unwrap());
    assert_eq!(
        ctx.log(),
        vec![Transaction::Read { reg: 0x2A, value: 0x08 }]
    );
}

#[rstest]
#[case(RegulatorId::SD0, 0x7F, true)]
#[case(RegulatorId::SD0, 0x80, false)]
#[case(RegulatorId::SD1, 0xBF, true)]
#[case(RegulatorId::SD1, 0x40, false)]
#[case(RegulatorId::SD3, 0xEF, true)]
#[case(RegulatorId::SD3, 0x10, false)]
fn sd_status_decodes_active_low_bits(
    #[case] id: RegulatorId,
    #[case] statsd: u8,
    #[case] expected: bool,
) {
    let mut driver = Max77620::new(MockI2c::reading(0x14, statsd), MockDelay::new());
    assert_eq!(driver.status(id).unwrap(), expected);
}

#[rstest]
#[case(0x08, true)]
#[case(0xFF, true)]
#[case(0xF7, false)]
#[case(0x00, false)]
fn ldo_status_decodes_bit_three(#[case] cfg2: u8, #[case] expected: bool) {
    let mut driver = Max77620::new(MockI2c::reading(0x32, cfg2), MockDelay::new());
    assert_eq!(driver.status(RegulatorId::LDO7).unwrap(), expected);
}

#[test]
fn raw_index_is_accepted() {
    let mut ctx = TestContext::with_registers(&[(0x20, 0x30)]);
    assert!(ctx.driver.status(3usize).unwrap());
}

#[test]
fn index_equal_to_count_is_rejected_without_traffic() {
    let mut ctx = TestContext::new();
    let err = ctx.driver.status(13usize).unwrap_err();

    assert!(matches!(err, PmicError::InvalidRegulator { id: 13, count: 13 }));
    assert!(ctx.log().is_empty());
}
