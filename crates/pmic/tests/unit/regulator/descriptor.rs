//! # Descriptor Tests
//!
//! Register-level helpers on `RegulatorDescriptor`: selector rounding, FPS encoding, enable
//! field updates, and status decoding.

use max77620_core::regulator::{REGULATOR_COUNT, REGULATORS, RegulatorId};
use proptest::prelude::*;
use rstest::rstest;

// ══════════════════════════════════════════════════════════
// Voltage Selector
// ══════════════════════════════════════════════════════════

#[test]
fn selector_at_minimum_is_zero() {
    for r in &REGULATORS {
        assert_eq!(r.voltage_selector(r.min_uv), Some(0), "{}", r.name);
    }
}

#[test]
fn selector_one_step_above_minimum_is_one() {
    for r in REGULATORS.iter().filter(|r| r.max_uv >= r.min_uv + r.step_uv) {
        assert_eq!(r.voltage_selector(r.min_uv + r.step_uv), Some(1), "{}", r.name);
    }
}

#[test]
fn selector_rounds_up_between_steps() {
    let ldo2 = RegulatorId::LDO2.descriptor();
    assert_eq!(ldo2.voltage_selector(800_001), Some(1));
    assert_eq!(ldo2.voltage_selector(825_000), Some(1));
    assert_eq!(ldo2.voltage_selector(850_000), Some(1));
    assert_eq!(ldo2.voltage_selector(850_001), Some(2));
}

#[test]
fn selector_rejects_out_of_window() {
    let sd1 = RegulatorId::SD1.descriptor();
    assert_eq!(sd1.voltage_selector(599_999), None);
    assert_eq!(sd1.voltage_selector(1_125_001), None);
    assert_eq!(sd1.voltage_selector(0), None);
    assert_eq!(sd1.voltage_selector(u32::MAX), None);
}

#[rstest]
#[case(RegulatorId::SD1, 1_100_000, 40)]
#[case(RegulatorId::SD2, 1_325_000, 58)]
#[case(RegulatorId::SD3, 1_800_000, 96)]
#[case(RegulatorId::LDO0, 1_200_000, 16)]
#[case(RegulatorId::LDO2, 3_300_000, 50)]
#[case(RegulatorId::LDO4, 850_000, 4)]
#[case(RegulatorId::LDO7, 1_050_000, 5)]
fn selector_values(#[case] id: RegulatorId, #[case] uv: u32, #[case] steps: u32) {
    assert_eq!(id.descriptor().voltage_selector(uv), Some(steps));
}

#[test]
fn apply_selector_preserves_bits_outside_mask() {
    let sd1 = RegulatorId::SD1.descriptor();
    assert_eq!(sd1.apply_selector(0x80, 40), 0x80 | 40);
    assert_eq!(sd1.apply_selector(0xFF, 0), 0x80);

    let ldo2 = RegulatorId::LDO2.descriptor();
    assert_eq!(ldo2.apply_selector(0xC0, 50), 0xF2);
}

#[test]
fn sd0_top_of_range_wraps_at_mask_width() {
    // 64 steps do not fit the 6-bit SD0 field; the write keeps only the masked bits.
    let sd0 = RegulatorId::SD0.descriptor();
    assert_eq!(sd0.voltage_selector(1_400_000), Some(64));
    assert_eq!(sd0.apply_selector(0x00, 64), 0x00);
}

#[test]
fn selector_voltage_decodes_masked_field() {
    let ldo2 = RegulatorId::LDO2.descriptor();
    assert_eq!(ldo2.selector_voltage(0x14), 1_800_000);
    assert_eq!(ldo2.selector_voltage(0xC0 | 0x14), 1_800_000);
}

fn rail_and_voltage() -> impl Strategy<Value = (usize, u32)> {
    (0..REGULATOR_COUNT, any::<u32>()).prop_map(|(index, raw)| {
        let r = &REGULATORS[index];
        (index, r.min_uv + raw % (r.max_uv - r.min_uv + 1))
    })
}

proptest! {
    #[test]
    fn selector_is_smallest_step_at_or_above_request((index, uv) in rail_and_voltage()) {
        let r = &REGULATORS[index];
        let steps = r.voltage_selector(uv).unwrap();
        let programmed = r.min_uv + steps * r.step_uv;
        prop_assert!(programmed >= uv);
        prop_assert!(programmed - uv < r.step_uv);
    }

    #[test]
    fn selector_none_below_minimum(index in 0..REGULATOR_COUNT, below in 1u32..=600_000) {
        let r = &REGULATORS[index];
        prop_assert_eq!(r.voltage_selector(r.min_uv - below), None);
    }

    #[test]
    fn selector_none_above_maximum(index in 0..REGULATOR_COUNT, above in 1u32..=1_000_000) {
        let r = &REGULATORS[index];
        prop_assert_eq!(r.voltage_selector(r.max_uv + above), None);
    }
}

// ══════════════════════════════════════════════════════════
// Sequencing
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(RegulatorId::SD0, 0x4F)]
#[case(RegulatorId::SD1, 0x29)]
#[case(RegulatorId::SD2, 0x55)]
#[case(RegulatorId::SD3, 0x1B)]
#[case(RegulatorId::LDO0, 0xC7)]
#[case(RegulatorId::LDO4, 0x0F)]
#[case(RegulatorId::LDO7, 0x5C)]
#[case(RegulatorId::LDO8, 0xC7)]
fn fps_config_byte(#[case] id: RegulatorId, #[case] expected: u8) {
    assert_eq!(id.descriptor().fps_config_byte(), expected);
}

// ══════════════════════════════════════════════════════════
// Enable and Status
// ══════════════════════════════════════════════════════════

#[test]
fn enable_register_depends_on_kind() {
    let sd2 = RegulatorId::SD2.descriptor();
    assert_eq!(sd2.enable_register(), sd2.cfg_reg);

    let ldo3 = RegulatorId::LDO3.descriptor();
    assert_eq!(ldo3.enable_register(), ldo3.volt_reg);
}

#[test]
fn apply_enable_sets_normal_mode() {
    let sd1 = RegulatorId::SD1.descriptor();
    assert_eq!(sd1.apply_enable(0x00, true), 0x30);
    assert_eq!(sd1.apply_enable(0x1F, true), 0x3F);

    let ldo5 = RegulatorId::LDO5.descriptor();
    assert_eq!(ldo5.apply_enable(0x14, true), 0xD4);
    assert_eq!(ldo5.apply_enable(0x54, true), 0xD4);
}

#[test]
fn apply_disable_clears_only_the_field() {
    let sd1 = RegulatorId::SD1.descriptor();
    assert_eq!(sd1.apply_enable(0x3F, false), 0x0F);

    let ldo5 = RegulatorId::LDO5.descriptor();
    assert_eq!(ldo5.apply_enable(0xD4, false), 0x14);
}

#[test]
fn status_register_depends_on_kind() {
    assert_eq!(RegulatorId::SD3.descriptor().status_register(), 0x14);
    assert_eq!(RegulatorId::LDO6.descriptor().status_register(), 0x30);
}

#[test]
fn sd_status_bit_is_active_low() {
    let sd0 = RegulatorId::SD0.descriptor();
    assert!(sd0.is_active(0x7F));
    assert!(!sd0.is_active(0x80));
    assert!(!sd0.is_active(0xFF));
}

#[test]
fn ldo_status_bit_three_is_active_high() {
    let ldo1 = RegulatorId::LDO1.descriptor();
    assert!(ldo1.is_active(0x08));
    assert!(ldo1.is_active(0xFF));
    assert!(!ldo1.is_active(0xF7));
}
