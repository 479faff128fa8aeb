//! The MAX77620 rail table as wired on Tegra X1 boards.

use crate::common::constants::{
    LDO_POWER_MODE_MASK, LDO_POWER_MODE_SHIFT, LDO_VOLT_MASK, REG_FPS_LDO0, REG_FPS_LDO1,
    REG_FPS_LDO2, REG_FPS_LDO3, REG_FPS_LDO4, REG_FPS_LDO5, REG_FPS_LDO6, REG_FPS_LDO7,
    REG_FPS_LDO8, REG_FPS_SD0, REG_FPS_SD1, REG_FPS_SD2, REG_FPS_SD3, REG_LDO0_CFG, REG_LDO0_CFG2,
    REG_LDO1_CFG, REG_LDO1_CFG2, REG_LDO2_CFG, REG_LDO2_CFG2, REG_LDO3_CFG, REG_LDO3_CFG2,
    REG_LDO4_CFG, REG_LDO4_CFG2, REG_LDO5_CFG, REG_LDO5_CFG2, REG_LDO6_CFG, REG_LDO6_CFG2,
    REG_LDO7_CFG, REG_LDO7_CFG2, REG_LDO8_CFG, REG_LDO8_CFG2, REG_SD0, REG_SD0_CFG, REG_SD1,
    REG_SD1_CFG, REG_SD2, REG_SD2_CFG, REG_SD3, REG_SD3_CFG, SD_POWER_MODE_MASK,
    SD_POWER_MODE_SHIFT, SD0_VOLT_MASK, SD1_VOLT_MASK, SDX_VOLT_MASK,
};

use super::descriptor::{FpsSource, RegulatorDescriptor, RegulatorKind};

/// Fields shared by every SD rail.
const SD: RegulatorDescriptor = RegulatorDescriptor {
    kind: RegulatorKind::Switching,
    name: "",
    step_uv: 12_500,
    min_uv: 600_000,
    default_uv: 600_000,
    max_uv: 600_000,
    volt_reg: 0,
    cfg_reg: 0,
    volt_mask: SDX_VOLT_MASK,
    enable_mask: SD_POWER_MODE_MASK,
    enable_shift: SD_POWER_MODE_SHIFT,
    status_mask: 0,
    fps_reg: 0,
    fps_src: FpsSource::None,
    pd_period: 7,
    pu_period: 0,
};

/// Fields shared by every LDO rail.
const LDO: RegulatorDescriptor = RegulatorDescriptor {
    kind: RegulatorKind::Linear,
    name: "",
    step_uv: 50_000,
    min_uv: 800_000,
    default_uv: 800_000,
    max_uv: 800_000,
    volt_reg: 0,
    cfg_reg: 0,
    volt_mask: LDO_VOLT_MASK,
    enable_mask: LDO_POWER_MODE_MASK,
    enable_shift: LDO_POWER_MODE_SHIFT,
    status_mask: 0,
    fps_reg: 0,
    fps_src: FpsSource::None,
    pd_period: 7,
    pu_period: 0,
};

/// Number of rails on the PMIC.
pub const REGULATOR_COUNT: usize = 13;

/// Every rail on the PMIC, indexed by [`RegulatorId`](super::RegulatorId).
///
/// SD rails come first (ids 0..=3), then LDO rails (ids 4..=12).
pub static REGULATORS: [RegulatorDescriptor; REGULATOR_COUNT] = RAILS;

const RAILS: [RegulatorDescriptor; REGULATOR_COUNT] = [
    RegulatorDescriptor {
        name: "sd0",
        default_uv: 625_000,
        max_uv: 1_400_000,
        volt_reg: REG_SD0,
        cfg_reg: REG_SD0_CFG,
        volt_mask: SD0_VOLT_MASK,
        status_mask: 0x80,
        fps_reg: REG_FPS_SD0,
        fps_src: FpsSource::Src1,
        pd_period: 7,
        pu_period: 1,
        ..SD
    },
    RegulatorDescriptor {
        name: "sd1",
        default_uv: 1_100_000,
        max_uv: 1_125_000,
        volt_reg: REG_SD1,
        cfg_reg: REG_SD1_CFG,
        volt_mask: SD1_VOLT_MASK,
        status_mask: 0x40,
        fps_reg: REG_FPS_SD1,
        fps_src: FpsSource::Src0,
        pd_period: 1,
        pu_period: 5,
        ..SD
    },
    RegulatorDescriptor {
        name: "sd2",
        default_uv: 1_325_000,
        max_uv: 1_350_000,
        volt_reg: REG_SD2,
        cfg_reg: REG_SD2_CFG,
        status_mask: 0x20,
        fps_reg: REG_FPS_SD2,
        fps_src: FpsSource::Src1,
        pd_period: 5,
        pu_period: 2,
        ..SD
    },
    RegulatorDescriptor {
        name: "sd3",
        default_uv: 1_800_000,
        max_uv: 1_800_000,
        volt_reg: REG_SD3,
        cfg_reg: REG_SD3_CFG,
        status_mask: 0x10,
        fps_reg: REG_FPS_SD3,
        fps_src: FpsSource::Src0,
        pd_period: 3,
        pu_period: 3,
        ..SD
    },
    RegulatorDescriptor {
        name: "ldo0",
        step_uv: 25_000,
        default_uv: 1_200_000,
        max_uv: 1_200_000,
        volt_reg: REG_LDO0_CFG,
        cfg_reg: REG_LDO0_CFG2,
        fps_reg: REG_FPS_LDO0,
        ..LDO
    },
    RegulatorDescriptor {
        name: "ldo1",
        step_uv: 25_000,
        default_uv: 1_050_000,
        max_uv: 1_050_000,
        volt_reg: REG_LDO1_CFG,
        cfg_reg: REG_LDO1_CFG2,
        fps_reg: REG_FPS_LDO1,
        ..LDO
    },
    RegulatorDescriptor {
        name: "ldo2",
        default_uv: 1_800_000,
        max_uv: 3_300_000,
        volt_reg: REG_LDO2_CFG,
        cfg_reg: REG_LDO2_CFG2,
        fps_reg: REG_FPS_LDO2,
        ..LDO
    },
    RegulatorDescriptor {
        name: "ldo3",
        default_uv: 3_100_000,
        max_uv: 3_100_000,
        volt_reg: REG_LDO3_CFG,
        cfg_reg: REG_LDO3_CFG2,
        fps_reg: REG_FPS_LDO3,
        ..LDO
    },
    RegulatorDescriptor {
        name: "ldo4",
        step_uv: 12_500,
        default_uv: 850_000,
        max_uv: 850_000,
        volt_reg: REG_LDO4_CFG,
        cfg_reg: REG_LDO4_CFG2,
        fps_reg: REG_FPS_LDO4,
        fps_src: FpsSource::Src0,
        pd_period: 7,
        pu_period: 1,
        ..LDO
    },
    RegulatorDescriptor {
        name: "ldo5",
        default_uv: 1_800_000,
        max_uv: 1_800_000,
        volt_reg: REG_LDO5_CFG,
        cfg_reg: REG_LDO5_CFG2,
        fps_reg: REG_FPS_LDO5,
        ..LDO
    },
    RegulatorDescriptor {
        name: "ldo6",
        default_uv: 2_900_000,
        max_uv: 2_900_000,
        volt_reg: REG_LDO6_CFG,
        cfg_reg: REG_LDO6_CFG2,
        fps_reg: REG_FPS_LDO6,
        ..LDO
    },
    RegulatorDescriptor {
        name: "ldo7",
        default_uv: 1_050_000,
        max_uv: 1_050_000,
        volt_reg: REG_LDO7_CFG,
        cfg_reg: REG_LDO7_CFG2,
        fps_reg: REG_FPS_LDO7,
        fps_src: FpsSource::Src1,
        pd_period: 4,
        pu_period: 3,
        ..LDO
    },
    RegulatorDescriptor {
        name: "ldo8",
        default_uv: 1_050_000,
        max_uv: 1_050_000,
        volt_reg: REG_LDO8_CFG,
        cfg_reg: REG_LDO8_CFG2,
        fps_reg: REG_FPS_LDO8,
        ..LDO
    },
];

const _: () = {
    let mut i = 0;
    while i < RAILS.len() {
        let r = &RAILS[i];
        assert!(r.min_uv <= r.default_uv && r.default_uv <= r.max_uv);
        assert!(r.step_uv > 0);
        i += 1;
    }
};
