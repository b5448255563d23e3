//! Fixed SDRAM Unit Tests.
//!
//! Verifies the register image, where it is written, and the size returned.

use ls1046afrwy_ddr::board::fixed::{FIXED_CTRL_NUM, FIXED_STEP};
use ls1046afrwy_ddr::common::FIXED_DRAM_SIZE;
use ls1046afrwy_ddr::fixed_sdram;
use ls1046afrwy_ddr::soc::{DdrCfgRegs, SimulatedBoard};
use pretty_assertions::assert_eq;

use crate::common::mocks::platform::MockPlatform;

// ══════════════════════════════════════════════════════════
// 1. Register image
// ══════════════════════════════════════════════════════════

#[test]
fn image_has_single_populated_chip_select() {
    let regs = DdrCfgRegs::ls1046afrwy_fixed();
    let enabled: Vec<_> = regs.enabled_chip_selects().map(|(i, _)| i).collect();
    assert_eq!(enabled, vec![0]);
    assert_eq!(regs.cs[0].bnds, 0x0000_00ff);
    assert_eq!(regs.cs[0].config, 0x8001_0412);
    assert_eq!(regs.cs[0].config_2, 0);
}

#[test]
fn image_timing_and_mode_values() {
    let regs = DdrCfgRegs::ls1046afrwy_fixed();
    assert_eq!(regs.timing_cfg_0, 0xFA55_0018);
    assert_eq!(regs.timing_cfg_1, 0xBAB4_0C52);
    assert_eq!(regs.timing_cfg_2, 0x0048_C11C);
    assert_eq!(regs.timing_cfg_3, 0x0111_1000);
    assert_eq!(regs.timing_cfg_4, 0x0000_0002);
    assert_eq!(regs.timing_cfg_5, 0x0340_1400);
    assert_eq!(regs.timing_cfg_6, 0);
    assert_eq!(regs.timing_cfg_7, 0x2330_0000);
    assert_eq!(regs.timing_cfg_8, 0x0211_6600);
    assert_eq!(regs.ddr_sdram_cfg, 0xC504_0008);
    assert_eq!(regs.ddr_sdram_cfg_2, 0x0040_1010);
    assert_eq!(regs.ddr_sdram_cfg_3, 0x0000_0001);
    assert_eq!(regs.ddr_sdram_mode, 0x0101_0210);
    assert_eq!(regs.ddr_sdram_mode_9, 0x0000_0500);
    assert_eq!(regs.ddr_sdram_mode_10, 0x0400_0000);
    assert_eq!(regs.ddr_sdram_interval, 0x1860_0618);
}

#[test]
fn image_calibration_and_init_values() {
    let regs = DdrCfgRegs::ls1046afrwy_fixed();
    assert_eq!(regs.ddr_data_init, 0xdead_beef);
    assert_eq!(regs.ddr_sdram_clk_cntl, 0x0200_0000);
    assert_eq!(regs.ddr_zq_cntl, 0x8A09_0705);
    assert_eq!(regs.ddr_wrlvl_cntl, 0x8655_0607);
    assert_eq!(regs.ddr_wrlvl_cntl_2, 0x0707_0708);
    assert_eq!(regs.ddr_wrlvl_cntl_3, 0x0080_8088);
    assert_eq!(regs.dq_map, [0; 4]);
    assert_eq!(regs.ddr_cdr1, 0x8004_0000);
    assert_eq!(regs.ddr_cdr2, 0x0000_00C1);
}

// ══════════════════════════════════════════════════════════
// 2. Programming
// ══════════════════════════════════════════════════════════

#[test]
fn writes_controller_zero_once_and_returns_4gib() {
    let mut platform = MockPlatform::new();
    platform
        .expect_set_memctl_regs()
        .withf(|regs, ctrl_num, step| {
            regs.ddr_sdram_cfg == 0xC504_0008 && *ctrl_num == 0 && *step == 0
        })
        .times(1)
        .return_const(());

    assert_eq!(fixed_sdram(&mut platform), 4_294_967_296);
}

#[test]
fn repeated_calls_write_identical_images() {
    let mut board = SimulatedBoard::default();
    let first = fixed_sdram(&mut board);
    let second = fixed_sdram(&mut board);

    assert_eq!(first, FIXED_DRAM_SIZE);
    assert_eq!(second, FIXED_DRAM_SIZE);

    let writes = board.writes();
    assert_eq!(writes.len(), 2);
    assert_eq!(writes[0], writes[1]);
    assert_eq!(writes[0].ctrl_num, FIXED_CTRL_NUM);
    assert_eq!(writes[0].step, FIXED_STEP);
    assert_eq!(writes[0].regs, DdrCfgRegs::ls1046afrwy_fixed());
}
