//! Fixed-register SDRAM bring-up.
//!
//! When SPD-driven computation is not run, controller 0 is programmed from a register image
//! captured on a working board: one populated chip select, 4 GiB of DDR4, 64-bit bus.
//! The size is assumed, not measured.

use crate::common::FIXED_DRAM_SIZE;
use crate::soc::regs::{ChipSelectRegs, DdrCfgRegs};
use crate::soc::traits::MemctlRegisters;

/// Controller the fixed image is written to.
pub const FIXED_CTRL_NUM: u32 = 0;

/// Programming step: everything in one pass, controller not shared.
pub const FIXED_STEP: u32 = 0;

impl DdrCfgRegs {
    /// Register image for the LS1046A-FRWY soldered-down memory.
    pub const fn ls1046afrwy_fixed() -> Self {
        Self {
            cs: [
                ChipSelectRegs {
                    bnds: 0x0000_00ff,
                    config: 0x8001_0412,
                    config_2: 0,
                },
                ChipSelectRegs {
                    bnds: 0,
                    config: 0,
                    config_2: 0,
                },
                ChipSelectRegs {
                    bnds: 0,
                    config: 0,
                    config_2: 0,
                },
                ChipSelectRegs {
                    bnds: 0,
                    config: 0,
                    config_2: 0,
                },
            ],

            timing_cfg_3: 0x0111_1000,
            timing_cfg_0: 0xFA55_0018,
            timing_cfg_1: 0xBAB4_0C52,
            timing_cfg_2: 0x0048_C11C,
            timing_cfg_4: 0x0000_0002,
            timing_cfg_5: 0x0340_1400,
            timing_cfg_6: 0,
            timing_cfg_7: 0x2330_0000,
            timing_cfg_8: 0x0211_6600,

            ddr_sdram_cfg: 0xC504_0008,
            ddr_sdram_cfg_2: 0x0040_1010,
            ddr_sdram_cfg_3: 0x0000_0001,

            ddr_sdram_mode: 0x0101_0210,
            ddr_sdram_mode_2: 0,
            ddr_sdram_mode_9: 0x0000_0500,
            ddr_sdram_mode_10: 0x0400_0000,
            // Left to the controller; mode registers are loaded from the images above.
            ddr_sdram_md_cntl: 0,

            ddr_sdram_interval: 0x1860_0618,
            ddr_data_init: 0xdead_beef,
            ddr_sdram_clk_cntl: 0x0200_0000,
            ddr_init_addr: 0,
            ddr_init_ext_addr: 0,

            ddr_zq_cntl: 0x8A09_0705,
            ddr_wrlvl_cntl: 0x8655_0607,
            ddr_wrlvl_cntl_2: 0x0707_0708,
            ddr_wrlvl_cntl_3: 0x0080_8088,
            ddr_sr_cntr: 0,

            ddr_sdram_rcw_1: 0,
            ddr_sdram_rcw_2: 0,

            dq_map: [0; 4],

            ddr_cdr1: 0x8004_0000,
            ddr_cdr2: 0x0000_00C1,
        }
    }
}

/// Programs controller 0 with the fixed image and returns the assumed DRAM size.
///
/// The write cannot fail from the board's point of view; a broken controller surfaces in
/// the register primitive, not here.
pub fn fixed_sdram<R: MemctlRegisters + ?Sized>(regs: &mut R) -> u64 {
    let cfg = DdrCfgRegs::ls1046afrwy_fixed();
    regs.set_memctl_regs(&cfg, FIXED_CTRL_NUM, FIXED_STEP);
    FIXED_DRAM_SIZE
}
