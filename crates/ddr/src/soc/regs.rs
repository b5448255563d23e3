//! Memory-controller register aggregate.
//!
//! [`DdrCfgRegs`] mirrors the programmable register file of the controller as plain 32-bit
//! values. It carries no field encoding; producing the values is the job of whoever builds
//! the aggregate (the framework's timing computation, or the fixed board image).

use serde::Serialize;

/// Number of chip selects per controller.
pub const NUM_CHIP_SELECTS: usize = 4;

/// Bounds and configuration of one chip select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ChipSelectRegs {
    /// `CSn_BNDS`: start and end address of the chip select.
    pub bnds: u32,
    /// `CSn_CONFIG`: enable, ODT, and row/column/bank geometry.
    pub config: u32,
    /// `CSn_CONFIG_2`: partial array self refresh.
    pub config_2: u32,
}

/// Full register image for one memory controller.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DdrCfgRegs {
    /// Chip select bounds and configuration.
    pub cs: [ChipSelectRegs; NUM_CHIP_SELECTS],

    /// `TIMING_CFG_3`: extended refresh and activate timing.
    pub timing_cfg_3: u32,
    /// `TIMING_CFG_0`: turnaround and power-down exit timing.
    pub timing_cfg_0: u32,
    /// `TIMING_CFG_1`: precharge, activate, CAS, and refresh timing.
    pub timing_cfg_1: u32,
    /// `TIMING_CFG_2`: additive latency, write latency, and CKE timing.
    pub timing_cfg_2: u32,
    /// `TIMING_CFG_4`.
    pub timing_cfg_4: u32,
    /// `TIMING_CFG_5`.
    pub timing_cfg_5: u32,
    /// `TIMING_CFG_6`.
    pub timing_cfg_6: u32,
    /// `TIMING_CFG_7`.
    pub timing_cfg_7: u32,
    /// `TIMING_CFG_8`.
    pub timing_cfg_8: u32,

    /// `DDR_SDRAM_CFG`: memory type, bus width, and controller enable.
    pub ddr_sdram_cfg: u32,
    /// `DDR_SDRAM_CFG_2`.
    pub ddr_sdram_cfg_2: u32,
    /// `DDR_SDRAM_CFG_3`.
    pub ddr_sdram_cfg_3: u32,

    /// `DDR_SDRAM_MODE`: MR0/MR1 images.
    pub ddr_sdram_mode: u32,
    /// `DDR_SDRAM_MODE_2`: MR2/MR3 images.
    pub ddr_sdram_mode_2: u32,
    /// `DDR_SDRAM_MODE_9`: MR4/MR5 images.
    pub ddr_sdram_mode_9: u32,
    /// `DDR_SDRAM_MODE_10`: MR6 image.
    pub ddr_sdram_mode_10: u32,
    /// `DDR_SDRAM_MD_CNTL`: software mode-register control.
    pub ddr_sdram_md_cntl: u32,

    /// `DDR_SDRAM_INTERVAL`: refresh interval and precharge interval.
    pub ddr_sdram_interval: u32,
    /// `DDR_DATA_INIT`: pattern written by the controller's memory init.
    pub ddr_data_init: u32,
    /// `DDR_SDRAM_CLK_CNTL`: clock adjust.
    pub ddr_sdram_clk_cntl: u32,
    /// `DDR_INIT_ADDR`.
    pub ddr_init_addr: u32,
    /// `DDR_INIT_EXT_ADDR`.
    pub ddr_init_ext_addr: u32,

    /// `DDR_ZQ_CNTL`: ZQ calibration control.
    pub ddr_zq_cntl: u32,
    /// `DDR_WRLVL_CNTL`: write-leveling control.
    pub ddr_wrlvl_cntl: u32,
    /// `DDR_WRLVL_CNTL_2`: per-lane write-leveling start, lanes 1-4.
    pub ddr_wrlvl_cntl_2: u32,
    /// `DDR_WRLVL_CNTL_3`: per-lane write-leveling start, lanes 5-8.
    pub ddr_wrlvl_cntl_3: u32,
    /// `DDR_SR_CNTR`: self-refresh counter.
    pub ddr_sr_cntr: u32,

    /// `DDR_SDRAM_RCW_1`: register control words for RDIMMs.
    pub ddr_sdram_rcw_1: u32,
    /// `DDR_SDRAM_RCW_2`.
    pub ddr_sdram_rcw_2: u32,

    /// `DQ_MAP_0`..`DQ_MAP_3`: DQ bit remapping.
    pub dq_map: [u32; 4],

    /// `DDR_CDR1`: driver compensation and ODT.
    pub ddr_cdr1: u32,
    /// `DDR_CDR2`: ODT and VREF training.
    pub ddr_cdr2: u32,
}

impl DdrCfgRegs {
    /// Returns the chip selects whose configuration has the enable bit set.
    pub fn enabled_chip_selects(&self) -> impl Iterator<Item = (usize, &ChipSelectRegs)> {
        self.cs
            .iter()
            .enumerate()
            .filter(|(_, cs)| cs.config & CS_CONFIG_EN != 0)
    }
}

/// `CSn_CONFIG[CS_EN]`.
pub const CS_CONFIG_EN: u32 = 0x8000_0000;
