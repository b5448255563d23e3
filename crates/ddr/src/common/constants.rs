//! Board and memory-controller constants.
//!
//! Bit layouts for the controller's clock-data-recovery registers (`DDR_CDR1`,
//! `DDR_CDR2`) and the fixed sizes used by the init paths.

/// Highest controller index this board supports (controllers 0 and 1).
pub const MAX_CTRL_NUM: u32 = 1;

/// Capacity assumed by the fixed-register and secondary-stage paths (4 GiB).
pub const FIXED_DRAM_SIZE: u64 = 1 << 32;

/// Hertz per megahertz; the selector works in whole MHz.
pub const HZ_PER_MHZ: u64 = 1_000_000;

/// `DDR_CDR1[DHC_EN]`: driver hardware compensation enable.
pub const DDR_CDR1_DHC_EN: u32 = 0x8000_0000;

/// Shift of the ODT field inside `DDR_CDR1`.
pub const DDR_CDR1_ODT_SHIFT: u32 = 17;

/// Bits of the ODT code carried by `DDR_CDR1`.
pub const DDR_CDR1_ODT_MASK: u32 = 0x6;

/// Bits of the ODT code carried by `DDR_CDR2`.
pub const DDR_CDR2_ODT_MASK: u32 = 0x1;

/// `DDR_CDR2[VREF_TRAIN_EN]`: enable VREF training.
pub const DDR_CDR2_VREF_TRAIN_EN: u32 = 0x0000_0080;

/// `DDR_CDR2[VREF_RANGE]`: select VREF range 2.
pub const DDR_CDR2_VREF_RANGE_2: u32 = 0x0000_0040;

/// DDR4 on-die termination codes.
pub mod odt {
    /// Termination disabled.
    pub const OFF: u32 = 0x0;
    /// 100 Ω.
    pub const OHM_100: u32 = 0x1;
    /// 120 Ω.
    pub const OHM_120: u32 = 0x2;
    /// 80 Ω.
    pub const OHM_80: u32 = 0x3;
    /// 60 Ω.
    pub const OHM_60: u32 = 0x4;
    /// 40 Ω.
    pub const OHM_40: u32 = 0x5;
    /// 50 Ω.
    pub const OHM_50: u32 = 0x6;
    /// 30 Ω.
    pub const OHM_30: u32 = 0x7;
}

/// Places an ODT code in its `DDR_CDR1` field.
#[inline]
pub const fn ddr_cdr1_odt(code: u32) -> u32 {
    (code & DDR_CDR1_ODT_MASK) << DDR_CDR1_ODT_SHIFT
}

/// Places an ODT code in its `DDR_CDR2` field.
#[inline]
pub const fn ddr_cdr2_odt(code: u32) -> u32 {
    code & DDR_CDR2_ODT_MASK
}
