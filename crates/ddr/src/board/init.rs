//! DRAM size dispatch.
//!
//! [`init_dram`] is the single entry point the boot sequence uses to learn how much DRAM is
//! installed. The [`InitMode`] picks one of three strategies:
//! 1. **`TfaBoot`:** Trust the firmware-reported size, or run SPD sizing if it reported none.
//! 2. **`SecondaryStage`:** DRAM was brought up by an earlier stage; assume 4 GiB.
//! 3. **`FixedSdram`:** Program the fixed register image, then apply erratum A-008850.

use crate::board::fixed::fixed_sdram;
use crate::common::FIXED_DRAM_SIZE;
use crate::config::InitMode;
use crate::soc::traits::{BootFirmware, MemctlRegisters};

/// Brings up DRAM according to `mode` and returns the installed size in bytes.
pub fn init_dram<P>(mode: InitMode, platform: &mut P) -> u64
where
    P: BootFirmware + MemctlRegisters + ?Sized,
{
    let size = match mode {
        InitMode::TfaBoot => match platform.tfa_dram_size() {
            0 => {
                tracing::debug!("firmware reported no DRAM size, sizing from SPD");
                platform.sdram_size()
            }
            size => size,
        },
        InitMode::SecondaryStage => FIXED_DRAM_SIZE,
        InitMode::FixedSdram => {
            tracing::info!("Initializing DDR....using SPD");
            let size = fixed_sdram(platform);
            platform.erratum_a008850_post();
            size
        }
    };

    tracing::debug!(?mode, size, "DRAM size");
    size
}
