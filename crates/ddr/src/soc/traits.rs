//! Collaborator traits supplied by the boot framework.
//!
//! The board code never touches hardware directly. It provides:
//! 1. **Clock:** [`DdrClock`] reports the data rate each controller runs at.
//! 2. **Registers:** [`MemctlRegisters`] programs a complete [`DdrCfgRegs`] image.
//! 3. **Firmware:** [`BootFirmware`] exposes the firmware-reported size, SPD-based sizing,
//!    and the post-init erratum hook.
//!
//! Splitting these lets the selection and dispatch logic run against mocks on the host.

use crate::soc::regs::DdrCfgRegs;

/// Source of the DDR controller clock.
pub trait DdrClock {
    /// Returns the data rate of controller `ctrl_num` in Hz (MT/s times one million).
    fn ddr_freq(&self, ctrl_num: u32) -> u64;
}

/// Register programming primitive of the memory controller.
pub trait MemctlRegisters {
    /// Writes `regs` to controller `ctrl_num`.
    ///
    /// `step` 0 programs every register and enables the controller in one pass; it is the
    /// mode used when the controller is not shared with another boot stage.
    fn set_memctl_regs(&mut self, regs: &DdrCfgRegs, ctrl_num: u32, step: u32);
}

/// Firmware and framework services used by the init dispatch.
pub trait BootFirmware {
    /// DRAM size handed over by the trusted firmware, or 0 if it reported none.
    fn tfa_dram_size(&self) -> u64;

    /// Runs the framework's SPD-driven bring-up and returns the size it found.
    fn sdram_size(&mut self) -> u64;

    /// Applies the erratum A-008850 correction after the controller is enabled.
    fn erratum_a008850_post(&mut self);
}
