//! Host-side simulated board.
//!
//! [`SimulatedBoard`] stands in for the clock subsystem, the controller register file, and
//! the firmware services. It returns configured values and records every write, so the
//! CLI and tests can observe what the board code would have done to real hardware.

use serde::Serialize;

use crate::config::BoardConfig;
use crate::soc::regs::DdrCfgRegs;
use crate::soc::traits::{BootFirmware, DdrClock, MemctlRegisters};

/// One call to [`MemctlRegisters::set_memctl_regs`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterWrite {
    /// Controller index the image was written to.
    pub ctrl_num: u32,
    /// Programming step.
    pub step: u32,
    /// Register image.
    pub regs: DdrCfgRegs,
}

/// Simulated clock, controller, and firmware.
#[derive(Debug, Clone, Default)]
pub struct SimulatedBoard {
    ddr_freq_hz: u64,
    tfa_dram_size: u64,
    spd_dram_size: u64,
    writes: Vec<RegisterWrite>,
    erratum_applied: usize,
    spd_runs: usize,
}

impl SimulatedBoard {
    /// Creates a board whose controllers all run at `ddr_freq_hz`.
    ///
    /// # Arguments
    ///
    /// * `ddr_freq_hz` - Data rate reported for every controller.
    /// * `tfa_dram_size` - Size reported by the trusted firmware (0 for none).
    /// * `spd_dram_size` - Size returned by SPD-driven bring-up.
    pub const fn new(ddr_freq_hz: u64, tfa_dram_size: u64, spd_dram_size: u64) -> Self {
        Self {
            ddr_freq_hz,
            tfa_dram_size,
            spd_dram_size,
            writes: Vec::new(),
            erratum_applied: 0,
            spd_runs: 0,
        }
    }

    /// Creates a board from the `board` section of the configuration.
    pub const fn from_config(config: &BoardConfig) -> Self {
        Self::new(
            config.ddr_freq_hz,
            config.tfa_dram_size,
            config.spd_dram_size,
        )
    }

    /// Register images written so far, oldest first.
    pub fn writes(&self) -> &[RegisterWrite] {
        &self.writes
    }

    /// Number of times the erratum hook ran.
    pub const fn erratum_count(&self) -> usize {
        self.erratum_applied
    }

    /// Number of times SPD-driven bring-up ran.
    pub const fn spd_runs(&self) -> usize {
        self.spd_runs
    }
}

impl DdrClock for SimulatedBoard {
    fn ddr_freq(&self, _ctrl_num: u32) -> u64 {
        self.ddr_freq_hz
    }
}

impl MemctlRegisters for SimulatedBoard {
    fn set_memctl_regs(&mut self, regs: &DdrCfgRegs, ctrl_num: u32, step: u32) {
        tracing::trace!(ctrl_num, step, "programming memory controller");
        self.writes.push(RegisterWrite {
            ctrl_num,
            step,
            regs: regs.clone(),
        });
    }
}

impl BootFirmware for SimulatedBoard {
    fn tfa_dram_size(&self) -> u64 {
        self.tfa_dram_size
    }

    fn sdram_size(&mut self) -> u64 {
        self.spd_runs += 1;
        self.spd_dram_size
    }

    fn erratum_a008850_post(&mut self) {
        self.erratum_applied += 1;
    }
}
