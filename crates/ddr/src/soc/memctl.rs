//! Controller options and detected module parameters.
//!
//! [`MemctlOptions`] is the subset of the controller option block that this board touches.
//! It is filled in place by [`crate::board::options::select_timing`] and then consumed by the
//! framework's generic timing computation, which lies outside this crate.

use serde::Serialize;

/// Width of the DDR data bus as encoded in the option block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub enum DataBusWidth {
    /// Full 64-bit bus (encoded as 0).
    #[default]
    Bits64,
    /// Half-width 32-bit bus (encoded as 1).
    Bits32,
    /// Quarter-width 16-bit bus (encoded as 2).
    Bits16,
}

impl DataBusWidth {
    /// Returns the raw encoding used by the controller's `SDRAM_CFG[DBW]` field.
    pub const fn encoding(self) -> u32 {
        match self {
            Self::Bits64 => 0,
            Self::Bits32 => 1,
            Self::Bits16 => 2,
        }
    }
}

/// Properties of the installed module, as reported by module detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DimmParams {
    /// Number of ranks; zero means no module is installed.
    pub n_ranks: u32,
    /// Whether the module is registered (RDIMM) rather than unbuffered.
    pub registered: bool,
}

impl DimmParams {
    /// Creates parameters for an unbuffered module with `n_ranks` ranks.
    pub const fn unbuffered(n_ranks: u32) -> Self {
        Self {
            n_ranks,
            registered: false,
        }
    }

    /// Creates parameters for a registered module with `n_ranks` ranks.
    pub const fn registered(n_ranks: u32) -> Self {
        Self {
            n_ranks,
            registered: true,
        }
    }
}

/// Memory-controller options touched by the board hook.
///
/// `registered_dimm_en` is an input (set by the framework before the hook runs); every other
/// field is written by the hook.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MemctlOptions {
    /// Selects the registered-module timing table.
    pub registered_dimm_en: bool,

    /// Clock adjust code from the selected timing row.
    pub clk_adjust: u32,
    /// Write-leveling start code from the selected timing row.
    pub wrlvl_start: u32,
    /// Per-byte-lane write-leveling start values, lanes 1-4.
    pub wrlvl_ctl_2: u32,
    /// Per-byte-lane write-leveling start values, lanes 5-8.
    pub wrlvl_ctl_3: u32,

    /// Data bus width.
    pub data_bus_width: DataBusWidth,
    /// Burst-to-precharge interval; 0 selects auto precharge.
    pub bstopre: u32,
    /// Half-strength drivers.
    pub half_strength_driver_enable: bool,
    /// Use `wrlvl_sample` instead of the computed write-leveling sample.
    pub wrlvl_override: bool,
    /// Write-leveling sample time.
    pub wrlvl_sample: u32,
    /// Override the computed `Rtt_Nom`/`Rtt_WR` termination.
    pub rtt_override: bool,
    /// ZQ calibration.
    pub zq_en: bool,
    /// `DDR_CDR1` value (driver compensation and ODT).
    pub ddr_cdr1: u32,
    /// `DDR_CDR2` value (ODT and VREF training).
    pub ddr_cdr2: u32,
    /// Read capture sample point.
    pub cpo_sample: u32,
}

impl MemctlOptions {
    /// Creates an option block with only the module-type input set.
    pub fn new(registered_dimm_en: bool) -> Self {
        Self {
            registered_dimm_en,
            ..Self::default()
        }
    }
}
