//! Board-specific memory-controller options.
//!
//! The boot framework calls [`select_timing`] once per controller after module detection.
//! The hook:
//! 1. **Validates:** Rejects controller indices above [`MAX_CTRL_NUM`] and skips empty slots.
//! 2. **Selects:** Picks the first timing row for the rank count whose data rate covers the
//!    controller clock, or degrades to the highest-rate row for that rank count.
//! 3. **Stamps policy:** Writes the fixed board settings (bus width, drivers, ODT, VREF, ZQ).

use crate::board::timing::{BoardTables, TimingEntry};
use crate::common::DdrError;
use crate::common::constants::{
    DDR_CDR1_DHC_EN, DDR_CDR2_VREF_RANGE_2, DDR_CDR2_VREF_TRAIN_EN, HZ_PER_MHZ, MAX_CTRL_NUM,
    ddr_cdr1_odt, ddr_cdr2_odt, odt,
};
use crate::soc::memctl::{DataBusWidth, DimmParams, MemctlOptions};
use crate::soc::traits::DdrClock;

/// Write-leveling sample time used with the override.
pub const WRLVL_SAMPLE: u32 = 0xf;

/// Read capture sample point tuned for erratum A-009942.
pub const CPO_SAMPLE: u32 = 0x61;

/// Outcome of a timing selection that did not halt the boot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// No module in the slot; options untouched.
    NoModule,
    /// Controller index out of range; options untouched.
    UnsupportedController(u32),
    /// A row covers the requested data rate.
    Matched(TimingEntry),
    /// No row is fast enough; the highest-rate row for the rank count was used.
    Degraded {
        /// Controller data rate in MT/s.
        requested_mhz: u64,
        /// Row whose clock adjust and write-leveling start were applied.
        entry: TimingEntry,
    },
}

impl Selection {
    /// Returns `true` if the options were written.
    pub const fn configured(&self) -> bool {
        matches!(self, Self::Matched(_) | Self::Degraded { .. })
    }
}

enum Scan {
    Found(TimingEntry),
    Exhausted {
        highest: Option<TimingEntry>,
        cursor: TimingEntry,
    },
}

/// Walks `table` up to its sentinel looking for the first `n_ranks` row covering `ddr_freq`.
///
/// On exhaustion `cursor` is the row the walk stopped on: the sentinel, or an all-zero row
/// when the slice ends without one.
fn scan(table: &[TimingEntry], n_ranks: u32, ddr_freq: u64) -> Scan {
    let mut highest = None;
    let mut idx = 0;

    while let Some(entry) = table.get(idx).filter(|e| !e.is_sentinel()) {
        if entry.n_ranks == n_ranks {
            if ddr_freq <= u64::from(entry.datarate_mhz_high) {
                return Scan::Found(*entry);
            }
            highest = Some(*entry);
        }
        idx += 1;
    }

    Scan::Exhausted {
        highest,
        cursor: table.get(idx).copied().unwrap_or(TimingEntry::SENTINEL),
    }
}

/// Writes the board settings that do not depend on the selected row.
const fn apply_board_policy(popts: &mut MemctlOptions) {
    popts.data_bus_width = DataBusWidth::Bits64;
    // auto precharge
    popts.bstopre = 0;

    // One soldered-down rank set; full-strength drivers.
    popts.half_strength_driver_enable = false;

    popts.wrlvl_override = true;
    popts.wrlvl_sample = WRLVL_SAMPLE;

    // Keep the computed Rtt_Nom/Rtt_WR.
    popts.rtt_override = false;

    popts.zq_en = true;

    popts.ddr_cdr1 = DDR_CDR1_DHC_EN | ddr_cdr1_odt(odt::OHM_80);
    popts.ddr_cdr2 = ddr_cdr2_odt(odt::OHM_80) | DDR_CDR2_VREF_TRAIN_EN | DDR_CDR2_VREF_RANGE_2;

    popts.cpo_sample = CPO_SAMPLE;
}

/// Fills `popts` with the board timing row and policy for controller `ctrl_num`.
///
/// # Arguments
///
/// * `popts` - Option block; `registered_dimm_en` picks the table, the rest is written.
/// * `dimm` - Detected module parameters.
/// * `ctrl_num` - Controller index (0 or 1).
/// * `clock` - Source of the controller data rate.
/// * `tables` - Board timing tables.
///
/// # Returns
///
/// What was done; see [`Selection`]. `popts` is only modified for `Matched` and `Degraded`.
///
/// # Errors
///
/// Returns [`DdrError::DimmNotSupported`] when the table has no row for `dimm.n_ranks`.
/// `popts` is left untouched in that case.
pub fn try_select_timing<C: DdrClock + ?Sized>(
    popts: &mut MemctlOptions,
    dimm: &DimmParams,
    ctrl_num: u32,
    clock: &C,
    tables: &BoardTables<'_>,
) -> Result<Selection, DdrError> {
    if ctrl_num > MAX_CTRL_NUM {
        tracing::error!("{}", DdrError::UnsupportedController(ctrl_num));
        return Ok(Selection::UnsupportedController(ctrl_num));
    }
    if dimm.n_ranks == 0 {
        return Ok(Selection::NoModule);
    }

    let table = tables.for_module(popts.registered_dimm_en);
    let ddr_freq = clock.ddr_freq(ctrl_num) / HZ_PER_MHZ;

    let selection = match scan(table, dimm.n_ranks, ddr_freq) {
        Scan::Found(entry) => {
            popts.clk_adjust = entry.clk_adjust;
            popts.wrlvl_start = entry.wrlvl_start;
            popts.wrlvl_ctl_2 = entry.wrlvl_ctl_2;
            popts.wrlvl_ctl_3 = entry.wrlvl_ctl_3;
            Selection::Matched(entry)
        }
        Scan::Exhausted {
            highest: Some(entry),
            cursor,
        } => {
            tracing::warn!("Error: board specific timing not found for {ddr_freq} MT/s");
            tracing::warn!(
                "Trying to use the highest speed ({}) parameters",
                entry.datarate_mhz_high
            );
            popts.clk_adjust = entry.clk_adjust;
            popts.wrlvl_start = entry.wrlvl_start;
            // Lane values come from the row the scan stopped on, not from `entry`.
            popts.wrlvl_ctl_2 = cursor.wrlvl_ctl_2;
            popts.wrlvl_ctl_3 = cursor.wrlvl_ctl_3;
            Selection::Degraded {
                requested_mhz: ddr_freq,
                entry,
            }
        }
        Scan::Exhausted { highest: None, .. } => {
            return Err(DdrError::DimmNotSupported {
                n_ranks: dimm.n_ranks,
            });
        }
    };

    // Reports the row whose clock adjust and write-leveling start were applied, which on
    // fallback is the highest candidate rather than the terminating sentinel.
    if let Selection::Matched(entry) | Selection::Degraded { entry, .. } = selection {
        tracing::debug!(
            "Found timing match: n_ranks {}, data rate {}, rank_gb {}",
            entry.n_ranks,
            entry.datarate_mhz_high,
            entry.rank_gb
        );
    }

    apply_board_policy(popts);
    Ok(selection)
}

/// Board hook run by the boot framework for each controller.
///
/// Same as [`try_select_timing`], except that an installed module the board has no timing
/// for halts the boot.
///
/// # Panics
///
/// Panics with "DIMM is not supported by this board" when the table has no row for the
/// installed rank count.
pub fn select_timing<C: DdrClock + ?Sized>(
    popts: &mut MemctlOptions,
    dimm: &DimmParams,
    ctrl_num: u32,
    clock: &C,
    tables: &BoardTables<'_>,
) -> Selection {
    match try_select_timing(popts, dimm, ctrl_num, clock, tables) {
        Ok(selection) => selection,
        Err(err) => {
            tracing::error!(n_ranks = dimm.n_ranks, "{err}");
            panic!("{err}");
        }
    }
}
