//! Board-qualified timing tables.
//!
//! Each row gives the clock adjust and write-leveling start codes for a rank count up to a
//! maximum data rate. Rows are grouped by rank count
//! and ascend by data rate inside a group. A table ends at a sentinel row whose
//! `datarate_mhz_high` is 0.

use serde::Serialize;

/// One board-qualified timing row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TimingEntry {
    /// Rank count this row applies to.
    pub n_ranks: u32,
    /// Highest data rate (MT/s) this row is qualified for; 0 marks the sentinel.
    pub datarate_mhz_high: u32,
    /// Rank density in GB this row was qualified with (0 = any).
    pub rank_gb: u32,
    /// Clock adjust code.
    pub clk_adjust: u32,
    /// Write-leveling start code.
    pub wrlvl_start: u32,
    /// Per-lane write-leveling start values, lanes 1-4.
    pub wrlvl_ctl_2: u32,
    /// Per-lane write-leveling start values, lanes 5-8.
    pub wrlvl_ctl_3: u32,
}

impl TimingEntry {
    /// Table terminator.
    pub const SENTINEL: Self = Self::row(0, 0, 0, 0, 0, 0, 0);

    /// Builds a row; argument order follows the columns of the board tables.
    pub const fn row(
        n_ranks: u32,
        datarate_mhz_high: u32,
        rank_gb: u32,
        clk_adjust: u32,
        wrlvl_start: u32,
        wrlvl_ctl_2: u32,
        wrlvl_ctl_3: u32,
    ) -> Self {
        Self {
            n_ranks,
            datarate_mhz_high,
            rank_gb,
            clk_adjust,
            wrlvl_start,
            wrlvl_ctl_2,
            wrlvl_ctl_3,
        }
    }

    /// Returns `true` for the row that terminates a table.
    pub const fn is_sentinel(&self) -> bool {
        self.datarate_mhz_high == 0
    }
}

/// Rows of `table` up to, not including, the first sentinel.
pub fn rows(table: &[TimingEntry]) -> impl Iterator<Item = &TimingEntry> {
    table.iter().take_while(|e| !e.is_sentinel())
}

/*
 * Memory controller 0, unbuffered. Placeholder rows.
 *
 *   num |   hi | rank |  clk | wrlvl |   wrlvl    |   wrlvl
 * ranks |  mhz |   GB | adjst| start |   ctl2     |   ctl3
 */
const UDIMM0: [TimingEntry; 9] = [
    TimingEntry::row(1, 1350, 0, 8, 6, 0x0708090B, 0x0C0D0E09),
    TimingEntry::row(1, 1666, 0, 8, 7, 0x08090A0C, 0x0D0F100B),
    TimingEntry::row(1, 1900, 0, 4, 7, 0x0808090B, 0x0C0D0E0A),
    TimingEntry::row(1, 2300, 0, 4, 6, 0x07070708, 0x08080808),
    TimingEntry::row(2, 1350, 0, 8, 6, 0x0708090B, 0x0C0D0E09),
    TimingEntry::row(2, 1666, 0, 8, 7, 0x08090A0C, 0x0D0F100B),
    TimingEntry::row(2, 1900, 0, 4, 7, 0x09090B0D, 0x0E10110C),
    TimingEntry::row(2, 2300, 0, 4, 9, 0x0A0B0C0E, 0x0F11120D),
    TimingEntry::SENTINEL,
];

/*
 * Memory controller 0, registered. Placeholder rows.
 *
 *   num |   hi | rank |  clk | wrlvl |   wrlvl    |   wrlvl
 * ranks |  mhz |   GB | adjst| start |   ctl2     |   ctl3
 */
const RDIMM0: [TimingEntry; 10] = [
    TimingEntry::row(1, 1666, 0, 8, 8, 0x090A0B0C, 0x0E0F100D),
    TimingEntry::row(1, 1900, 0, 4, 8, 0x080A0B0D, 0x0D0F100C),
    TimingEntry::row(1, 2200, 0, 4, 8, 0x090A0C0F, 0x1012130C),
    TimingEntry::row(2, 1666, 0, 8, 8, 0x090A0B0C, 0x0E0F100D),
    TimingEntry::row(2, 1900, 0, 4, 8, 0x080A0B0D, 0x0D0F100C),
    TimingEntry::row(2, 2200, 0, 4, 8, 0x090A0C0F, 0x1012130C),
    TimingEntry::row(4, 1666, 0, 8, 8, 0x090A0B0C, 0x0E0F100D),
    TimingEntry::row(4, 1900, 0, 4, 8, 0x080A0B0D, 0x0D0F100C),
    TimingEntry::row(4, 2200, 0, 4, 8, 0x090A0C0F, 0x1012130C),
    TimingEntry::SENTINEL,
];

/// The timing tables of one board, for controller 0.
#[derive(Debug, Clone, Copy)]
pub struct BoardTables<'a> {
    /// Rows for unbuffered modules and soldered-down memory.
    pub udimm: &'a [TimingEntry],
    /// Rows for registered modules.
    pub rdimm: &'a [TimingEntry],
}

impl BoardTables<'static> {
    /// LS1046A-FRWY tables.
    ///
    /// The rows are placeholder DDR4 values in the board's format until the board's
    /// `udimm0`/`rdimm0` are imported; the highest single-rank row shares `wrlvl_ctl_2` with
    /// the fixed register image.
    pub const LS1046AFRWY: Self = Self {
        udimm: &UDIMM0,
        rdimm: &RDIMM0,
    };
}

impl<'a> BoardTables<'a> {
    /// Creates a table pair.
    pub const fn new(udimm: &'a [TimingEntry], rdimm: &'a [TimingEntry]) -> Self {
        Self { udimm, rdimm }
    }

    /// Returns the table for registered (`true`) or unbuffered (`false`) modules.
    pub const fn for_module(&self, registered: bool) -> &'a [TimingEntry] {
        if registered { self.rdimm } else { self.udimm }
    }
}
