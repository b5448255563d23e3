//! Timing Selector Properties.
//!
//! Checks the selector against a straightforward reference model over
//! generated ascending tables and arbitrary data rates.

use ls1046afrwy_ddr::board::{BoardTables, TimingEntry};
use ls1046afrwy_ddr::soc::{DimmParams, MemctlOptions};
use ls1046afrwy_ddr::{Selection, try_select_timing};
use proptest::prelude::*;

use crate::common::logs::capture;
use crate::common::mocks::clock::FixedClock;

/// Ascending single-rank rows with distinct calibration codes, a dual-rank row, and the sentinel.
fn table_strategy() -> impl Strategy<Value = Vec<TimingEntry>> {
    prop::collection::btree_set(1u32..4000, 1..6).prop_map(|rates| {
        let mut table: Vec<_> = rates
            .into_iter()
            .enumerate()
            .map(|(i, rate)| {
                let i = i as u32;
                TimingEntry::row(1, rate, 0, i + 1, i + 10, 0x100 + i, 0x200 + i)
            })
            .collect();
        table.push(TimingEntry::row(2, 4000, 0, 99, 99, 99, 99));
        table.push(TimingEntry::SENTINEL);
        table
    })
}

fn run(table: &[TimingEntry], mhz: u64) -> (Selection, MemctlOptions) {
    let mut popts = MemctlOptions::default();
    let sel = try_select_timing(
        &mut popts,
        &DimmParams::unbuffered(1),
        0,
        &FixedClock::mhz(mhz),
        &BoardTables::new(table, table),
    )
    .unwrap();
    (sel, popts)
}

proptest! {
    #[test]
    fn picks_lowest_sufficient_row(table in table_strategy(), mhz in 0u64..5000) {
        let single: Vec<_> = table.iter().filter(|e| e.n_ranks == 1).collect();
        let (sel, popts) = run(&table, mhz);

        match single.iter().find(|e| mhz <= u64::from(e.datarate_mhz_high)) {
            Some(expected) => {
                prop_assert_eq!(sel, Selection::Matched(**expected));
                prop_assert_eq!(popts.clk_adjust, expected.clk_adjust);
                prop_assert_eq!(popts.wrlvl_start, expected.wrlvl_start);
                prop_assert_eq!(popts.wrlvl_ctl_2, expected.wrlvl_ctl_2);
                prop_assert_eq!(popts.wrlvl_ctl_3, expected.wrlvl_ctl_3);
            }
            None => {
                let highest = single.last().unwrap();
                prop_assert_eq!(
                    sel,
                    Selection::Degraded { requested_mhz: mhz, entry: **highest }
                );
                prop_assert_eq!(popts.clk_adjust, highest.clk_adjust);
                prop_assert_eq!(popts.wrlvl_start, highest.wrlvl_start);
                prop_assert_eq!(popts.wrlvl_ctl_2, 0);
                prop_assert_eq!(popts.wrlvl_ctl_3, 0);
            }
        }
    }

    #[test]
    fn row_rate_is_inclusive_bound(table in table_strategy(), pick in any::<prop::sample::Index>()) {
        let single: Vec<_> = table.iter().filter(|e| e.n_ranks == 1).copied().collect();
        let target = single[pick.index(single.len())];
        let (sel, _) = run(&table, u64::from(target.datarate_mhz_high));
        prop_assert_eq!(sel, Selection::Matched(target));
    }

    #[test]
    fn at_or_below_lowest_rate_picks_first_row(table in table_strategy(), frac in 0.0f64..=1.0) {
        let first = table[0];
        let mhz = (f64::from(first.datarate_mhz_high) * frac) as u64;
        let (sel, _) = run(&table, mhz);
        prop_assert_eq!(sel, Selection::Matched(first));
    }

    #[test]
    fn fallback_warns_exactly_once(table in table_strategy(), over in 1u64..1000) {
        let top = table
            .iter()
            .filter(|e| e.n_ranks == 1)
            .map(|e| u64::from(e.datarate_mhz_high))
            .max()
            .unwrap();
        let ((sel, _), logs) = capture(|| run(&table, top + over));
        prop_assert!(
            matches!(sel, Selection::Degraded { .. }),
            "expected a degraded selection"
        );
        prop_assert_eq!(logs.count("board specific timing not found"), 1);
        prop_assert_eq!(logs.count("Trying to use the highest speed"), 1);
    }

    #[test]
    fn out_of_range_controller_never_mutates(ctrl_num in 2u32.., mhz in 0u64..5000) {
        let table = [TimingEntry::row(1, 1600, 0, 1, 2, 3, 4), TimingEntry::SENTINEL];
        let before = MemctlOptions::new(true);
        let mut popts = before;
        let sel = try_select_timing(
            &mut popts,
            &DimmParams::unbuffered(1),
            ctrl_num,
            &FixedClock::mhz(mhz),
            &BoardTables::new(&table, &table),
        )
        .unwrap();
        prop_assert_eq!(sel, Selection::UnsupportedController(ctrl_num));
        prop_assert_eq!(popts, before);
    }
}
