//! LS1046A-FRWY DDR4 board configuration library.
//!
//! This crate holds the board-specific part of memory-controller bring-up:
//! 1. **Board:** Timing-row selection, the fixed register image, and the init dispatch.
//! 2. **`SoC`:** Controller options, the register aggregate, and the collaborator traits
//!    the boot framework provides (clock query, register programming, firmware hooks).
//! 3. **Common:** Error type and the board/controller constants.
//! 4. **Configuration:** JSON-backed selection of the init strategy and the simulated board.
//!
//! Everything runs once, single-threaded, before the rest of the boot sequence.

/// Board-level logic (timing tables, selector, fixed SDRAM, init dispatch).
pub mod board;
/// Common types and constants (errors, CDR bit fields, sizes).
pub mod common;
/// Configuration (init strategy and simulated-board parameters).
pub mod config;
/// Memory-controller data model, collaborator traits, and a simulated board.
pub mod soc;

/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Crate-wide error type.
pub use crate::common::DdrError;
/// Board-specific timing selection hook.
pub use crate::board::options::{Selection, select_timing, try_select_timing};
/// Fixed-register SDRAM bring-up.
pub use crate::board::fixed::fixed_sdram;
/// Top-level "final installed size" entry point.
pub use crate::board::init::init_dram;
