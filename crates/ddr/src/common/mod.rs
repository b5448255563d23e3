//! Common types shared by the board and `SoC` modules.
//!
//! This module provides:
//! 1. **Constants:** Clock-data-recovery (CDR) fields, ODT codes, and fixed sizes.
//! 2. **Error Handling:** The crate-wide [`DdrError`] type.

/// Board and controller constants.
pub mod constants;

/// Error types.
pub mod error;

pub use constants::{FIXED_DRAM_SIZE, MAX_CTRL_NUM};
pub use error::DdrError;
