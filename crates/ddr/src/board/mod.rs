//! LS1046A-FRWY board code.
//!
//! This module holds the board-specific half of DDR bring-up:
//! 1. **Timing tables:** Board-qualified clock adjust and write-leveling rows per rank count.
//! 2. **Options:** The selector hook that fills [`crate::soc::MemctlOptions`].
//! 3. **Fixed SDRAM:** A hand-tuned register image for the soldered-down 4 GiB configuration.
//! 4. **Init:** Dispatch between firmware-reported, assumed, and fixed-register sizing.

/// Fixed-register SDRAM bring-up.
pub mod fixed;
/// DRAM size dispatch.
pub mod init;
/// Board-specific controller options.
pub mod options;
/// Board-qualified timing tables.
pub mod timing;

pub use timing::{BoardTables, TimingEntry};
