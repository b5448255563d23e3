//! Error definitions for DDR board configuration.
//!
//! This module defines the failure taxonomy of the board code. It provides:
//! 1. **Selection Errors:** Unsupported controller index and unsupported module geometry.
//! 2. **Configuration Errors:** JSON parse and file I/O failures while loading [`crate::Config`],
//!    and data rates that overflow the clock.
//! 3. **Severity:** [`DdrError::is_fatal`] separates boot-halting conditions from recoverable ones.

use thiserror::Error;

/// Errors raised while configuring the memory controller.
#[derive(Debug, Error)]
pub enum DdrError {
    /// The controller index is outside the range this board wires up.
    ///
    /// Recoverable: the caller treats the controller as "nothing configured".
    #[error("Not supported controller number {0}")]
    UnsupportedController(u32),

    /// The board timing table has no row at all for the installed rank count.
    ///
    /// Fatal: there is no viable configuration and the boot must halt.
    #[error("DIMM is not supported by this board")]
    DimmNotSupported {
        /// Rank count reported by module detection.
        n_ranks: u32,
    },

    /// A data rate in MT/s that does not fit the controller clock in Hz.
    #[error("data rate {mhz} MT/s is out of range")]
    FrequencyOutOfRange {
        /// Requested data rate.
        mhz: u64,
    },

    /// Configuration JSON failed to parse.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// Configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

impl DdrError {
    /// Returns `true` when the error must stop the boot process.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::DimmNotSupported { .. })
    }
}
