//! Configuration for DDR bring-up.
//!
//! This module defines the configuration structures used to pick the init strategy and to
//! parameterize the simulated board. It provides:
//! 1. **Defaults:** Baseline values for the LS1046A-FRWY (DDR4-2100, one rank, 4 GiB).
//! 2. **Structures:** `init` and `board` sections of the root [`Config`].
//! 3. **Enums:** [`InitMode`], the three mutually exclusive ways of obtaining the DRAM size.
//!
//! Configuration is supplied as JSON (`Config::from_json` / `Config::from_file`) or use
//! `Config::default()`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::DdrError;
use crate::common::constants::HZ_PER_MHZ;

/// Default configuration constants.
mod defaults {
    /// DDR data rate of the board in Hz (DDR4-2100).
    pub const DDR_FREQ_HZ: u64 = 2_100_000_000;

    /// Size reported by the trusted firmware; 0 means "not reported".
    pub const TFA_DRAM_SIZE: u64 = 0;

    /// Size found by SPD-driven bring-up (4 GiB soldered down).
    pub const SPD_DRAM_SIZE: u64 = crate::common::FIXED_DRAM_SIZE;

    /// Ranks on the soldered-down memory.
    pub const N_RANKS: u32 = 1;
}

/// Strategy used to obtain the final installed DRAM size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum InitMode {
    /// Boot chain runs trusted firmware: ask it for the size, falling back to SPD sizing.
    #[serde(alias = "TFA")]
    TfaBoot,
    /// Later boot stage of an SPL build: DRAM is already up, assume the fixed size.
    #[serde(alias = "SPL")]
    SecondaryStage,
    /// Program the fixed register image, apply the erratum fix, report the fixed size.
    #[default]
    FixedSdram,
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use ls1046afrwy_ddr::config::{Config, InitMode};
///
/// let json = r#"{
///     "init": { "mode": "TfaBoot" },
///     "board": { "ddr_freq_hz": 1600000000, "tfa_dram_size": 2147483648 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.init.mode, InitMode::TfaBoot);
/// assert_eq!(config.board.ddr_freq_hz, 1_600_000_000);
/// assert_eq!(config.board.n_ranks, 1);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Init strategy selection.
    #[serde(default)]
    pub init: InitConfig,
    /// Simulated board parameters.
    #[serde(default)]
    pub board: BoardConfig,
}

impl Config {
    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`DdrError::Config`] if the JSON is malformed or has wrongly typed fields.
    pub fn from_json(json: &str) -> Result<Self, DdrError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`DdrError::Io`] if the file cannot be read, or [`DdrError::Config`] if it
    /// does not parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DdrError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

/// Init strategy section.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct InitConfig {
    /// How the final DRAM size is obtained.
    #[serde(default)]
    pub mode: InitMode,
}

/// Simulated board section.
///
/// These values drive [`crate::soc::SimulatedBoard`]; on hardware they come from the clock
/// subsystem, the firmware, and module detection.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BoardConfig {
    /// DDR data rate in Hz.
    #[serde(default = "BoardConfig::default_ddr_freq_hz")]
    pub ddr_freq_hz: u64,

    /// DRAM size reported by the trusted firmware (0 for none).
    #[serde(default)]
    pub tfa_dram_size: u64,

    /// DRAM size found by SPD-driven bring-up.
    #[serde(default = "BoardConfig::default_spd_dram_size")]
    pub spd_dram_size: u64,

    /// Ranks of the installed memory (0 for none).
    #[serde(default = "BoardConfig::default_n_ranks")]
    pub n_ranks: u32,

    /// Whether the installed memory is a registered module.
    #[serde(default)]
    pub registered: bool,
}

impl BoardConfig {
    /// Sets the data rate from a value in MT/s.
    ///
    /// # Errors
    ///
    /// Returns [`DdrError::FrequencyOutOfRange`] if `mhz` does not fit in Hz; the current
    /// rate is kept.
    pub const fn set_ddr_freq_mhz(&mut self, mhz: u64) -> Result<(), DdrError> {
        match mhz.checked_mul(HZ_PER_MHZ) {
            Some(hz) => {
                self.ddr_freq_hz = hz;
                Ok(())
            }
            None => Err(DdrError::FrequencyOutOfRange { mhz }),
        }
    }

    const fn default_ddr_freq_hz() -> u64 {
        defaults::DDR_FREQ_HZ
    }

    const fn default_spd_dram_size() -> u64 {
        defaults::SPD_DRAM_SIZE
    }

    const fn default_n_ranks() -> u32 {
        defaults::N_RANKS
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            ddr_freq_hz: defaults::DDR_FREQ_HZ,
            tfa_dram_size: defaults::TFA_DRAM_SIZE,
            spd_dram_size: defaults::SPD_DRAM_SIZE,
            n_ranks: defaults::N_RANKS,
            registered: false,
        }
    }
}
