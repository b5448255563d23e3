//! LS1046A-FRWY DDR board code driver.
//!
//! This binary runs the board code against a simulated board. It provides:
//! 1. **select:** Run the timing selector for a rank count and data rate; print the options.
//! 2. **init:** Run the DRAM size dispatch; print the size and any registers written.
//! 3. **table:** Print the board timing table.

use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use ls1046afrwy_ddr::board::timing::{self, BoardTables, TimingEntry};
use ls1046afrwy_ddr::config::{Config, InitMode};
use ls1046afrwy_ddr::soc::sim::RegisterWrite;
use ls1046afrwy_ddr::soc::{DimmParams, MemctlOptions, SimulatedBoard};
use ls1046afrwy_ddr::{DdrError, init_dram, select_timing};

#[derive(Parser, Debug)]
#[command(
    name = "frwy-ddr",
    author,
    version,
    about = "LS1046A-FRWY DDR board configuration",
    long_about = "Run the board DDR code against a simulated board.\n\nExamples:\n  frwy-ddr select --ranks 1 --freq-mhz 2100\n  frwy-ddr init --mode TfaBoot\n  frwy-ddr table --registered"
)]
struct Cli {
    /// Show debug diagnostics (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the timing selector and print the resulting controller options.
    Select {
        /// JSON configuration file supplying the board defaults.
        #[arg(short, long)]
        config: Option<String>,

        /// Ranks on the installed module (0 = empty slot).
        #[arg(long)]
        ranks: Option<u32>,

        /// Controller data rate in MT/s.
        #[arg(long)]
        freq_mhz: Option<u64>,

        /// Module is registered.
        #[arg(long)]
        registered: bool,

        /// Controller index.
        #[arg(long, default_value_t = 0)]
        ctrl: u32,
    },

    /// Run the DRAM size dispatch and print the result.
    Init {
        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<String>,

        /// Init strategy; overrides the configuration file.
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
    },

    /// Print the board timing table.
    Table {
        /// Print the registered-module table.
        #[arg(long)]
        registered: bool,
    },
}

/// Init strategy names, spelled as in the configuration file.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ModeArg {
    #[value(name = "TfaBoot", alias = "tfa-boot", alias = "TFA")]
    TfaBoot,
    #[value(name = "SecondaryStage", alias = "secondary-stage", alias = "SPL")]
    SecondaryStage,
    #[value(name = "FixedSdram", alias = "fixed-sdram")]
    FixedSdram,
}

impl From<ModeArg> for InitMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::TfaBoot => Self::TfaBoot,
            ModeArg::SecondaryStage => Self::SecondaryStage,
            ModeArg::FixedSdram => Self::FixedSdram,
        }
    }
}

#[derive(Serialize)]
struct SelectReport {
    configured: bool,
    options: MemctlOptions,
}

#[derive(Serialize)]
struct InitReport<'a> {
    ram_size: u64,
    erratum_a008850_applied: usize,
    writes: &'a [RegisterWrite],
}

#[derive(Serialize)]
struct TableReport<'a> {
    registered: bool,
    rows: Vec<&'a TimingEntry>,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<String>) -> Result<Config, DdrError> {
    match path {
        Some(path) => Config::from_file(path),
        None => Ok(Config::default()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), DdrError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(command: Commands) -> Result<(), DdrError> {
    match command {
        Commands::Select {
            config,
            ranks,
            freq_mhz,
            registered,
            ctrl,
        } => {
            let mut board_config = load_config(config)?.board;
            if let Some(mhz) = freq_mhz {
                board_config.set_ddr_freq_mhz(mhz)?;
            }
            let registered = registered || board_config.registered;
            let board = SimulatedBoard::from_config(&board_config);
            let dimm = DimmParams {
                n_ranks: ranks.unwrap_or(board_config.n_ranks),
                registered,
            };
            let mut options = MemctlOptions::new(registered);
            let selection = select_timing(
                &mut options,
                &dimm,
                ctrl,
                &board,
                &BoardTables::LS1046AFRWY,
            );
            print_json(&SelectReport {
                configured: selection.configured(),
                options,
            })
        }
        Commands::Init { config, mode } => {
            let mut config = load_config(config)?;
            if let Some(mode) = mode {
                config.init.mode = mode.into();
            }

            let mut board = SimulatedBoard::from_config(&config.board);
            let ram_size = init_dram(config.init.mode, &mut board);
            print_json(&InitReport {
                ram_size,
                erratum_a008850_applied: board.erratum_count(),
                writes: board.writes(),
            })
        }
        Commands::Table { registered } => {
            let table = BoardTables::LS1046AFRWY.for_module(registered);
            print_json(&TableReport {
                registered,
                rows: timing::rows(table).collect(),
            })
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("frwy-ddr: {e}");
        process::exit(1);
    }
}
