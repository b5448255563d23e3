//! Memory-controller side of the board interface.
//!
//! This module holds what the board code exchanges with the boot framework:
//! 1. **Options:** [`MemctlOptions`] filled by the timing selector, and the detected [`DimmParams`].
//! 2. **Registers:** The [`DdrCfgRegs`] aggregate programmed by the fixed-SDRAM path.
//! 3. **Traits:** Clock query, register programming, and firmware hooks injected by the caller.
//! 4. **Simulation:** [`SimulatedBoard`], a host-side implementation of all three traits.

/// Controller options and detected module parameters.
pub mod memctl;
/// Controller register aggregate.
pub mod regs;
/// Simulated board implementing the collaborator traits.
pub mod sim;
/// Collaborator traits supplied by the boot framework.
pub mod traits;

pub use memctl::{DataBusWidth, DimmParams, MemctlOptions};
pub use regs::{ChipSelectRegs, DdrCfgRegs};
pub use sim::SimulatedBoard;
pub use traits::{BootFirmware, DdrClock, MemctlRegisters};
