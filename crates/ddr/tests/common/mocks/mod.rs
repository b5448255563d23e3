//! Doubles for the clock, register, and firmware collaborators.

/// Clock doubles.
pub mod clock;
