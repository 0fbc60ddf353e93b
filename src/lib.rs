//! # Meadow Mania
//!
//! A discrete-time predator-prey ecosystem simulation on a bounded 2D
//! grid.
//!
//! This library provides the core functionality for simulating animal
//! movement, feeding, reproduction, and starvation, generation by
//! generation, with deterministic tie-breaking so a run is fully
//! reproducible from its initial layout.

pub mod animal;
pub mod cli;
pub mod error;
pub mod meadow;
pub mod position;
pub mod simulation;

pub use animal::Animal;
pub use cli::Args;
pub use error::{Result, SimError};
pub use meadow::Meadow;
pub use position::Position;
pub use simulation::SimulationEngine;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{Animal, Args, Meadow, Position, Result, SimError, SimulationEngine};
}
