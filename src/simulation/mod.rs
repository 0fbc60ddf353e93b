pub mod engine;
pub mod movement;

pub use engine::{render_with_stats, step, SimulationEngine};
pub use movement::destination;
