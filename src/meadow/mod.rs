pub mod meadow;
pub mod parser;

pub use meadow::Meadow;
pub use parser::{load_meadow, parse_meadow};
