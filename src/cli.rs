use clap::Parser;

/// CLI arguments for the meadow simulation
#[derive(Parser, Debug)]
#[command(name = "meadow_mania", about = "🌿 Predator-prey ecosystem simulator")]
pub struct Args {
    /// Path to the meadow layout file
    #[arg(short = 'm', long = "meadow")]
    pub meadow: String,

    /// Number of generations to simulate
    #[arg(short = 'g', long = "generations")]
    pub generations: u32,

    /// Print a snapshot after every generation whose population changed
    #[arg(short = 'v', long, default_value_t = false)]
    pub verbose: bool,
}
