use clap::Parser;
use meadow_mania::meadow::load_meadow;
use meadow_mania::prelude::*;
use std::time::Instant;

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    // Parse and validate the initial layout
    let mut meadow = load_meadow(&args.meadow)?;

    // Run simulation
    let engine = SimulationEngine::new(args.verbose);
    let sim_start = Instant::now();
    engine.run(&mut meadow, args.generations);

    // Print results
    engine.print_summary(&meadow, args.generations, sim_start.elapsed());

    Ok(())
}
