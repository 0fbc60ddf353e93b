use crate::meadow::Meadow;
use crate::simulation::movement::destination;
use colored::Colorize;
use std::collections::VecDeque;
use std::time::Duration;

/// Advance the meadow by one generation and return the number of
/// animal turns executed.
///
/// The occupied positions are snapshotted in reading order before any
/// mutation, then drained front-to-back. Each turn: decide the
/// destination on the current (possibly already-mutated) meadow, age
/// and hunger up, eat/move/reproduce, and finally check starvation.
/// A prey eaten before its own turn is dropped from the queue so the
/// predator now standing there is not processed twice.
pub fn step(meadow: &mut Meadow) -> usize {
    let mut queue: VecDeque<_> = meadow.animal_positions().into();
    let mut turns = 0;

    while let Some(origin) = queue.pop_front() {
        if !meadow.has_animal_at(origin) {
            continue;
        }
        turns += 1;

        let dest = destination(meadow, origin);

        if let Some(animal) = meadow.animal_at_mut(origin) {
            animal.grow_older().grow_hungrier();
        }

        let mut ate = false;
        if dest != origin {
            let eats = meadow.animal_at(origin).is_some_and(|a| a.is_predator())
                && meadow.animal_at(dest).is_some_and(|a| a.is_prey());
            if eats {
                meadow.remove_animal_at(dest);
                if let Some(animal) = meadow.animal_at_mut(origin) {
                    animal.reset_hunger();
                }
                ate = true;
            }

            meadow.move_animal(origin, dest);

            let child = meadow
                .animal_at_mut(dest)
                .filter(|a| a.is_fertile())
                .map(|a| a.reproduce());
            if let Some(child) = child {
                // Born at the vacated origin; appended after the
                // snapshot, so it acts first in the next generation
                meadow.insert_animal(child, origin);
            }
        }

        if meadow.animal_at(dest).is_some_and(|a| a.is_starving()) {
            meadow.remove_animal_at(dest);
        }

        if ate {
            // The eaten prey's pending turn no longer exists
            if let Some(i) = queue.iter().position(|&p| p == dest) {
                queue.remove(i);
            }
        }
    }

    turns
}

/// Stats line plus the rendered grid, one snapshot per call
pub fn render_with_stats(
    meadow: &Meadow,
    predators: usize,
    prey: usize,
    generation: u32,
) -> String {
    format!(
        "Predadores: {} vs Presas: {} (Gen. {})\n{}",
        predators, prey, generation, meadow
    )
}

/// Drives the simulation over a fixed number of generations and takes
/// care of the console output
pub struct SimulationEngine {
    verbose: bool,
}

impl SimulationEngine {
    /// Create a new simulation engine
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Run the requested number of generations, printing the initial
    /// snapshot, then either every generation whose population counts
    /// changed (verbose) or only the final one. Returns the final
    /// (predator, prey) counts, always taken from the count queries.
    pub fn run(&self, meadow: &mut Meadow, generations: u32) -> (usize, usize) {
        let mut predators = meadow.predator_count();
        let mut prey = meadow.prey_count();
        println!("{}", render_with_stats(meadow, predators, prey, 0));

        for generation in 1..=generations {
            step(meadow);

            let previous = (predators, prey);
            predators = meadow.predator_count();
            prey = meadow.prey_count();

            if self.verbose {
                if (predators, prey) != previous {
                    println!("{}", render_with_stats(meadow, predators, prey, generation));
                }
            } else if generation == generations {
                println!("{}", render_with_stats(meadow, predators, prey, generation));
            }
        }

        (predators, prey)
    }

    /// Print simulation summary
    pub fn print_summary(&self, meadow: &Meadow, generations: u32, elapsed: Duration) {
        println!(
            "\n{}\n{} {:.3} ms {} {} {} {}",
            "===".bright_blue().bold(),
            "⏱️  Simulation Latency:".green().bold(),
            elapsed.as_secs_f64() * 1000.0,
            "|".dimmed(),
            format!("generations={}", generations).cyan(),
            format!("predators={}", meadow.predator_count()).cyan(),
            format!("preys={}", meadow.prey_count()).cyan(),
        );
    }
}
