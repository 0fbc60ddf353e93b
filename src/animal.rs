use crate::error::{Result, SimError};
use std::fmt;

/// An animal living in the meadow. A feeding threshold of 0 marks prey;
/// anything greater marks a predator. Hunger is only meaningful for
/// predators and stays 0 for prey under every operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Animal {
    species: String,
    reproduction_threshold: u32,
    feeding_threshold: u32,
    age: u32,
    hunger: u32,
}

impl Animal {
    /// Create a new animal with age and hunger at 0
    pub fn new(species: &str, reproduction_threshold: u32, feeding_threshold: u32) -> Result<Self> {
        if species.is_empty() {
            return Err(SimError::InvalidArgument(
                "animal species must not be empty".to_string(),
            ));
        }
        if reproduction_threshold == 0 {
            return Err(SimError::InvalidArgument(
                "reproduction threshold must be greater than 0".to_string(),
            ));
        }
        Ok(Self {
            species: species.to_string(),
            reproduction_threshold,
            feeding_threshold,
            age: 0,
            hunger: 0,
        })
    }

    /// Species label
    #[inline]
    pub fn species(&self) -> &str {
        &self.species
    }

    #[inline]
    pub fn reproduction_threshold(&self) -> u32 {
        self.reproduction_threshold
    }

    #[inline]
    pub fn feeding_threshold(&self) -> u32 {
        self.feeding_threshold
    }

    #[inline]
    pub fn age(&self) -> u32 {
        self.age
    }

    #[inline]
    pub fn hunger(&self) -> u32 {
        self.hunger
    }

    /// Predator: non-zero feeding threshold
    #[inline]
    pub fn is_predator(&self) -> bool {
        self.feeding_threshold != 0
    }

    /// Prey: feeding threshold of 0
    #[inline]
    pub fn is_prey(&self) -> bool {
        self.feeding_threshold == 0
    }

    /// Fertile once age reaches the reproduction threshold
    #[inline]
    pub fn is_fertile(&self) -> bool {
        self.age >= self.reproduction_threshold
    }

    /// Starving predator: hunger reached the feeding threshold.
    /// Always false for prey.
    #[inline]
    pub fn is_starving(&self) -> bool {
        self.is_predator() && self.hunger >= self.feeding_threshold
    }

    /// Increment age by one
    pub fn grow_older(&mut self) -> &mut Self {
        self.age += 1;
        self
    }

    /// Reset age to 0
    pub fn reset_age(&mut self) -> &mut Self {
        self.age = 0;
        self
    }

    /// Increment hunger by one; no-op for prey
    pub fn grow_hungrier(&mut self) -> &mut Self {
        if self.is_predator() {
            self.hunger += 1;
        }
        self
    }

    /// Reset hunger to 0; no-op for prey
    pub fn reset_hunger(&mut self) -> &mut Self {
        if self.is_predator() {
            self.hunger = 0;
        }
        self
    }

    /// Reproduce: resets the parent's age and returns a newborn of the
    /// same species and thresholds with age and hunger at 0
    pub fn reproduce(&mut self) -> Animal {
        self.reset_age();
        Animal {
            species: self.species.clone(),
            reproduction_threshold: self.reproduction_threshold,
            feeding_threshold: self.feeding_threshold,
            age: 0,
            hunger: 0,
        }
    }

    /// Single-character map glyph: first letter of the species,
    /// lowercase for prey, uppercase for predators
    pub fn glyph(&self) -> char {
        let first = self.species.chars().next().unwrap_or('?');
        if self.is_prey() {
            first.to_ascii_lowercase()
        } else {
            first.to_ascii_uppercase()
        }
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}/{}", self.species, self.age, self.reproduction_threshold)?;
        if self.is_predator() {
            write!(f, ";{}/{}", self.hunger, self.feeding_threshold)?;
        }
        write!(f, "]")
    }
}
