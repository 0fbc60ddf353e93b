use crate::animal::Animal;
use crate::error::{Result, SimError};
use crate::position::{sort_positions, Position};
use std::fmt;

/// The grid world: a bounded rectangle whose outermost ring is solid
/// wall, with rocks as extra obstacles and two parallel vectors pairing
/// each animal with its position (index i of one matches index i of the
/// other).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Meadow {
    limit: Position,
    rocks: Vec<Position>,
    animals: Vec<Animal>,
    positions: Vec<Position>,
}

impl Meadow {
    /// Create a meadow after validating every structural invariant.
    /// Either all invariants hold and a fully valid meadow is produced,
    /// or nothing is.
    pub fn new(
        limit: Position,
        rocks: Vec<Position>,
        animals: Vec<Animal>,
        positions: Vec<Position>,
    ) -> Result<Self> {
        if animals.is_empty() {
            return Err(SimError::InvalidArgument(
                "meadow needs at least one animal".to_string(),
            ));
        }
        if animals.len() != positions.len() {
            return Err(SimError::InvalidArgument(format!(
                "{} animals but {} positions",
                animals.len(),
                positions.len()
            )));
        }
        if has_duplicates(&rocks) {
            return Err(SimError::InvalidArgument(
                "duplicate rock positions".to_string(),
            ));
        }
        if has_duplicates(&positions) {
            return Err(SimError::InvalidArgument(
                "duplicate animal positions".to_string(),
            ));
        }
        for pos in rocks.iter().chain(positions.iter()) {
            if !is_interior(limit, *pos) {
                return Err(SimError::InvalidArgument(format!(
                    "position {} is on or beyond the border of limit {}",
                    pos, limit
                )));
            }
        }
        if positions.iter().any(|p| rocks.contains(p)) {
            return Err(SimError::InvalidArgument(
                "animal placed on a rock".to_string(),
            ));
        }

        Ok(Self {
            limit,
            rocks,
            animals,
            positions,
        })
    }

    /// Grid width including the wall ring
    #[inline]
    pub fn width(&self) -> u32 {
        self.limit.x() + 1
    }

    /// Grid height including the wall ring
    #[inline]
    pub fn height(&self) -> u32 {
        self.limit.y() + 1
    }

    /// Count predators currently in the meadow
    pub fn predator_count(&self) -> usize {
        self.animals.iter().filter(|a| a.is_predator()).count()
    }

    /// Count prey currently in the meadow
    pub fn prey_count(&self) -> usize {
        self.animals.iter().filter(|a| a.is_prey()).count()
    }

    /// Animal at a position, if any (linear scan)
    pub fn animal_at(&self, pos: Position) -> Option<&Animal> {
        self.index_of(pos).map(|i| &self.animals[i])
    }

    /// Mutable animal at a position, if any
    pub fn animal_at_mut(&mut self, pos: Position) -> Option<&mut Animal> {
        self.index_of(pos).map(move |i| &mut self.animals[i])
    }

    /// Occupied positions in reading order
    pub fn animal_positions(&self) -> Vec<Position> {
        let mut sorted = self.positions.clone();
        sort_positions(&mut sorted);
        sorted
    }

    /// True when an animal occupies the position
    #[inline]
    pub fn has_animal_at(&self, pos: Position) -> bool {
        self.index_of(pos).is_some()
    }

    /// True for the outer wall ring or a rock, independent of whether an
    /// animal also occupies the cell
    pub fn is_obstacle(&self, pos: Position) -> bool {
        if pos.x() == 0 || pos.x() >= self.limit.x() {
            return true;
        }
        if pos.y() == 0 || pos.y() >= self.limit.y() {
            return true;
        }
        self.rocks.contains(&pos)
    }

    /// True when the cell holds neither an obstacle nor an animal
    #[inline]
    pub fn is_free(&self, pos: Position) -> bool {
        !self.is_obstacle(pos) && !self.has_animal_at(pos)
    }

    /// Numeric rank of a position in reading order: x + width * y.
    /// Used as the deterministic movement tie-break key.
    #[inline]
    pub fn rank(&self, pos: Position) -> u32 {
        pos.x() + self.width() * pos.y()
    }

    /// Remove the animal at a position; no-op when the cell is vacant
    pub fn remove_animal_at(&mut self, pos: Position) {
        if let Some(i) = self.index_of(pos) {
            self.animals.remove(i);
            self.positions.remove(i);
        }
    }

    /// Move an animal by rewriting its stored position. The animal keeps
    /// its identity and its slot in the parallel vectors.
    pub fn move_animal(&mut self, from: Position, to: Position) {
        if let Some(i) = self.index_of(from) {
            self.positions[i] = to;
        }
    }

    /// Insert a new animal, appended at the end of the parallel vectors.
    /// Appending keeps newborns out of any traversal list snapshotted
    /// before the insertion.
    pub fn insert_animal(&mut self, animal: Animal, pos: Position) {
        self.animals.push(animal);
        self.positions.push(pos);
    }

    fn index_of(&self, pos: Position) -> Option<usize> {
        self.positions.iter().position(|p| *p == pos)
    }
}

impl fmt::Display for Meadow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let horizontal: String = "-".repeat(self.width() as usize - 2);

        writeln!(f, "+{}+", horizontal)?;
        for y in 1..self.height() - 1 {
            write!(f, "|")?;
            for x in 1..self.width() - 1 {
                let pos = Position::new(x, y);
                if let Some(animal) = self.animal_at(pos) {
                    write!(f, "{}", animal.glyph())?;
                } else if self.is_obstacle(pos) {
                    write!(f, "@")?;
                } else {
                    write!(f, ".")?;
                }
            }
            writeln!(f, "|")?;
        }
        write!(f, "+{}+", horizontal)
    }
}

fn is_interior(limit: Position, pos: Position) -> bool {
    pos.x() > 0 && pos.x() < limit.x() && pos.y() > 0 && pos.y() < limit.y()
}

fn has_duplicates(positions: &[Position]) -> bool {
    positions
        .iter()
        .enumerate()
        .any(|(i, p)| positions[i + 1..].contains(p))
}
