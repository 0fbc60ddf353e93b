use crate::meadow::Meadow;
use crate::position::Position;

/// Pick the destination for the animal at `pos` this turn.
///
/// Candidates are the adjacent cells in clockwise-from-above order. A
/// predator with edible neighbors only considers those (eating preempts
/// plain movement); otherwise the candidates are the free cells. With no
/// candidates the animal stays put. The pick is `rank(pos) mod len`, a
/// deterministic function of the current position and the board width —
/// the simulation's only source of pseudo-randomness.
pub fn destination(meadow: &Meadow, pos: Position) -> Position {
    let animal = match meadow.animal_at(pos) {
        Some(animal) => animal,
        None => return pos,
    };

    let adjacent = pos.adjacent();
    let mut candidates: Vec<Position> = Vec::with_capacity(4);

    if animal.is_predator() {
        candidates.extend(
            adjacent
                .iter()
                .filter(|&&p| meadow.animal_at(p).is_some_and(|prey| prey.is_prey())),
        );
    }
    if candidates.is_empty() {
        candidates.extend(adjacent.iter().filter(|&&p| meadow.is_free(p)));
    }

    if candidates.is_empty() {
        pos
    } else {
        candidates[meadow.rank(pos) as usize % candidates.len()]
    }
}
