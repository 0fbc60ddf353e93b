use crate::animal::Animal;
use crate::error::{Result, SimError};
use crate::meadow::Meadow;
use crate::position::Position;
use std::fs;

/// Load a meadow layout from a file path.
///
/// The format is line-oriented. Blank lines and `#` comments are
/// skipped; every other line starts with a keyword:
///
/// ```text
/// size 10 5              # limit corner: x y (required, exactly once)
/// rock 3 2               # obstacle at (3, 2)
/// animal fox 20 10 4 2   # species repro feed x y
/// ```
pub fn load_meadow(path: &str) -> Result<Meadow> {
    let contents = fs::read_to_string(path)?;
    parse_meadow(&contents)
}

/// Parse a meadow layout from an in-memory string
pub fn parse_meadow(src: &str) -> Result<Meadow> {
    let mut limit: Option<Position> = None;
    let mut rocks: Vec<Position> = Vec::new();
    let mut animals: Vec<Animal> = Vec::new();
    let mut positions: Vec<Position> = Vec::new();

    for raw in src.lines() {
        let line = match raw.find('#') {
            Some(i) => raw[..i].trim(),
            None => raw.trim(),
        };
        if line.is_empty() {
            continue;
        }

        let mut parts = line.split_whitespace();
        let keyword = parts.next().unwrap_or_default();
        let rest: Vec<&str> = parts.collect();

        match keyword {
            "size" => {
                if limit.is_some() {
                    return Err(SimError::InvalidLine(format!(
                        "duplicate size line: '{}'",
                        line
                    )));
                }
                let [x, y] = coords(line, &rest)?;
                limit = Some(Position::new(x, y));
            }
            "rock" => {
                let [x, y] = coords(line, &rest)?;
                rocks.push(Position::new(x, y));
            }
            "animal" => {
                if rest.len() != 5 {
                    return Err(SimError::InvalidLine(format!(
                        "expected 'animal <species> <repro> <feed> <x> <y>', got '{}'",
                        line
                    )));
                }
                let species = rest[0];
                let repro = number(line, rest[1])?;
                let feed = number(line, rest[2])?;
                let x = number(line, rest[3])?;
                let y = number(line, rest[4])?;

                animals.push(Animal::new(species, repro, feed)?);
                positions.push(Position::new(x, y));
            }
            _ => {
                return Err(SimError::InvalidLine(format!(
                    "unknown keyword '{}' in '{}'",
                    keyword, line
                )));
            }
        }
    }

    let limit = limit.ok_or_else(|| {
        SimError::InvalidArgument("meadow layout is missing a size line".to_string())
    })?;

    Meadow::new(limit, rocks, animals, positions)
}

fn coords(line: &str, rest: &[&str]) -> Result<[u32; 2]> {
    if rest.len() != 2 {
        return Err(SimError::InvalidLine(format!(
            "expected two coordinates in '{}'",
            line
        )));
    }
    Ok([number(line, rest[0])?, number(line, rest[1])?])
}

fn number(line: &str, token: &str) -> Result<u32> {
    token.parse::<u32>().map_err(|_| {
        SimError::InvalidArgument(format!(
            "'{}' is not a non-negative integer in '{}'",
            token, line
        ))
    })
}
