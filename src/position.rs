use std::cmp::Ordering;
use std::fmt;

/// Grid coordinate. Non-negativity is guaranteed by the unsigned fields,
/// so construction never fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    x: u32,
    y: u32,
}

impl Position {
    /// Create a new position at (x, y)
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Abscissa
    #[inline]
    pub const fn x(self) -> u32 {
        self.x
    }

    /// Ordinate
    #[inline]
    pub const fn y(self) -> u32 {
        self.y
    }

    /// Adjacent positions, starting above and proceeding clockwise:
    /// above, right, below, left. "Above" is elided at y=0 and "left"
    /// at x=0, where the outer wall makes them meaningless.
    pub fn adjacent(self) -> Vec<Position> {
        let mut neighbors = Vec::with_capacity(4);
        if self.y != 0 {
            neighbors.push(Position::new(self.x, self.y - 1));
        }
        neighbors.push(Position::new(self.x + 1, self.y));
        neighbors.push(Position::new(self.x, self.y + 1));
        if self.x != 0 {
            neighbors.push(Position::new(self.x - 1, self.y));
        }
        neighbors
    }
}

/// Reading order: top-to-bottom, then left-to-right
impl Ord for Position {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Position {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Sort positions into reading order. `sort_by` is stable, so positions
/// that compare equal keep their relative order.
pub fn sort_positions(positions: &mut [Position]) {
    positions.sort_by(|a, b| a.cmp(b));
}
