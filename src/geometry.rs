use num_traits::{Num, Signed};


/// Manhattan distance
pub fn manhattan_distance<T>(r1: T, c1: T, r2: T, c2: T) -> T
where
    T: Num + Copy + Signed,
    {
    (r1 - r2).abs() + (c1 - c2).abs()
}


/// Axis-aligned unit move on the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {

    /// Every direction, in declaration order
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Order in which the classical searches try neighbors
    pub const EXPANSION_ORDER: [Direction; 4] = [Direction::Right, Direction::Left, Direction::Down, Direction::Up];

    /// (Δrow, Δcol) of the move
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Apply the move to a coordinate
    /// Returns signed coordinates so callers can bounds-check moves off the top/left edge
    pub fn step(self, row: usize, col: usize) -> (isize, isize) {
        let (dr, dc) = self.delta();
        (row as isize + dr, col as isize + dc)
    }
}
