use std::{fmt, hash::{Hash, Hasher}};

use crate::geometry::manhattan_distance;


/// What occupies a cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    Open,
    Wall,
    Start,
    Goal,
}

/// Single grid square
/// Identity is the (row, col) position only; cost and kind do not take part in equality
#[derive(Clone, Copy, Debug)]
pub struct Cell {
    row: usize,
    col: usize,
    time_cost: u32, // cost charged for stepping into this cell
    kind: CellKind,
}

impl Cell {

    pub fn new(row: usize, col: usize, time_cost: u32, kind: CellKind) -> Self {
        Self { row, col, time_cost, kind }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn kind(&self) -> CellKind {
        self.kind
    }

    /// Cost of stepping into this cell
    /// Walls can never be entered, whatever number was stored for them
    pub fn time_cost(&self) -> Option<u32> {
        match self.kind {
            CellKind::Wall => None,
            _ => Some(self.time_cost),
        }
    }

    pub fn is_wall(&self) -> bool {
        self.kind == CellKind::Wall
    }

    pub fn is_start(&self) -> bool {
        self.kind == CellKind::Start
    }

    pub fn is_goal(&self) -> bool {
        self.kind == CellKind::Goal
    }

    /// Manhattan distance between two cells
    pub fn manhattan_to(&self, other: &Cell) -> u64 {
        manhattan_distance(
            self.row as i64, self.col as i64,
            other.row as i64, other.col as i64,
        ) as u64
    }

    /// True when the two cells share an edge
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.manhattan_to(other) == 1
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.row == other.row && self.col == other.col
    }
}
impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.row.hash(state);
        self.col.hash(state);
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            CellKind::Start => write!(f, "S"),
            CellKind::Goal => write!(f, "G"),
            CellKind::Wall => write!(f, "#"),
            CellKind::Open => write!(f, "{}", self.time_cost),
        }
    }
}
