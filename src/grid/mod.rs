mod cell;
mod parser;

pub use cell::{Cell, CellKind};

use std::{fmt, fs::File, io::{BufRead, BufReader}, path::Path, str::FromStr};

use crate::errors::GridLoadError;
use crate::geometry::Direction;


/// Rectangular maze of weighted cells
/// Built once from text and read-only afterwards; a reload replaces the whole grid
#[derive(Clone, Debug, Default)]
pub struct Grid {
    cells: Vec<Vec<Cell>>,
    rows: usize,
    cols: usize, // width of the first row, authoritative for bounds
    start: Option<Cell>,
    goal: Option<Cell>,
}

impl Grid {

    /// The 0×0 grid standing in for anything that failed to load
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse grid text, degrading to the empty grid when no rows are found
    pub fn parse(text: &str) -> Self {
        Self::from_reader(text.as_bytes())
    }

    /// Read a grid from any buffered source, degrading to the empty grid on failure
    pub fn from_reader<R: BufRead>(reader: R) -> Self {
        Self::try_from_reader(reader).unwrap_or_else(|e| {
            log::warn!("falling back to empty grid: {e}");
            Self::empty()
        })
    }

    /// Load a grid file, degrading to the empty grid when it is missing or unreadable
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        Self::try_from_path(path).unwrap_or_else(|e| {
            log::warn!("falling back to empty grid for {}: {e}", path.display());
            Self::empty()
        })
    }

    pub fn try_from_reader<R: BufRead>(reader: R) -> Result<Self, GridLoadError> {
        let rows = parser::read_rows(reader)?;
        if rows.is_empty() {
            return Err(GridLoadError::Empty);
        }
        Ok(Self::from_rows(rows))
    }

    pub fn try_from_path<P: AsRef<Path>>(path: P) -> Result<Self, GridLoadError> {
        let file = File::open(path)?;
        Self::try_from_reader(BufReader::new(file))
    }

    /// Assemble parsed rows, caching start and goal
    fn from_rows(cells: Vec<Vec<Cell>>) -> Self {
        let rows = cells.len();
        let cols = cells.first().map_or(0, Vec::len);

        if cells.iter().any(|row| row.len() != cols) {
            log::warn!("grid rows are not uniform in length, using width {cols} of the first row");
        }

        let mut start: Option<Cell> = None;
        let mut goal: Option<Cell> = None;
        for cell in cells.iter().flat_map(|row| row.iter().take(cols)) {
            // the last marker read wins
            if cell.is_start() {
                if let Some(previous) = start.replace(*cell) {
                    log::warn!("duplicate start at {:?}, replacing {:?}", cell.position(), previous.position());
                }
            } else if cell.is_goal() {
                if let Some(previous) = goal.replace(*cell) {
                    log::warn!("duplicate goal at {:?}, replacing {:?}", cell.position(), previous.position());
                }
            }
        }

        log::debug!("loaded {rows}x{cols} grid, start {:?}, goal {:?}",
            start.map(|c| c.position()), goal.map(|c| c.position()));

        Self { cells, rows, cols, start, goal }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn start(&self) -> Option<&Cell> {
        self.start.as_ref()
    }

    pub fn goal(&self) -> Option<&Cell> {
        self.goal.as_ref()
    }

    /// Start and goal together, None unless both exist
    pub fn endpoints(&self) -> Option<(&Cell, &Cell)> {
        Some((self.start.as_ref()?, self.goal.as_ref()?))
    }

    /// Bounds-checked lookup
    /// Short rows of a ragged grid yield None past their end
    pub fn cell(&self, row: isize, col: isize) -> Option<&Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get(row)?.get(col)
    }

    /// A coordinate can be moved into iff it is inside the grid and not a wall
    pub fn is_valid(&self, row: isize, col: isize) -> bool {
        self.cell(row, col).is_some_and(|cell| !cell.is_wall())
    }

    /// Enterable neighbors of a cell in search expansion order (right, left, down, up)
    pub fn neighbors<'a>(&'a self, cell: &Cell) -> impl Iterator<Item = &'a Cell> + use<'a> {
        let (row, col) = cell.position();
        Direction::EXPANSION_ORDER.into_iter().filter_map(move |direction| {
            let (r, c) = direction.step(row, col);
            self.cell(r, c).filter(|n| !n.is_wall())
        })
    }

    /// Every addressable cell, row by row
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flat_map(|row| row.iter().take(self.cols))
    }

    /// True when some enterable cell other than start or goal costs nothing to enter
    pub fn has_free_cells(&self) -> bool {
        self.cells()
            .filter(|c| c.kind() == CellKind::Open)
            .any(|c| c.time_cost() == Some(0))
    }
}

impl FromStr for Grid {
    type Err = GridLoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_reader(s.as_bytes())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(Cell::to_string).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
