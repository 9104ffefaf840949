use std::{fmt, time::Duration};

use crate::grid::Cell;


/// Cost reported when no path was found
/// No real path can accumulate this much, so it never collides with a genuine cost
pub const NOT_FOUND_COST: u64 = u64::MAX;


/// Outcome of one solve call
#[derive(Clone, Debug)]
pub struct PathResult {
    path: Vec<Cell>, // start to goal inclusive, empty on failure
    total_cost: u64,
    solver_name: &'static str,
    elapsed: Duration,
}

impl PathResult {

    pub fn found(path: Vec<Cell>, total_cost: u64, solver_name: &'static str, elapsed: Duration) -> Self {
        Self { path, total_cost, solver_name, elapsed }
    }

    pub fn not_found(solver_name: &'static str, elapsed: Duration) -> Self {
        Self {
            path: Vec::new(),
            total_cost: NOT_FOUND_COST,
            solver_name,
            elapsed,
        }
    }

    pub fn path(&self) -> &[Cell] {
        &self.path
    }

    pub fn total_cost(&self) -> u64 {
        self.total_cost
    }

    pub fn solver_name(&self) -> &'static str {
        self.solver_name
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Result: Cost={}, Steps={}, Time={:.2} ms",
            self.solver_name,
            self.total_cost,
            self.path.len(),
            self.elapsed.as_secs_f64() * 1000.0,
        )
    }
}
