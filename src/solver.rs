use std::{fmt, str::FromStr};

use crate::errors::UnknownSolver;
use crate::genetic::GeneticSolver;
use crate::graph_algos::{AStarSolver, DijkstraSolver};
use crate::grid::Grid;
use crate::result::PathResult;


/// Shared contract of every routing strategy
/// `solve` runs to completion on the calling thread and always yields a well-formed result
pub trait Solver {
    /// Stable display name, also stamped on every result
    fn name(&self) -> &'static str;

    fn solve(&self, grid: &Grid) -> PathResult;
}


/// The available strategies, selectable by name at the call boundary
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SolverKind {
    AStar,
    Dijkstra,
    Genetic,
}

impl SolverKind {
    pub const ALL: [SolverKind; 3] = [SolverKind::AStar, SolverKind::Dijkstra, SolverKind::Genetic];

    pub fn display_name(self) -> &'static str {
        match self {
            SolverKind::AStar => AStarSolver::NAME,
            SolverKind::Dijkstra => DijkstraSolver::NAME,
            SolverKind::Genetic => GeneticSolver::NAME,
        }
    }

    /// Instantiate the strategy with its default configuration
    pub fn build(self) -> Box<dyn Solver> {
        match self {
            SolverKind::AStar => Box::new(AStarSolver),
            SolverKind::Dijkstra => Box::new(DijkstraSolver),
            SolverKind::Genetic => Box::new(GeneticSolver::default()),
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for SolverKind {
    type Err = UnknownSolver;

    /// Accepts the display names and the short aliases astar, dijkstra, genetic/ga
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if let Some(kind) = Self::ALL.into_iter().find(|k| k.display_name() == name) {
            return Ok(kind);
        }
        match name.to_ascii_lowercase().as_str() {
            "astar" | "a*" | "a-star" => Ok(SolverKind::AStar),
            "dijkstra" => Ok(SolverKind::Dijkstra),
            "genetic" | "ga" => Ok(SolverKind::Genetic),
            _ => Err(UnknownSolver(name.to_string())),
        }
    }
}


/// Look up a solver by display name or alias
pub fn solver_by_name(name: &str) -> Option<Box<dyn Solver>> {
    name.parse::<SolverKind>().ok().map(SolverKind::build)
}

/// One instance of every strategy, in a stable order
pub fn available_solvers() -> Vec<Box<dyn Solver>> {
    SolverKind::ALL.into_iter().map(SolverKind::build).collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_distinct_and_stable() {
        let names: Vec<&str> = available_solvers().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["A* Search Algorithm", "Dijkstra's Algorithm", "Genetic Algorithm (GA)"]);
    }

    #[test]
    fn test_lookup_by_display_name_round_trips() {
        for kind in SolverKind::ALL {
            let solver = solver_by_name(kind.display_name()).unwrap();
            assert_eq!(solver.name(), kind.display_name());
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!("astar".parse::<SolverKind>(), Ok(SolverKind::AStar));
        assert_eq!(" A* ".parse::<SolverKind>(), Ok(SolverKind::AStar));
        assert_eq!("Dijkstra".parse::<SolverKind>(), Ok(SolverKind::Dijkstra));
        assert_eq!("GA".parse::<SolverKind>(), Ok(SolverKind::Genetic));
        assert_eq!("bfs".parse::<SolverKind>(), Err(UnknownSolver("bfs".to_string())));
        assert!(solver_by_name("bfs").is_none());
    }

    #[test]
    fn test_every_solver_reports_failure_on_empty_grid() {
        let grid = Grid::empty();
        for solver in available_solvers() {
            let result = solver.solve(&grid);
            assert!(!result.is_found(), "{} found a path in an empty grid", solver.name());
            assert_eq!(result.solver_name(), solver.name());
        }
    }
}
