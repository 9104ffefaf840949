//! Minimum time-cost routing across weighted grid mazes.
//!
//! A [`Grid`] is read from text: `#` walls, `S` start, `G` goal and integer
//! cells giving the cost of stepping onto them. Three interchangeable
//! [`Solver`]s route from start to goal:
//!
//! - [`AStarSolver`]: best-first search guided by Manhattan distance
//! - [`DijkstraSolver`]: cost-ordered search, the reference for optimal cost
//! - [`GeneticSolver`]: evolves move sequences; stochastic unless seeded
//!
//! Every solve returns a [`PathResult`]. Failures are never errors: they carry an
//! empty path and [`NOT_FOUND_COST`].
//!
//! ```
//! use maze_route::{Grid, solver_by_name};
//!
//! let grid = Grid::parse("S 4 1\n1 # 1\n1 1 G\n");
//! let solver = solver_by_name("dijkstra").unwrap();
//! let result = solver.solve(&grid);
//! assert!(result.is_found());
//! assert_eq!(result.total_cost(), 3);
//! ```

mod collections;
pub mod errors;
pub mod genetic;
pub mod geometry;
pub mod graph_algos;
pub mod grid;
pub mod result;
pub mod solver;


pub use errors::{ConfigError, GridLoadError, PathPlannerError, UnknownSolver};
pub use genetic::{GeneticConfig, GeneticSolver};
pub use graph_algos::{AStarSolver, DijkstraSolver};
pub use grid::{Cell, CellKind, Grid};
pub use result::{NOT_FOUND_COST, PathResult};
pub use solver::{Solver, SolverKind, available_solvers, solver_by_name};
