pub mod dijkstra;
pub mod a_star;
mod shortest_path;

use shortest_path::shortest_path;

use crate::collections::FxIndexMap;
use crate::errors::PathPlannerError;
use crate::grid::{Cell, Grid};
use crate::result::PathResult;

use std::time::Instant;

pub use a_star::{AStar, AStarSolver};
pub use dijkstra::{dijkstra, DijkstraSolver};

/// Type alias for the node map used in path planning algorithms
/// N: Node - space on a graph
/// C: Cost of reaching the node from the start
/// The tuple contains (parent_index, cost) where:
/// - parent_index is the index of the parent node in the map
/// - cost is the total cost to reach this node from the start
pub(crate) type GraphNodeMap<N, C> = FxIndexMap<N, (usize, C)>;


/// Start and goal of a grid, or MissingEndpoint if either is absent
fn endpoints(grid: &Grid) -> Result<(&Cell, &Cell), PathPlannerError> {
    grid.endpoints().ok_or(PathPlannerError::MissingEndpoint)
}

/// Edges out of a grid cell: every enterable neighbor with the cost of stepping into it
fn grid_edges<'a>(grid: &'a Grid, cell: &Cell) -> impl Iterator<Item = (Cell, u64)> + use<'a> {
    grid.neighbors(cell)
        .filter_map(|n| n.time_cost().map(|cost| (*n, u64::from(cost))))
}

/// Wrap a search outcome into the uniform result, logging how the solve ended
fn into_path_result(name: &'static str, outcome: Result<(Vec<Cell>, u64), PathPlannerError>, timer: Instant) -> PathResult {
    let elapsed = timer.elapsed();
    match outcome {
        Ok((path, cost)) => {
            log::debug!("{name}: reached goal with cost {cost} in {} steps, {elapsed:?}", path.len());
            PathResult::found(path, cost, name, elapsed)
        }
        Err(PathPlannerError::MissingEndpoint) => {
            log::warn!("{name}: grid has no start or no goal");
            PathResult::not_found(name, elapsed)
        }
        Err(e) => {
            log::debug!("{name}: {e} after {elapsed:?}");
            PathResult::not_found(name, elapsed)
        }
    }
}
