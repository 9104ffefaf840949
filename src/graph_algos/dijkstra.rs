use crate::errors::PathPlannerError;
use crate::collections::{FxIndexMap, NO_PARENT};
use crate::grid::{Cell, Grid};
use crate::result::PathResult;
use crate::solver::Solver;
use super::{endpoints, grid_edges, into_path_result, shortest_path};

use std::{collections::BinaryHeap, hash::Hash, cmp::Ordering, fmt::Debug, time::Instant};
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};




/// Identify the shortest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// From start Node, traverse through graph until node meets goal criteria
/// Returns the path from start to goal and its cost
pub fn dijkstra<N, C, IT, NN, G>(start: N, neighbors: NN, goal: G) -> Result<(Vec<N>, C), PathPlannerError>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + Ord + Copy + Debug,
    G: Fn(&N) -> bool, // node qualifier for goal
    {

    // Build the graph - terminates when the goal is met
    let (node_map, goal_index) = build_dijkstra_graph(start, neighbors, goal)?;

    match goal_index {
        Some(goal_index) => shortest_path(&node_map, goal_index),
        None => Err(PathPlannerError::NoPathFound),
    }
}


/// Traverses the graph using Dijkstra's algorithm
/// Returns a map of nodes with their smallest costs along with the index of the goal node
fn build_dijkstra_graph<N, C, IT, NN, G>(start: N, neighbors: NN, goal_fn: G) -> Result<(FxIndexMap<N, (usize, C)>, Option<usize>), PathPlannerError>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + Ord + Copy + Debug,
    G: Fn(&N) -> bool // Returns true if goal is met
    {

    // Nodes to visit - binary heap sorts Biggest to Smallest
    // Dijkstra's algorithm uses a priority queue to always expand the least costly node first
    // We store the cost from the starting node
    let mut nodes_to_visit: BinaryHeap<NodeId<C>> = BinaryHeap::new();

    // The tuple contains (parent_index, cost) where parent_index is the index of the parent node in the map
    // for the start node, parent_index is NO_PARENT
    let mut nodes_map: FxIndexMap<N, (usize, C)> = FxIndexMap::default();

    let start_index = nodes_map.insert_full(start, (NO_PARENT, Zero::zero())).0;
    nodes_to_visit.push(NodeId{
        index: start_index,
        cost: Zero::zero(),
    });

    // Loop over each node to visit, removing the smallest node
    while let Some(NodeId {cost, index}) = nodes_to_visit.pop() {

        // fetch current best cost for node
        let Some((node, &(_, c))) = nodes_map.get_index(index) else {
            continue;
        };

        // Improved duplicates are re-queued rather than updated in place,
        // so an entry costlier than the best known one is stale
        if cost > c {
            continue;
        }

        if goal_fn(node) {
            return Ok((nodes_map, Some(index)));
        }

        for (neighbor, edge_cost) in neighbors(node) {

            let new_cost = edge_cost + c;

            let neighbor_index;

            match nodes_map.entry(neighbor) {
                Vacant(e) => {
                    neighbor_index = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        // relax
                        neighbor_index = e.index();
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }

            nodes_to_visit.push(NodeId {
                index: neighbor_index,
                cost: new_cost,
            });
        }
    }

    Ok((nodes_map, None))
}


/// Node identifier
/// - for ordering we only need cost and a way to identify the node
#[derive(Debug)]
struct NodeId<T> {
    index: usize,
    cost: T
}

impl<T: Ord> Ord for NodeId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.cmp(&self.cost)
    }
}
impl<T: Ord> PartialOrd for NodeId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: PartialEq> PartialEq for NodeId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}
impl<T: PartialEq> Eq for NodeId<T> {}


/// Grid solver ordering the frontier by accumulated cost alone
/// Serves as the reference for optimal cost
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl DijkstraSolver {
    pub const NAME: &'static str = "Dijkstra's Algorithm";

    fn route(&self, grid: &Grid) -> Result<(Vec<Cell>, u64), PathPlannerError> {
        let (start, goal) = endpoints(grid)?;
        dijkstra(
            *start,
            |cell: &Cell| grid_edges(grid, cell),
            |cell: &Cell| cell == goal,
        )
    }
}

impl Solver for DijkstraSolver {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn solve(&self, grid: &Grid) -> PathResult {
        let timer = Instant::now();
        into_path_result(Self::NAME, self.route(grid), timer)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use crate::result::NOT_FOUND_COST;

    // Diamond-shaped graph: A -> B -> D and A -> C -> D
    fn create_test_graph() -> HashMap<String, Vec<(String, u32)>> {
        let mut graph = HashMap::new();
        graph.insert("A".to_string(), vec![
            ("B".to_string(), 1),
            ("C".to_string(), 3),
        ]);
        graph.insert("B".to_string(), vec![
            ("D".to_string(), 5),
        ]);
        graph.insert("C".to_string(), vec![
            ("D".to_string(), 1),
        ]);
        graph.insert("D".to_string(), vec![]);
        graph
    }

    fn create_neighbor_fn(graph: &HashMap<String, Vec<(String, u32)>>) -> impl Fn(&String) -> Vec<(String, u32)> + '_ {
        move |node: &String| {
            graph.get(node).cloned().unwrap_or_default()
        }
    }

    #[test]
    fn test_build_dijkstra_graph_simple() {
        let graph = create_test_graph();
        let neighbors = create_neighbor_fn(&graph);

        let (result, _) = build_dijkstra_graph(
            "A".to_string(),
            neighbors,
            |node| node == "D"
        ).unwrap();

        let costs: HashMap<_, _> = result.iter().map(|(node, (_, cost))| (node.clone(), *cost)).collect();

        assert_eq!(costs["A"], 0);
        assert_eq!(costs["B"], 1);
        assert_eq!(costs["C"], 3);
        assert_eq!(costs["D"], 4); // via the A->C->D path
    }

    #[test]
    fn test_dijkstra_finds_optimal_path() {
        let graph = create_test_graph();
        let neighbors = create_neighbor_fn(&graph);

        let (path, cost) = dijkstra("A".to_string(), neighbors, |node| node == "D").unwrap();

        assert_eq!(path, vec!["A", "C", "D"].into_iter().map(String::from).collect::<Vec<_>>());
        assert_eq!(cost, 4);
    }

    #[test]
    fn test_dijkstra_handles_unreachable_goal() {
        let mut graph = HashMap::new();
        graph.insert("A".to_string(), vec![("B".to_string(), 1)]);
        graph.insert("B".to_string(), vec![("C".to_string(), 1)]);
        graph.insert("C".to_string(), vec![]);
        graph.insert("D".to_string(), vec![]); // D is not connected

        let neighbors = create_neighbor_fn(&graph);
        let result = dijkstra("A".to_string(), neighbors, |node| node == "D");

        assert!(matches!(result, Err(PathPlannerError::NoPathFound)));
    }

    #[test]
    fn test_cheaper_route_found_later_wins() {
        // A queues C expensively first, then B relaxes it to a cheaper cost
        let mut graph = HashMap::new();
        graph.insert("A".to_string(), vec![("C".to_string(), 10), ("B".to_string(), 1)]);
        graph.insert("B".to_string(), vec![("C".to_string(), 1)]);
        graph.insert("C".to_string(), vec![("D".to_string(), 1)]);
        graph.insert("D".to_string(), vec![]);

        let neighbors = create_neighbor_fn(&graph);
        let (path, cost) = dijkstra("A".to_string(), neighbors, |node| node == "D").unwrap();

        assert_eq!(cost, 3);
        assert_eq!(path, vec!["A", "B", "C", "D"].into_iter().map(String::from).collect::<Vec<_>>());
    }

    #[test]
    fn test_dijkstra_complex_graph() {
        let mut graph = HashMap::new();
        graph.insert("A".to_string(), vec![("B".to_string(), 4), ("C".to_string(), 2)]);
        graph.insert("B".to_string(), vec![("C".to_string(), 1), ("D".to_string(), 5)]);
        graph.insert("C".to_string(), vec![("D".to_string(), 8), ("E".to_string(), 10)]);
        graph.insert("D".to_string(), vec![("E".to_string(), 2), ("F".to_string(), 6)]);
        graph.insert("E".to_string(), vec![("F".to_string(), 3)]);
        graph.insert("F".to_string(), vec![]);

        let neighbors = create_neighbor_fn(&graph);
        let (path, cost) = dijkstra("A".to_string(), neighbors, |node| node == "F").unwrap();

        // The total cost should be 14 (A->B->D->E->F)
        assert_eq!(cost, 14);
        assert_eq!(path.first().map(String::as_str), Some("A"));
        assert_eq!(path.last().map(String::as_str), Some("F"));
    }

    #[test]
    fn test_solver_on_small_grid() {
        let grid = Grid::parse("S 9 9 G\n1 1 1 1\n");
        let result = DijkstraSolver.solve(&grid);

        assert!(result.is_found());
        assert_eq!(result.total_cost(), 4);
        assert_eq!(result.solver_name(), DijkstraSolver::NAME);
    }

    #[test]
    fn test_solver_failure_shape() {
        for text in ["S 1 #\n1 # 1\n# 1 G\n", "1 1\n1 1\n", ""] {
            let result = DijkstraSolver.solve(&Grid::parse(text));
            assert!(!result.is_found());
            assert!(result.path().is_empty());
            assert_eq!(result.total_cost(), NOT_FOUND_COST);
        }
    }
}
