use crate::errors::PathPlannerError;
use crate::collections::{FxIndexMap, NO_PARENT};
use crate::grid::{Cell, Grid};
use crate::result::PathResult;
use crate::solver::Solver;
use super::{endpoints, grid_edges, into_path_result, shortest_path};

use std::{
    collections::BinaryHeap,
    hash::Hash,
    fmt::Debug,
    cmp::Ordering,
    time::Instant,
};
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};



/// Node on A* graph
#[derive(Debug)]
struct Node<T> {
    index: usize, // index in the closed_list - maps to the Id of the node
    cost: T, // Cost to reach this node
    h_cost: T, // heuristic estimate to the goal
    f_cost: T, // Total cost = cost + h(n) aka estimated cost
}

// BinaryHeap is a max-heap: reverse so the smallest f comes out first,
// and on equal f prefer the node closer to the goal
impl<T: Ord> Ord for Node<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f_cost.cmp(&self.f_cost)
            .then_with(|| other.h_cost.cmp(&self.h_cost))
    }
}
impl<T: Ord> PartialOrd for Node<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.f_cost == other.f_cost && self.h_cost == other.h_cost
    }
}
impl<T: PartialEq> Eq for Node<T> {}

/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
pub struct AStar {}

impl AStar{

    /// From start Node, traverse through graph until node meets goal criteria
    /// Returns the path from start to goal and its cost
    /// The Approach has 2 requirements:
    /// 1. The heuristic function must be admissible (never overestimates the true cost to reach the goal)
    /// 2. A path actually exists between the start and goal nodes
    pub fn plan<N, C, IT, NN, H, G>(&self, start: N, neighbors: NN, heuristic_fn: H, goal_fn: G) -> Result<(Vec<N>, C), PathPlannerError>
    where
        N: Eq + Hash + Clone + Debug,
        NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
        H: Fn(&N) -> C, // heuristic function
        IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
        C: Zero + Ord + Copy + Debug,
        G: Fn(&N) -> bool, // node qualifier for goal
        {

        let (node_map, goal_index) = self.build_graph(start, neighbors, heuristic_fn, goal_fn)?;

        match goal_index {
            Some(goal_index) => shortest_path(&node_map, goal_index),
            None => Err(PathPlannerError::NoPathFound)
        }
    }


    /// Traverses the graph using A* algorithm
    /// Returns a map of nodes with their smallest costs along with the index of the goal node
    fn build_graph<N, C, IT, NN, H, G>(&self, start: N, neighbors: NN, heuristic_fn: H, goal_fn: G) -> Result<(FxIndexMap<N, (usize, C)>, Option<usize>), PathPlannerError>
    where
        N: Eq + Hash + Clone + Debug,
        NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
        IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
        C: Zero + Ord + Copy + Debug,
        H: Fn(&N) -> C, // heuristic function
        G: Fn(&N) -> bool // Returns true if goal is met
    {
        // Open List
        // Nodes that need to be evaluated, implemented as priority queue
        // Sorting is done by f_cost (cost + heuristic), then h_cost
        let mut open_list: BinaryHeap<Node<C>> = BinaryHeap::new();

        // Best known cost per node plus the parent index used to rebuild the path
        // for the start node, parent_index is NO_PARENT
        let mut closed_list: FxIndexMap<N, (usize, C)> = FxIndexMap::default();

        let start_h = heuristic_fn(&start);
        let start_index = closed_list.insert_full(start, (NO_PARENT, Zero::zero())).0;
        open_list.push(Node{
            index: start_index,
            cost: Zero::zero(),
            h_cost: start_h,
            f_cost: start_h,
        });

        while let Some(Node{index, cost, ..}) = open_list.pop() {

            // fetch current best cost for node
            let Some((node, &(_, c))) = closed_list.get_index(index) else {
                continue;
            };

            // Stale entry, a cheaper route to this node was queued later
            if cost > c {
                continue;
            }

            if goal_fn(node) {
                return Ok((closed_list, Some(index)));
            }

            for (neighbor, edge_cost) in neighbors(node) {

                // confirmed cost, not heuristic
                let new_cost = edge_cost + c;

                let neighbor_index: usize;
                let h_cost: C = heuristic_fn(&neighbor);

                match closed_list.entry(neighbor) {
                    Vacant(e) => {
                        neighbor_index = e.index();
                        e.insert((index, new_cost));
                    }
                    Occupied(mut e) => {
                        if e.get().1 > new_cost {
                            neighbor_index = e.index();
                            e.insert((index, new_cost));
                        } else {
                            // The existing path is at least as good
                            continue;
                        }
                    }
                }

                open_list.push(Node {
                    index: neighbor_index,
                    cost: new_cost,
                    h_cost,
                    f_cost: new_cost + h_cost,
                });
            }
        }
        Ok((closed_list, None))
    }
}


/// Grid solver driving A* with a Manhattan distance heuristic
#[derive(Clone, Copy, Debug, Default)]
pub struct AStarSolver;

impl AStarSolver {
    pub const NAME: &'static str = "A* Search Algorithm";

    fn route(&self, grid: &Grid) -> Result<(Vec<Cell>, u64), PathPlannerError> {
        let (start, goal) = endpoints(grid)?;

        // Manhattan distance only stays admissible while every step costs at least 1
        let unit: u64 = if grid.has_free_cells() { 0 } else { 1 };

        AStar{}.plan(
            *start,
            |cell: &Cell| grid_edges(grid, cell),
            |cell: &Cell| unit * cell.manhattan_to(goal),
            |cell: &Cell| cell == goal,
        )
    }
}

impl Solver for AStarSolver {
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

    // Helper function to create a neighbor function from a graph
    fn create_neighbor_fn(graph: &HashMap<String, Vec<(String, u32)>>) -> impl Fn(&String) -> Vec<(String, u32)> + '_ {
        move |node: &String| {
            graph.get(node).cloned().unwrap_or_default()
        }
    }

    #[test]
    fn test_a_star() {
        // Diamond-shaped graph: A -> B -> D and A -> C -> D
        let mut graph = HashMap::new();
        graph.insert("A".to_string(), vec![("B".to_string(), 1), ("C".to_string(), 3)]);
        graph.insert("B".to_string(), vec![("D".to_string(), 5)]);
        graph.insert("C".to_string(), vec![("D".to_string(), 1)]);
        graph.insert("D".to_string(), vec![]);

        let neighbors = create_neighbor_fn(&graph);

        let a_star = AStar{};
        let (path, cost) = a_star.plan(
            "A".to_string(),
            neighbors,
            |_node: &String| 0,
            |node| node == "D"
        ).unwrap();

        assert_eq!(path, vec!["A", "C", "D"].into_iter().map(String::from).collect::<Vec<_>>());
        assert_eq!(cost, 4);
    }

    #[test]
    fn test_a_star_handles_unreachable_goal() {
        let mut graph = HashMap::new();
        graph.insert("A".to_string(), vec![("B".to_string(), 1)]);
        graph.insert("B".to_string(), vec![("C".to_string(), 1)]);
        graph.insert("C".to_string(), vec![]);
        graph.insert("D".to_string(), vec![]); // D is not connected

        let neighbors = create_neighbor_fn(&graph);

        let a_star = AStar{};
        let result = a_star.plan("A".to_string(), neighbors, |_node: &String| 0, |node| node == "D");

        assert!(matches!(result, Err(PathPlannerError::NoPathFound)));
    }

    #[test]
    fn test_build_a_star_graph_with_cycle() {
        // A -> B -> C -> A
        let mut graph = HashMap::new();
        graph.insert("A".to_string(), vec![("B".to_string(), 1)]);
        graph.insert("B".to_string(), vec![("C".to_string(), 1)]);
        graph.insert("C".to_string(), vec![("A".to_string(), 1), ("D".to_string(), 2)]);
        graph.insert("D".to_string(), vec![]);

        let neighbors = create_neighbor_fn(&graph);

        let a_star = AStar{};
        let (result, _) = a_star.build_graph(
            "A".to_string(),
            neighbors,
            |_node: &String| 0,
            |node| node == "D"
        ).unwrap();

        let costs: HashMap<_, _> = result.iter().map(|(node, (_, cost))| (node.clone(), *cost)).collect();

        assert_eq!(costs["A"], 0);
        assert_eq!(costs["B"], 1);
        assert_eq!(costs["C"], 2);
        assert_eq!(costs["D"], 4);
    }

    #[test]
    fn test_frontier_prefers_lower_f_then_lower_h() {
        let mut heap = BinaryHeap::new();
        heap.push(Node { index: 0, cost: 4u32, h_cost: 4, f_cost: 8 });
        heap.push(Node { index: 1, cost: 6u32, h_cost: 2, f_cost: 8 });
        heap.push(Node { index: 2, cost: 9u32, h_cost: 0, f_cost: 9 });
        heap.push(Node { index: 3, cost: 1u32, h_cost: 6, f_cost: 7 });

        let order: Vec<usize> = std::iter::from_fn(|| heap.pop()).map(|n| n.index).collect();
        assert_eq!(order, vec![3, 1, 0, 2]);
    }

    #[test]
    fn test_solver_on_small_grid() {
        // the cheap detour through the bottom row beats the direct 9s
        let grid = Grid::parse("S 9 9 G\n1 1 1 1\n");
        let result = AStarSolver.solve(&grid);

        assert!(result.is_found());
        assert_eq!(result.total_cost(), 4);
        assert_eq!(result.solver_name(), AStarSolver::NAME);
        let positions: Vec<_> = result.path().iter().map(Cell::position).collect();
        assert_eq!(positions, vec![(0, 0), (1, 0), (1, 1), (1, 2), (1, 3), (0, 3)]);
    }

    #[test]
    fn test_solver_handles_free_cells() {
        // zero-cost corridor: the plain Manhattan estimate would overshoot here
        let grid = Grid::parse("S 5 5 5 G\n0 0 0 0 0\n");
        let result = AStarSolver.solve(&grid);
        assert_eq!(result.total_cost(), 0);
    }

    #[test]
    fn test_solver_missing_endpoints() {
        for text in ["1 1\n1 G\n", "S 1\n1 1\n", ""] {
            let result = AStarSolver.solve(&Grid::parse(text));
            assert!(!result.is_found());
            assert!(result.path().is_empty());
            assert_eq!(result.total_cost(), NOT_FOUND_COST);
        }
    }

    #[test]
    fn test_solver_walled_off_goal() {
        let grid = Grid::parse("S 1 #\n1 # 1\n# 1 G\n");
        let result = AStarSolver.solve(&grid);
        assert!(!result.is_found());
        assert_eq!(result.total_cost(), NOT_FOUND_COST);
    }

    #[test]
    fn test_goal_next_to_start() {
        let grid = Grid::parse("S G\n");
        let result = AStarSolver.solve(&grid);
        assert_eq!(result.path().len(), 2);
        assert_eq!(result.total_cost(), 0);
    }
}
