use crate::collections::NO_PARENT;
use crate::errors::PathPlannerError;
use super::GraphNodeMap;

/// Construct the shortest path from the goal node to the start node
/// Returns the ordered path from start to goal along with the goal's accumulated cost
/// node_map: GraphNodeMap<N, C> - map of nodes with their parent index and cost
/// goal_index: usize - index of the goal node in the node_map
pub(crate) fn shortest_path<N, C>(node_map: &GraphNodeMap<N, C>, goal_index: usize) -> Result<(Vec<N>, C), PathPlannerError>
where
    N: Clone,
    C: Copy,
{
    let goal_cost = match node_map.get_index(goal_index) {
        Some((_, &(_, cost))) => cost,
        None => return Err(PathPlannerError::NoPathFound),
    };

    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start
    while current_index != NO_PARENT {
        if let Some((node, &(parent_index, _))) = node_map.get_index(current_index) {
            path.push(node.clone());
            current_index = parent_index;
        } else {
            return Err(PathPlannerError::NoPathFound);
        }
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    Ok((path, goal_cost))
}
