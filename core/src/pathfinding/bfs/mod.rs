mod state;

use crate::graph::Graph;
use crate::node::NodeId;
use rustc_hash::FxHashMap;
use state::BfsState;
use tracing::debug;

/// Outcome of a successful search.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    /// Hops from source to destination
    pub distance: u64,
    /// Node -> the node it was first discovered from. The source has no entry.
    pub predecessors: FxHashMap<NodeId, NodeId>,
    /// Nodes discovered before the destination was dequeued, source included
    pub nodes_visited: usize,
}

/// Unweighted breadth-first search from `source` to `dest`.
///
/// Returns `None` when either endpoint is missing from the graph or the two
/// lie in different components. Only the first-discovered predecessor of
/// each node is kept, so one shortest path is reconstructible even when
/// several exist; which one depends on neighbor order.
pub fn shortest_path(graph: &Graph, source: NodeId, dest: NodeId) -> Option<ShortestPath> {
    if !graph.contains(source) || !graph.contains(dest) {
        debug!(%source, %dest, "endpoint missing from graph");
        return None;
    }

    let mut bfs_state = BfsState::new(source);
    let distance = bfs_state.find_distance_to_target(dest, graph);
    let nodes_visited = bfs_state.discovered();

    debug!(%source, %dest, ?distance, nodes_visited, "bfs finished");

    distance.map(|distance| ShortestPath {
        distance,
        predecessors: bfs_state.predecessors,
        nodes_visited,
    })
}
