use crate::error::{Error, Result};
use crate::node::NodeId;
use rustc_hash::FxHashMap;

/// Walks `predecessors` back from `target` and returns the route from
/// `start` to `target`, both included.
///
/// The walk must end at `start`; ending anywhere else, or running longer
/// than the map could allow, means the map was not produced by a search
/// from `start` and is reported as `CorruptState`.
pub fn reconstruct_path(
    predecessors: &FxHashMap<NodeId, NodeId>,
    start: NodeId,
    target: NodeId,
) -> Result<Vec<NodeId>> {
    let mut path = Vec::new();
    let mut current_node = target;

    while let Some(&parent_node) = predecessors.get(&current_node) {
        path.push(current_node);
        if path.len() > predecessors.len() {
            return Err(Error::CorruptState(format!(
                "predecessor chain from {target} never terminates"
            )));
        }
        current_node = parent_node;
    }

    if current_node != start {
        return Err(Error::CorruptState(format!(
            "predecessor chain from {target} ends at {current_node}, not at {start}"
        )));
    }

    path.push(start);
    path.reverse();
    Ok(path)
}
