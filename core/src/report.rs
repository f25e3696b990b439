use crate::error::Result;
use crate::node::NodeId;
use crate::pathfinding::reconstruct_path;
use crate::resolver::IdentityResolver;
use rustc_hash::FxHashMap;

/// Display name for every node on `path`, dispatched on person vs. work.
pub fn name_nodes<R: IdentityResolver + ?Sized>(path: &[NodeId], resolver: &R) -> Result<Vec<String>> {
    path.iter().map(|&node| resolver.node_name(node)).collect()
}

/// The route from `source` to `dest` as display names, source first.
pub fn render_path<R: IdentityResolver + ?Sized>(
    predecessors: &FxHashMap<NodeId, NodeId>,
    source: NodeId,
    dest: NodeId,
    resolver: &R,
) -> Result<Vec<String>> {
    let path = reconstruct_path(predecessors, source, dest)?;
    name_nodes(&path, resolver)
}
