use castpath_core::{
    Graph, IdentityResolver, NodeId, PersonId, name_nodes, reconstruct_path, shortest_path,
};
use std::time::Instant;
use thiserror::Error;

pub struct SearchRequest {
    pub from_actor: PersonId,
    pub to_actor: PersonId,
    pub from_name: String,
    pub to_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PathStep {
    pub node: NodeId,
    pub name: String,
}

pub struct SearchResult {
    pub path: Option<Vec<PathStep>>,
    pub distance: Option<u64>,
    pub nodes_visited: usize,
    pub search_duration: f64,
    pub from_name: String,
    pub to_name: String,
}

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Actor \"{0}\" not found")]
    ActorNotFound(String),

    #[error(transparent)]
    Core(#[from] castpath_core::Error),
}

impl SearchResult {
    pub fn found(&self) -> bool {
        self.path.is_some()
    }
}

fn resolve_actor<R: IdentityResolver + ?Sized>(
    query: &str,
    resolver: &R,
) -> Result<(PersonId, String), RequestError> {
    let id = resolver
        .resolve_person(query)?
        .ok_or_else(|| RequestError::ActorNotFound(query.trim().to_string()))?;
    let name = resolver.person_name(id)?;
    Ok((id, name))
}

/// Resolves both endpoints; the display names are the store's spelling.
pub fn create_search_request<R: IdentityResolver + ?Sized>(
    from_query: &str,
    to_query: &str,
    resolver: &R,
) -> Result<SearchRequest, RequestError> {
    let (from_actor, from_name) = resolve_actor(from_query, resolver)?;
    let (to_actor, to_name) = resolve_actor(to_query, resolver)?;

    Ok(SearchRequest {
        from_actor,
        to_actor,
        from_name,
        to_name,
    })
}

pub fn execute_search<R: IdentityResolver + ?Sized>(
    request: SearchRequest,
    graph: &Graph,
    resolver: &R,
) -> castpath_core::Result<SearchResult> {
    let search_timer = Instant::now();
    let source = NodeId::from(request.from_actor);
    let dest = NodeId::from(request.to_actor);

    let found = shortest_path(graph, source, dest);
    let search_duration = search_timer.elapsed().as_secs_f64();

    let (path, distance, nodes_visited) = match found {
        Some(found) => {
            let nodes = reconstruct_path(&found.predecessors, source, dest)?;
            let names = name_nodes(&nodes, resolver)?;
            let steps = nodes
                .into_iter()
                .zip(names)
                .map(|(node, name)| PathStep { node, name })
                .collect();
            (Some(steps), Some(found.distance), found.nodes_visited)
        }
        None => (None, None, 0),
    };

    Ok(SearchResult {
        path,
        distance,
        nodes_visited,
        search_duration,
        from_name: request.from_name,
        to_name: request.to_name,
    })
}
