use crate::error::Result;
use crate::node::{NodeId, Participation};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::info;

/// Anything that can stream the participation relation in one pass.
pub trait ParticipationSource {
    fn for_each_participation(&self, visit: &mut dyn FnMut(Participation)) -> Result<()>;
}

/// Undirected person/work adjacency. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    adjacency: FxHashMap<NodeId, Vec<NodeId>>,
}

impl Graph {
    /// Scans `source` once and links every person to every work they appear in.
    pub fn build<S: ParticipationSource + ?Sized>(source: &S) -> Result<Self> {
        let build_timer = Instant::now();
        info!("building collaboration graph");

        let mut graph = Graph::default();
        source.for_each_participation(&mut |participation| graph.link(participation))?;

        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            elapsed_ms = build_timer.elapsed().as_millis() as u64,
            "graph build complete"
        );
        Ok(graph)
    }

    pub fn from_participations<I>(participations: I) -> Self
    where
        I: IntoIterator<Item = Participation>,
    {
        let mut graph = Graph::default();
        for participation in participations {
            graph.link(participation);
        }
        graph
    }

    // Duplicates are kept as parallel edges; they never change a hop count.
    fn link(&mut self, participation: Participation) {
        let person = NodeId::Person(participation.person);
        let work = NodeId::Work(participation.work);

        self.adjacency.entry(person).or_default().push(work);
        self.adjacency.entry(work).or_default().push(person);
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        self.adjacency.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Undirected edges, counting parallel edges separately.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    pub fn person_count(&self) -> usize {
        self.adjacency
            .keys()
            .filter(|node| matches!(node, NodeId::Person(_)))
            .count()
    }

    pub fn work_count(&self) -> usize {
        self.node_count() - self.person_count()
    }
}
