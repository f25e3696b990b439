use crate::graph::Graph;
use crate::node::NodeId;
use rustc_hash::FxHashMap;
use std::collections::VecDeque;

pub struct BfsState {
    queue: VecDeque<NodeId>,
    distances: FxHashMap<NodeId, u64>,
    pub predecessors: FxHashMap<NodeId, NodeId>,
}

impl BfsState {
    pub fn new(start: NodeId) -> Self {
        let mut queue = VecDeque::new();
        let mut distances = FxHashMap::default();

        queue.push_back(start);
        distances.insert(start, 0);

        Self {
            queue,
            distances,
            predecessors: FxHashMap::default(),
        }
    }

    pub fn discovered(&self) -> usize {
        self.distances.len()
    }

    // A node's distance is written once, on first discovery
    fn visit_neighbor(&mut self, neighbor: NodeId, current: NodeId, current_distance: u64) {
        if !self.distances.contains_key(&neighbor) {
            self.distances.insert(neighbor, current_distance + 1);
            self.predecessors.insert(neighbor, current);
            self.queue.push_back(neighbor);
        }
    }

    /// Runs until `target` is dequeued and returns its distance, or `None`
    /// once the frontier is exhausted.
    pub fn find_distance_to_target(&mut self, target: NodeId, graph: &Graph) -> Option<u64> {
        while let Some(current) = self.queue.pop_front() {
            let current_distance = self.distances[&current];
            if current == target {
                return Some(current_distance);
            }

            for &neighbor in graph.neighbors(current) {
                self.visit_neighbor(neighbor, current, current_distance);
            }
        }

        None
    }
}
