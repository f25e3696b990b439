pub mod error;
pub mod graph;
pub mod node;
pub mod pathfinding;
pub mod report;
pub mod resolver;
pub mod snapshot;
pub mod store;
pub mod store_config;
pub mod string_normalization;

// Re-export commonly used items
pub use error::{Error, Result};
pub use graph::{Graph, ParticipationSource};
pub use node::{NodeId, NodeKind, Participation, PersonId, WorkId};
pub use pathfinding::{ShortestPath, reconstruct_path, shortest_path};
pub use report::{name_nodes, render_path};
pub use resolver::{CachedResolver, IdentityResolver};
pub use snapshot::{Snapshot, StoreFingerprint};
pub use store::SqliteStore;
pub use store_config::{ParticipationSpec, StoreConfig, TableSpec};
