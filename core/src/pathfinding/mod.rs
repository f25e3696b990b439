pub mod bfs;
pub mod utils;

pub use bfs::{ShortestPath, shortest_path};
pub use utils::reconstruct_path;
