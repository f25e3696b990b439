pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod json_output;
pub mod search;
pub mod utils;

// Re-export commonly used items
pub use args::Args;
pub use search::{PathStep, SearchRequest, SearchResult, create_search_request, execute_search};
pub use utils::format_number;
