use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_TARGET: &str = "Kevin Bacon";

#[derive(Parser, Debug, Clone)]
#[command(name = "castpath")]
#[command(version, about = "Find the shortest chain of shared films between two actors")]
pub struct Args {
    /// Starting actor name (prompted for in interactive mode)
    #[arg(required_unless_present = "interactive")]
    pub actor1: Option<String>,

    /// Target actor name
    #[arg(default_value = DEFAULT_TARGET)]
    pub actor2: String,

    /// SQLite database with the ingested tables [default: $CASTPATH_DATABASE or imdb.db]
    #[arg(short, long, value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// Graph snapshot file [default: ~/.castpath/graph.snapshot]
    #[arg(long, value_name = "PATH")]
    pub snapshot: Option<PathBuf>,

    /// Rebuild the graph from the database even if a fresh snapshot exists
    #[arg(long)]
    pub rebuild: bool,

    /// Never read or write a graph snapshot
    #[arg(long, conflicts_with = "rebuild")]
    pub no_snapshot: bool,

    /// Participation role that links actors to films
    #[arg(short, long, value_name = "ROLE", default_value = "actor")]
    pub category: String,

    /// Link people through every participation role
    #[arg(long, conflicts_with = "category")]
    pub all_roles: bool,

    /// Keep prompting for starting actors, reusing the loaded graph
    #[arg(short, long)]
    pub interactive: bool,

    /// Show store identifiers next to names
    #[arg(long)]
    pub show_ids: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show search info and statistics
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only show the path flow
    #[arg(short, long)]
    pub quiet: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Role filter for the participation query
    pub fn category_filter(&self) -> Option<String> {
        (!self.all_roles).then(|| self.category.clone())
    }
}
