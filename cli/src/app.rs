use std::{
    error::Error,
    io::{BufRead, Write},
    path::PathBuf,
    time::Duration,
};

use castpath_core::{Graph, IdentityResolver, SqliteStore, StoreConfig, StoreFingerprint, snapshot};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::args::Args;
use crate::colors::ColorScheme;
use crate::display::{self, DisplayOptions};
use crate::json_output::{create_json_error, create_json_output};
use crate::search::{RequestError, create_search_request, execute_search};

const DATABASE_ENV: &str = "CASTPATH_DATABASE";
const DEFAULT_DATABASE: &str = "imdb.db";

/// How a single query ended, from the user's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOutcome {
    Connected,
    NoConnection,
    ActorNotFound,
}

pub struct CastPathApp {
    pub store: SqliteStore,
    pub snapshot_path: Option<PathBuf>,
    pub rebuild: bool,
    pub show_progress: bool,
}

pub struct LoadedGraph {
    pub graph: Graph,
    pub fingerprint: StoreFingerprint,
    pub from_snapshot: bool,
}

impl CastPathApp {
    pub fn new(args: &Args) -> Result<Self, Box<dyn Error>> {
        let database_path = args.database.clone().unwrap_or_else(default_database_path);
        if !database_path.exists() {
            return Err(format!("Database not found: {:?}", database_path).into());
        }

        let config = StoreConfig::default().with_category(args.category_filter());
        let store = SqliteStore::new(database_path, config)?;

        let snapshot_path = if args.no_snapshot {
            None
        } else {
            args.snapshot.clone().or_else(default_snapshot_path)
        };

        Ok(Self {
            store,
            snapshot_path,
            rebuild: args.rebuild,
            show_progress: !(args.quiet || args.json),
        })
    }

    /// Loads the snapshot when it matches the store, otherwise builds the
    /// graph and refreshes the snapshot.
    pub fn load_graph(&self) -> castpath_core::Result<LoadedGraph> {
        self.store.check_available()?;
        let fingerprint = self.store.fingerprint()?;

        if let Some(graph) = self.try_load_snapshot(fingerprint) {
            return Ok(LoadedGraph {
                graph,
                fingerprint,
                from_snapshot: true,
            });
        }

        let graph = self.build_with_progress()?;

        if let Some(path) = &self.snapshot_path {
            if let Err(error) = snapshot::save(path, &graph, fingerprint) {
                warn!(path = %path.display(), %error, "could not save graph snapshot");
            }
        }

        Ok(LoadedGraph {
            graph,
            fingerprint,
            from_snapshot: false,
        })
    }

    fn try_load_snapshot(&self, fingerprint: StoreFingerprint) -> Option<Graph> {
        let path = self.snapshot_path.as_ref()?;
        if self.rebuild {
            info!("rebuild requested, ignoring snapshot");
            return None;
        }

        match snapshot::read_fingerprint(path) {
            Ok(Some(saved)) if saved == fingerprint => match snapshot::load(path) {
                Ok(loaded) => Some(loaded.graph),
                Err(error) => {
                    warn!(path = %path.display(), %error, "snapshot unreadable, rebuilding");
                    None
                }
            },
            Ok(Some(saved)) => {
                warn!(
                    path = %path.display(),
                    ?saved,
                    current = ?fingerprint,
                    "snapshot is stale, rebuilding"
                );
                None
            }
            Ok(None) => {
                info!(path = %path.display(), "no snapshot yet");
                None
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "snapshot unreadable, rebuilding");
                None
            }
        }
    }

    fn build_with_progress(&self) -> castpath_core::Result<Graph> {
        let spinner = if self.show_progress {
            let spinner = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}") {
                spinner.set_style(style);
            }
            spinner.enable_steady_tick(Duration::from_millis(100));
            spinner
        } else {
            ProgressBar::hidden()
        };

        spinner.set_message("Building collaboration graph from store...");
        let graph = Graph::build(&self.store);
        spinner.finish_and_clear();
        graph
    }
}

/// Runs one query and prints the outcome.
pub fn run_query<R: IdentityResolver + ?Sized>(
    from_query: &str,
    to_query: &str,
    graph: &Graph,
    resolver: &R,
    args: &Args,
    colors: &ColorScheme,
) -> castpath_core::Result<QueryOutcome> {
    let request = match create_search_request(from_query, to_query, resolver) {
        Ok(request) => request,
        Err(RequestError::ActorNotFound(name)) => {
            if args.json {
                let message = RequestError::ActorNotFound(name).to_string();
                let output = create_json_error(from_query, to_query, args.category_filter(), message);
                print_json(&output);
            } else {
                eprintln!("{}", display::not_found_message(&name, colors));
            }
            return Ok(QueryOutcome::ActorNotFound);
        }
        Err(RequestError::Core(error)) => return Err(error),
    };

    if args.verbose && !args.json {
        display::display_search_info(&request, colors);
    }

    let result = execute_search(request, graph, resolver)?;
    let outcome = if result.found() {
        QueryOutcome::Connected
    } else {
        QueryOutcome::NoConnection
    };

    if args.json {
        print_json(&create_json_output(&result, args.category_filter()));
    } else {
        let options = DisplayOptions {
            verbose: args.verbose,
            quiet: args.quiet,
            show_ids: args.show_ids,
        };
        display::display_search_results(&result, options, colors);
    }

    Ok(outcome)
}

/// Prompts for starting actors until an empty line or end of input, always
/// searching towards `args.actor2`. Prompts go to `prompt_out` and are
/// suppressed under `--json`.
pub fn run_interactive<B: BufRead, W: Write, R: IdentityResolver + ?Sized>(
    input: B,
    prompt_out: &mut W,
    graph: &Graph,
    resolver: &R,
    args: &Args,
    colors: &ColorScheme,
) -> castpath_core::Result<usize> {
    let mut queries = 0;

    if let Some(first) = &args.actor1 {
        run_query(first, &args.actor2, graph, resolver, args, colors)?;
        queries += 1;
    }

    let mut lines = input.lines();
    loop {
        if !args.json {
            write!(prompt_out, "Enter the name of the starting actor (empty to quit): ")?;
            prompt_out.flush()?;
        }

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let name = line.trim();
        if name.is_empty() {
            break;
        }

        run_query(name, &args.actor2, graph, resolver, args, colors)?;
        queries += 1;
        if !args.json {
            writeln!(prompt_out)?;
        }
    }

    Ok(queries)
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(error) => warn!(%error, "could not serialize JSON output"),
    }
}

fn default_database_path() -> PathBuf {
    std::env::var(DATABASE_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATABASE))
}

fn default_snapshot_path() -> Option<PathBuf> {
    match dirs::home_dir() {
        Some(home) => Some(home.join(".castpath").join("graph.snapshot")),
        None => {
            warn!("could not find home directory, snapshot disabled");
            None
        }
    }
}
