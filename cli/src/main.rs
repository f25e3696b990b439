use castpath::app::{CastPathApp, QueryOutcome, run_interactive, run_query};
use castpath::colors::ColorScheme;
use castpath::display::display_graph_info;
use castpath::Args;
use castpath_core::CachedResolver;
use clap::Parser;
use std::{error::Error, io, process::ExitCode};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args);
    let colors = ColorScheme::new(!args.no_color && !args.json);

    match run(&args, &colors) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{}", colors.error(&format!("❌ Error: {}", error)));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(args: &Args) {
    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args, colors: &ColorScheme) -> Result<ExitCode, Box<dyn Error>> {
    let app = CastPathApp::new(args)?;
    let loaded = app.load_graph()?;

    if args.verbose && !args.json {
        display_graph_info(
            loaded.graph.node_count(),
            loaded.graph.edge_count(),
            &loaded.fingerprint,
            colors,
        );
    }

    let resolver = CachedResolver::new(&app.store);

    if args.interactive {
        run_interactive(io::stdin().lock(), &mut io::stderr(), &loaded.graph, &resolver, args, colors)?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(from_actor) = args.actor1.as_deref() else {
        return Err("a starting actor is required outside interactive mode".into());
    };

    match run_query(from_actor, &args.actor2, &loaded.graph, &resolver, args, colors)? {
        QueryOutcome::ActorNotFound => Ok(ExitCode::FAILURE),
        QueryOutcome::Connected | QueryOutcome::NoConnection => Ok(ExitCode::SUCCESS),
    }
}
