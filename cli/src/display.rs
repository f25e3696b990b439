use castpath_core::{NodeKind, StoreFingerprint};

use crate::colors::ColorScheme;
use crate::search::{PathStep, SearchRequest, SearchResult};
use crate::utils::format_number;

/// How much of a result to print
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayOptions {
    pub verbose: bool,
    pub quiet: bool,
    pub show_ids: bool,
}

pub fn not_found_message(name: &str, colors: &ColorScheme) -> String {
    format!(
        "{} {} {}",
        colors.error("❌ Actor"),
        colors.actor_name(&format!("\"{}\"", name)),
        colors.error("not found")
    )
}

pub fn no_connection_message(from_name: &str, to_name: &str, colors: &ColorScheme) -> String {
    format!(
        "{} {} and {}",
        colors.error("❌ No connection found between"),
        colors.actor_name(&format!("\"{}\"", from_name)),
        colors.actor_name(&format!("\"{}\"", to_name))
    )
}

pub fn display_graph_info(node_count: usize, edge_count: usize, fingerprint: &StoreFingerprint, colors: &ColorScheme) {
    println!(
        "{} Graph has {} nodes and {} credits ({} rows in store)",
        colors.stats("📊"),
        colors.number(&format_number(node_count)),
        colors.number(&format_number(edge_count)),
        colors.number(&format_number(fingerprint.participations as usize))
    );
}

pub fn display_search_info(request: &SearchRequest, colors: &ColorScheme) {
    println!(
        "🎬 Finding path from {} to {}",
        colors.actor_name(&format!("\"{}\"", request.from_name)),
        colors.actor_name(&format!("\"{}\"", request.to_name))
    );
    println!("🔍 Searching...");
}

pub fn display_search_results(result: &SearchResult, options: DisplayOptions, colors: &ColorScheme) {
    if options.verbose {
        println!("\n---\n");
    }

    match (&result.path, result.distance) {
        (Some(path), Some(distance)) => {
            display_successful_path(path, distance, options, colors);
            if options.verbose {
                display_search_statistics(result.nodes_visited, result.search_duration, colors);
            }
        }
        _ => {
            println!(
                "{}",
                no_connection_message(&result.from_name, &result.to_name, colors)
            );
        }
    }
}

fn display_successful_path(path: &[PathStep], distance: u64, options: DisplayOptions, colors: &ColorScheme) {
    if !options.quiet {
        println!(
            "{} Distance: {} ({} shared {})",
            colors.success("✅"),
            colors.number(&distance.to_string()),
            colors.number(&(distance / 2).to_string()),
            if distance / 2 == 1 { "film" } else { "films" }
        );
    }

    println!("{}", format_path_flow(path, colors));

    if !options.quiet {
        println!();
        for (step_index, step) in path.iter().enumerate() {
            println!("{}", format_path_step(step_index, step, options.show_ids, colors));
        }
    }
}

pub fn format_step_name(step: &PathStep, colors: &ColorScheme) -> String {
    match step.node.kind() {
        NodeKind::Person => colors.actor_name(&format!("\"{}\"", step.name)).to_string(),
        NodeKind::Work => colors.work_title(&step.name).to_string(),
    }
}

/// One-line view of the whole route: `"A" → Film → "B"`.
pub fn format_path_flow(path: &[PathStep], colors: &ColorScheme) -> String {
    path.iter()
        .map(|step| format_step_name(step, colors))
        .collect::<Vec<_>>()
        .join(" → ")
}

pub fn format_path_step(step_index: usize, step: &PathStep, show_ids: bool, colors: &ColorScheme) -> String {
    let step_number = format!("{}.", step_index + 1);
    let role = match step.node.kind() {
        NodeKind::Person => "actor",
        NodeKind::Work => "film",
    };

    let mut formatted_line = format!(
        "{:3} {} ({})",
        colors.step_number(&step_number),
        format_step_name(step, colors),
        role
    );

    if show_ids {
        formatted_line.push_str(&format!(" {}", colors.identifier(&format!("[{}]", step.node))));
    }

    formatted_line
}

fn display_search_statistics(nodes_visited: usize, search_duration: f64, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} Explored {} nodes in {} sec",
        colors.stats("📊"),
        colors.number(&format_number(nodes_visited)),
        colors.number(&format!("{:.3}", search_duration))
    );
}
