use castpath_core::NodeKind;
use serde::{Deserialize, Serialize};

use crate::search::SearchResult;

#[derive(Serialize, Deserialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub result: JsonResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<JsonStats>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonQuery {
    pub from: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonResult {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<JsonStep>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStep {
    pub name: String,
    pub kind: NodeKind,
    pub id: i64,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStats {
    pub search_time_ms: u64,
    pub nodes_explored: usize,
}

pub fn create_json_output(result: &SearchResult, category: Option<String>) -> JsonOutput {
    let json_path = result.path.as_ref().map(|path| {
        path.iter()
            .map(|step| JsonStep {
                name: step.name.clone(),
                kind: step.node.kind(),
                id: step.node.raw(),
            })
            .collect()
    });

    JsonOutput {
        query: JsonQuery {
            from: result.from_name.clone(),
            to: result.to_name.clone(),
            category,
        },
        result: JsonResult {
            found: result.found(),
            distance: result.distance,
            path: json_path,
            error: None,
        },
        // Exploration counts are only tracked for successful searches
        stats: result.found().then(|| JsonStats {
            search_time_ms: (result.search_duration * 1000.0) as u64,
            nodes_explored: result.nodes_visited,
        }),
    }
}

/// Output for a query whose endpoint could not be resolved.
pub fn create_json_error(from: &str, to: &str, category: Option<String>, message: String) -> JsonOutput {
    JsonOutput {
        query: JsonQuery {
            from: from.to_string(),
            to: to.to_string(),
            category,
        },
        result: JsonResult {
            found: false,
            distance: None,
            path: None,
            error: Some(message),
        },
        stats: None,
    }
}
