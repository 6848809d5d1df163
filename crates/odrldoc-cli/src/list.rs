use anyhow::{Context, Result};
use odrldoc_graph::vocab::{dcterms, odrl};
use odrldoc_graph::{load_files, GraphQuery, Term};
use odrldoc_render::{page_id, PolicyExtractor};
use serde::Serialize;

use crate::inputs::expand_inputs;

/// One line of `odrldoc list` output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicySummary {
    pub uid: String,
    pub page: String,
    pub title: Option<String>,
    pub permissions: usize,
    pub obligations: usize,
    pub prohibitions: usize,
}

impl PolicySummary {
    pub fn from_graph(graph: &dyn GraphQuery, policy: &Term) -> Self {
        let rules = PolicyExtractor::new().extract(graph, policy);
        PolicySummary {
            uid: policy.lexical().to_string(),
            page: format!("{}.adoc", page_id(graph, policy)),
            title: graph
                .value_of(policy, dcterms::TITLE)
                .map(|t| t.lexical().to_string()),
            permissions: rules.permissions.len(),
            obligations: rules.obligations.len(),
            prohibitions: rules.prohibitions.len(),
        }
    }
}

/// Summaries for every policy in the graph
pub fn summarize(graph: &dyn GraphQuery) -> Vec<PolicySummary> {
    graph
        .subjects_of_type(odrl::POLICY)
        .into_iter()
        .map(|policy| PolicySummary::from_graph(graph, policy))
        .collect()
}

/// Load the inputs and format a policy listing as `text` or `json`
pub fn list(inputs: &[String], base_iri: Option<&str>, format: &str) -> Result<String> {
    let paths = expand_inputs(inputs)?;
    let graph = load_files(&paths, base_iri).context("Failed to load input graph")?;
    let summaries = summarize(&graph);

    if format == "json" {
        Ok(serde_json::to_string_pretty(&summaries)?)
    } else {
        Ok(format_text(&summaries))
    }
}

fn format_text(summaries: &[PolicySummary]) -> String {
    if summaries.is_empty() {
        return "No policies found".to_string();
    }

    let mut out = String::new();
    for summary in summaries {
        out.push_str(&format!("=== {} ===\n", summary.title.as_deref().unwrap_or(&summary.uid)));
        out.push_str(&format!("UID: {}\n", summary.uid));
        out.push_str(&format!("Page: {}\n", summary.page));
        out.push_str(&format!(
            "Rules: {} permissions, {} obligations, {} prohibitions\n",
            summary.permissions, summary.obligations, summary.prohibitions
        ));
    }
    out
}
