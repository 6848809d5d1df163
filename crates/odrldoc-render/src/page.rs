use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::extractor::{literal_or_empty, PolicyExtractor};
use crate::table::TableRenderer;
use crate::writer::PageWriter;
use odrldoc_graph::vocab::{dcterms, odrl};
use odrldoc_graph::{GraphQuery, Term};
use std::path::Path;

/// Turns every `odrl:Policy` in a graph into one AsciiDoc page
pub struct PageAssembler {
    extractor: PolicyExtractor,
}

impl PageAssembler {
    pub fn new(extractor: PolicyExtractor) -> Self {
        Self { extractor }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(PolicyExtractor::with_sort_rows(config.sort_rows))
    }

    /// Build the page body for a single policy
    pub fn build_page(&self, graph: &dyn GraphQuery, policy: &Term) -> String {
        let title = graph
            .value_of(policy, dcterms::TITLE)
            .map(Term::lexical)
            .unwrap_or_else(|| policy.lexical());
        let description = literal_or_empty(graph, policy, dcterms::DESCRIPTION);

        let mut adoc = format!("= {}\n\n", title);
        if !description.is_empty() {
            adoc.push_str(&description);
            adoc.push_str("\n\n");
        }

        let rules = self.extractor.extract(graph, policy);
        adoc.push_str(&TableRenderer::render("Permissions", &rules.permissions));
        adoc.push_str(&TableRenderer::render("Obligations", &rules.obligations));
        adoc.push_str(&TableRenderer::render("Prohibitions", &rules.prohibitions));
        adoc
    }

    /// Write one page per policy through `writer`, returning the page count.
    ///
    /// A graph without policies is not an error: nothing is written and
    /// nothing is logged.
    pub fn generate(
        &self,
        graph: &dyn GraphQuery,
        writer: &mut dyn PageWriter,
        output_dir: &Path,
    ) -> Result<usize> {
        let policies = graph.subjects_of_type(odrl::POLICY);
        if policies.is_empty() {
            return Ok(0);
        }

        for policy in &policies {
            tracing::debug!("Rendering policy {}", policy);
            let adoc = self.build_page(graph, policy);
            writer.write_page(&adoc, policy, output_dir, graph)?;
        }

        Ok(policies.len())
    }
}

impl Default for PageAssembler {
    fn default() -> Self {
        Self::new(PolicyExtractor::new())
    }
}
