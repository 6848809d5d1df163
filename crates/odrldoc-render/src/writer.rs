use crate::error::Result;
use odrldoc_graph::vocab::dcterms;
use odrldoc_graph::{GraphQuery, Term};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const PAGE_EXTENSION: &str = "adoc";

/// Destination for rendered policy pages
pub trait PageWriter {
    /// Persist `adoc` for `resource` under `output_dir`, returning where it went
    fn write_page(
        &mut self,
        adoc: &str,
        resource: &Term,
        output_dir: &Path,
        graph: &dyn GraphQuery,
    ) -> Result<PathBuf>;
}

/// Writes pages to `<root>/<output_dir>/<page id>.adoc`
pub struct FsPageWriter {
    root: PathBuf,
}

impl FsPageWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn page_path(&self, resource: &Term, output_dir: &Path, graph: &dyn GraphQuery) -> PathBuf {
        self.root
            .join(output_dir)
            .join(format!("{}.{}", page_id(graph, resource), PAGE_EXTENSION))
    }
}

impl PageWriter for FsPageWriter {
    fn write_page(
        &mut self,
        adoc: &str,
        resource: &Term,
        output_dir: &Path,
        graph: &dyn GraphQuery,
    ) -> Result<PathBuf> {
        let path = self.page_path(resource, output_dir, graph);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, adoc)?;

        tracing::debug!("Wrote {} ({} bytes)", path.display(), adoc.len());
        Ok(path)
    }
}

/// File stem for a resource's page.
///
/// Uses `dcterms:identifier` when the graph has one, otherwise the local
/// name of the IRI, slugged to lowercase ASCII words joined by `-`.
pub fn page_id(graph: &dyn GraphQuery, resource: &Term) -> String {
    let raw = match graph.value_of(resource, dcterms::IDENTIFIER) {
        Some(identifier) => identifier.lexical(),
        None => local_name(resource),
    };

    let slug = slugify(raw);
    if slug.is_empty() {
        "policy".to_string()
    } else {
        slug
    }
}

fn local_name(resource: &Term) -> &str {
    let lexical = resource.lexical();
    if !resource.is_iri() {
        return lexical;
    }

    let trimmed = lexical.trim_end_matches(&['/', '#'][..]);
    trimmed
        .rsplit_once('#')
        .or_else(|| trimmed.rsplit_once('/'))
        .or_else(|| trimmed.rsplit_once(':'))
        .map(|(_, name)| name)
        .unwrap_or(trimmed)
}

fn slugify(text: &str) -> String {
    static NON_SLUG: OnceLock<Regex> = OnceLock::new();
    let pattern = NON_SLUG.get_or_init(|| Regex::new("[^a-z0-9]+").expect("valid slug pattern"));

    pattern
        .replace_all(&text.to_lowercase(), "-")
        .trim_matches('-')
        .to_string()
}
