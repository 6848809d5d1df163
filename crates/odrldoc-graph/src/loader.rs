//! Load Turtle and N-Triples files into a [`Graph`].

use crate::error::GraphError;
use crate::graph::Graph;
use crate::term::{Term, Triple};
use oxttl::{NTriplesParser, TurtleParser};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

/// Concrete RDF syntax of an input file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdfFormat {
    Turtle,
    NTriples,
}

impl RdfFormat {
    /// Pick the syntax from the file extension
    pub fn from_path(path: &Path) -> Result<Self, GraphError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("ttl") | Some("turtle") => Ok(RdfFormat::Turtle),
            Some("nt") => Ok(RdfFormat::NTriples),
            _ => Err(GraphError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Parse a single file into a fresh graph
pub fn load_file(path: &Path, base_iri: Option<&str>) -> Result<Graph, GraphError> {
    let mut graph = Graph::new();
    load_into(&mut graph, path, base_iri)?;
    Ok(graph)
}

/// Parse several files into one graph, in the order given
pub fn load_files<P: AsRef<Path>>(paths: &[P], base_iri: Option<&str>) -> Result<Graph, GraphError> {
    let mut graph = Graph::new();
    for path in paths {
        load_into(&mut graph, path.as_ref(), base_iri)?;
    }
    Ok(graph)
}

fn load_into(graph: &mut Graph, path: &Path, base_iri: Option<&str>) -> Result<(), GraphError> {
    let format = RdfFormat::from_path(path)?;
    let reader = BufReader::new(File::open(path)?);
    let before = graph.len();
    let mut blanks = BlankScope::default();

    match format {
        RdfFormat::Turtle => {
            let mut parser = TurtleParser::new();
            if let Some(base) = base_iri {
                parser = parser
                    .with_base_iri(base)
                    .map_err(|e| GraphError::InvalidBaseIri {
                        iri: base.to_string(),
                        message: e.to_string(),
                    })?;
            }
            for triple in parser.for_reader(reader) {
                let triple = triple.map_err(|e| parse_error(path, e))?;
                graph.add(convert_triple(path, triple, &mut blanks)?);
            }
        }
        RdfFormat::NTriples => {
            for triple in NTriplesParser::new().for_reader(reader) {
                let triple = triple.map_err(|e| parse_error(path, e))?;
                graph.add(convert_triple(path, triple, &mut blanks)?);
            }
        }
    }

    tracing::info!(
        "Loaded {} triples from {}",
        graph.len() - before,
        path.display()
    );
    Ok(())
}

fn parse_error(path: &Path, err: impl std::fmt::Display) -> GraphError {
    GraphError::Parse {
        path: PathBuf::from(path),
        message: err.to_string(),
    }
}

/// Blank node labels are local to one document. Each file gets its own
/// scope mapping document labels to fresh graph-wide labels.
#[derive(Default)]
struct BlankScope {
    labels: HashMap<String, String>,
}

impl BlankScope {
    fn term(&mut self, node: &oxrdf::BlankNode) -> Term {
        let label = self
            .labels
            .entry(node.as_str().to_string())
            .or_insert_with(|| oxrdf::BlankNode::default().into_string());
        Term::BlankNode(label.clone())
    }
}

fn convert_triple(
    path: &Path,
    triple: oxrdf::Triple,
    blanks: &mut BlankScope,
) -> Result<Triple, GraphError> {
    #[allow(unreachable_patterns)]
    let subject = match triple.subject {
        oxrdf::Subject::NamedNode(node) => Term::Iri(node.into_string()),
        oxrdf::Subject::BlankNode(node) => blanks.term(&node),
        _ => return Err(parse_error(path, "quoted triples are not supported")),
    };

    let object = convert_term(path, triple.object, blanks)?;
    Ok(Triple::new(subject, triple.predicate.into_string(), object))
}

fn convert_term(
    path: &Path,
    term: oxrdf::Term,
    blanks: &mut BlankScope,
) -> Result<Term, GraphError> {
    #[allow(unreachable_patterns)]
    let converted = match term {
        oxrdf::Term::NamedNode(node) => Term::Iri(node.into_string()),
        oxrdf::Term::BlankNode(node) => blanks.term(&node),
        oxrdf::Term::Literal(literal) => {
            let language = literal.language().map(|l| l.to_string());
            let datatype = literal.datatype().as_str();
            // Language-tagged and plain string literals carry no explicit datatype
            let datatype = if language.is_some() || datatype == XSD_STRING {
                None
            } else {
                Some(datatype.to_string())
            };
            Term::Literal {
                value: literal.value().to_string(),
                language,
                datatype,
            }
        }
        _ => return Err(parse_error(path, "quoted triples are not supported")),
    };
    Ok(converted)
}
