use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Parse error in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Invalid base IRI '{iri}': {message}")]
    InvalidBaseIri { iri: String, message: String },

    #[error("Unsupported RDF format: {0}")]
    UnsupportedFormat(String),
}
