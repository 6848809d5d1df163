pub mod error;
pub mod graph;
pub mod loader;
pub mod term;
pub mod vocab;

pub use error::GraphError;
pub use graph::{Graph, GraphQuery};
pub use loader::{load_file, load_files, RdfFormat};
pub use term::{Term, Triple};
