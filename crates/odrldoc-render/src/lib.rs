pub mod config;
pub mod error;
pub mod extractor;
pub mod page;
pub mod table;
pub mod writer;

pub use config::GeneratorConfig;
pub use error::RenderError;
pub use extractor::{PolicyExtractor, RuleSet, TableRow};
pub use page::PageAssembler;
pub use table::TableRenderer;
pub use writer::{page_id, FsPageWriter, PageWriter};
