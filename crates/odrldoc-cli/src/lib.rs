pub mod generate;
pub mod inputs;
pub mod list;
pub mod logging;

pub use generate::{generate, GenerateOptions};
pub use inputs::expand_inputs;
pub use list::{list, PolicySummary};
pub use logging::env_filter;
