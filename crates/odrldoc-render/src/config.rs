use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{RenderError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Directory, relative to the output root, that receives the pages
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Sort rows by UID and assignees instead of keeping graph order
    #[serde(default)]
    pub sort_rows: bool,

    /// Base IRI for relative IRIs in Turtle input
    #[serde(default)]
    pub base_iri: Option<String>,
}

impl GeneratorConfig {
    /// Load config from a YAML file
    pub fn from_file(path: &str) -> Result<Self> {
        let path = Path::new(path);
        if !path.exists() {
            return Err(RenderError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| RenderError::Config(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| RenderError::Config(format!("Invalid YAML: {}", e)))
    }

    /// Load config from environment or defaults
    pub fn from_env() -> Self {
        GeneratorConfig {
            output_dir: std::env::var("ODRLDOC_OUTPUT_DIR").unwrap_or_else(|_| default_output_dir()),
            sort_rows: std::env::var("ODRLDOC_SORT_ROWS")
                .ok()
                .map(|v| v == "true")
                .unwrap_or(false),
            base_iri: std::env::var("ODRLDOC_BASE_IRI").ok(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn default_output_dir() -> String {
    "modules/policy/pages/".to_string()
}
