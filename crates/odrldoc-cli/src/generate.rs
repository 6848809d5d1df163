use anyhow::{Context, Result};
use odrldoc_graph::load_files;
use odrldoc_render::{FsPageWriter, GeneratorConfig, PageAssembler};
use std::path::{Path, PathBuf};

use crate::inputs::expand_inputs;

/// Resolved `generate` command arguments
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub inputs: Vec<String>,
    pub output_root: PathBuf,
    pub output_dir: Option<String>,
    pub config: Option<PathBuf>,
    pub base_iri: Option<String>,
    pub sort: bool,
}

/// Load the input graph and write one page per policy.
///
/// Returns the number of pages written.
pub fn generate(options: &GenerateOptions) -> Result<usize> {
    let config = resolve_config(options)?;
    let paths = expand_inputs(&options.inputs)?;

    let graph = load_files(&paths, config.base_iri.as_deref()).context("Failed to load input graph")?;

    let assembler = PageAssembler::from_config(&config);
    let mut writer = FsPageWriter::new(&options.output_root);
    let count = assembler
        .generate(&graph, &mut writer, Path::new(&config.output_dir))
        .context("Failed to write policy pages")?;

    Ok(count)
}

/// Config file (flag, then `ODRLDOC_CONFIG`), else environment defaults,
/// with command-line flags applied on top
fn resolve_config(options: &GenerateOptions) -> Result<GeneratorConfig> {
    let config_path = options
        .config
        .clone()
        .or_else(|| std::env::var("ODRLDOC_CONFIG").ok().map(PathBuf::from));

    let mut config = match config_path {
        Some(path) => {
            tracing::info!("Loading config from: {}", path.display());
            let path_str = path
                .to_str()
                .with_context(|| format!("Invalid config path: {}", path.display()))?;
            GeneratorConfig::from_file(path_str)?
        }
        None => GeneratorConfig::from_env(),
    };

    if let Some(output_dir) = &options.output_dir {
        config.output_dir = output_dir.clone();
    }
    if let Some(base_iri) = &options.base_iri {
        config.base_iri = Some(base_iri.clone());
    }
    if options.sort {
        config.sort_rows = true;
    }

    Ok(config)
}
