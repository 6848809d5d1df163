use anyhow::{anyhow, bail, Context, Result};
use std::path::PathBuf;

const GLOB_CHARS: &[char] = &['*', '?', '['];

/// Expand input arguments into concrete file paths.
///
/// Arguments containing glob metacharacters are expanded (sorted, as the
/// `glob` crate yields them); a pattern that matches nothing is an error.
/// Plain paths pass through untouched.
pub fn expand_inputs(inputs: &[String]) -> Result<Vec<PathBuf>> {
    if inputs.is_empty() {
        bail!("At least one --input is required");
    }

    let mut paths = Vec::new();
    for input in inputs {
        if !input.contains(GLOB_CHARS) {
            paths.push(PathBuf::from(input));
            continue;
        }

        let mut matched = 0;
        for entry in glob::glob(input).with_context(|| format!("Invalid glob pattern '{}'", input))? {
            let path = entry.map_err(|e| anyhow!("Failed to read '{}': {}", input, e))?;
            if path.is_file() {
                paths.push(path);
                matched += 1;
            }
        }

        if matched == 0 {
            bail!("No input files match '{}'", input);
        }
    }

    Ok(paths)
}
