//! File pattern resolution using glob

use super::InputSource;
use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;

/// Pattern that stands for standard input
pub const STDIN_PATTERN: &str = "-";

/// Resolve file patterns to inputs
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<InputSource>> {
    let mut inputs = Vec::new();

    for pattern in patterns {
        if pattern == STDIN_PATTERN {
            inputs.push(InputSource::Stdin);
            continue;
        }

        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;
        let before = inputs.len();

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                inputs.push(InputSource::File(path));
            }
        }

        if inputs.len() == before {
            log::warn!("No files matched pattern: {pattern}");
        }
    }

    if inputs.is_empty() {
        return Err(CliError::FileNotFound(patterns.join(", ")).into());
    }

    // Remove duplicates and sort
    inputs.sort();
    inputs.dedup();

    Ok(inputs)
}
