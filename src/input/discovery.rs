use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::debug;
use walkdir::WalkDir;

use crate::config::ScannerConfig;
use crate::error::{CharsetGuardError, Result};

use super::InputSource;

/// Path argument that stands for standard input.
const STDIN_ARG: &str = "-";

/// Extension and exclude filter applied while walking directories.
struct GlobFilter {
    extensions: Vec<String>,
    exclude_patterns: GlobSet,
}

impl GlobFilter {
    /// Create a new filter with the given extensions and exclude patterns.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    fn new(extensions: Vec<String>, exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| CharsetGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns =
            builder
                .build()
                .map_err(|e| CharsetGuardError::InvalidPattern {
                    pattern: "combined patterns".to_string(),
                    source: e,
                })?;

        Ok(Self {
            extensions,
            exclude_patterns,
        })
    }

    fn has_valid_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }

    /// `relative` is the path below the walked root.
    fn is_excluded(&self, path: &Path, relative: &Path) -> bool {
        self.exclude_patterns.is_match(relative) || self.exclude_patterns.is_match(path)
    }
}

/// Resolves command line paths into inputs.
///
/// No paths (or `-`) means standard input. Files are taken as given;
/// directories are walked and filtered by `config`. Walked files are
/// sorted so output order is stable.
///
/// # Errors
/// Returns an error if a path does not exist, a directory cannot be walked,
/// or an exclude pattern is invalid.
pub fn discover_inputs(paths: &[PathBuf], config: &ScannerConfig) -> Result<Vec<InputSource>> {
    if paths.is_empty() {
        return Ok(vec![InputSource::Stdin]);
    }

    let filter = GlobFilter::new(config.extensions.clone(), &config.exclude)?;
    let mut inputs = Vec::new();

    for path in paths {
        if path.as_os_str() == STDIN_ARG {
            // stdin can only be consumed once
            if !inputs.contains(&InputSource::Stdin) {
                inputs.push(InputSource::Stdin);
            }
        } else if path.is_dir() {
            let found = walk_directory(path, &filter)?;
            debug!(root = %path.display(), files = found.len(), "walked directory");
            inputs.extend(found.into_iter().map(InputSource::File));
        } else if path.exists() {
            inputs.push(InputSource::File(path.clone()));
        } else {
            return Err(CharsetGuardError::InputNotFound(path.clone()));
        }
    }

    Ok(inputs)
}

fn walk_directory(root: &Path, filter: &GlobFilter) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let walker = WalkDir::new(root).sort_by_file_name().into_iter();

    for entry in walker.filter_entry(|e| {
        let relative = e.path().strip_prefix(root).unwrap_or(e.path());
        e.depth() == 0 || !filter.is_excluded(e.path(), relative)
    }) {
        let entry = entry?;
        if entry.file_type().is_file() && filter.has_valid_extension(entry.path()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
