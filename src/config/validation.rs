//! Configuration semantic validation.
//!
//! Checks values that parse fine but cannot be used.

use crate::config::Config;
use crate::{CharsetGuardError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if an extension is empty or malformed, or an exclude
/// pattern is not a valid glob.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_extensions(config)?;
    validate_glob_patterns(config)?;
    Ok(())
}

fn validate_extensions(config: &Config) -> Result<()> {
    if config.scanner.extensions.is_empty() {
        return Err(CharsetGuardError::Config(
            "scanner.extensions must not be empty".to_string(),
        ));
    }

    for (i, ext) in config.scanner.extensions.iter().enumerate() {
        if ext.is_empty() || ext.starts_with('.') || ext.chars().any(char::is_whitespace) {
            return Err(CharsetGuardError::Config(format!(
                "scanner.extensions[{i}] '{ext}' must be a bare extension such as \"c\""
            )));
        }
    }
    Ok(())
}

fn validate_glob_patterns(config: &Config) -> Result<()> {
    for pattern in &config.scanner.exclude {
        globset::Glob::new(pattern).map_err(|e| CharsetGuardError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
