use crate::error::{GradeError, Result};
use crate::types::config::GradingConfig;
use std::path::Path;

pub const DEFAULT_SCHEME_FILE: &str = "grading.toml";

/// Resolves the grading scheme for a run: an explicit path must exist; with
/// no explicit path, a `grading.toml` in the working directory wins, and
/// the built-in scheme is the fallback. The result is validated before use.
pub fn load_scheme(explicit: Option<&Path>) -> Result<GradingConfig> {
    let config = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(GradeError::Configuration(format!(
                    "grading scheme not found: {}",
                    path.display()
                )));
            }
            parse_scheme_file(path)?
        }
        None => {
            let default_path = Path::new(DEFAULT_SCHEME_FILE);
            if default_path.exists() {
                parse_scheme_file(default_path)?
            } else {
                GradingConfig::default_scheme()
            }
        }
    };
    config.validate()?;
    Ok(config)
}

fn parse_scheme_file(path: &Path) -> Result<GradingConfig> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| GradeError::Configuration(format!("{}: {}", path.display(), e)))
}
