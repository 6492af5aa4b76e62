//! Configuration loading for slot rules
//!
//! Rules live in a single TOML file, one `[[slot]]` table per rule. The
//! default location is `<config dir>/stow/rules.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::rules::RuleSet;

/// File name of the rule set inside the config directory
pub const RULES_FILE_NAME: &str = "rules.toml";

/// Load a rule set from a TOML file
pub fn load_rules(path: &Path) -> Result<RuleSet, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let rules = RuleSet::from_toml_str(&contents).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;

    for idx in rules.inert_indices() {
        tracing::debug!("[CONFIG] Rule #{} in {:?} has no trigger enabled", idx, path);
    }

    tracing::info!("[CONFIG] Loaded {} slot rules from {:?}", rules.len(), path);
    Ok(rules)
}

/// Load a rule set, treating a missing file as an empty rule set.
///
/// Other I/O and parse failures are still reported.
pub fn load_rules_or_default(path: &Path) -> Result<RuleSet, ConfigError> {
    if !path.exists() {
        tracing::info!("[CONFIG] No rule file at {:?}, nothing will be registered", path);
        return Ok(RuleSet::default());
    }
    load_rules(path)
}

/// Save a rule set to a TOML file
pub fn save_rules(path: &Path, rules: &RuleSet) -> Result<(), ConfigError> {
    let contents = toml::to_string_pretty(rules).map_err(|e| ConfigError::Serialize {
        path: path.to_path_buf(),
        source: e,
    })?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    fs::write(path, contents).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

/// Get the default rule file path
pub fn default_rules_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("stow").join(RULES_FILE_NAME))
}

/// Errors that can occur during config loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error for {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Parse error in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Serialize error for {path:?}: {source}")]
    Serialize {
        path: PathBuf,
        source: toml::ser::Error,
    },
}
