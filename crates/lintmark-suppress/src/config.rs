//! Project configuration for suppression targets.
//!
//! A project can add finders for its own rules, or override builtin ones,
//! in a `.lintmark.json` file:
//!
//! ```json
//! {
//!   "targetFinders": {
//!     "custom:annotation-spacing": { "strategy": "climb-to", "target": "class-declaration" },
//!     "standard:function-signature": { "strategy": "default" }
//!   }
//! }
//! ```

use lintmark_common::RuleId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::finder::TargetFinder;
use crate::registry::TargetFinderRegistry;

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".lintmark.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuppressionConfig {
    /// Extra or overriding rule entries, applied on top of the builtins.
    #[serde(default)]
    pub target_finders: BTreeMap<RuleId, TargetFinder>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl SuppressionConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the nearest `.lintmark.json` in `start_dir` or its parents.
    ///
    /// The first file found wins. A file that cannot be read or parsed is
    /// logged and yields `None`; the search does not continue past it.
    /// A relative `start_dir` is resolved against the current directory,
    /// so the walk reaches above it.
    pub fn find_and_load(start_dir: &Path) -> Option<Self> {
        let mut current = match std::path::absolute(start_dir) {
            Ok(path) => path,
            Err(err) => {
                tracing::debug!(error = %err, "cannot resolve config search directory");
                return None;
            }
        };

        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.is_file() {
                return match Self::load(&config_path) {
                    Ok(config) => Some(config),
                    Err(err) => {
                        tracing::debug!(error = %err, "ignoring suppression config");
                        None
                    }
                };
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Builtin entries with this configuration applied on top.
    pub fn build_registry(&self) -> TargetFinderRegistry {
        self.target_finders
            .iter()
            .fold(TargetFinderRegistry::builtin(), |registry, (rule, &finder)| {
                tracing::debug!(rule = %rule, %finder, "suppression target override");
                registry.with_entry(rule.clone(), finder)
            })
    }
}
