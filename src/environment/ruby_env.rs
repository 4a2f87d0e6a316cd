//! Cached ruby environment comparison.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::dist::BUILD_VERSION_KEY;
use crate::error::{Result, WrapperError};
use crate::manifest::Manifests;

/// The cached ruby environment document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RubyEnv {
    /// Workstation build the cache was written for.
    #[serde(default)]
    pub build_version: Option<String>,

    /// Everything else in the document.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl RubyEnv {
    /// Read and decode a ruby environment file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| WrapperError::EnvironmentRead {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|e| WrapperError::EnvironmentParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Check the cached build version against `version`, as plain string equality.
    pub fn matches(&self, version: &str) -> bool {
        self.build_version.as_deref() == Some(version)
    }
}

/// Location of the cached ruby environment: `~/.chef/ruby-env.json`.
pub fn ruby_env_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".chef").join("ruby-env.json"))
}

/// Compare the ruby environment at `path` with `workstation_version`.
///
/// An unreadable or malformed file is no match.
pub fn versions_match_at(path: &Path, workstation_version: &str) -> bool {
    match RubyEnv::from_path(path) {
        Ok(env) => {
            let matched = env.matches(workstation_version);
            tracing::debug!(
                "ruby-env build_version {:?} vs {}: {}",
                env.build_version,
                workstation_version,
                if matched { "match" } else { "mismatch" }
            );
            matched
        }
        Err(e) => {
            tracing::warn!("{}", e);
            false
        }
    }
}

/// Compare the user's cached ruby environment with the installed build version.
pub fn versions_match(manifests: &Manifests) -> bool {
    let workstation_version = manifests.component_version(BUILD_VERSION_KEY);
    match ruby_env_path() {
        Some(path) => versions_match_at(&path, &workstation_version),
        None => {
            tracing::warn!("No home directory; cannot locate ruby-env.json");
            false
        }
    }
}
