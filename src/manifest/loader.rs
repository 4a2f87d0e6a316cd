//! Manifest file loading.
//!
//! Both manifests are required once an install is known to be packaged;
//! a missing or malformed file is reported as a fatal error.

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use crate::error::{Result, WrapperError};

use super::schema::{GemVersionManifest, VersionManifest};

/// File name of the gem version manifest in the install root.
pub const GEM_MANIFEST_FILE: &str = "gem-version-manifest.json";

/// File name of the general version manifest in the install root.
pub const VERSION_MANIFEST_FILE: &str = "version-manifest.json";

/// Load `gem-version-manifest.json` from an install root.
pub fn load_gem_manifest(root: &Path) -> Result<GemVersionManifest> {
    load_manifest_file(&root.join(GEM_MANIFEST_FILE))
}

/// Load `version-manifest.json` from an install root.
pub fn load_version_manifest(root: &Path) -> Result<VersionManifest> {
    load_manifest_file(&root.join(VERSION_MANIFEST_FILE))
}

/// Read and decode a single manifest file.
pub fn load_manifest_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|source| WrapperError::ManifestRead {
        path: path.to_path_buf(),
        source,
    })?;

    parse_manifest(&content, path)
}

/// Parse JSON content into a manifest document.
///
/// # Arguments
///
/// * `content` - The JSON content to parse
/// * `source_path` - Path for error reporting
pub fn parse_manifest<T: DeserializeOwned>(content: &str, source_path: &Path) -> Result<T> {
    serde_json::from_str(content).map_err(|e| WrapperError::ManifestParse {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
