//! Component version lookup.
//!
//! Lookup order, first hit wins:
//!
//! 1. Gem manifest: first element of a non-empty version list
//! 2. Version manifest: a plain string at the top level
//! 3. Version manifest: `software.<key>.locked_version`
//!
//! A value of the wrong shape counts as a miss for its tier. If every tier
//! misses the version is [`UNKNOWN_VERSION`].

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;

use super::loader::{load_gem_manifest, load_version_manifest};
use super::schema::{GemVersionManifest, VersionManifest};

/// Version reported when no manifest knows a component.
pub const UNKNOWN_VERSION: &str = "unknown";

/// Where a resolved version came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionSource {
    /// `gem-version-manifest.json`.
    GemManifest,
    /// A top-level string in `version-manifest.json`.
    VersionManifest,
    /// `software.<key>.locked_version` in `version-manifest.json`.
    LockedSoftware,
}

impl fmt::Display for VersionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GemManifest => write!(f, "gem manifest"),
            Self::VersionManifest => write!(f, "version manifest"),
            Self::LockedSoftware => write!(f, "locked software version"),
        }
    }
}

/// A version together with the tier that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVersion {
    pub version: String,
    pub source: VersionSource,
}

/// Both manifests of a packaged install, loaded once and read many times.
#[derive(Debug, Clone, Default)]
pub struct Manifests {
    gems: GemVersionManifest,
    versions: VersionManifest,
}

impl Manifests {
    /// Bundle already-decoded manifests.
    pub fn new(gems: GemVersionManifest, versions: VersionManifest) -> Self {
        Self { gems, versions }
    }

    /// Load both manifests from an install root.
    ///
    /// Fails if either file cannot be read or parsed.
    pub fn load(root: &Path) -> Result<Self> {
        let gems = load_gem_manifest(root)?;
        let versions = load_version_manifest(root)?;
        tracing::debug!(
            "Loaded manifests from {} ({} gems)",
            root.display(),
            gems.len()
        );
        Ok(Self::new(gems, versions))
    }

    /// The gem version manifest.
    pub fn gems(&self) -> &GemVersionManifest {
        &self.gems
    }

    /// The general version manifest.
    pub fn versions(&self) -> &VersionManifest {
        &self.versions
    }

    /// Look up a component, reporting which tier matched.
    pub fn lookup(&self, key: &str) -> Option<ResolvedVersion> {
        let found = if let Some(version) = self.gems.first_version(key) {
            Some((version, VersionSource::GemManifest))
        } else if let Some(version) = self.versions.text(key) {
            Some((version, VersionSource::VersionManifest))
        } else {
            self.versions
                .locked_version(key)
                .map(|version| (version, VersionSource::LockedSoftware))
        };

        found.map(|(version, source)| {
            tracing::debug!("Resolved {} = {} from {}", key, version, source);
            ResolvedVersion {
                version: version.to_string(),
                source,
            }
        })
    }

    /// Version string for a component, or `"unknown"`.
    pub fn component_version(&self, key: &str) -> String {
        self.lookup(key)
            .map(|resolved| resolved.version)
            .unwrap_or_else(|| {
                tracing::debug!("No version found for {}", key);
                UNKNOWN_VERSION.to_string()
            })
    }
}
