//! Manifest document definitions.
//!
//! Individual values are decoded leniently: a value whose shape does not
//! match what a lookup expects is kept as [`ManifestEntry::Other`] (or
//! [`SoftwareEntry::Other`]) rather than failing the whole document. Only
//! malformed JSON or a non-object root is a parse error.

use serde::Deserialize;
use std::collections::HashMap;

/// A single top-level manifest value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ManifestEntry {
    /// A list of version strings, newest first (gem manifest form).
    Versions(Vec<String>),
    /// A plain string value.
    Text(String),
    /// Anything else.
    Other(serde_json::Value),
}

impl ManifestEntry {
    /// First version of a non-empty version list.
    pub fn first_version(&self) -> Option<&str> {
        match self {
            ManifestEntry::Versions(versions) => versions.first().map(String::as_str),
            _ => None,
        }
    }

    /// The value if it is a plain string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ManifestEntry::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }
}

/// `gem-version-manifest.json`: gem name to installed versions.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct GemVersionManifest {
    entries: HashMap<String, ManifestEntry>,
}

impl GemVersionManifest {
    /// Get the raw entry for a gem.
    pub fn get(&self, key: &str) -> Option<&ManifestEntry> {
        self.entries.get(key)
    }

    /// First listed version for a gem, if the entry is a non-empty list.
    pub fn first_version(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ManifestEntry::first_version)
    }

    /// Number of gems in the manifest.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the manifest has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The `software` section of `version-manifest.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SoftwareSection {
    /// Component name to its build record.
    Components(HashMap<String, SoftwareEntry>),
    /// Present but not an object.
    Other(serde_json::Value),
}

impl Default for SoftwareSection {
    fn default() -> Self {
        Self::Components(HashMap::new())
    }
}

impl SoftwareSection {
    /// Get the build record for a component.
    pub fn get(&self, name: &str) -> Option<&SoftwareEntry> {
        match self {
            SoftwareSection::Components(components) => components.get(name),
            SoftwareSection::Other(_) => None,
        }
    }
}

/// One component's build record under `software`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SoftwareEntry {
    /// A record with a string `locked_version`. Other fields are ignored.
    Pinned { locked_version: String },
    /// Missing `locked_version`, a non-string one, or not an object at all.
    Other(serde_json::Value),
}

impl SoftwareEntry {
    /// The pinned version, if any.
    pub fn locked_version(&self) -> Option<&str> {
        match self {
            SoftwareEntry::Pinned { locked_version } => Some(locked_version.as_str()),
            SoftwareEntry::Other(_) => None,
        }
    }
}

/// `version-manifest.json`: build metadata and pinned software versions.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VersionManifest {
    #[serde(default)]
    software: SoftwareSection,

    #[serde(flatten)]
    entries: HashMap<String, ManifestEntry>,
}

impl VersionManifest {
    /// Get a raw top-level entry. The `software` section is not an entry.
    pub fn get(&self, key: &str) -> Option<&ManifestEntry> {
        self.entries.get(key)
    }

    /// A top-level value, if it is a plain string.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ManifestEntry::as_text)
    }

    /// `software.<name>.locked_version`, if every segment resolves to the right shape.
    pub fn locked_version(&self, name: &str) -> Option<&str> {
        self.software.get(name).and_then(SoftwareEntry::locked_version)
    }

    /// The `software` section.
    pub fn software(&self) -> &SoftwareSection {
        &self.software
    }
}
