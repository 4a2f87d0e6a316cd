//! Version report.
//!
//! [`VersionReport`] captures the product version and the per-component
//! versions of a packaged install, in the order they are printed.

use serde::Serialize;

use crate::dist::{BUILD_VERSION_KEY, COMPONENTS, WORKSTATION_PRODUCT};
use crate::manifest::Manifests;

/// One reported component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentVersion {
    /// Display name, e.g. "Chef InSpec".
    pub name: String,
    /// Resolved version or `"unknown"`.
    pub version: String,
}

impl ComponentVersion {
    /// Create a component entry.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Format as `<name> version: <version>`.
    pub fn line(&self) -> String {
        format!("{} version: {}", self.name, self.version)
    }
}

/// Version information for a packaged install.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionReport {
    /// Overall product name.
    pub product: String,
    /// Overall product build version.
    pub version: String,
    /// Component versions in table order.
    pub components: Vec<ComponentVersion>,
}

impl VersionReport {
    /// Resolve every reported version from the manifests.
    pub fn build(manifests: &Manifests) -> Self {
        let components = COMPONENTS
            .iter()
            .map(|c| ComponentVersion::new(c.display_name, manifests.component_version(c.key)))
            .collect();

        Self {
            product: WORKSTATION_PRODUCT.to_string(),
            version: manifests.component_version(BUILD_VERSION_KEY),
            components,
        }
    }

    /// Report lines: the product first, then each component.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.components.len() + 1);
        lines.push(ComponentVersion::new(&self.product, &self.version).line());
        lines.extend(self.components.iter().map(ComponentVersion::line));
        lines
    }

    /// The report as newline-terminated text.
    pub fn render(&self) -> String {
        let mut out = self.lines().join("\n");
        out.push('\n');
        out
    }

    /// The report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
