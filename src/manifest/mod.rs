//! Install manifests and component version lookup.
//!
//! A packaged install ships two JSON manifests in its root:
//!
//! - `gem-version-manifest.json` - gem name to a list of versions
//! - `version-manifest.json` - build metadata plus a `software` section
//!   with per-component `locked_version` pins
//!
//! Both are decoded once into typed documents ([`GemVersionManifest`],
//! [`VersionManifest`]) and bundled into [`Manifests`], which answers
//! version lookups.
//!
//! # Example
//!
//! ```
//! use chef_wrapper::manifest::{GemVersionManifest, Manifests, VersionManifest};
//! use std::path::Path;
//!
//! let gems: GemVersionManifest =
//!     chef_wrapper::manifest::parse_manifest(r#"{"inspec": ["5.22.3"]}"#, Path::new("gems"))
//!         .unwrap();
//! let versions: VersionManifest =
//!     chef_wrapper::manifest::parse_manifest(r#"{"build_version": "23.7.1042"}"#, Path::new("v"))
//!         .unwrap();
//!
//! let manifests = Manifests::new(gems, versions);
//! assert_eq!(manifests.component_version("inspec"), "5.22.3");
//! assert_eq!(manifests.component_version("build_version"), "23.7.1042");
//! assert_eq!(manifests.component_version("knife"), "unknown");
//! ```

pub mod loader;
pub mod resolver;
pub mod schema;

pub use loader::{
    load_gem_manifest, load_manifest_file, load_version_manifest, parse_manifest,
    GEM_MANIFEST_FILE, VERSION_MANIFEST_FILE,
};
pub use resolver::{Manifests, ResolvedVersion, VersionSource, UNKNOWN_VERSION};
pub use schema::{
    GemVersionManifest, ManifestEntry, SoftwareEntry, SoftwareSection, VersionManifest,
};
