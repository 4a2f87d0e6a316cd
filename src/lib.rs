//! chef-wrapper - Version information for Chef Workstation installs.
//!
//! Finds the install root of the running binary, decides whether it is a
//! packaged install, and reports the versions recorded in the install's
//! manifests.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`dist`] - Product names and the reported component table
//! - [`environment`] - Ruby environment and default ruby checks
//! - [`error`] - Error types and result aliases
//! - [`install`] - Install root resolution and packaged-install detection
//! - [`manifest`] - Manifest loading and version lookup
//! - [`report`] - The version report
//! - [`ui`] - Console output
//!
//! # Example
//!
//! ```
//! use chef_wrapper::manifest::Manifests;
//! use chef_wrapper::report::VersionReport;
//!
//! let report = VersionReport::build(&Manifests::default());
//! assert_eq!(report.lines()[0], "Chef Workstation version: unknown");
//! ```

pub mod cli;
pub mod dist;
pub mod environment;
pub mod error;
pub mod install;
pub mod manifest;
pub mod report;
pub mod ui;

pub use error::{Result, WrapperError};
