//! Install root resolution.
//!
//! A packaged install lays the binary out as `<root>/bin/<exe>` with the
//! version manifests directly in `<root>`. The root is therefore the parent
//! of the directory holding the real (symlink-resolved) executable.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, WrapperError};
use crate::manifest::VERSION_MANIFEST_FILE;

/// How the running binary was installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallKind {
    /// Laid out by the platform-specific package.
    Packaged { root: PathBuf },
    /// Running from a local checkout or a gem, without manifests.
    Local { root: PathBuf },
}

impl InstallKind {
    /// The candidate install root, packaged or not.
    pub fn root(&self) -> &Path {
        match self {
            InstallKind::Packaged { root } | InstallKind::Local { root } => root,
        }
    }

    /// Check if this is a packaged install.
    pub fn is_packaged(&self) -> bool {
        matches!(self, InstallKind::Packaged { .. })
    }

    /// Get a human-readable name for this install kind.
    pub fn name(&self) -> &str {
        match self {
            InstallKind::Packaged { .. } => "packaged",
            InstallKind::Local { .. } => "local",
        }
    }
}

/// Compute the install root from the currently running executable.
pub fn expected_install_root() -> Result<PathBuf> {
    let exe = env::current_exe().map_err(|source| WrapperError::ExecutablePath { source })?;
    expected_install_root_from(&exe)
}

/// Compute the install root for an executable at `exe`.
///
/// Symlinks are followed first, so `/usr/bin/chef -> /opt/chef-workstation/bin/chef`
/// yields `/opt/chef-workstation`.
pub fn expected_install_root_from(exe: &Path) -> Result<PathBuf> {
    let real = fs::canonicalize(exe).map_err(|source| WrapperError::ExecutablePath { source })?;

    let root = real
        .parent()
        .and_then(Path::parent)
        .ok_or_else(|| WrapperError::InstallRoot { path: real.clone() })?;

    tracing::debug!(
        "Executable {} resolves to {}, install root {}",
        exe.display(),
        real.display(),
        root.display()
    );

    Ok(root.to_path_buf())
}

/// Pick the install root: an explicit override if given, else the computed one.
///
/// Overrides are made absolute against the current directory but are not
/// otherwise touched.
pub fn resolve_install_root(override_root: Option<&Path>) -> Result<PathBuf> {
    match override_root {
        Some(root) => {
            let root = std::path::absolute(root)?;
            tracing::debug!("Using install root override {}", root.display());
            Ok(root)
        }
        None => expected_install_root(),
    }
}

/// Check whether `root` is a packaged install.
///
/// True only when the directory exists and contains the version manifest.
/// The manifest is not parsed here.
pub fn is_packaged_install(root: &Path) -> bool {
    root.exists() && root.join(VERSION_MANIFEST_FILE).exists()
}

/// Classify the install at `root`.
pub fn detect_install_kind(root: &Path) -> InstallKind {
    let kind = if is_packaged_install(root) {
        InstallKind::Packaged {
            root: root.to_path_buf(),
        }
    } else {
        InstallKind::Local {
            root: root.to_path_buf(),
        }
    };
    tracing::debug!("Install at {} is {}", root.display(), kind.name());
    kind
}
