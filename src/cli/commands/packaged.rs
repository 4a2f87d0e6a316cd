//! Shared packaged-install gate for commands.

use std::path::Path;

use crate::dist::not_packaged_message;
use crate::error::Result;
use crate::install::{detect_install_kind, resolve_install_root};
use crate::manifest::Manifests;
use crate::ui::UserInterface;

/// Load the manifests of a packaged install.
///
/// Returns `Ok(None)` after telling the user when the install is not
/// packaged. Path resolution and manifest errors are returned as-is.
pub fn load_packaged_manifests(
    install_root: Option<&Path>,
    ui: &mut dyn UserInterface,
) -> Result<Option<Manifests>> {
    let root = resolve_install_root(install_root)?;
    let kind = detect_install_kind(&root);

    if !kind.is_packaged() {
        ui.error(&not_packaged_message());
        return Ok(None);
    }

    Manifests::load(kind.root()).map(Some)
}
