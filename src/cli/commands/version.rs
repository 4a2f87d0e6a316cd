//! Version command implementation.
//!
//! The `chef-wrapper version` command (also `-v`) prints the Workstation
//! build version followed by the version of each bundled component.

use std::path::{Path, PathBuf};

use crate::error::{Result, WrapperError};
use crate::report::VersionReport;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::packaged::load_packaged_manifests;

/// The version command implementation.
pub struct VersionCommand {
    install_root: Option<PathBuf>,
    json: bool,
}

impl VersionCommand {
    /// Create a new version command.
    pub fn new(install_root: Option<&Path>, json: bool) -> Self {
        Self {
            install_root: install_root.map(Path::to_path_buf),
            json,
        }
    }
}

impl Command for VersionCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(manifests) = load_packaged_manifests(self.install_root.as_deref(), ui)? else {
            return Ok(CommandResult::success());
        };

        let report = VersionReport::build(&manifests);

        if self.json {
            let json = report
                .to_json()
                .map_err(|e| WrapperError::Other(e.into()))?;
            ui.message(&json);
        } else {
            for line in report.lines() {
                ui.message(&line);
            }
        }

        Ok(CommandResult::success())
    }
}
