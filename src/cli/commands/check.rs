//! Check command implementation.
//!
//! The `chef-wrapper check` command reports whether the cached
//! `~/.chef/ruby-env.json` was written for the installed Workstation build
//! and whether the `ruby` on `PATH` is the embedded one.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::dist::{BUILD_VERSION_KEY, EMBEDDED_RUBY_PATH, WORKSTATION_PRODUCT};
use crate::environment::{
    is_default_chef_ruby_in, ruby_env_path, search_path, versions_match_at,
};
use crate::error::{Result, WrapperError};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::packaged::load_packaged_manifests;

/// Outcome of the environment checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    /// Installed Workstation build version.
    pub workstation_version: String,
    /// Whether ruby-env.json records the same build version.
    pub ruby_env_matches: bool,
    /// Whether `ruby` on `PATH` is the embedded ruby.
    pub default_ruby: bool,
    /// Path the default ruby is compared against.
    pub expected_ruby: String,
}

/// The check command implementation.
pub struct CheckCommand {
    install_root: Option<PathBuf>,
    json: bool,
    ruby_env: Option<PathBuf>,
    path_entries: Option<Vec<PathBuf>>,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(install_root: Option<&Path>, json: bool) -> Self {
        Self {
            install_root: install_root.map(Path::to_path_buf),
            json,
            ruby_env: None,
            path_entries: None,
        }
    }

    /// Read the ruby environment from `path` instead of `~/.chef/ruby-env.json`.
    pub fn with_ruby_env(mut self, path: PathBuf) -> Self {
        self.ruby_env = Some(path);
        self
    }

    /// Search `entries` for ruby instead of `PATH`.
    pub fn with_path_entries(mut self, entries: Vec<PathBuf>) -> Self {
        self.path_entries = Some(entries);
        self
    }

    fn ruby_env_matches(&self, workstation_version: &str) -> bool {
        match self.ruby_env.clone().or_else(ruby_env_path) {
            Some(path) => versions_match_at(&path, workstation_version),
            None => {
                tracing::warn!("No home directory; cannot locate ruby-env.json");
                false
            }
        }
    }

    fn default_ruby(&self) -> bool {
        match &self.path_entries {
            Some(entries) => is_default_chef_ruby_in(entries),
            None => is_default_chef_ruby_in(&search_path()),
        }
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(manifests) = load_packaged_manifests(self.install_root.as_deref(), ui)? else {
            return Ok(CommandResult::success());
        };

        let workstation_version = manifests.component_version(BUILD_VERSION_KEY);
        let outcome = CheckOutcome {
            ruby_env_matches: self.ruby_env_matches(&workstation_version),
            default_ruby: self.default_ruby(),
            expected_ruby: EMBEDDED_RUBY_PATH.to_string(),
            workstation_version,
        };

        if self.json {
            let json = serde_json::to_string_pretty(&outcome)
                .map_err(|e| WrapperError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        ui.message(&format!(
            "Ruby environment matches {} {}: {}",
            WORKSTATION_PRODUCT,
            outcome.workstation_version,
            yes_no(outcome.ruby_env_matches)
        ));
        ui.message(&format!(
            "Default ruby is {}: {}",
            EMBEDDED_RUBY_PATH,
            yes_no(outcome.default_ruby)
        ));

        if !outcome.ruby_env_matches {
            ui.warning("ruby-env.json is missing or was written for a different build");
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{GEM_MANIFEST_FILE, VERSION_MANIFEST_FILE};
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn setup_install(build_version: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(GEM_MANIFEST_FILE), "{}").unwrap();
        fs::write(
            temp.path().join(VERSION_MANIFEST_FILE),
            format!(r#"{{"build_version": "{}"}}"#, build_version),
        )
        .unwrap();
        temp
    }

    #[test]
    fn reports_matching_ruby_env() {
        let install = setup_install("5.2.1");
        let env = install.path().join("ruby-env.json");
        fs::write(&env, r#"{"build_version": "5.2.1"}"#).unwrap();
        let mut ui = MockUI::new();

        CheckCommand::new(Some(install.path()), false)
            .with_ruby_env(env)
            .with_path_entries(vec![])
            .execute(&mut ui)
            .unwrap();

        assert!(ui.has_message("Ruby environment matches Chef Workstation 5.2.1: yes"));
        assert!(ui.has_message("Default ruby is /opt/chef-workstation/embedded/bin/ruby: no"));
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn reports_mismatched_ruby_env() {
        let install = setup_install("5.2.2");
        let env = install.path().join("ruby-env.json");
        fs::write(&env, r#"{"build_version": "5.2.1"}"#).unwrap();
        let mut ui = MockUI::new();

        CheckCommand::new(Some(install.path()), false)
            .with_ruby_env(env)
            .with_path_entries(vec![])
            .execute(&mut ui)
            .unwrap();

        assert!(ui.has_message("Chef Workstation 5.2.2: no"));
        assert_eq!(ui.warnings().len(), 1);
    }

    #[test]
    fn missing_ruby_env_is_no_match() {
        let install = setup_install("5.2.1");
        let mut ui = MockUI::new();

        let result = CheckCommand::new(Some(install.path()), true)
            .with_ruby_env(install.path().join("absent.json"))
            .with_path_entries(vec![])
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        let value: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(value["ruby_env_matches"], false);
        assert_eq!(value["default_ruby"], false);
        assert_eq!(value["workstation_version"], "5.2.1");
    }

    #[test]
    fn not_packaged_prints_error() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let result = CheckCommand::new(Some(temp.path()), false)
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_error("has not been installed"));
        assert!(ui.messages().is_empty());
    }
}
