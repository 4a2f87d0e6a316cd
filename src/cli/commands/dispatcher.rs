//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    install_root: Option<PathBuf>,
    json: bool,
}

impl CommandDispatcher {
    /// Create a new dispatcher.
    ///
    /// `install_root` overrides the root derived from the running executable.
    pub fn new(install_root: Option<PathBuf>, json: bool) -> Self {
        Self { install_root, json }
    }

    /// Get the install root override, if any.
    pub fn install_root(&self) -> Option<&Path> {
        self.install_root.as_deref()
    }

    /// Dispatch and execute a command.
    ///
    /// `-v`/`--version` and a bare invocation both show the version report.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if cli.version {
            return self.version(ui);
        }

        match &cli.command {
            Some(Commands::Version) | None => self.version(ui),
            Some(Commands::Check) => {
                let cmd = super::check::CheckCommand::new(self.install_root(), self.json);
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }

    fn version(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let cmd = super::version::VersionCommand::new(self.install_root(), self.json);
        cmd.execute(ui)
    }
}
