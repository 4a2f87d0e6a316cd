//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// chef-wrapper - Version information for Chef Workstation installs.
#[derive(Debug, Parser)]
#[command(name = "chef-wrapper")]
#[command(author, about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Show version information for Chef Workstation and its components
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Install root to inspect (defaults to the root of the running executable)
    #[arg(
        long,
        global = true,
        env = "CHEF_WRAPPER_INSTALL_ROOT",
        value_name = "DIR"
    )]
    pub install_root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Hide warnings
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show version information (default if no command specified)
    Version,

    /// Check the cached ruby environment and the default ruby
    Check,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
