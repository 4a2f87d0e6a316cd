//! Console output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing reports to stdout and diagnostics to stderr
//! - [`MockUI`] capturing output for tests
//!
//! # Example
//!
//! ```
//! use chef_wrapper::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Chef Workstation version: 23.7.1042");
//! assert!(ui.has_message("23.7.1042"));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, WrapperTheme};

/// Trait for user-facing output.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Write a line of report output (stdout).
    fn message(&mut self, msg: &str);

    /// Display a warning (stderr).
    fn warning(&mut self, msg: &str);

    /// Display an error (stderr). Always shown.
    fn error(&mut self, msg: &str);
}
