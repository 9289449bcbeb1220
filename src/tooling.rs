//! Tooling Layer
//!
//! Command-line arguments, the interactive session shell and text rendering of
//! tree results.

pub mod cli;
pub mod format;
pub mod shell;

pub use cli::Cli;
pub use shell::{DialoguerPrompter, MenuChoice, Prompter, Shell};
