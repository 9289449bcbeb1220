//! CLI Tooling
//!
//! Command-line arguments for the interactive directory session.

use crate::logging::LoggingConfig;
use crate::types::Role;
use clap::Parser;
use std::path::PathBuf;

/// Classdir - role-aware directory tree session
#[derive(Parser, Debug)]
#[command(name = "classdir")]
#[command(about = "Role-aware in-memory directory tree with an interactive session")]
pub struct Cli {
    /// Log in with this role instead of prompting (student or teacher)
    #[arg(long)]
    pub role: Option<Role>,

    /// Configuration file path (layered over the global config file)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Overlay logging flags on the configured logging section.
    ///
    /// `--verbose` raises the level to debug unless `--log-level` is given.
    pub fn logging_config(&self, base: &LoggingConfig) -> LoggingConfig {
        let mut config = base.clone();
        if self.verbose {
            config.level = "debug".to_string();
        }
        if let Some(level) = &self.log_level {
            config.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.file = Some(file.clone());
        }
        config
    }
}
