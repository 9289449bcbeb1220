//! Classdir CLI Binary
//!
//! Interactive session over a role-aware in-memory directory tree.

use clap::Parser;
use classdir::config::{ClassdirConfig, ConfigLoader};
use classdir::error::ApiError;
use classdir::logging::init_logging;
use classdir::session::Session;
use classdir::tooling::{Cli, DialoguerPrompter, Shell};
use classdir::tree::DirectoryTree;
use std::process;

fn main() {
    let cli = Cli::parse();

    let config = match ConfigLoader::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(Some(&cli.logging_config(&config.logging))) {
        eprintln!("Error initializing logging: {}", e);
        process::exit(1);
    }

    if let Err(e) = run(&cli, &config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli, config: &ClassdirConfig) -> Result<(), ApiError> {
    let tree = DirectoryTree::new(&config.root_name, config.limits, config.disclosure)?;

    let mut prompter = DialoguerPrompter;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut shell = Shell::new(&mut prompter, &mut out);

    let role = match cli.role {
        Some(role) => role,
        None => shell.login()?,
    };
    shell.run(Session::new(tree, role))?;
    Ok(())
}
