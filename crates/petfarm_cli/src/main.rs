//! Pet farm registry entry point.
//!
//! # Responsibility
//! - Parse configuration and start file logging.
//! - Wire repository -> controller -> menu and run the menu on stdin/stdout.

mod config;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use config::{Cli, Config};
use log::info;
use petfarm_core::{init_logging, ConsoleMenu, PetController, PetRepository};
use std::io;

fn main() -> Result<()> {
    let config = Config::from(Cli::parse());
    init_logging(&config.log_level, &config.log_dir)
        .map_err(|err| anyhow!(err))
        .context("failed to initialize logging")?;

    let mut farm = PetRepository::new();
    let mut controller = PetController::new(&mut farm);
    let stdin = io::stdin();
    ConsoleMenu::new(&mut controller, stdin.lock(), io::stdout())
        .run()
        .context("terminal I/O failed")?;

    info!(
        "event=app_exit module=core status=ok version={}",
        petfarm_core::core_version()
    );
    Ok(())
}
