use std::io;

use agenda::{
    config::{CONFIG_FILENAME, RegistryConfig},
    logging,
    registry::Registry,
    shell::Shell,
};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = RegistryConfig::load(CONFIG_FILENAME)?;
    logging::init(&config.log_level)?;
    info!(data_dir = %config.data_dir.display(), cancel_mode = ?config.cancel_mode, "starting");

    let mut registry = Registry::open(&config)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(&mut registry, stdin.lock(), stdout.lock()).run()?;

    info!("bye");
    Ok(())
}
