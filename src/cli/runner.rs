//! CLI runner - executes commands

use crate::catalog::Catalog;
use crate::cli::commands::{Cli, Commands};
use crate::client::HttpApiClient;
use crate::config::Config;
use crate::engine;
use crate::error::{Error, Result};
use crate::output::Emitter;
use crate::stream::Registry;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let registry = Registry::with_builtin_streams();

        // The protocol goes to stdout; logging is already pinned to stderr.
        let mut emitter = Emitter::stdout();

        match &self.cli.command {
            Commands::Discover => engine::discover(&registry, &mut emitter),
            Commands::Sync { catalog } => {
                let config = Config::load(self.cli.config.as_deref())?;
                let client = HttpApiClient::new(config.endpoint(), &config.api_key)?;

                let catalog = catalog
                    .as_deref()
                    .map(Catalog::from_file)
                    .transpose()?;

                // Cooperative cancellation: Ctrl-C aborts the remaining
                // streams at the next suspension point. Output already
                // written stays as-is.
                tokio::select! {
                    result = engine::sync(&registry, &client, catalog, &mut emitter) => result,
                    _ = tokio::signal::ctrl_c() => {
                        info!("received interrupt, aborting sync");
                        Err(Error::Interrupted)
                    }
                }
            }
        }
    }
}
