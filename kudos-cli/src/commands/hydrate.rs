//! Hydrate command - merge the remote seed into the local store

use clap::Args;
use kudos_core::Config;
use kudos_remote::{hydrate, HydrateOutcome, SeedClient, SeedSource};

use super::open_store;

/// Merge the remote review seed into the local store
#[derive(Args, Debug)]
pub struct HydrateArgs {
    /// Seed location (overrides the configured remote url)
    #[arg(long)]
    pub url: Option<String>,
}

impl HydrateArgs {
    /// Execute the hydrate command
    pub async fn execute(&self, verbose: bool, config: &Config) -> anyhow::Result<()> {
        let client = match &self.url {
            Some(url) => {
                SeedClient::new(SeedSource::parse(url)?).with_timeout(config.remote.timeout)
            }
            None => SeedClient::from_config(&config.remote)?.ok_or_else(|| {
                anyhow::anyhow!(
                    "No remote seed configured. Pass --url, set KUDOS_REMOTE_URL, \
                     or add [remote] url to the config file"
                )
            })?,
        };

        if verbose {
            tracing::info!(source = %client.source(), timeout = ?client.timeout(), "Hydrating");
        }

        let store = open_store(&config.store)?;
        match hydrate(&store, &client).await {
            HydrateOutcome::Merged { added, total } => {
                println!("Merged {} new review(s) from {}", added, client.source());
                println!("Store now holds {} review(s)", total);
            }
            HydrateOutcome::Skipped(reason) => {
                println!("No changes ({})", reason);
            }
        }

        Ok(())
    }
}
