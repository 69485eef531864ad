//! Smoke tests for the deploy scripts. These assume that a devnet is already running locally
//! and that the contract artifacts have been compiled into the artifacts directory.

use clap::Parser;
use cli::{Cli, Tests};
use eyre::Result;
use scripts::utils::setup_client;
use tests::{test_factory_wiring, test_token_metadata};

mod cli;
mod constants;
mod tests;

#[tokio::main]
async fn main() -> Result<()> {
    let Cli {
        test,
        deployments_path,
        artifacts_dir,
        network,
        priv_key,
        rpc_url,
    } = Cli::parse();

    tracing_subscriber::fmt().pretty().init();

    let client = setup_client(&priv_key, &rpc_url)?;

    match test {
        Tests::FactoryWiring => {
            test_factory_wiring(client, &deployments_path, &artifacts_dir, &network).await
        }
        Tests::TokenMetadata => test_token_metadata(client, &artifacts_dir).await,
    }
}
