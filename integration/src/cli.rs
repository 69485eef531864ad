//! Definition of the CLI arguments for the integration tests

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::constants::{DEFAULT_DEVNET_HOSTPORT, DEFAULT_DEVNET_PKEY};

/// CLI tool for running integration tests against a running devnet node.
///
/// Assumes that the compiled contract artifacts are available in the artifacts directory.
#[derive(Parser)]
pub(crate) struct Cli {
    /// Test to run
    #[arg(short, long)]
    pub(crate) test: Tests,

    /// Path to the `deployments.json` file tracking deployed addresses
    #[arg(short, long, default_value = "deployments.json")]
    pub(crate) deployments_path: PathBuf,

    /// Directory containing the compiled contract artifacts
    #[arg(short, long, default_value = "artifacts")]
    pub(crate) artifacts_dir: PathBuf,

    /// The network key to look up in the `deployments.json` file
    #[arg(short, long, default_value = "sei:devnet")]
    pub(crate) network: String,

    /// Devnet private key, defaults to the first Anvil dev account key
    #[arg(short, long, default_value = DEFAULT_DEVNET_PKEY)]
    pub(crate) priv_key: String,

    /// Devnet RPC URL, defaults to the default Anvil hostport
    #[arg(short, long, default_value = DEFAULT_DEVNET_HOSTPORT)]
    pub(crate) rpc_url: String,
}

/// The tests that can be run
#[derive(ValueEnum, Clone, Copy)]
pub(crate) enum Tests {
    FactoryWiring,
    TokenMetadata,
}
