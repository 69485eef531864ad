//! Definitions of CLI arguments and commands for the deploy scripts

use std::path::{Path, PathBuf};

use alloy::{primitives::Address, providers::DynProvider};
use clap::{Args, Parser, Subcommand};

use crate::{
    commands::{deploy_protocol, deploy_tokens},
    constants::{DEFAULT_ARTIFACTS_DIR, DEFAULT_DEPLOYMENTS_PATH, DEFAULT_NETWORK},
    errors::ScriptError,
};

/// Scripts for deploying the pool protocol contracts
#[derive(Parser)]
pub struct Cli {
    /// Private key of the transaction sender
    #[arg(short, long, env = "SENDER_PRIVATE_KEY")]
    pub priv_key: String,

    /// Network RPC URL
    #[arg(short, long, env = "SEI_RPC_URL")]
    pub rpc_url: String,

    /// Path to the `deployments.json` file tracking deployed addresses
    #[arg(short, long, default_value = DEFAULT_DEPLOYMENTS_PATH)]
    pub deployments_path: PathBuf,

    /// The deploy script to run
    #[command(subcommand)]
    pub command: Command,
}

/// The deploy scripts
#[derive(Subcommand)]
pub enum Command {
    /// Deploy the protocol contracts in dependency order and wire
    /// the factory to its implementations
    DeployProtocol(DeployProtocolArgs),
    /// Deploy the mock tokens used as test fixtures
    DeployTokens(DeployTokensArgs),
}

impl Command {
    /// Dispatch to the implementation of the selected command
    pub async fn run(
        self,
        client: DynProvider,
        deployments_path: &Path,
    ) -> Result<(), ScriptError> {
        match self {
            Command::DeployProtocol(args) => deploy_protocol(args, client, deployments_path)
                .await
                .map(|_| ()),
            Command::DeployTokens(args) => deploy_tokens(args, client).await.map(|_| ()),
        }
    }
}

/// Deploy the protocol contracts: math, interest rate model,
/// pool blueprint, and pool factory
#[derive(Args)]
pub struct DeployProtocolArgs {
    /// The network to deploy to, keyed into the `deployments.json` file
    #[arg(short, long, default_value = DEFAULT_NETWORK)]
    pub network: String,

    /// Address of the owner of the pool factory
    #[arg(short, long)]
    pub owner: Address,

    /// Address receiving protocol fees
    #[arg(short, long)]
    pub fee_receiver: Address,

    /// Directory containing the compiled contract artifacts
    #[arg(short, long, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts_dir: PathBuf,
}

/// Deploy a mock token contract for each test fixture
#[derive(Args)]
pub struct DeployTokensArgs {
    /// Directory containing the compiled contract artifacts
    #[arg(short, long, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts_dir: PathBuf,
}
