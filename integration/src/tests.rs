//! Integration tests for the deploy scripts

use std::{env, fs, path::Path};

use alloy::providers::DynProvider;
use eyre::Result;
use scripts::{
    cli::{DeployProtocolArgs, DeployTokensArgs},
    commands::{deploy_protocol, deploy_tokens},
    constants::MOCK_TOKENS,
    solidity::{ERC20Mock, IERC20Mock, IPoolFactory, PoolFactory},
};

use crate::constants::{TEST_FEE_RECEIVER_ADDRESS, TEST_OWNER_ADDRESS};

/// Build the protocol deploy arguments used by the tests
fn protocol_args(network: &str, artifacts_dir: &Path) -> DeployProtocolArgs {
    DeployProtocolArgs {
        network: network.to_string(),
        owner: TEST_OWNER_ADDRESS,
        fee_receiver: TEST_FEE_RECEIVER_ADDRESS,
        artifacts_dir: artifacts_dir.to_path_buf(),
    }
}

/// Deploy the protocol and verify that the factory is wired to the
/// blueprint and math addresses the deployment returned, then verify
/// that a registry recording those addresses is attached to rather
/// than redeployed on a second run
pub(crate) async fn test_factory_wiring(
    client: DynProvider,
    deployments_path: &Path,
    artifacts_dir: &Path,
    network: &str,
) -> Result<()> {
    let deployment = deploy_protocol(
        protocol_args(network, artifacts_dir),
        client.clone(),
        deployments_path,
    )
    .await?;

    let factory: PoolFactory = IPoolFactory::new(deployment.pool_factory, client.clone());
    let pool_implementation = factory.pool_implementation().call().await?;
    let math_implementation = factory.math_implementation().call().await?;

    assert_eq!(
        pool_implementation, deployment.pool_blueprint,
        "factory pool implementation does not match the deployed blueprint"
    );
    assert_eq!(
        math_implementation, deployment.math,
        "factory math implementation does not match the deployed math contract"
    );

    // Re-run against a registry recording the deployed addresses; the
    // attach path must return the same addresses without redeploying
    let updated_registry = serde_json::json!({
        network: {
            "math": deployment.math,
            "interest_rate_model": deployment.interest_rate_model,
            "pool": deployment.pool_blueprint,
            "pool_factory": deployment.pool_factory,
        }
    });
    let reuse_path = env::temp_dir().join("deployments.reuse.json");
    fs::write(&reuse_path, serde_json::to_string_pretty(&updated_registry)?)?;

    let rerun = deploy_protocol(
        protocol_args(network, artifacts_dir),
        client,
        &reuse_path,
    )
    .await?;

    assert_eq!(rerun.math, deployment.math, "math address not reused");
    assert_eq!(
        rerun.interest_rate_model, deployment.interest_rate_model,
        "interest rate model address not reused"
    );
    assert_eq!(
        rerun.pool_blueprint, deployment.pool_blueprint,
        "pool blueprint address not reused"
    );
    assert_eq!(
        rerun.pool_factory, deployment.pool_factory,
        "pool factory address not reused"
    );

    Ok(())
}

/// Deploy the mock tokens and verify that each reports the metadata of
/// the descriptor it was deployed from
pub(crate) async fn test_token_metadata(client: DynProvider, artifacts_dir: &Path) -> Result<()> {
    let args = DeployTokensArgs {
        artifacts_dir: artifacts_dir.to_path_buf(),
    };
    let deployments = deploy_tokens(args, client.clone()).await?;

    assert_eq!(
        deployments.len(),
        MOCK_TOKENS.len(),
        "one token should be deployed per fixture"
    );

    for deployment in deployments {
        let token: ERC20Mock = IERC20Mock::new(deployment.address, client.clone());
        let descriptor = deployment.descriptor;

        assert_eq!(token.name().call().await?, descriptor.name);
        assert_eq!(token.symbol().call().await?, descriptor.symbol);
        assert_eq!(token.decimals().call().await?, descriptor.decimals);
    }

    Ok(())
}
