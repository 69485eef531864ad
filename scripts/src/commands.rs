//! Implementations of the deploy scripts

use std::path::Path;

use alloy::providers::DynProvider;
use tracing::info;

use crate::{
    cli::{DeployProtocolArgs, DeployTokensArgs},
    constants::{ERC20_MOCK_ARTIFACT, INTEREST_RATE_PARAMS, MOCK_TOKENS},
    errors::ScriptError,
    solidity::{IPoolFactory, PoolFactory},
    types::{ProtocolContract, ProtocolDeployment, TokenDeployment},
    utils::{
        call_helper, check_and_deploy, deploy_contract, erc20_constructor_args,
        interest_rate_model_constructor_args, load_artifact, pool_factory_constructor_args,
        read_deployments, send_tx,
    },
};

/// Deploy the protocol contracts in dependency order, then wire the
/// factory to its pool and math implementations.
///
/// Contracts already recorded in the registry for the given network are
/// attached to rather than redeployed. The registry is never written:
/// newly deployed addresses are logged for the operator to record by
/// hand before re-running after a partial failure.
pub async fn deploy_protocol(
    args: DeployProtocolArgs,
    client: DynProvider,
    deployments_path: &Path,
) -> Result<ProtocolDeployment, ScriptError> {
    let DeployProtocolArgs {
        network,
        owner,
        fee_receiver,
        artifacts_dir,
    } = args;

    let registry = read_deployments(deployments_path)?;

    info!("Deploying pool factory on {network} ...");

    // Non-blueprint contracts
    let math_initcode = load_artifact(&artifacts_dir, ProtocolContract::Math.designation())?;
    let math = check_and_deploy(
        ProtocolContract::Math,
        &registry,
        &network,
        math_initcode,
        &[],
        false, // blueprint
        &client,
    )
    .await?;

    let interest_rate_model_initcode = load_artifact(
        &artifacts_dir,
        ProtocolContract::InterestRateModel.designation(),
    )?;
    let interest_rate_model_args =
        interest_rate_model_constructor_args(math, INTEREST_RATE_PARAMS);
    let interest_rate_model = check_and_deploy(
        ProtocolContract::InterestRateModel,
        &registry,
        &network,
        interest_rate_model_initcode,
        &interest_rate_model_args,
        false, // blueprint
        &client,
    )
    .await?;

    // Blueprint contracts
    let pool_initcode = load_artifact(&artifacts_dir, ProtocolContract::Pool.designation())?;
    let pool_blueprint = check_and_deploy(
        ProtocolContract::Pool,
        &registry,
        &network,
        pool_initcode,
        &[],
        true, // blueprint
        &client,
    )
    .await?;

    // Factory
    let pool_factory_initcode =
        load_artifact(&artifacts_dir, ProtocolContract::PoolFactory.designation())?;
    let pool_factory_args = pool_factory_constructor_args(fee_receiver, owner);
    let pool_factory = check_and_deploy(
        ProtocolContract::PoolFactory,
        &registry,
        &network,
        pool_factory_initcode,
        &pool_factory_args,
        false, // blueprint
        &client,
    )
    .await?;

    let factory: PoolFactory = IPoolFactory::new(pool_factory, client.clone());
    send_tx(factory.set_pool_implementation(pool_blueprint)).await?;
    send_tx(factory.set_math_implementation(math)).await?;

    let pool_implementation = call_helper(factory.pool_implementation()).await?;
    let math_implementation = call_helper(factory.math_implementation()).await?;
    info!("Pool implementation address within factory: {pool_implementation}");
    info!("Math implementation address within factory: {math_implementation}");

    Ok(ProtocolDeployment {
        math,
        interest_rate_model,
        pool_blueprint,
        pool_factory,
    })
}

/// Deploy a mock token contract for each fixture in the static token list.
///
/// The mock tokens are not tracked in the deployment registry;
/// re-running deploys fresh copies.
pub async fn deploy_tokens(
    args: DeployTokensArgs,
    client: DynProvider,
) -> Result<Vec<TokenDeployment>, ScriptError> {
    let DeployTokensArgs { artifacts_dir } = args;
    let initcode = load_artifact(&artifacts_dir, ERC20_MOCK_ARTIFACT)?;

    let mut deployments = Vec::with_capacity(MOCK_TOKENS.len());
    for descriptor in MOCK_TOKENS {
        info!("Deploying {} ...", descriptor.name);

        let mut code = initcode.clone();
        code.extend_from_slice(&erc20_constructor_args(
            descriptor.name,
            descriptor.symbol,
            descriptor.decimals,
        ));

        let address = deploy_contract(code, &client).await?;
        info!("Deployed token at {address}");

        deployments.push(TokenDeployment {
            descriptor,
            address,
        });
    }

    Ok(deployments)
}
