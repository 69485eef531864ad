//! Utilities for the deploy scripts

use std::{fs, path::Path};

use alloy::{
    contract::{CallBuilder, CallDecoder},
    network::{Ethereum, TransactionBuilder},
    primitives::{Address, U256},
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::{TransactionReceipt, TransactionRequest},
    signers::local::PrivateKeySigner,
    sol_types::{sol_data, SolType, SolValue},
    transports::http::reqwest::Url,
};
use tracing::info;

use crate::{
    constants::{ARTIFACT_EXTENSION, BLUEPRINT_PREAMBLE, DEPLOY_PREAMBLE_LEN},
    errors::ScriptError,
    types::{DeploymentRegistry, ProtocolContract},
};

/// The call builder type used by the deploy scripts
pub type ScriptCallBuilder<'a, C> = CallBuilder<&'a DynProvider, C, Ethereum>;

// ----------
// | Client |
// ----------

/// Set up the RPC client with which contracts are deployed,
/// signing transactions with the given private key
pub fn setup_client(priv_key: &str, rpc_url: &str) -> Result<DynProvider, ScriptError> {
    let url =
        Url::parse(rpc_url).map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let signer: PrivateKeySigner = priv_key
        .parse()
        .map_err(|e: alloy::signers::local::LocalSignerError| {
            ScriptError::ClientInitialization(e.to_string())
        })?;

    let provider = ProviderBuilder::new()
        .wallet(signer)
        .with_simple_nonce_management()
        .connect_http(url);

    Ok(DynProvider::new(provider))
}

// -------------------------
// | Registry & Artifacts |
// -------------------------

/// Read the deployment registry from the `deployments.json` file
pub fn read_deployments(path: &Path) -> Result<DeploymentRegistry, ScriptError> {
    let contents =
        fs::read_to_string(path).map_err(|e| ScriptError::ReadDeployments(e.to_string()))?;

    serde_json::from_str(&contents).map_err(|e| ScriptError::ReadDeployments(e.to_string()))
}

/// Decode a hex initcode artifact, as produced by `vyper -f bytecode`
pub fn decode_artifact(contents: &str) -> Result<Vec<u8>, ScriptError> {
    let trimmed = contents.trim();
    let stripped = trimmed.strip_prefix("0x").unwrap_or(trimmed);

    hex::decode(stripped).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))
}

/// Load a contract's compiled initcode from the artifacts directory
pub fn load_artifact(artifacts_dir: &Path, artifact: &str) -> Result<Vec<u8>, ScriptError> {
    let path = artifacts_dir.join(artifact).with_extension(ARTIFACT_EXTENSION);
    let contents = fs::read_to_string(&path)
        .map_err(|e| ScriptError::ArtifactParsing(format!("reading {}: {}", path.display(), e)))?;

    decode_artifact(&contents)
}

// --------------------
// | Constructor args |
// --------------------

/// ABI-encode the interest rate model constructor arguments:
/// the math contract address followed by the four rate parameters
pub fn interest_rate_model_constructor_args(math: Address, rates: [u64; 4]) -> Vec<u8> {
    let [r0, r1, r2, r3] = rates.map(U256::from);
    (math, r0, r1, r2, r3).abi_encode_params()
}

/// ABI-encode the pool factory constructor arguments:
/// the fee receiver address followed by the owner address
pub fn pool_factory_constructor_args(fee_receiver: Address, owner: Address) -> Vec<u8> {
    (fee_receiver, owner).abi_encode_params()
}

/// ABI-encode the mock ERC20 constructor arguments
pub fn erc20_constructor_args(name: &str, symbol: &str, decimals: u8) -> Vec<u8> {
    <(sol_data::String, sol_data::String, sol_data::Uint<8>)>::abi_encode_params(&(
        name, symbol, decimals,
    ))
}

// --------------
// | Deployment |
// --------------

/// Wrap initcode into an EIP-5202 blueprint deployment.
///
/// The deployed code is the blueprint preamble followed by the original
/// initcode, and the returned deployment initcode simply copies that
/// payload into place:
/// `PUSH2 <len> RETURNDATASIZE DUP2 PUSH1 0x0A RETURNDATASIZE CODECOPY RETURN`
pub fn blueprint_initcode(initcode: Vec<u8>) -> Result<Vec<u8>, ScriptError> {
    let mut blueprint = BLUEPRINT_PREAMBLE.to_vec();
    blueprint.extend_from_slice(&initcode);

    // The deploy preamble pushes the payload length with PUSH2
    let len: u16 = blueprint.len().try_into().map_err(|_| {
        ScriptError::BlueprintConstruction(format!(
            "blueprint code is {} bytes, exceeding the PUSH2 range",
            blueprint.len()
        ))
    })?;
    let [len_hi, len_lo] = len.to_be_bytes();

    let mut deploy_code = Vec::with_capacity(DEPLOY_PREAMBLE_LEN + blueprint.len());
    deploy_code.extend_from_slice(&[
        0x61, len_hi, len_lo, // PUSH2 <len>
        0x3D, // RETURNDATASIZE
        0x81, // DUP2
        0x60, 0x0A, // PUSH1 10
        0x3D, // RETURNDATASIZE
        0x39, // CODECOPY
        0xF3, // RETURN
    ]);
    deploy_code.extend_from_slice(&blueprint);

    Ok(deploy_code)
}

/// Deploy a contract from raw initcode, returning the deployed address
pub async fn deploy_contract(
    initcode: Vec<u8>,
    client: &DynProvider,
) -> Result<Address, ScriptError> {
    let tx = TransactionRequest::default().with_deploy_code(initcode);
    let receipt = client
        .send_transaction(tx)
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?
        .get_receipt()
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

    if !receipt.status() {
        return Err(ScriptError::ContractDeployment(format!(
            "deployment transaction {} reverted",
            receipt.transaction_hash
        )));
    }

    receipt.contract_address.ok_or_else(|| {
        ScriptError::ContractDeployment("no contract address in deployment receipt".to_string())
    })
}

/// Deploy the given protocol contract if the registry has no address for it
/// on the given network, otherwise attach to the registered address.
///
/// Deploying submits exactly one transaction; attaching submits none.
/// Constructor arguments are ignored for blueprint deployments, which
/// produce a template contract rather than a callable instance.
pub async fn check_and_deploy(
    contract: ProtocolContract,
    registry: &DeploymentRegistry,
    network: &str,
    initcode: Vec<u8>,
    constructor_args: &[u8],
    blueprint: bool,
    client: &DynProvider,
) -> Result<Address, ScriptError> {
    let designation = contract.designation();

    if let Some(address) = registry.deployed_address(network, designation)? {
        info!("Deployed {designation} contract exists. Using {address} ...");
        return Ok(address);
    }

    info!("Deploying {designation} contract ...");
    let initcode = if blueprint {
        blueprint_initcode(initcode)?
    } else {
        let mut code = initcode;
        code.extend_from_slice(constructor_args);
        code
    };

    let address = deploy_contract(initcode, client).await?;
    info!("Deployed! At: {address}.");

    Ok(address)
}

// ----------------
// | Transactions |
// ----------------

/// Send a transaction and wait for a successful receipt
pub async fn send_tx<C: CallDecoder>(
    tx: ScriptCallBuilder<'_, C>,
) -> Result<TransactionReceipt, ScriptError> {
    let receipt = tx
        .send()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?
        .get_receipt()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

    if !receipt.status() {
        return Err(ScriptError::ContractInteraction(format!(
            "transaction {} reverted",
            receipt.transaction_hash
        )));
    }

    Ok(receipt)
}

/// Send a call and return the decoded result
pub async fn call_helper<C: CallDecoder + Unpin>(
    call: ScriptCallBuilder<'_, C>,
) -> Result<C::CallOutput, ScriptError> {
    call.call()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))
}
