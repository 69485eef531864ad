//! Type definitions used throughout the deploy scripts

use std::{
    collections::BTreeMap,
    fmt::{self, Display},
};

use alloy::primitives::Address;
use serde::Deserialize;

use crate::{
    constants::{
        INTEREST_RATE_MODEL_CONTRACT_KEY, MATH_CONTRACT_KEY, POOL_CONTRACT_KEY,
        POOL_FACTORY_CONTRACT_KEY,
    },
    errors::ScriptError,
};

/// The protocol contracts managed by the deploy scripts
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ProtocolContract {
    /// The fixed-point math library contract
    Math,
    /// The interest rate model contract
    InterestRateModel,
    /// The pool contract, deployed as a blueprint
    Pool,
    /// The pool factory contract
    PoolFactory,
}

impl ProtocolContract {
    /// The key under which the contract is tracked in the `deployments.json` file
    pub fn designation(&self) -> &'static str {
        match self {
            ProtocolContract::Math => MATH_CONTRACT_KEY,
            ProtocolContract::InterestRateModel => INTEREST_RATE_MODEL_CONTRACT_KEY,
            ProtocolContract::Pool => POOL_CONTRACT_KEY,
            ProtocolContract::PoolFactory => POOL_FACTORY_CONTRACT_KEY,
        }
    }
}

impl Display for ProtocolContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.designation())
    }
}

/// A mock token deployed as a test fixture
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TokenDescriptor {
    /// The token name
    pub name: &'static str,
    /// The token ticker symbol
    pub symbol: &'static str,
    /// The number of decimals the token is denominated in
    pub decimals: u8,
}

/// The deployment registry parsed from the `deployments.json` file,
/// mapping network -> contract designation -> deployed address.
///
/// A `null` (or absent) address means the contract has not yet been
/// deployed on that network. The registry is hand-edited between runs
/// and never written by the scripts.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct DeploymentRegistry(BTreeMap<String, BTreeMap<String, Option<Address>>>);

impl DeploymentRegistry {
    /// Look up the deployed address for the given designation on the given
    /// network, erroring if the network has no registry entry at all
    pub fn deployed_address(
        &self,
        network: &str,
        designation: &str,
    ) -> Result<Option<Address>, ScriptError> {
        let network_entries = self
            .0
            .get(network)
            .ok_or_else(|| ScriptError::UnknownNetwork(network.to_string()))?;

        Ok(network_entries.get(designation).copied().flatten())
    }
}

/// The addresses of the protocol contracts after a deploy pass
#[derive(Copy, Clone, Debug)]
pub struct ProtocolDeployment {
    /// The math library contract address
    pub math: Address,
    /// The interest rate model contract address
    pub interest_rate_model: Address,
    /// The pool blueprint address
    pub pool_blueprint: Address,
    /// The pool factory contract address
    pub pool_factory: Address,
}

/// A mock token deployed by the asset deployment loop
#[derive(Copy, Clone, Debug)]
pub struct TokenDeployment {
    /// The descriptor the token was deployed from
    pub descriptor: TokenDescriptor,
    /// The deployed token address
    pub address: Address,
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;

    use super::DeploymentRegistry;
    use crate::errors::ScriptError;

    /// A registry with one network and no deployed contracts
    const EMPTY_REGISTRY: &str = r#"{
        "sei:devnet": {
            "math": null,
            "interest_rate_model": null,
            "pool": null,
            "pool_factory": null
        }
    }"#;

    #[test]
    fn test_null_entry_is_undeployed() {
        let registry: DeploymentRegistry = serde_json::from_str(EMPTY_REGISTRY).unwrap();
        assert_eq!(
            registry.deployed_address("sei:devnet", "math").unwrap(),
            None
        );
    }

    #[test]
    fn test_absent_designation_is_undeployed() {
        let registry: DeploymentRegistry = serde_json::from_str(r#"{"sei:devnet": {}}"#).unwrap();
        assert_eq!(
            registry.deployed_address("sei:devnet", "math").unwrap(),
            None
        );
    }

    #[test]
    fn test_populated_entry_is_reused() {
        let registry: DeploymentRegistry = serde_json::from_str(
            r#"{
                "sei:devnet": {
                    "math": "0xd47378694be4a8ac129C1326f2982CC1661754CB",
                    "pool": null
                }
            }"#,
        )
        .unwrap();

        assert_eq!(
            registry.deployed_address("sei:devnet", "math").unwrap(),
            Some(address!("0xd47378694be4a8ac129C1326f2982CC1661754CB")),
        );
        assert_eq!(
            registry.deployed_address("sei:devnet", "pool").unwrap(),
            None
        );
    }

    #[test]
    fn test_unknown_network_errors() {
        let registry: DeploymentRegistry = serde_json::from_str(EMPTY_REGISTRY).unwrap();
        let res = registry.deployed_address("sei:mainnet", "math");
        assert!(matches!(res, Err(ScriptError::UnknownNetwork(_))));
    }

    #[test]
    fn test_empty_string_address_is_rejected() {
        // The registry uses explicit nulls for undeployed contracts; an
        // empty string is a malformed address and must fail to parse
        let res: Result<DeploymentRegistry, _> =
            serde_json::from_str(r#"{"sei:devnet": {"math": ""}}"#);
        assert!(res.is_err());
    }
}
