//! Constants used in the deploy scripts

use crate::types::TokenDescriptor;

/// The math contract key in the `deployments.json` file
pub const MATH_CONTRACT_KEY: &str = "math";

/// The interest rate model contract key in the `deployments.json` file
pub const INTEREST_RATE_MODEL_CONTRACT_KEY: &str = "interest_rate_model";

/// The pool contract key in the `deployments.json` file
pub const POOL_CONTRACT_KEY: &str = "pool";

/// The pool factory contract key in the `deployments.json` file
pub const POOL_FACTORY_CONTRACT_KEY: &str = "pool_factory";

/// The artifact name of the mock ERC20 contract
pub const ERC20_MOCK_ARTIFACT: &str = "erc20";

/// The network deployed to when no network is given
pub const DEFAULT_NETWORK: &str = "sei:devnet";

/// The default path to the `deployments.json` file
pub const DEFAULT_DEPLOYMENTS_PATH: &str = "deployments.json";

/// The default directory containing the compiled contract artifacts
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// The extension of a compiled initcode artifact, as produced by
/// `vyper -f bytecode`
pub const ARTIFACT_EXTENSION: &str = "bin";

/// The four rate parameters passed to the interest rate model constructor
pub const INTEREST_RATE_PARAMS: [u64; 4] = [10_000, 10_000, 10_000, 10_000];

/// The EIP-5202 blueprint preamble: the execution-halting magic bytes
/// `0xFE71`, followed by version 0 with no data section
pub const BLUEPRINT_PREAMBLE: [u8; 3] = [0xFE, 0x71, 0x00];

/// The length of the deploy preamble prepended to blueprint code:
/// `PUSH2 <len> RETURNDATASIZE DUP2 PUSH1 0x0A RETURNDATASIZE CODECOPY RETURN`
pub const DEPLOY_PREAMBLE_LEN: usize = 10;

/// The mock tokens deployed as test fixtures
pub const MOCK_TOKENS: [TokenDescriptor; 3] = [
    TokenDescriptor {
        name: "USD Coin",
        symbol: "USDC",
        decimals: 18,
    },
    TokenDescriptor {
        name: "iSEI",
        symbol: "iSEI",
        decimals: 18,
    },
    TokenDescriptor {
        name: "Wrapped Bitcoin",
        symbol: "WBTC",
        decimals: 8,
    },
];
