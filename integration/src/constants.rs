//! Constants used in the integration tests

use alloy::primitives::{address, Address};

/// The default hostport that a local Anvil devnet runs on
pub(crate) const DEFAULT_DEVNET_HOSTPORT: &str = "http://127.0.0.1:8545";

/// The first default private key that an Anvil devnet is seeded with
pub(crate) const DEFAULT_DEVNET_PKEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// The factory owner address used in the tests, the first default Anvil account
pub(crate) const TEST_OWNER_ADDRESS: Address =
    address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

/// The fee receiver address used in the tests, the second default Anvil account
pub(crate) const TEST_FEE_RECEIVER_ADDRESS: Address =
    address!("0x70997970C51812dc3A010C7d01b50e0d17dc79C8");
