//! Definitions of contract methods called during deployment

use alloy::{network::Ethereum, providers::DynProvider, sol};

sol! {
    /// The externally-callable surface of the pool factory used by the
    /// deploy scripts. Method names match the Vyper contract's externals.
    #[sol(rpc)]
    interface IPoolFactory {
        function set_pool_implementation(address implementation) external;
        function set_math_implementation(address implementation) external;
        function pool_implementation() external view returns (address);
        function math_implementation() external view returns (address);
    }

    /// The mock ERC20 contract deployed as a test fixture
    #[sol(rpc)]
    interface IERC20Mock {
        function name() external view returns (string memory);
        function symbol() external view returns (string memory);
        function decimals() external view returns (uint8);
        function mint(address account, uint256 amount) external;
        function totalSupply() external view returns (uint256);
        function balanceOf(address account) external view returns (uint256);
        function transfer(address to, uint256 amount) external returns (bool);
    }
}

/// A pool factory instance with the default generics
pub type PoolFactory = IPoolFactory::IPoolFactoryInstance<DynProvider, Ethereum>;

/// A mock ERC20 instance with the default generics
pub type ERC20Mock = IERC20Mock::IERC20MockInstance<DynProvider, Ethereum>;
