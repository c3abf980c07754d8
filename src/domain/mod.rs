//! Domain 模块
//!
//! 网络、币种、单位及链类型分派的领域模型

pub mod address;
pub mod association;
pub mod chain_type;
pub mod currency;
pub mod factory;
pub mod network;
pub mod unit;

// Re-exports
pub use address::Address;
pub use association::NetworkAssociation;
pub use chain_type::{ChainType, WalletManagerMode};
pub use currency::{Currency, CODE_AS_BCH, CODE_AS_BTC, CODE_AS_ETH};
pub use factory::NetworkFactory;
pub use network::Network;
pub use unit::Unit;
