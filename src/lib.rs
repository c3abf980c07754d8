//! netcore - 区块链网络注册表
//!
//! 网络身份、币种与计量单位关联，以及按链类型分派的模式与地址解析

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

// 重新导出常用类型
pub use error::{NetworkError, NetworkErrorCode};

pub mod prelude {
    pub use crate::{
        config::{Config, EngineConfig},
        domain::{
            Address, ChainType, Currency, Network, NetworkAssociation, NetworkFactory, Unit,
            WalletManagerMode,
        },
        error::{NetworkError, NetworkErrorCode},
        infrastructure::{CoreNetwork, NetworkCore},
    };
}
