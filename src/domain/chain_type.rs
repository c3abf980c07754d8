//! 链类型模块
//!
//! 定义封闭的链类型集合以及按链类型分派的钱包管理模式

use std::fmt;

use serde::{Deserialize, Serialize};

/// 链类型（封闭集合）
///
/// 新增变体时必须同时扩展 [`ChainType::supported_modes`] 与
/// [`crate::domain::Address::parse_for`]，两处均为穷尽匹配。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainType {
    /// Bitcoin
    Btc,
    /// Bitcoin Cash
    Bch,
    /// Ethereum
    Eth,
    /// 通用链（地址格式由外部定义）
    Gen,
}

/// 钱包管理器同步模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WalletManagerMode {
    /// 仅使用 API 同步与提交
    ApiOnly,
    /// API 同步，P2P 提交
    ApiWithP2pSubmit,
    /// P2P 同步，API 辅助
    P2pWithApiSync,
    /// 仅使用 P2P
    P2pOnly,
}

impl ChainType {
    /// 该链类型支持的钱包管理模式
    pub fn supported_modes(self) -> Vec<WalletManagerMode> {
        match self {
            ChainType::Btc | ChainType::Bch => vec![
                WalletManagerMode::P2pOnly,
                WalletManagerMode::ApiWithP2pSubmit,
            ],
            ChainType::Eth => vec![
                WalletManagerMode::ApiOnly,
                WalletManagerMode::ApiWithP2pSubmit,
            ],
            ChainType::Gen => vec![WalletManagerMode::ApiOnly],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ChainType::Btc => "btc",
            ChainType::Bch => "bch",
            ChainType::Eth => "eth",
            ChainType::Gen => "gen",
        }
    }
}

impl fmt::Display for ChainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
