//! 币种模型

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use serde::{Deserialize, Serialize};

/// Bitcoin 币种代码
pub const CODE_AS_BTC: &str = "btc";
/// Bitcoin Cash 币种代码
pub const CODE_AS_BCH: &str = "bch";
/// Ethereum 币种代码
pub const CODE_AS_ETH: &str = "eth";

/// 币种
///
/// 相等性与哈希仅基于 `code`，同一网络内币种代码唯一。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Currency {
    /// 全局唯一标识
    pub uids: String,
    /// 币种代码 (btc, eth, ...)
    pub code: String,
    /// 币种名称
    pub name: String,
    /// 币种类型 (native, erc20, ...)
    #[serde(rename = "type")]
    pub currency_type: String,
    /// 发行方（如 ERC20 合约地址）
    #[serde(default)]
    pub issuer: Option<String>,
}

impl Currency {
    pub fn new(
        uids: impl Into<String>,
        name: impl Into<String>,
        code: impl Into<String>,
        currency_type: impl Into<String>,
        issuer: Option<String>,
    ) -> Self {
        Self {
            uids: uids.into(),
            code: code.into(),
            name: name.into(),
            currency_type: currency_type.into(),
            issuer,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_equality_by_code() {
        let a = Currency::new("bitcoin-mainnet:__native__", "Bitcoin", "btc", "native", None);
        let b = Currency::new("other-uids", "BTC (alias)", "btc", "native", None);
        let c = Currency::new("ethereum-mainnet:__native__", "Ethereum", "eth", "native", None);

        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_currency_serde() {
        let usdt = Currency::new(
            "ethereum-mainnet:0xdac17f958d2ee523a2206206994597c13d831ec7",
            "Tether",
            "usdt",
            "erc20",
            Some("0xdac17f958d2ee523a2206206994597c13d831ec7".to_string()),
        );
        let json = serde_json::to_value(&usdt).unwrap();
        assert_eq!(json["type"], "erc20");

        let back: Currency = serde_json::from_value(json).unwrap();
        assert_eq!(back.issuer, usdt.issuer);
    }
}
