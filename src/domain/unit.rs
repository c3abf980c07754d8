//! 计量单位模型
//!
//! 单位隶属于唯一币种，派生单位通过 `decimals` 相对基础单位缩放

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use serde::{Deserialize, Serialize};

use super::currency::Currency;

/// 计量单位
///
/// 相等性与哈希基于 `uids`。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    /// 单位唯一标识
    pub uids: String,
    /// 单位名称 (satoshi, bitcoin, wei, ether, ...)
    pub name: String,
    /// 显示符号
    pub symbol: String,
    /// 相对基础单位的小数位数
    pub decimals: u8,
    /// 所属币种
    pub currency: Currency,
    /// 基础单位（基础单位自身为 None）
    #[serde(default)]
    pub base: Option<Box<Unit>>,
}

impl Unit {
    /// 创建基础单位（最小不可分单位）
    pub fn create_as_base(
        currency: &Currency,
        uids: impl Into<String>,
        name: impl Into<String>,
        symbol: impl Into<String>,
    ) -> Self {
        Self {
            uids: uids.into(),
            name: name.into(),
            symbol: symbol.into(),
            decimals: 0,
            currency: currency.clone(),
            base: None,
        }
    }

    /// 创建派生单位
    pub fn create(
        currency: &Currency,
        uids: impl Into<String>,
        name: impl Into<String>,
        symbol: impl Into<String>,
        base: &Unit,
        decimals: u8,
    ) -> Self {
        Self {
            uids: uids.into(),
            name: name.into(),
            symbol: symbol.into(),
            decimals,
            currency: currency.clone(),
            base: Some(Box::new(base.clone())),
        }
    }

    pub fn is_base(&self) -> bool {
        self.base.is_none()
    }

    /// 返回基础单位；基础单位返回自身
    pub fn base_unit(&self) -> &Unit {
        self.base.as_deref().unwrap_or(self)
    }

    pub fn has_currency(&self, currency: &Currency) -> bool {
        &self.currency == currency
    }

    /// 同一币种的单位可互相换算
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.currency == other.currency
    }
}

impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        self.uids == other.uids
    }
}

impl Eq for Unit {}

impl Hash for Unit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.uids.hash(state);
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn btc() -> Currency {
        Currency::new("bitcoin-mainnet:__native__", "Bitcoin", "btc", "native", None)
    }

    #[test]
    fn test_base_and_derived_units() {
        let currency = btc();
        let sat = Unit::create_as_base(&currency, "btc:sat", "satoshi", "SAT");
        let bitcoin = Unit::create(&currency, "btc:btc", "bitcoin", "B", &sat, 8);

        assert!(sat.is_base());
        assert_eq!(sat.base_unit(), &sat);
        assert!(!bitcoin.is_base());
        assert_eq!(bitcoin.base_unit(), &sat);
        assert_eq!(bitcoin.decimals, 8);
        assert!(bitcoin.is_compatible(&sat));
        assert!(bitcoin.has_currency(&currency));
    }

    #[test]
    fn test_units_of_other_currency_are_incompatible() {
        let eth = Currency::new("ethereum-mainnet:__native__", "Ethereum", "eth", "native", None);
        let sat = Unit::create_as_base(&btc(), "btc:sat", "satoshi", "SAT");
        let wei = Unit::create_as_base(&eth, "eth:wei", "wei", "wei");

        assert!(!sat.is_compatible(&wei));
        assert!(!wei.has_currency(&btc()));
    }

    #[test]
    fn test_equality_by_uids() {
        let currency = btc();
        let a = Unit::create_as_base(&currency, "btc:sat", "satoshi", "SAT");
        let b = Unit::create_as_base(&currency, "btc:sat", "sat", "s");
        assert_eq!(a, b);
    }
}
