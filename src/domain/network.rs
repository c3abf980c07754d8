//! 网络聚合
//!
//! 网络身份、当前高度以及 币种 → 单位关联 注册表的查询入口。
//! 构建完成后币种/单位拓扑不再变化，高度是唯一可变字段。

use std::{
    collections::HashSet,
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

use once_cell::sync::OnceCell;

use super::{
    address::Address,
    association::NetworkAssociation,
    chain_type::{ChainType, WalletManagerMode},
    currency::Currency,
    unit::Unit,
};
use crate::infrastructure::core_network::NetworkCore;

/// 区块链网络
///
/// 身份字段从原生句柄惰性派生且只计算一次；相等性基于原生句柄本身，
/// 而不是 uids/name 字符串。
#[derive(Clone)]
pub struct Network {
    core: Arc<dyn NetworkCore>,
    chain_type: OnceCell<ChainType>,
    uids: OnceCell<String>,
    name: OnceCell<String>,
    is_mainnet: OnceCell<bool>,
    currency: OnceCell<Option<Currency>>,
    currencies: OnceCell<Vec<Currency>>,
}

impl Network {
    /// 基于原生句柄构建网络，并按迭代顺序登记所有币种关联
    ///
    /// 调用方需保证币种代码唯一、关联单位隶属于对应币种
    /// （[`crate::domain::NetworkFactory`] 会先校验）。
    pub fn from_core<I>(core: Arc<dyn NetworkCore>, associations: I) -> Self
    where
        I: IntoIterator<Item = (Currency, NetworkAssociation)>,
    {
        for (currency, association) in associations {
            core.add_currency(
                &currency,
                association.base_unit(),
                association.default_unit(),
            );

            for unit in association.units() {
                core.add_currency_unit(&currency, unit);
            }

            tracing::debug!(
                currency = %currency.code,
                base_unit = %association.base_unit(),
                default_unit = %association.default_unit(),
                units = association.units().len(),
                "Registered network currency"
            );
        }

        Self {
            core,
            chain_type: OnceCell::new(),
            uids: OnceCell::new(),
            name: OnceCell::new(),
            is_mainnet: OnceCell::new(),
            currency: OnceCell::new(),
            currencies: OnceCell::new(),
        }
    }

    pub fn uids(&self) -> &str {
        self.uids.get_or_init(|| self.core.uids())
    }

    pub fn name(&self) -> &str {
        self.name.get_or_init(|| self.core.name())
    }

    pub fn is_mainnet(&self) -> bool {
        *self.is_mainnet.get_or_init(|| self.core.is_mainnet())
    }

    pub fn chain_type(&self) -> ChainType {
        *self.chain_type.get_or_init(|| self.core.chain_type())
    }

    /// 当前区块高度（不缓存）
    pub fn height(&self) -> u64 {
        self.core.height()
    }

    /// 更新区块高度
    ///
    /// 不校验单调性，由同步组件保证。
    pub fn set_height(&self, height: u64) {
        self.core.set_height(height);
        tracing::debug!(network = %self.uids(), height, "Network height updated");
    }

    /// 网络原生币种
    pub fn currency(&self) -> Option<&Currency> {
        self.currency.get_or_init(|| self.core.currency()).as_ref()
    }

    /// 所有已登记币种（每次返回独立副本）
    ///
    /// 任一位置取不到币种时返回空集合，不返回部分结果。
    pub fn currencies(&self) -> HashSet<Currency> {
        self.registered_currencies()
            .map(|currencies| currencies.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// 完整的币种列表只缓存一次；不完整时不缓存
    fn registered_currencies(&self) -> Option<&[Currency]> {
        if let Some(currencies) = self.currencies.get() {
            return Some(currencies.as_slice());
        }

        let count = self.core.currency_count();
        let currencies: Option<Vec<Currency>> =
            (0..count).map(|index| self.core.currency_at(index)).collect();

        match currencies {
            Some(currencies) => Some(self.currencies.get_or_init(|| currencies).as_slice()),
            None => {
                tracing::warn!(
                    network = %self.uids(),
                    count,
                    "Currency registry is missing an indexed currency"
                );
                None
            }
        }
    }

    /// 按币种代码查找
    pub fn currency_by_code(&self, code: &str) -> Option<Currency> {
        self.registered_currencies()?
            .iter()
            .find(|currency| currency.code == code)
            .cloned()
    }

    pub fn has_currency(&self, currency: &Currency) -> bool {
        self.core.has_currency(currency)
    }

    pub fn base_unit_for(&self, currency: &Currency) -> Option<Unit> {
        if !self.has_currency(currency) {
            return None;
        }
        self.core.unit_as_base(currency)
    }

    pub fn default_unit_for(&self, currency: &Currency) -> Option<Unit> {
        if !self.has_currency(currency) {
            return None;
        }
        self.core.unit_as_default(currency)
    }

    /// 币种的全部单位
    ///
    /// 任一位置取不到单位时整体返回 None，不返回部分结果。
    pub fn units_for(&self, currency: &Currency) -> Option<HashSet<Unit>> {
        if !self.has_currency(currency) {
            return None;
        }

        let count = self.core.unit_count(currency);
        let units: Option<HashSet<Unit>> = (0..count)
            .map(|index| self.core.unit_at(currency, index))
            .collect();

        if units.is_none() {
            tracing::warn!(
                network = %self.uids(),
                currency = %currency.code,
                count,
                "Unit registry is missing an indexed unit"
            );
        }

        units
    }

    /// 币种是否包含该单位；币种未登记时返回 None
    pub fn has_unit_for(&self, currency: &Currency, unit: &Unit) -> Option<bool> {
        self.units_for(currency).map(|units| units.contains(unit))
    }

    pub fn supported_modes(&self) -> Vec<WalletManagerMode> {
        self.chain_type().supported_modes()
    }

    pub fn supports_mode(&self, mode: WalletManagerMode) -> bool {
        self.supported_modes().contains(&mode)
    }

    /// 按本网络的链类型解析地址
    pub fn address_for(&self, address: &str) -> Option<Address> {
        Address::parse_for(self.chain_type(), address, self.is_mainnet())
    }

    /// 原生句柄，仅供同层适配代码使用
    pub fn core(&self) -> &Arc<dyn NetworkCore> {
        &self.core
    }

    fn core_ptr(&self) -> *const () {
        Arc::as_ptr(&self.core).cast::<()>()
    }
}

impl PartialEq for Network {
    fn eq(&self, other: &Self) -> bool {
        self.core_ptr() == other.core_ptr()
    }
}

impl Eq for Network {}

impl Hash for Network {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.core_ptr().hash(state);
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Debug for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Network")
            .field("uids", &self.uids())
            .field("name", &self.name())
            .field("chain_type", &self.chain_type())
            .field("is_mainnet", &self.is_mainnet())
            .field("height", &self.height())
            .finish()
    }
}
