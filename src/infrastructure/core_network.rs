//! 原生网络句柄
//!
//! `NetworkCore` 是聚合层调用的原生引擎接口；`CoreNetwork` 是其内存实现，
//! 按链类型构造并保存币种/单位注册表

use std::{
    fmt,
    sync::{
        atomic::{AtomicU64, Ordering},
        RwLock, RwLockReadGuard, RwLockWriteGuard,
    },
};

use crate::domain::{ChainType, Currency, Unit};

/// 原生网络接口
///
/// 所有方法通过 `&self` 调用，实现者负责内部同步。
pub trait NetworkCore: Send + Sync + fmt::Debug {
    fn uids(&self) -> String;
    fn name(&self) -> String;
    fn is_mainnet(&self) -> bool;
    fn chain_type(&self) -> ChainType;

    fn height(&self) -> u64;
    fn set_height(&self, height: u64);

    fn currency(&self) -> Option<Currency>;
    fn set_currency(&self, currency: &Currency);

    fn add_currency(&self, currency: &Currency, base_unit: &Unit, default_unit: &Unit);
    fn add_currency_unit(&self, currency: &Currency, unit: &Unit);

    fn currency_count(&self) -> usize;
    fn currency_at(&self, index: usize) -> Option<Currency>;
    fn has_currency(&self, currency: &Currency) -> bool;

    fn unit_count(&self, currency: &Currency) -> usize;
    fn unit_at(&self, currency: &Currency, index: usize) -> Option<Unit>;
    fn unit_as_base(&self, currency: &Currency) -> Option<Unit>;
    fn unit_as_default(&self, currency: &Currency) -> Option<Unit>;
}

#[derive(Debug)]
struct CurrencyEntry {
    currency: Currency,
    base_unit: Unit,
    default_unit: Unit,
    units: Vec<Unit>,
}

#[derive(Debug, Default)]
struct Registry {
    currency: Option<Currency>,
    entries: Vec<CurrencyEntry>,
}

impl Registry {
    fn entry(&self, currency: &Currency) -> Option<&CurrencyEntry> {
        self.entries.iter().find(|e| &e.currency == currency)
    }

    fn entry_mut(&mut self, currency: &Currency) -> Option<&mut CurrencyEntry> {
        self.entries.iter_mut().find(|e| &e.currency == currency)
    }
}

/// 内存原生网络
pub struct CoreNetwork {
    uids: String,
    name: String,
    is_mainnet: bool,
    chain_type: ChainType,
    chain_id: Option<u64>,
    height: AtomicU64,
    registry: RwLock<Registry>,
}

impl CoreNetwork {
    fn new(
        uids: &str,
        name: &str,
        is_mainnet: bool,
        chain_type: ChainType,
        chain_id: Option<u64>,
    ) -> Self {
        Self {
            uids: uids.to_string(),
            name: name.to_string(),
            is_mainnet,
            chain_type,
            chain_id,
            height: AtomicU64::new(0),
            registry: RwLock::new(Registry::default()),
        }
    }

    pub fn create_as_btc(uids: &str, name: &str, is_mainnet: bool) -> Self {
        Self::new(uids, name, is_mainnet, ChainType::Btc, None)
    }

    pub fn create_as_bch(uids: &str, name: &str, is_mainnet: bool) -> Self {
        Self::new(uids, name, is_mainnet, ChainType::Bch, None)
    }

    /// 创建 ETH 网络；`chain_id` 为 None 表示原生层不认识该网络
    pub fn create_as_eth(
        uids: &str,
        name: &str,
        is_mainnet: bool,
        chain_id: Option<u64>,
    ) -> Option<Self> {
        chain_id.map(|id| Self::new(uids, name, is_mainnet, ChainType::Eth, Some(id)))
    }

    /// 通用网络没有主网/测试网之分，按主网处理
    pub fn create_as_gen(uids: &str, name: &str) -> Self {
        Self::new(uids, name, true, ChainType::Gen, None)
    }

    /// EIP-155 链 ID（仅 ETH 网络）
    pub fn chain_id(&self) -> Option<u64> {
        self.chain_id
    }

    // 注册表写入只发生在构建阶段，中毒时直接取回内部数据
    fn read(&self) -> RwLockReadGuard<'_, Registry> {
        self.registry.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Registry> {
        self.registry.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl fmt::Debug for CoreNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoreNetwork")
            .field("uids", &self.uids)
            .field("chain_type", &self.chain_type)
            .field("is_mainnet", &self.is_mainnet)
            .field("height", &self.height())
            .finish()
    }
}

impl NetworkCore for CoreNetwork {
    fn uids(&self) -> String {
        self.uids.clone()
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn is_mainnet(&self) -> bool {
        self.is_mainnet
    }

    fn chain_type(&self) -> ChainType {
        self.chain_type
    }

    fn height(&self) -> u64 {
        self.height.load(Ordering::Acquire)
    }

    fn set_height(&self, height: u64) {
        self.height.store(height, Ordering::Release);
    }

    fn currency(&self) -> Option<Currency> {
        self.read().currency.clone()
    }

    fn set_currency(&self, currency: &Currency) {
        self.write().currency = Some(currency.clone());
    }

    fn add_currency(&self, currency: &Currency, base_unit: &Unit, default_unit: &Unit) {
        let mut registry = self.write();
        if registry.entry(currency).is_some() {
            return;
        }

        let mut units = vec![base_unit.clone()];
        if default_unit != base_unit {
            units.push(default_unit.clone());
        }

        registry.entries.push(CurrencyEntry {
            currency: currency.clone(),
            base_unit: base_unit.clone(),
            default_unit: default_unit.clone(),
            units,
        });
    }

    fn add_currency_unit(&self, currency: &Currency, unit: &Unit) {
        let mut registry = self.write();
        if let Some(entry) = registry.entry_mut(currency) {
            if !entry.units.contains(unit) {
                entry.units.push(unit.clone());
            }
        }
    }

    fn currency_count(&self) -> usize {
        self.read().entries.len()
    }

    fn currency_at(&self, index: usize) -> Option<Currency> {
        self.read().entries.get(index).map(|e| e.currency.clone())
    }

    fn has_currency(&self, currency: &Currency) -> bool {
        self.read().entry(currency).is_some()
    }

    fn unit_count(&self, currency: &Currency) -> usize {
        self.read().entry(currency).map_or(0, |e| e.units.len())
    }

    fn unit_at(&self, currency: &Currency, index: usize) -> Option<Unit> {
        self.read()
            .entry(currency)
            .and_then(|e| e.units.get(index).cloned())
    }

    fn unit_as_base(&self, currency: &Currency) -> Option<Unit> {
        self.read().entry(currency).map(|e| e.base_unit.clone())
    }

    fn unit_as_default(&self, currency: &Currency) -> Option<Unit> {
        self.read().entry(currency).map(|e| e.default_unit.clone())
    }
}
