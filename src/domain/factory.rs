//! 网络工厂
//!
//! 按原生币种代码选择原生构造器，并在构建时登记全部币种关联

use std::{collections::HashSet, sync::Arc};

use super::{
    association::NetworkAssociation,
    currency::{Currency, CODE_AS_BCH, CODE_AS_BTC, CODE_AS_ETH},
    network::Network,
};
use crate::{
    config::EngineConfig,
    error::{NetworkError, Result},
    infrastructure::core_network::{CoreNetwork, NetworkCore},
};

/// 网络工厂
#[derive(Debug, Clone, Default)]
pub struct NetworkFactory {
    config: EngineConfig,
}

impl NetworkFactory {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// 创建网络
    ///
    /// # Arguments
    /// * `currency` - 原生币种，其代码决定链类型 (btc / bch / eth / 其他为通用链)
    /// * `associations` - 币种关联，按迭代顺序登记，币种代码不可重复
    ///
    /// # Errors
    /// * `UnsupportedEthNetwork` - ETH 网络 uids 不在已知列表中
    /// * `DuplicateCurrency` / `UnitCurrencyMismatch` - 关联数据不合法
    pub fn create<I>(
        &self,
        uids: &str,
        name: &str,
        is_mainnet: bool,
        currency: &Currency,
        height: u64,
        associations: I,
    ) -> Result<Network>
    where
        I: IntoIterator<Item = (Currency, NetworkAssociation)>,
    {
        let associations: Vec<_> = associations.into_iter().collect();
        Self::validate_associations(&associations)?;

        let core = match currency.code.as_str() {
            CODE_AS_BTC => CoreNetwork::create_as_btc(uids, name, is_mainnet),
            CODE_AS_BCH => CoreNetwork::create_as_bch(uids, name, is_mainnet),
            CODE_AS_ETH => {
                let chain_id = self.config.eth_chain_id(uids);
                CoreNetwork::create_as_eth(uids, name, is_mainnet, chain_id).ok_or_else(|| {
                    tracing::warn!(uids, "Rejected unsupported ETH network");
                    NetworkError::UnsupportedEthNetwork(uids.to_string())
                })?
            }
            _ => CoreNetwork::create_as_gen(uids, name),
        };

        core.set_height(height);
        core.set_currency(currency);

        let network = Network::from_core(Arc::new(core), associations);

        tracing::info!(
            uids = %network.uids(),
            chain_type = %network.chain_type(),
            is_mainnet = network.is_mainnet(),
            height,
            currencies = network.currencies().len(),
            "Network created"
        );

        Ok(network)
    }

    fn validate_associations(associations: &[(Currency, NetworkAssociation)]) -> Result<()> {
        let mut codes = HashSet::with_capacity(associations.len());

        for (currency, association) in associations {
            if !codes.insert(currency.code.as_str()) {
                return Err(NetworkError::DuplicateCurrency(currency.code.clone()));
            }
            association.ensure_currency(currency)?;
        }

        Ok(())
    }
}
