//! 地址模型
//!
//! 按链类型解析地址字符串，解析失败返回 None 而不是错误

use std::{fmt, str::FromStr};

use bitcoin::address::NetworkUnchecked;
use ethers::{types::Address as EthAddress, utils::to_checksum};

use super::chain_type::ChainType;
use crate::utils::AddressValidator;

/// 已解析的链上地址
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Address {
    /// Bitcoin 风格地址 (BTC / BCH legacy)
    Btc(bitcoin::Address),
    /// Ethereum 地址
    Eth(EthAddress),
}

impl Address {
    /// 解析 Bitcoin 风格地址，并要求地址属于给定网络
    pub fn create_as_btc(address: &str, network: bitcoin::Network) -> Option<Self> {
        let unchecked = bitcoin::Address::<NetworkUnchecked>::from_str(address).ok()?;
        unchecked.require_network(network).ok().map(Address::Btc)
    }

    /// 解析 Ethereum 地址（0x 前缀，混合大小写时校验 EIP-55）
    pub fn create_as_eth(address: &str) -> Option<Self> {
        if !AddressValidator::validate_evm_address(address) {
            return None;
        }

        let bytes = hex::decode(&address[2..]).ok()?;
        Some(Address::Eth(EthAddress::from_slice(&bytes)))
    }

    /// 按链类型分派解析
    ///
    /// 通用链的地址格式由链自身定义，这里始终返回 None。
    pub fn parse_for(chain_type: ChainType, address: &str, is_mainnet: bool) -> Option<Self> {
        match chain_type {
            ChainType::Btc | ChainType::Bch => {
                let network = if is_mainnet {
                    bitcoin::Network::Bitcoin
                } else {
                    bitcoin::Network::Testnet
                };
                Self::create_as_btc(address, network)
            }
            ChainType::Eth => Self::create_as_eth(address),
            ChainType::Gen => None,
        }
    }

    /// 地址格式所属的链类型
    ///
    /// 这是地址格式而不是网络的链类型：BCH 网络解析出的地址同样为 `ChainType::Btc`。
    pub fn chain_type(&self) -> ChainType {
        match self {
            Address::Btc(_) => ChainType::Btc,
            Address::Eth(_) => ChainType::Eth,
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Address::Btc(address) => write!(f, "{}", address),
            Address::Eth(address) => f.write_str(&to_checksum(address, None)),
        }
    }
}
