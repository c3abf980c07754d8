//! 配置管理模块
//! 支持从环境变量和配置文件加载配置

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub engine: EngineConfig,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String, // "json" or "text"
}

/// 原生引擎配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// 原生层认可的 ETH 网络
    #[serde(default = "default_eth_networks")]
    pub eth_networks: Vec<EthNetworkConfig>,
}

/// ETH 网络 uids 与 EIP-155 链 ID 的映射
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EthNetworkConfig {
    pub uids: String,
    pub chain_id: u64,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            format: std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".into()),
        }
    }
}

fn default_eth_networks() -> Vec<EthNetworkConfig> {
    [
        ("ethereum-mainnet", 1),
        ("ethereum-ropsten", 3),
        ("ethereum-rinkeby", 4),
        ("ethereum-goerli", 5),
        ("ethereum-sepolia", 11155111),
    ]
    .into_iter()
    .map(|(uids, chain_id)| EthNetworkConfig {
        uids: uids.to_string(),
        chain_id,
    })
    .collect()
}

/// 解析 `ETH_EXTRA_NETWORKS`，格式: `uids=chain_id,uids=chain_id`
fn parse_eth_networks(value: &str) -> Vec<EthNetworkConfig> {
    value
        .split(',')
        .filter_map(|entry| {
            let (uids, chain_id) = entry.trim().split_once('=')?;
            let chain_id = chain_id.trim().parse().ok()?;
            Some(EthNetworkConfig {
                uids: uids.trim().to_string(),
                chain_id,
            })
        })
        .collect()
}

impl Default for EngineConfig {
    fn default() -> Self {
        let mut eth_networks = default_eth_networks();
        if let Ok(extra) = std::env::var("ETH_EXTRA_NETWORKS") {
            eth_networks.extend(parse_eth_networks(&extra));
        }
        Self { eth_networks }
    }
}

impl EngineConfig {
    /// 查找 ETH 网络的链 ID，未知网络返回 None
    pub fn eth_chain_id(&self, uids: &str) -> Option<u64> {
        self.eth_networks
            .iter()
            .find(|network| network.uids == uids)
            .map(|network| network.chain_id)
    }
}

impl Config {
    /// 从环境变量加载配置
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            logging: LoggingConfig::default(),
            engine: EngineConfig::default(),
        })
    }

    /// 从配置文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: Config =
            toml::from_str(&content).with_context(|| "Failed to parse config file as TOML")?;

        Ok(config)
    }

    /// 从环境变量和配置文件合并加载（配置文件优先级更高）
    pub fn from_env_and_file<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let mut config = Self::from_env()?;

        if let Some(path) = path {
            if path.as_ref().exists() {
                config = Self::from_file(path)?;
            }
        }

        Ok(config)
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<()> {
        // 验证日志级别
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            anyhow::bail!("LOG_LEVEL must be one of: {:?}", valid_levels);
        }

        // 验证日志格式
        if self.logging.format != "json" && self.logging.format != "text" {
            anyhow::bail!("LOG_FORMAT must be 'json' or 'text'");
        }

        // 验证 ETH 网络表
        let mut seen = std::collections::HashSet::new();
        for network in &self.engine.eth_networks {
            if network.uids.is_empty() {
                anyhow::bail!("ETH network with chain_id {} has empty uids", network.chain_id);
            }
            if !seen.insert(network.uids.as_str()) {
                anyhow::bail!("Duplicate ETH network uids: {}", network.uids);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_default_eth_networks() {
        let engine = EngineConfig {
            eth_networks: default_eth_networks(),
        };
        assert_eq!(engine.eth_chain_id("ethereum-mainnet"), Some(1));
        assert_eq!(engine.eth_chain_id("ethereum-sepolia"), Some(11155111));
        assert_eq!(engine.eth_chain_id("ethereum-kovan"), None);
    }

    #[test]
    fn test_parse_eth_networks() {
        let parsed = parse_eth_networks("ethereum-holesky=17000, bad-entry, base-mainnet = 8453");
        assert_eq!(
            parsed,
            vec![
                EthNetworkConfig {
                    uids: "ethereum-holesky".into(),
                    chain_id: 17000,
                },
                EthNetworkConfig {
                    uids: "base-mainnet".into(),
                    chain_id: 8453,
                },
            ]
        );
    }

    #[test]
    fn test_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[logging]
level = "debug"
format = "json"

[[engine.eth_networks]]
uids = "ethereum-mainnet"
chain_id = 1

[[engine.eth_networks]]
uids = "ethereum-holesky"
chain_id = 17000
"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.engine.eth_networks.len(), 2);
        assert_eq!(config.engine.eth_chain_id("ethereum-holesky"), Some(17000));
        assert_eq!(config.engine.eth_chain_id("ethereum-sepolia"), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_engine_section_defaults_when_omitted() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"info\"\nformat = \"text\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.engine.eth_chain_id("ethereum-mainnet"), Some(1));
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config {
            logging: LoggingConfig {
                level: "info".into(),
                format: "text".into(),
            },
            engine: EngineConfig {
                eth_networks: default_eth_networks(),
            },
        };
        assert!(config.validate().is_ok());

        config.logging.format = "xml".into();
        assert!(config.validate().is_err());

        config.logging.format = "json".into();
        config.engine.eth_networks.push(EthNetworkConfig {
            uids: "ethereum-mainnet".into(),
            chain_id: 1,
        });
        assert!(config.validate().is_err());
    }
}
