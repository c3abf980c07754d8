use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkErrorCode {
    ChainNotSupported,
    DuplicateCurrency,
    InvalidParameter,
}

impl NetworkErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            NetworkErrorCode::ChainNotSupported => "chain_not_supported",
            NetworkErrorCode::DuplicateCurrency => "duplicate_currency",
            NetworkErrorCode::InvalidParameter => "invalid_parameter",
        }
    }
}

/// 网络构建错误
///
/// 查询类操作的“未找到”使用 `Option` 表达，不会出现在这里。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// 原生层拒绝创建 ETH 网络
    #[error("Unsupported ETH network: {0}")]
    UnsupportedEthNetwork(String),

    #[error("Duplicate currency code in network associations: {0}")]
    DuplicateCurrency(String),

    #[error("Unit {unit} does not belong to currency {currency}")]
    UnitCurrencyMismatch { currency: String, unit: String },
}

impl NetworkError {
    pub fn code(&self) -> NetworkErrorCode {
        match self {
            NetworkError::UnsupportedEthNetwork(_) => NetworkErrorCode::ChainNotSupported,
            NetworkError::DuplicateCurrency(_) => NetworkErrorCode::DuplicateCurrency,
            NetworkError::UnitCurrencyMismatch { .. } => NetworkErrorCode::InvalidParameter,
        }
    }
}

pub type Result<T> = std::result::Result<T, NetworkError>;
