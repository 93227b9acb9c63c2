//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use dns_migrator_provider::ProviderError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// 配置缺失或取值非法
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 域名清单文件无法读取或格式错误
    #[error("Listing file error: {0}")]
    ListingFileError(String),

    /// Zone 缓存读写失败
    #[error("Storage error: {0}")]
    StorageError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// 域名不能安全地映射为缓存文件名
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    /// Provider error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, rejected zone, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ConfigError(_) | Self::InvalidDomainName(_) => true,
            Self::Provider(e) => e.is_expected(),
            Self::ListingFileError(_) | Self::StorageError(_) | Self::SerializationError(_) => {
                false
            }
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
