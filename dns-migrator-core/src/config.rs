//! 迁移配置
//!
//! 配置只在入口处从环境变量构建一次，之后以 [`MigrationConfig`] 显式传入各组件；
//! 业务逻辑不直接读取环境变量。

use std::path::PathBuf;
use std::time::Duration;

use dns_migrator_provider::ClientOptions;

use crate::error::{CoreError, CoreResult};
use crate::services::{DomainSource, TransformOptions};

pub const ENV_SOURCE_API_KEY: &str = "NEOSTRADA_API_KEY";
pub const ENV_DESTINATION_API_KEY: &str = "OPENPROVIDER_API_KEY";
pub const ENV_LISTING_FILE: &str = "JSON_FILE";
pub const ENV_OUTPUT_DIR: &str = "OUTPUT_DIR";
pub const ENV_SOURCE_API_URL: &str = "NEOSTRADA_API_URL";
pub const ENV_DESTINATION_API_URL: &str = "OPENPROVIDER_API_URL";
pub const ENV_NORMALIZE_ROOT_APEX: &str = "NORMALIZE_ROOT_APEX";
pub const ENV_SPAMEXPERTS_OFF: &str = "SPAMEXPERTS_OFF";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "HTTP_TIMEOUT_SECS";
pub const ENV_CONCURRENCY: &str = "MIGRATION_CONCURRENCY";

/// 默认输出目录
pub const DEFAULT_OUTPUT_DIR: &str = "./output";
/// 默认请求超时（秒）
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// 一次迁移运行所需的全部配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationConfig {
    /// 源注册商 (Neostrada) API token
    pub source_api_key: String,
    /// 目标注册商 (Openprovider) API token，`list-domains` 不需要
    pub destination_api_key: Option<String>,
    /// 域名清单文件；为空时从源 API 获取
    pub listing_file: Option<PathBuf>,
    /// zone 文件输出/缓存目录
    pub output_dir: PathBuf,
    /// 源 API base URL 覆盖
    pub source_api_url: Option<String>,
    /// 目标 API base URL 覆盖
    pub destination_api_url: Option<String>,
    /// 记录名等于域名时改写为空字符串
    pub normalize_root_apex: bool,
    /// 创建 zone 时关闭 `SpamExperts`
    pub disable_spamexperts: bool,
    /// 单个 HTTP 请求超时
    pub request_timeout: Duration,
    /// 同时处理的域名数
    pub concurrency: usize,
}

impl MigrationConfig {
    /// 从进程环境变量构建配置
    pub fn from_env() -> CoreResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源构建配置
    ///
    /// 空字符串视同未设置。
    pub fn from_lookup<F>(lookup: F) -> CoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let source_api_key = get(ENV_SOURCE_API_KEY)
            .ok_or_else(|| CoreError::ConfigError(format!("{ENV_SOURCE_API_KEY} is not set")))?;

        let timeout_secs = match get(ENV_HTTP_TIMEOUT_SECS) {
            Some(v) => parse_positive(ENV_HTTP_TIMEOUT_SECS, &v)?,
            None => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        let concurrency = match get(ENV_CONCURRENCY) {
            Some(v) => usize::try_from(parse_positive(ENV_CONCURRENCY, &v)?).map_err(|_| {
                CoreError::ConfigError(format!("{ENV_CONCURRENCY} is out of range: {v}"))
            })?,
            None => 1,
        };

        Ok(Self {
            source_api_key,
            destination_api_key: get(ENV_DESTINATION_API_KEY),
            listing_file: get(ENV_LISTING_FILE).map(PathBuf::from),
            output_dir: PathBuf::from(
                get(ENV_OUTPUT_DIR).unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string()),
            ),
            source_api_url: get(ENV_SOURCE_API_URL),
            destination_api_url: get(ENV_DESTINATION_API_URL),
            normalize_root_apex: match get(ENV_NORMALIZE_ROOT_APEX) {
                Some(v) => parse_bool(ENV_NORMALIZE_ROOT_APEX, &v)?,
                None => true,
            },
            disable_spamexperts: match get(ENV_SPAMEXPERTS_OFF) {
                Some(v) => parse_bool(ENV_SPAMEXPERTS_OFF, &v)?,
                None => false,
            },
            request_timeout: Duration::from_secs(timeout_secs),
            concurrency,
        })
    }

    /// 目标注册商 token，未配置时返回 `ConfigError`
    pub fn require_destination_key(&self) -> CoreResult<&str> {
        self.destination_api_key.as_deref().ok_or_else(|| {
            CoreError::ConfigError(format!("{ENV_DESTINATION_API_KEY} is not set"))
        })
    }

    /// 域名来源：清单文件优先，否则源 API
    pub fn domain_source(&self) -> DomainSource {
        self.listing_file
            .clone()
            .map_or(DomainSource::Api, DomainSource::ListingFile)
    }

    pub fn transform_options(&self) -> TransformOptions {
        TransformOptions {
            normalize_root_apex: self.normalize_root_apex,
        }
    }

    pub fn source_client_options(&self) -> ClientOptions {
        ClientOptions {
            base_url: self.source_api_url.clone(),
            request_timeout: self.request_timeout,
        }
    }

    pub fn destination_client_options(&self) -> ClientOptions {
        ClientOptions {
            base_url: self.destination_api_url.clone(),
            request_timeout: self.request_timeout,
        }
    }

    /// `list-domains` 的默认输出路径
    pub fn default_listing_output(&self) -> PathBuf {
        self.output_dir.join("all-domains.json")
    }
}

fn parse_positive(key: &str, value: &str) -> CoreResult<u64> {
    match value.parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CoreError::ConfigError(format!(
            "{key} must be a positive integer, got {value:?}"
        ))),
    }
}

fn parse_bool(key: &str, value: &str) -> CoreResult<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(CoreError::ConfigError(format!(
            "{key} must be a boolean, got {value:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> CoreResult<MigrationConfig> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        MigrationConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config_from(&[(ENV_SOURCE_API_KEY, "src")]).unwrap();

        assert_eq!(config.source_api_key, "src");
        assert_eq!(config.destination_api_key, None);
        assert_eq!(config.output_dir, PathBuf::from("./output"));
        assert!(config.normalize_root_apex);
        assert!(!config.disable_spamexperts);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.concurrency, 1);
        assert_eq!(config.domain_source(), DomainSource::Api);
        assert_eq!(
            config.default_listing_output(),
            PathBuf::from("./output/all-domains.json")
        );
    }

    #[test]
    fn missing_source_key_is_rejected() {
        let result = config_from(&[(ENV_DESTINATION_API_KEY, "dst")]);
        assert!(matches!(result, Err(CoreError::ConfigError(_))));

        let result = config_from(&[(ENV_SOURCE_API_KEY, "  ")]);
        assert!(matches!(result, Err(CoreError::ConfigError(_))));
    }

    #[test]
    fn destination_key_required_on_demand() {
        let config = config_from(&[(ENV_SOURCE_API_KEY, "src")]).unwrap();
        assert!(config.require_destination_key().is_err());

        let config =
            config_from(&[(ENV_SOURCE_API_KEY, "src"), (ENV_DESTINATION_API_KEY, "dst")]).unwrap();
        assert_eq!(config.require_destination_key().unwrap(), "dst");
    }

    #[test]
    fn overrides() {
        let config = config_from(&[
            (ENV_SOURCE_API_KEY, "src"),
            (ENV_LISTING_FILE, "domains.json"),
            (ENV_OUTPUT_DIR, "/tmp/zones"),
            (ENV_SOURCE_API_URL, "http://localhost:1"),
            (ENV_DESTINATION_API_URL, "http://localhost:2"),
            (ENV_NORMALIZE_ROOT_APEX, "false"),
            (ENV_SPAMEXPERTS_OFF, "1"),
            (ENV_HTTP_TIMEOUT_SECS, "5"),
            (ENV_CONCURRENCY, "4"),
        ])
        .unwrap();

        assert_eq!(
            config.domain_source(),
            DomainSource::ListingFile(PathBuf::from("domains.json"))
        );
        assert_eq!(config.output_dir, PathBuf::from("/tmp/zones"));
        assert!(!config.normalize_root_apex);
        assert!(!config.transform_options().normalize_root_apex);
        assert!(config.disable_spamexperts);
        assert_eq!(config.concurrency, 4);

        let source = config.source_client_options();
        assert_eq!(source.base_url.as_deref(), Some("http://localhost:1"));
        assert_eq!(source.request_timeout, Duration::from_secs(5));
        let destination = config.destination_client_options();
        assert_eq!(destination.base_url.as_deref(), Some("http://localhost:2"));
    }

    #[test]
    fn invalid_numbers_are_rejected() {
        for (key, value) in [
            (ENV_HTTP_TIMEOUT_SECS, "0"),
            (ENV_HTTP_TIMEOUT_SECS, "abc"),
            (ENV_CONCURRENCY, "0"),
            (ENV_CONCURRENCY, "-2"),
        ] {
            let result = config_from(&[(ENV_SOURCE_API_KEY, "src"), (key, value)]);
            assert!(
                matches!(result, Err(CoreError::ConfigError(_))),
                "{key}={value} should be rejected"
            );
        }
    }

    #[test]
    fn invalid_bool_is_rejected() {
        let result = config_from(&[(ENV_SOURCE_API_KEY, "src"), (ENV_SPAMEXPERTS_OFF, "maybe")]);
        assert!(matches!(result, Err(CoreError::ConfigError(_))));
    }
}
