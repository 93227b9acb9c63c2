use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{CreateZoneRequest, Domain, RawDnsRecord};

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// HTTP 状态码（逻辑错误时为 2xx）
    pub status: Option<u16>,
    /// 错误码（各 Provider 格式不同）
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: None,
            code: None,
            message: message.into(),
        }
    }

    pub fn with_status(status: u16, code: Option<String>, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            code,
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
/// 用于在映射错误时提供额外信息
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// 域名或 zone ID（用于 `DomainNotFound` 等错误）
    pub domain: Option<String>,
}

impl ErrorContext {
    pub fn for_domain(domain: impl Into<String>) -> Self {
        Self {
            domain: Some(domain.into()),
        }
    }
}

/// Provider 错误映射 Trait（内部使用）
/// 各 Provider 实现此 trait 以将原始 API 错误映射到统一错误类型
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// 快捷方法：按 HTTP 状态码做通用映射，无法识别时回落到 `Unknown`
    fn map_http_status(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        let provider = self.provider_name().to_string();
        match raw.status {
            Some(401) => ProviderError::InvalidCredentials {
                provider,
                raw_message: Some(raw.message),
            },
            Some(403) => ProviderError::PermissionDenied {
                provider,
                raw_message: Some(raw.message),
            },
            Some(404) => ProviderError::DomainNotFound {
                provider,
                domain: context.domain.unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: Some(raw.message),
            },
            _ => self.unknown_error(raw),
        }
    }

    /// 快捷方法：未知错误（fallback）
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code.or_else(|| raw.status.map(|s| format!("HTTP {s}"))),
            raw_message: raw.message,
        }
    }
}

/// 源注册商 Trait：提供域名清单与 DNS 记录（只读）
#[async_trait]
pub trait SourceProvider: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// 获取账户下全部域名（单次请求，不分页，不过滤）
    async fn list_domains(&self) -> Result<Vec<Domain>>;

    /// 获取某个 zone 的全部原始 DNS 记录（单次请求）
    async fn list_records(&self, zone_id: &str) -> Result<Vec<RawDnsRecord>>;
}

/// 目标注册商 Trait：创建 DNS zone
#[async_trait]
pub trait DestinationProvider: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// 创建包含全部记录的新 zone
    ///
    /// 仅当响应载荷确认成功时返回 `Ok(())`；2xx 但载荷报告失败时返回
    /// [`ProviderError::ZoneRejected`]。
    async fn create_zone(&self, req: &CreateZoneRequest) -> Result<()>;
}
