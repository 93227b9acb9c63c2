//! Openprovider error mapping

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::OpenproviderProvider;

/// Openprovider 的业务错误码随接口变化，统一保留在 `raw_code` 中，仅依据 HTTP 状态码分类
impl ProviderErrorMapper for OpenproviderProvider {
    fn provider_name(&self) -> &'static str {
        "openprovider"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.status {
            // 2xx 但 data.success != true：zone 未创建
            Some(status) if (200..300).contains(&status) => ProviderError::ZoneRejected {
                provider: self.provider_name().to_string(),
                domain: context.domain.unwrap_or_else(|| "<unknown>".to_string()),
                raw_code: raw.code,
                raw_message: Some(raw.message).filter(|m| !m.is_empty()),
            },
            _ => self.map_http_status(raw, context),
        }
    }
}
