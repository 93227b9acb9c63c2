//! Neostrada error mapping

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::NeostradaProvider;

/// Neostrada 不返回机器可读的错误码，只能依据 HTTP 状态码映射
impl ProviderErrorMapper for NeostradaProvider {
    fn provider_name(&self) -> &'static str {
        "neostrada"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        self.map_http_status(raw, context)
    }
}
