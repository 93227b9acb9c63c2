//! Openprovider HTTP 请求方法

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::providers::common::{bearer, join_url};
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};
use crate::utils::log_sanitizer::truncate_for_log;

use super::{OpenproviderProvider, OpenproviderResponse};

impl OpenproviderProvider {
    /// 执行 POST 请求
    ///
    /// 非 2xx 响应会尽量从响应体中取出 `code` 与 `desc` 后映射为错误；
    /// 2xx 响应原样返回，由调用方检查 `data` 中的业务结果。
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        context: ErrorContext,
    ) -> Result<OpenproviderResponse<T>> {
        let url = join_url(&self.base_url, path);
        let body_json =
            serde_json::to_string(body).map_err(|e| ProviderError::SerializationError {
                provider: self.provider_name().to_string(),
                detail: e.to_string(),
            })?;
        log::debug!("Request Body: {}", truncate_for_log(&body_json));

        let request = self
            .client
            .post(&url)
            .header("Authorization", bearer(&self.api_token))
            .header("Content-Type", "application/json")
            .body(body_json);

        let (status, response_text) =
            HttpUtils::execute_request(request, self.provider_name(), "POST", &url).await?;

        if !HttpUtils::is_success(status) {
            let (code, desc) =
                serde_json::from_str::<OpenproviderResponse<serde_json::Value>>(&response_text)
                    .map(|r| (r.code, r.desc))
                    .unwrap_or((None, None));
            log::error!(
                "[{}] API 错误 (HTTP {status}) code={} desc={}",
                self.provider_name(),
                code.as_deref().unwrap_or("-"),
                desc.as_deref().unwrap_or("-")
            );
            let message = desc.unwrap_or_else(|| truncate_for_log(&response_text));
            return Err(self.map_error(RawApiError::with_status(status, code, message), context));
        }

        HttpUtils::parse_json(&response_text, self.provider_name())
    }
}
