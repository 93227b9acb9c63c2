//! Neostrada HTTP 请求方法

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::providers::common::{bearer, join_url};
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::{NeostradaProvider, NeostradaResponse};

impl NeostradaProvider {
    /// 执行 GET 请求并取出 `results`
    ///
    /// 非 2xx 状态与缺少 `results` 的响应都会被映射为错误。
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        context: ErrorContext,
    ) -> Result<T> {
        let url = join_url(&self.base_url, path);

        let request = self
            .client
            .get(&url)
            .header("Authorization", bearer(&self.api_token))
            .header("Accept", "application/json");

        let (status, response_text) =
            HttpUtils::execute_request(request, self.provider_name(), "GET", &url).await?;

        if !HttpUtils::is_success(status) {
            let message = serde_json::from_str::<NeostradaResponse<serde_json::Value>>(
                &response_text,
            )
            .ok()
            .and_then(|r| r.message)
            .unwrap_or_else(|| format!("HTTP {status}"));
            log::error!("[{}] API 错误 (HTTP {status}): {message}", self.provider_name());
            return Err(self.map_error(RawApiError::with_status(status, None, message), context));
        }

        let response: NeostradaResponse<T> =
            HttpUtils::parse_json(&response_text, self.provider_name())?;

        match response.results {
            Some(results) => Ok(results),
            None => {
                let message = response
                    .message
                    .unwrap_or_else(|| "响应中缺少 results 字段".to_string());
                log::error!("[{}] API 错误: {message}", self.provider_name());
                Err(self.map_error(RawApiError::new(message), context))
            }
        }
    }
}
