//! Neostrada API 类型定义

use serde::Deserialize;

/// Neostrada API 通用响应
///
/// 成功时携带 `results`，失败时通常只有 `message`。
#[derive(Debug, Deserialize)]
pub struct NeostradaResponse<T> {
    pub results: Option<T>,
    pub message: Option<String>,
}

/// Neostrada 域名结构
#[derive(Debug, Deserialize)]
pub struct NeostradaDomain {
    #[serde(alias = "name")]
    pub domain: String,
    #[serde(deserialize_with = "crate::utils::serde_helpers::deserialize_string")]
    pub dns_id: String,
    #[serde(default)]
    pub status: String,
    #[serde(
        default,
        deserialize_with = "crate::utils::serde_helpers::deserialize_flag"
    )]
    pub is_external: bool,
}
