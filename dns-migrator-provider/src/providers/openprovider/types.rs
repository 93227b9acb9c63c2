//! Openprovider API 类型定义

use serde::{Deserialize, Serialize};

use crate::types::{DnsRecord, ZoneDomain};

/// Openprovider API 通用响应
///
/// `code`/`desc` 在顶层，真正的业务结果嵌套在 `data` 中。
#[derive(Debug, Deserialize)]
pub struct OpenproviderResponse<T> {
    #[serde(
        default,
        deserialize_with = "crate::utils::serde_helpers::deserialize_opt_string"
    )]
    pub code: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
    pub data: Option<T>,
}

/// `POST /dns/zones` 响应中的 data 字段
#[derive(Debug, Deserialize)]
pub struct CreateZoneData {
    #[serde(default)]
    pub success: bool,
}

/// `POST /dns/zones` 请求体
#[derive(Debug, Serialize)]
pub struct CreateZoneBody<'a> {
    pub domain: &'a ZoneDomain,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_spamexperts_enabled: Option<&'static str>,
    pub provider: &'static str,
    pub records: &'a [DnsRecord],
    pub secured: bool,
    pub template_name: &'static str,
    #[serde(rename = "type")]
    pub zone_type: &'static str,
}
