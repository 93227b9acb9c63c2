//! Neostrada SourceProvider trait 实现

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::providers::common::normalize_domain_name;
use crate::traits::{ErrorContext, SourceProvider};
use crate::types::{Domain, DomainStatus, RawDnsRecord};
use crate::utils::log_sanitizer::truncate_for_log;

use super::{NeostradaDomain, NeostradaProvider};

impl NeostradaProvider {
    /// 将 Neostrada 域名转换为 `Domain`
    pub(crate) fn to_domain(domain: NeostradaDomain) -> Domain {
        Domain {
            name: normalize_domain_name(&domain.domain),
            source_zone_id: domain.dns_id,
            status: DomainStatus::from(domain.status),
            external: domain.is_external,
        }
    }

    /// 逐条解析 `results` 数组
    ///
    /// 格式错误的条目记录警告后丢弃，同一响应中的其他条目照常返回。
    pub(crate) fn parse_each<T: DeserializeOwned>(
        values: Vec<serde_json::Value>,
        what: &str,
    ) -> Vec<T> {
        values
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<T>(value.clone()) {
                Ok(item) => Some(item),
                Err(e) => {
                    log::warn!(
                        "[neostrada] 丢弃格式错误的{what}: {e}: {}",
                        truncate_for_log(&value.to_string())
                    );
                    None
                }
            })
            .collect()
    }
}

#[async_trait]
impl SourceProvider for NeostradaProvider {
    fn id(&self) -> &'static str {
        "neostrada"
    }

    async fn list_domains(&self) -> Result<Vec<Domain>> {
        let values = self.get("/domains", ErrorContext::default()).await?;
        Ok(Self::parse_each::<NeostradaDomain>(values, "域名")
            .into_iter()
            .map(Self::to_domain)
            .collect())
    }

    async fn list_records(&self, zone_id: &str) -> Result<Vec<RawDnsRecord>> {
        let values = self
            .get(
                &format!("/dns/{}", urlencoding::encode(zone_id)),
                ErrorContext::for_domain(zone_id),
            )
            .await?;
        Ok(Self::parse_each(values, "记录"))
    }
}
