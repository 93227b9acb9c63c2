//! 域名清单文件格式
//!
//! `list-domains` 写出、`migrate` 读入的 JSON 文件：
//!
//! ```json
//! { "domains": [ { "domain": "example.com", "dns_id": "123" } ] }
//! ```

use dns_migrator_provider::{normalize_domain_name, Domain, DomainStatus};
use serde::{Deserialize, Serialize};

/// 清单中的单个域名
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingEntry {
    /// 完整域名
    pub domain: String,
    /// 源注册商的 zone 标识，数字或字符串均可
    #[serde(deserialize_with = "dns_migrator_provider::serde_helpers::deserialize_string")]
    pub dns_id: String,
}

/// 域名清单文件
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingFile {
    pub domains: Vec<ListingEntry>,
}

impl From<ListingEntry> for Domain {
    /// 清单文件中的域名视为已筛选过：状态 active，非外部管理
    ///
    /// 域名与 API 返回的域名做同样的规范化（去空白和末尾的点）。
    fn from(entry: ListingEntry) -> Self {
        Self {
            name: normalize_domain_name(&entry.domain),
            source_zone_id: entry.dns_id,
            status: DomainStatus::Active,
            external: false,
        }
    }
}

impl From<&Domain> for ListingEntry {
    fn from(domain: &Domain) -> Self {
        Self {
            domain: domain.name.clone(),
            dns_id: domain.source_zone_id.clone(),
        }
    }
}

impl ListingFile {
    /// 转换为待迁移域名列表，保持文件中的顺序
    pub fn into_domains(self) -> Vec<Domain> {
        self.domains.into_iter().map(Domain::from).collect()
    }
}

impl FromIterator<ListingEntry> for ListingFile {
    fn from_iter<I: IntoIterator<Item = ListingEntry>>(iter: I) -> Self {
        Self {
            domains: iter.into_iter().collect(),
        }
    }
}
