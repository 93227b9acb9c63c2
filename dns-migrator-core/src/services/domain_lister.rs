//! 待迁移域名的来源：源注册商 API 或本地清单文件

use std::path::{Path, PathBuf};
use std::sync::Arc;

use dns_migrator_provider::{Domain, SourceProvider};

use crate::error::{CoreError, CoreResult};
use crate::types::{ListingEntry, ListingFile};

/// 域名来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainSource {
    /// 调用源注册商的域名列表接口
    Api,
    /// 读取 `{ domains: [{domain, dns_id}] }` 格式的清单文件
    ListingFile(PathBuf),
}

/// 域名列表服务
///
/// 只依赖源注册商，`list-domains` 不需要目标注册商的凭证。
pub struct DomainLister {
    source: Arc<dyn SourceProvider>,
}

impl DomainLister {
    pub fn new(source: Arc<dyn SourceProvider>) -> Self {
        Self { source }
    }

    /// 获取待迁移域名
    ///
    /// 任何失败都记录日志并返回空列表，批次随之正常结束。
    pub async fn list(&self, source: &DomainSource) -> Vec<Domain> {
        match source {
            DomainSource::Api => self.list_from_api().await,
            DomainSource::ListingFile(path) => match read_listing_file(path).await {
                Ok(domains) => {
                    log::info!(
                        "Loaded {} domains from {}",
                        domains.len(),
                        path.display()
                    );
                    domains
                }
                Err(e) => {
                    log::error!("Failed to load domain listing: {e}");
                    Vec::new()
                }
            },
        }
    }

    /// 从源 API 获取域名并筛选可迁移的
    pub async fn list_from_api(&self) -> Vec<Domain> {
        match self.source.list_domains().await {
            Ok(domains) => {
                let total = domains.len();
                let eligible = filter_eligible(domains);
                log::info!(
                    "Fetched {total} domains from {}, {} eligible for migration",
                    self.source.id(),
                    eligible.len()
                );
                eligible
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("Failed to list domains: {e}");
                } else {
                    log::error!("Failed to list domains: {e}");
                }
                Vec::new()
            }
        }
    }
}

/// 去掉外部管理和已取消的域名，保持原顺序
pub fn filter_eligible(domains: Vec<Domain>) -> Vec<Domain> {
    domains.into_iter().filter(Domain::is_eligible).collect()
}

/// 读取域名清单文件
pub async fn read_listing_file(path: &Path) -> CoreResult<Vec<Domain>> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        CoreError::ListingFileError(format!("Failed to read {}: {e}", path.display()))
    })?;
    let listing: ListingFile = serde_json::from_str(&content).map_err(|e| {
        CoreError::ListingFileError(format!("Malformed listing {}: {e}", path.display()))
    })?;
    Ok(listing.into_domains())
}

/// 写出域名清单文件（pretty JSON），必要时创建父目录
pub async fn write_listing_file(path: &Path, domains: &[Domain]) -> CoreResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            CoreError::StorageError(format!("Failed to create {}: {e}", parent.display()))
        })?;
    }

    let listing: ListingFile = domains.iter().map(ListingEntry::from).collect();
    let json = serde_json::to_string_pretty(&listing)
        .map_err(|e| CoreError::SerializationError(e.to_string()))?;

    tokio::fs::write(path, json)
        .await
        .map_err(|e| CoreError::StorageError(format!("Failed to write {}: {e}", path.display())))
}
