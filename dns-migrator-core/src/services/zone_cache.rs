//! 基于文件的 zone 缓存：`{output_dir}/{domain}.json`
//!
//! 文件既是迁移产物，也是缓存：重跑时已存在的文件会跳过源 API 获取。

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use dns_migrator_provider::DnsRecord;

use crate::error::{CoreError, CoreResult};
use crate::traits::ZoneCache;

pub struct FileZoneCache {
    output_dir: PathBuf,
}

impl FileZoneCache {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// 域名对应的缓存文件路径
    ///
    /// 域名必须是输出目录下的单个普通文件名，否则返回 `InvalidDomainName`。
    pub fn path_for(&self, domain: &str) -> CoreResult<PathBuf> {
        validate_domain_file_name(domain)?;
        Ok(self.output_dir.join(format!("{domain}.json")))
    }
}

fn validate_domain_file_name(domain: &str) -> CoreResult<()> {
    let invalid = || CoreError::InvalidDomainName(domain.to_string());

    if domain.is_empty()
        || domain.starts_with('.')
        || domain.contains(['/', '\\', '\0'])
        || domain.contains("..")
    {
        return Err(invalid());
    }

    let mut components = Path::new(domain).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(invalid()),
    }
}

#[async_trait]
impl ZoneCache for FileZoneCache {
    async fn load(&self, domain: &str) -> CoreResult<Option<Vec<DnsRecord>>> {
        let path = self.path_for(domain)?;

        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(CoreError::StorageError(format!(
                    "Failed to read {}: {e}",
                    path.display()
                )));
            }
        };

        let records: Vec<DnsRecord> = serde_json::from_str(&content).map_err(|e| {
            CoreError::SerializationError(format!("Malformed zone file {}: {e}", path.display()))
        })?;

        log::debug!("Loaded {} records from {}", records.len(), path.display());
        Ok(Some(records))
    }

    async fn save(&self, domain: &str, records: &[DnsRecord]) -> CoreResult<()> {
        let path = self.path_for(domain)?;

        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| {
                CoreError::StorageError(format!(
                    "Failed to create {}: {e}",
                    self.output_dir.display()
                ))
            })?;

        let json = serde_json::to_string_pretty(records)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;

        // 先写临时文件再重命名，避免中断时留下半个文件
        let tmp_path = path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, json).await.map_err(|e| {
            CoreError::StorageError(format!("Failed to write {}: {e}", tmp_path.display()))
        })?;
        tokio::fs::rename(&tmp_path, &path).await.map_err(|e| {
            CoreError::StorageError(format!("Failed to write {}: {e}", path.display()))
        })?;

        log::debug!("Saved {} records to {}", records.len(), path.display());
        Ok(())
    }
}
