//! Zone 缓存抽象 Trait

use async_trait::async_trait;
use dns_migrator_provider::DnsRecord;

use crate::error::CoreResult;

/// 已转换记录集的持久化存储
///
/// 按域名分区：不同域名的读写互不影响。
///
/// 实现:
/// - `FileZoneCache`: 输出目录下的 `{domain}.json`
#[async_trait]
pub trait ZoneCache: Send + Sync {
    /// 读取某个域名已保存的记录集
    ///
    /// 不存在时返回 `Ok(None)`；存在但无法解析时返回错误，调用方不应覆盖它。
    ///
    /// # Arguments
    /// * `domain` - 完整域名
    async fn load(&self, domain: &str) -> CoreResult<Option<Vec<DnsRecord>>>;

    /// 保存（覆盖）某个域名的记录集
    ///
    /// # Arguments
    /// * `domain` - 完整域名
    /// * `records` - 转换后的记录，按顺序写出
    async fn save(&self, domain: &str, records: &[DnsRecord]) -> CoreResult<()>;
}
