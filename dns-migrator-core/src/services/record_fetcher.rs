//! 从源注册商获取某个 zone 的原始记录

use std::sync::Arc;

use dns_migrator_provider::RawDnsRecord;

use crate::services::ServiceContext;

/// 记录获取服务
pub struct RecordFetcher {
    ctx: Arc<ServiceContext>,
}

impl RecordFetcher {
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 获取 zone 的全部原始记录
    ///
    /// 传输错误、HTTP 错误或 API 报告的失败都记录日志并返回空列表，
    /// 空列表即"没有可用记录"。
    pub async fn fetch(&self, domain: &str, zone_id: &str) -> Vec<RawDnsRecord> {
        match self.ctx.source.list_records(zone_id).await {
            Ok(records) => {
                log::debug!("{domain}: fetched {} raw records", records.len());
                records
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("{domain}: failed to fetch records for zone {zone_id}: {e}");
                } else {
                    log::error!("{domain}: failed to fetch records for zone {zone_id}: {e}");
                }
                Vec::new()
            }
        }
    }
}
