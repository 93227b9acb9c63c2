//! 业务逻辑服务层

mod domain_lister;
mod migration_service;
mod record_fetcher;
mod record_transformer;
mod zone_cache;
mod zone_publisher;

pub use domain_lister::{
    filter_eligible, read_listing_file, write_listing_file, DomainLister, DomainSource,
};
pub use migration_service::{MigrationOptions, MigrationService};
pub use record_fetcher::RecordFetcher;
pub use record_transformer::{
    filter_records, is_migratable, sanitize_record, sanitize_records, transform_records,
    truncate_name, TransformOptions,
};
pub use zone_cache::FileZoneCache;
pub use zone_publisher::{split_domain_name, ZonePublisher};

use std::sync::Arc;

use dns_migrator_provider::{DestinationProvider, SourceProvider};

use crate::traits::ZoneCache;

/// 服务上下文 - 持有所有依赖
///
/// 入口层创建此上下文，并注入具体的 Provider 与缓存实现。
pub struct ServiceContext {
    /// 源注册商（只读）
    pub source: Arc<dyn SourceProvider>,
    /// 目标注册商
    pub destination: Arc<dyn DestinationProvider>,
    /// 已转换记录的缓存
    pub zone_cache: Arc<dyn ZoneCache>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(
        source: Arc<dyn SourceProvider>,
        destination: Arc<dyn DestinationProvider>,
        zone_cache: Arc<dyn ZoneCache>,
    ) -> Self {
        Self {
            source,
            destination,
            zone_cache,
        }
    }
}
