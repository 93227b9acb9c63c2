//! 迁移编排：逐个域名执行 获取/读缓存 -> 转换 -> 落盘 -> 发布
//!
//! 单个域名的任何失败都只体现在它自己的报告里，不会中断整批迁移。

use std::sync::Arc;

use dns_migrator_provider::{DnsRecord, Domain};
use futures::stream::{self, StreamExt};

use crate::services::{
    transform_records, RecordFetcher, ServiceContext, TransformOptions, ZonePublisher,
};
use crate::types::{DomainOutcome, DomainReport, MigrationState, MigrationSummary, RecordSource};

/// 迁移选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MigrationOptions {
    pub transform: TransformOptions,
    /// 只落盘，不发布
    pub dry_run: bool,
    /// 同时处理的域名数，最小为 1
    pub concurrency: usize,
}

impl Default for MigrationOptions {
    fn default() -> Self {
        Self {
            transform: TransformOptions::default(),
            dry_run: false,
            concurrency: 1,
        }
    }
}

/// 单个域名的状态跟踪
struct DomainRun<'a> {
    domain: &'a str,
    state: MigrationState,
    source: Option<RecordSource>,
    record_count: usize,
}

impl<'a> DomainRun<'a> {
    fn new(domain: &'a str) -> Self {
        Self {
            domain,
            state: MigrationState::Pending,
            source: None,
            record_count: 0,
        }
    }

    fn advance(&mut self, next: MigrationState) {
        if self.state != next {
            log::debug!("{}: {} -> {}", self.domain, self.state, next);
            self.state = next;
        }
    }

    fn finish(mut self, outcome: DomainOutcome) -> DomainReport {
        self.advance(outcome.state());
        DomainReport {
            domain: self.domain.to_string(),
            source: self.source,
            record_count: self.record_count,
            outcome,
        }
    }
}

/// 迁移服务
pub struct MigrationService {
    ctx: Arc<ServiceContext>,
    fetcher: RecordFetcher,
    publisher: ZonePublisher,
    options: MigrationOptions,
}

impl MigrationService {
    pub fn new(ctx: Arc<ServiceContext>, options: MigrationOptions) -> Self {
        Self {
            fetcher: RecordFetcher::new(Arc::clone(&ctx)),
            publisher: ZonePublisher::new(Arc::clone(&ctx)),
            ctx,
            options,
        }
    }

    /// 迁移全部域名
    ///
    /// 最多同时处理 `concurrency` 个域名；汇总中的顺序始终与输入顺序一致。
    pub async fn migrate_all(&self, domains: &[Domain]) -> MigrationSummary {
        let total = domains.len();
        let concurrency = self.options.concurrency.max(1);
        log::info!(
            "Migrating {total} domains from {} to {} (concurrency: {concurrency}, dry run: {})",
            self.ctx.source.id(),
            self.ctx.destination.id(),
            self.options.dry_run
        );

        let reports: Vec<DomainReport> = stream::iter(domains.iter().enumerate())
            .map(|(index, domain)| async move {
                log::info!(
                    "[{}/{total}] {} (zone {})",
                    index + 1,
                    domain.name,
                    domain.source_zone_id
                );
                self.migrate_domain(domain).await
            })
            .buffered(concurrency)
            .collect()
            .await;

        let summary: MigrationSummary = reports.into_iter().collect();
        log::info!(
            "Migration finished: {} total, {} published, {} persisted, {} skipped, {} failed",
            summary.total(),
            summary.published(),
            summary.persisted(),
            summary.skipped(),
            summary.failed()
        );
        for report in summary.failures() {
            log::warn!("  {} failed: {:?}", report.domain, report.outcome);
        }
        summary
    }

    /// 迁移单个域名
    pub async fn migrate_domain(&self, domain: &Domain) -> DomainReport {
        let name = domain.name.as_str();
        let mut run = DomainRun::new(name);

        let records = match self.load_records(domain, &mut run).await {
            Ok(records) => records,
            Err(reason) => return run.finish(DomainOutcome::Failed { reason }),
        };
        run.record_count = records.len();
        run.advance(MigrationState::Transformed);

        if records.is_empty() {
            log::warn!("{name}: no records to migrate, skipping");
            return run.finish(DomainOutcome::SkippedEmpty);
        }

        if let Err(e) = self.ctx.zone_cache.save(name, &records).await {
            log::error!("{name}: failed to persist zone: {e}");
            return run.finish(DomainOutcome::Failed {
                reason: e.to_string(),
            });
        }
        run.advance(MigrationState::Persisted);

        if self.options.dry_run {
            log::info!("{name}: dry run, {} records persisted", records.len());
            return run.finish(DomainOutcome::Persisted);
        }

        match self.publisher.publish(name, &records).await {
            Ok(()) => run.finish(DomainOutcome::Published),
            Err(e) => run.finish(DomainOutcome::PublishFailed {
                reason: e.to_string(),
            }),
        }
    }

    /// 缓存命中时直接使用缓存记录，否则从源注册商获取并转换
    ///
    /// 只有缓存读取失败会返回错误。
    async fn load_records(
        &self,
        domain: &Domain,
        run: &mut DomainRun<'_>,
    ) -> Result<Vec<DnsRecord>, String> {
        let name = domain.name.as_str();

        match self.ctx.zone_cache.load(name).await {
            Ok(Some(records)) => {
                log::info!("{name}: using cached zone ({} records)", records.len());
                run.source = Some(RecordSource::Cached);
                run.advance(MigrationState::Cached);
                Ok(records)
            }
            Ok(None) => {
                log::debug!("{name}: no cached zone, fetching from source");
                let raw = self.fetcher.fetch(name, &domain.source_zone_id).await;
                run.source = Some(RecordSource::Fetched);
                run.advance(MigrationState::Fetched);

                let records = transform_records(&raw, name, self.options.transform);
                log::info!(
                    "{name}: {} of {} records eligible for migration",
                    records.len(),
                    raw.len()
                );
                Ok(records)
            }
            Err(e) => {
                log::error!("{name}: failed to read cached zone: {e}");
                Err(e.to_string())
            }
        }
    }
}
