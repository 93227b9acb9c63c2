//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dns_migrator_provider::{
    CreateZoneRequest, DestinationProvider, DnsRecord, DnsRecordType, Domain, DomainStatus,
    ProviderError, RawDnsRecord, SourceProvider,
};
use tokio::sync::{Mutex, RwLock};

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::traits::ZoneCache;

// ===== MockSourceProvider =====

pub struct MockSourceProvider {
    domains: RwLock<Vec<Domain>>,
    records: RwLock<HashMap<String, Vec<RawDnsRecord>>>,
    delays: RwLock<HashMap<String, Duration>>,
    /// 如果 Some，所有请求都返回此错误
    error: RwLock<Option<ProviderError>>,
    list_records_calls: AtomicUsize,
}

impl MockSourceProvider {
    pub fn new() -> Self {
        Self {
            domains: RwLock::new(Vec::new()),
            records: RwLock::new(HashMap::new()),
            delays: RwLock::new(HashMap::new()),
            error: RwLock::new(None),
            list_records_calls: AtomicUsize::new(0),
        }
    }

    pub async fn set_domains(&self, domains: Vec<Domain>) {
        *self.domains.write().await = domains;
    }

    pub async fn set_records(&self, zone_id: &str, records: Vec<RawDnsRecord>) {
        self.records
            .write()
            .await
            .insert(zone_id.to_string(), records);
    }

    /// 让某个 zone 的记录请求延迟返回
    pub async fn set_delay(&self, zone_id: &str, delay: Duration) {
        self.delays.write().await.insert(zone_id.to_string(), delay);
    }

    pub async fn set_error(&self, err: Option<ProviderError>) {
        *self.error.write().await = err;
    }

    pub fn list_records_calls(&self) -> usize {
        self.list_records_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SourceProvider for MockSourceProvider {
    fn id(&self) -> &'static str {
        "mock-source"
    }

    async fn list_domains(&self) -> dns_migrator_provider::Result<Vec<Domain>> {
        if let Some(err) = self.error.read().await.clone() {
            return Err(err);
        }
        Ok(self.domains.read().await.clone())
    }

    async fn list_records(&self, zone_id: &str) -> dns_migrator_provider::Result<Vec<RawDnsRecord>> {
        self.list_records_calls.fetch_add(1, Ordering::SeqCst);

        let delay = self.delays.read().await.get(zone_id).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(err) = self.error.read().await.clone() {
            return Err(err);
        }
        Ok(self
            .records
            .read()
            .await
            .get(zone_id)
            .cloned()
            .unwrap_or_default())
    }
}

// ===== MockDestinationProvider =====

pub struct MockDestinationProvider {
    requests: Mutex<Vec<CreateZoneRequest>>,
    rejected: RwLock<HashSet<String>>,
    error: RwLock<Option<ProviderError>>,
}

impl MockDestinationProvider {
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            rejected: RwLock::new(HashSet::new()),
            error: RwLock::new(None),
        }
    }

    /// 收到的全部 zone 创建请求（包括被拒绝的）
    pub async fn requests(&self) -> Vec<CreateZoneRequest> {
        self.requests.lock().await.clone()
    }

    /// 对该域名的请求返回 `ZoneRejected`
    pub async fn reject_domain(&self, domain: &str) {
        self.rejected.write().await.insert(domain.to_string());
    }

    pub async fn set_error(&self, err: Option<ProviderError>) {
        *self.error.write().await = err;
    }
}

#[async_trait]
impl DestinationProvider for MockDestinationProvider {
    fn id(&self) -> &'static str {
        "mock-destination"
    }

    async fn create_zone(&self, req: &CreateZoneRequest) -> dns_migrator_provider::Result<()> {
        self.requests.lock().await.push(req.clone());

        if let Some(err) = self.error.read().await.clone() {
            return Err(err);
        }
        if self.rejected.read().await.contains(&req.domain_name) {
            return Err(ProviderError::ZoneRejected {
                provider: self.id().to_string(),
                domain: req.domain_name.clone(),
                raw_code: Some("817".to_string()),
                raw_message: Some("Zone already exists".to_string()),
            });
        }
        Ok(())
    }
}

// ===== MockZoneCache =====

pub struct MockZoneCache {
    entries: RwLock<HashMap<String, Vec<DnsRecord>>>,
    /// 如果 Some，load 时返回此错误
    load_error: RwLock<Option<String>>,
    /// 如果 Some，save 时返回此错误
    save_error: RwLock<Option<String>>,
}

impl MockZoneCache {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            load_error: RwLock::new(None),
            save_error: RwLock::new(None),
        }
    }

    pub async fn insert(&self, domain: &str, records: Vec<DnsRecord>) {
        self.entries
            .write()
            .await
            .insert(domain.to_string(), records);
    }

    pub async fn get(&self, domain: &str) -> Option<Vec<DnsRecord>> {
        self.entries.read().await.get(domain).cloned()
    }

    pub async fn set_load_error(&self, err: Option<String>) {
        *self.load_error.write().await = err;
    }

    pub async fn set_save_error(&self, err: Option<String>) {
        *self.save_error.write().await = err;
    }
}

#[async_trait]
impl ZoneCache for MockZoneCache {
    async fn load(&self, domain: &str) -> CoreResult<Option<Vec<DnsRecord>>> {
        if let Some(ref msg) = *self.load_error.read().await {
            return Err(CoreError::SerializationError(msg.clone()));
        }
        Ok(self.get(domain).await)
    }

    async fn save(&self, domain: &str, records: &[DnsRecord]) -> CoreResult<()> {
        if let Some(ref msg) = *self.save_error.read().await {
            return Err(CoreError::StorageError(msg.clone()));
        }
        self.insert(domain, records.to_vec()).await;
        Ok(())
    }
}

// ===== 工厂方法 =====

/// 创建测试用 `ServiceContext`
pub fn create_test_context() -> (
    Arc<ServiceContext>,
    Arc<MockSourceProvider>,
    Arc<MockDestinationProvider>,
    Arc<MockZoneCache>,
) {
    let source = Arc::new(MockSourceProvider::new());
    let destination = Arc::new(MockDestinationProvider::new());
    let zone_cache = Arc::new(MockZoneCache::new());

    let ctx = Arc::new(ServiceContext::new(
        source.clone(),
        destination.clone(),
        zone_cache.clone(),
    ));

    (ctx, source, destination, zone_cache)
}

/// 一个可迁移的域名
pub fn domain(name: &str, zone_id: &str) -> Domain {
    Domain {
        name: name.to_string(),
        source_zone_id: zone_id.to_string(),
        status: DomainStatus::Active,
        external: false,
    }
}

/// 源注册商格式的记录，TTL 3600
pub fn raw_record(name: &str, record_type: &str, content: Option<&str>) -> RawDnsRecord {
    RawDnsRecord {
        id: Some("100".to_string()),
        zone_id: Some("1".to_string()),
        name: name.to_string(),
        record_type: DnsRecordType::from(record_type),
        content: content.map(str::to_string),
        ttl: Some(3600),
        priority: None,
    }
}

/// 目标注册商格式的记录，TTL 3600
pub fn record(name: &str, record_type: &str, value: &str) -> DnsRecord {
    DnsRecord {
        name: name.to_string(),
        record_type: DnsRecordType::from(record_type),
        value: value.to_string(),
        ttl: Some(3600),
        prio: None,
    }
}
