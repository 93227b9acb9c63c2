//! 记录转换：把源注册商的原始记录转换为目标注册商的记录格式
//!
//! `transform = sanitize(filter(records))`，两步都是纯函数：
//! 输入只借用，返回新的 `Vec`，顺序保持不变。

use dns_migrator_provider::{DnsRecord, DnsRecordType, RawDnsRecord};

/// 转换选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformOptions {
    /// 截断后记录名与域名完全相同时改写为 `""`（zone apex）
    pub normalize_root_apex: bool,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            normalize_root_apex: true,
        }
    }
}

/// 目标 zone 自行管理的记录类型，不迁移
fn is_zone_managed(record_type: &DnsRecordType) -> bool {
    matches!(record_type, DnsRecordType::Soa | DnsRecordType::Ns)
}

/// 记录是否应当迁移
///
/// 满足任一条件即丢弃：
/// - 类型为 SOA 或 NS
/// - 没有 `content`
/// - 记录名包含 `localhost`
/// - CNAME 且记录名包含 `email.mg`（Mailgun 跟踪域名）
pub fn is_migratable(record: &RawDnsRecord) -> bool {
    if is_zone_managed(&record.record_type) || record.content.is_none() {
        return false;
    }
    if record.name.contains("localhost") {
        return false;
    }
    !(record.record_type == DnsRecordType::Cname && record.name.contains("email.mg"))
}

/// 过滤掉不应迁移的记录
pub fn filter_records(records: &[RawDnsRecord]) -> Vec<RawDnsRecord> {
    records.iter().filter(|r| is_migratable(r)).cloned().collect()
}

/// 截断记录名：超过两段时去掉最后两段
///
/// `www.example.com` -> `www`，`a.b.example.com` -> `a.b`，`example.com` 保持不变。
pub fn truncate_name(name: &str) -> String {
    let segments: Vec<&str> = name.split('.').collect();
    if segments.len() > 2 {
        segments[..segments.len() - 2].join(".")
    } else {
        name.to_string()
    }
}

/// 把单条原始记录转换为目标格式
///
/// `id`/`zone_id` 不会出现在结果中，`content` 改名为 `value`。
pub fn sanitize_record(record: &RawDnsRecord, domain: &str, options: TransformOptions) -> DnsRecord {
    let mut name = truncate_name(&record.name);
    if options.normalize_root_apex && name == domain {
        name.clear();
    }

    DnsRecord {
        name,
        record_type: record.record_type.clone(),
        // 过滤阶段已保证 content 存在
        value: record.content.clone().unwrap_or_default(),
        ttl: record.ttl,
        prio: record.priority,
    }
}

pub fn sanitize_records(
    records: &[RawDnsRecord],
    domain: &str,
    options: TransformOptions,
) -> Vec<DnsRecord> {
    records
        .iter()
        .map(|r| sanitize_record(r, domain, options))
        .collect()
}

/// 完整转换：过滤后再清洗
pub fn transform_records(
    records: &[RawDnsRecord],
    domain: &str,
    options: TransformOptions,
) -> Vec<DnsRecord> {
    sanitize_records(&filter_records(records), domain, options)
}
