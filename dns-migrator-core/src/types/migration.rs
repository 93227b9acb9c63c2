//! 单个域名迁移的状态与结果

use serde::Serialize;

/// 单个域名在迁移流水线中的状态
///
/// ```text
/// Pending -> Fetched | Cached -> Transformed -> SkippedEmpty
///                                            -> Persisted -> Published | PublishFailed
/// ```
///
/// 本地 I/O 错误（缓存读写）会从任意中间状态转入 `Failed`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MigrationState {
    Pending,
    Fetched,
    Cached,
    Transformed,
    SkippedEmpty,
    Persisted,
    Published,
    PublishFailed,
    Failed,
}

impl MigrationState {
    /// 是否为终止状态
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::SkippedEmpty | Self::Published | Self::PublishFailed | Self::Failed
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Fetched => "FETCHED",
            Self::Cached => "CACHED",
            Self::Transformed => "TRANSFORMED",
            Self::SkippedEmpty => "SKIPPED_EMPTY",
            Self::Persisted => "PERSISTED",
            Self::Published => "PUBLISHED",
            Self::PublishFailed => "PUBLISH_FAILED",
            Self::Failed => "FAILED",
        }
    }
}

impl std::fmt::Display for MigrationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 记录集的来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordSource {
    /// 从源注册商 API 获取并转换
    Fetched,
    /// 从输出目录中已存在的 zone 文件读取
    Cached,
}

/// 单个域名的最终结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DomainOutcome {
    /// zone 已在目标注册商创建
    Published,
    /// 没有可迁移的记录，未落盘也未发布
    SkippedEmpty,
    /// dry-run：记录已落盘但未发布
    Persisted,
    /// 目标注册商拒绝或请求失败
    PublishFailed { reason: String },
    /// 本地错误（缓存读写）
    Failed { reason: String },
}

impl DomainOutcome {
    /// 对应的终止状态
    pub fn state(&self) -> MigrationState {
        match self {
            Self::Published => MigrationState::Published,
            Self::SkippedEmpty => MigrationState::SkippedEmpty,
            Self::Persisted => MigrationState::Persisted,
            Self::PublishFailed { .. } => MigrationState::PublishFailed,
            Self::Failed { .. } => MigrationState::Failed,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::PublishFailed { .. } | Self::Failed { .. })
    }
}

/// 单个域名的迁移报告
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainReport {
    pub domain: String,
    /// 记录来源；获取前即失败时为 `None`
    pub source: Option<RecordSource>,
    /// 转换后（或缓存中）的记录数
    pub record_count: usize,
    #[serde(flatten)]
    pub outcome: DomainOutcome,
}

/// 整批迁移的汇总，顺序与输入域名顺序一致
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MigrationSummary {
    pub reports: Vec<DomainReport>,
}

impl MigrationSummary {
    pub fn total(&self) -> usize {
        self.reports.len()
    }

    pub fn published(&self) -> usize {
        self.count(|o| matches!(o, DomainOutcome::Published))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, DomainOutcome::SkippedEmpty))
    }

    pub fn persisted(&self) -> usize {
        self.count(|o| matches!(o, DomainOutcome::Persisted))
    }

    pub fn failed(&self) -> usize {
        self.count(DomainOutcome::is_failure)
    }

    /// 任一域名失败时为 `true`，决定进程退出码
    pub fn has_failures(&self) -> bool {
        self.reports.iter().any(|r| r.outcome.is_failure())
    }

    /// 失败的域名报告
    pub fn failures(&self) -> impl Iterator<Item = &DomainReport> {
        self.reports.iter().filter(|r| r.outcome.is_failure())
    }

    fn count(&self, pred: impl Fn(&DomainOutcome) -> bool) -> usize {
        self.reports.iter().filter(|r| pred(&r.outcome)).count()
    }
}

impl FromIterator<DomainReport> for MigrationSummary {
    fn from_iter<I: IntoIterator<Item = DomainReport>>(iter: I) -> Self {
        Self {
            reports: iter.into_iter().collect(),
        }
    }
}
