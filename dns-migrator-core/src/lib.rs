//! DNS Migrator Core Library
//!
//! 把 DNS zone 从源注册商迁移到目标注册商的核心逻辑：
//! - 域名列表（API 或清单文件）
//! - 记录获取与转换
//! - zone 文件缓存
//! - zone 发布与逐域名编排
//!
//! Provider 与缓存通过 trait 注入，平台层（CLI）负责组装 [`ServiceContext`]。

pub mod config;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::MigrationConfig;
pub use error::{CoreError, CoreResult};
pub use services::ServiceContext;
pub use traits::ZoneCache;
