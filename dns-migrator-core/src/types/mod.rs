//! 核心层类型定义

mod listing;
mod migration;

pub use listing::{ListingEntry, ListingFile};
pub use migration::{
    DomainOutcome, DomainReport, MigrationState, MigrationSummary, RecordSource,
};
