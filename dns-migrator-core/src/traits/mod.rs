//! Storage layer abstraction trait definition

mod zone_cache;

pub use zone_cache::ZoneCache;
