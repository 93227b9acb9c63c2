//! # dns-migrator-provider
//!
//! Registrar API clients used to move DNS zones from one provider to another.
//!
//! ## Supported Providers
//!
//! | Provider | Role | Feature Flag | Auth Method |
//! |----------|------|-------------|-------------|
//! | [Neostrada](https://www.neostrada.nl/) | source | `neostrada` | Bearer Token |
//! | [Openprovider](https://www.openprovider.com/) | destination | `openprovider` | Bearer Token |
//!
//! ## Feature Flags
//!
//! - **`all-providers`** *(default)*: Enable both providers.
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dns_migrator_provider::{
//!     create_destination_provider, create_source_provider, ClientOptions,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let options = ClientOptions::default();
//!     let source = create_source_provider("source-token".to_string(), &options)?;
//!     let _destination =
//!         create_destination_provider("destination-token".to_string(), &options, false)?;
//!
//!     for domain in source.list_domains().await? {
//!         let records = source.list_records(&domain.source_zone_id).await?;
//!         println!("{} has {} records", domain.name, records.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All provider operations return [`Result<T, ProviderError>`](ProviderError).
//! A 2xx response whose payload reports failure is surfaced as
//! [`ProviderError::ZoneRejected`]; transport problems as
//! [`ProviderError::NetworkError`] or [`ProviderError::Timeout`].
//! Requests are never retried.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
#[cfg(feature = "openprovider")]
pub use factory::create_destination_provider;
#[cfg(feature = "neostrada")]
pub use factory::create_source_provider;

// Re-export provider traits (internal traits are not exported)
pub use traits::{DestinationProvider, SourceProvider};

// Re-export types
pub use types::{
    ClientOptions, CreateZoneRequest, DnsRecord, DnsRecordType, Domain, DomainStatus,
    RawDnsRecord, ZoneDomain,
};

// Re-export utils module
pub use providers::common::normalize_domain_name;
pub use utils::{log_sanitizer, serde_helpers};

// Re-export concrete providers (behind feature flags)
#[cfg(feature = "neostrada")]
pub use providers::NeostradaProvider;

#[cfg(feature = "openprovider")]
pub use providers::OpenproviderProvider;
