//! Registrar API client implementations

/// Shared utilities used by provider implementations.
pub mod common;

#[cfg(feature = "neostrada")]
mod neostrada;
#[cfg(feature = "openprovider")]
mod openprovider;

#[cfg(feature = "neostrada")]
pub use neostrada::NeostradaProvider;
#[cfg(feature = "openprovider")]
pub use openprovider::OpenproviderProvider;
