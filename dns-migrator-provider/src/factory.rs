//! Provider factory functions.

use std::sync::Arc;

use crate::error::Result;
#[cfg(feature = "neostrada")]
use crate::providers::NeostradaProvider;
#[cfg(feature = "openprovider")]
use crate::providers::OpenproviderProvider;
#[cfg(feature = "openprovider")]
use crate::traits::DestinationProvider;
#[cfg(feature = "neostrada")]
use crate::traits::SourceProvider;
use crate::types::ClientOptions;

/// Creates the migration source ([`SourceProvider`]) from its API token.
///
/// The returned provider is wrapped in `Arc<dyn SourceProvider>` for easy sharing
/// across async tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use dns_migrator_provider::{create_source_provider, ClientOptions};
///
/// let source = create_source_provider("your-token".to_string(), &ClientOptions::default()).unwrap();
/// ```
#[cfg(feature = "neostrada")]
pub fn create_source_provider(
    api_token: String,
    options: &ClientOptions,
) -> Result<Arc<dyn SourceProvider>> {
    Ok(Arc::new(NeostradaProvider::new(api_token, options)?))
}

/// Creates the migration destination ([`DestinationProvider`]) from its API token.
///
/// `disable_spamexperts` adds `is_spamexperts_enabled: "off"` to every zone request.
#[cfg(feature = "openprovider")]
pub fn create_destination_provider(
    api_token: String,
    options: &ClientOptions,
    disable_spamexperts: bool,
) -> Result<Arc<dyn DestinationProvider>> {
    Ok(Arc::new(
        OpenproviderProvider::new(api_token, options)?
            .with_spamexperts_disabled(disable_spamexperts),
    ))
}
