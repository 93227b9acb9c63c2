//! Openprovider DNS Provider (migration destination)

mod error;
mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::error::Result;
use crate::providers::common::build_client;
use crate::types::ClientOptions;

pub(crate) use types::{CreateZoneBody, CreateZoneData, OpenproviderResponse};

pub(crate) const OPENPROVIDER_API_BASE: &str = "https://api.openprovider.eu/v1beta";

/// Zone provisioning template applied to every created zone.
pub(crate) const ZONE_TEMPLATE_NAME: &str = "api";

/// Openprovider DNS Provider
pub struct OpenproviderProvider {
    pub(crate) client: Client,
    pub(crate) api_token: String,
    pub(crate) base_url: String,
    /// Send `is_spamexperts_enabled: "off"` with every zone.
    pub(crate) disable_spamexperts: bool,
}

impl OpenproviderProvider {
    pub fn new(api_token: String, options: &ClientOptions) -> Result<Self> {
        let (client, base_url) = build_client(options, OPENPROVIDER_API_BASE)?;
        Ok(Self {
            client,
            api_token,
            base_url,
            disable_spamexperts: false,
        })
    }

    /// Explicitly switch off the SpamExperts add-on on created zones.
    #[must_use]
    pub fn with_spamexperts_disabled(mut self, disabled: bool) -> Self {
        self.disable_spamexperts = disabled;
        self
    }
}
