//! Neostrada DNS Provider (migration source)

mod error;
mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::error::Result;
use crate::providers::common::build_client;
use crate::types::ClientOptions;

pub(crate) use types::{NeostradaDomain, NeostradaResponse};

pub(crate) const NEOSTRADA_API_BASE: &str = "https://api.neostrada.com/api";

/// Neostrada DNS Provider
pub struct NeostradaProvider {
    pub(crate) client: Client,
    pub(crate) api_token: String,
    pub(crate) base_url: String,
}

impl NeostradaProvider {
    pub fn new(api_token: String, options: &ClientOptions) -> Result<Self> {
        let (client, base_url) = build_client(options, NEOSTRADA_API_BASE)?;
        Ok(Self {
            client,
            api_token,
            base_url,
        })
    }
}
