use anyhow::{Context, Result};

mod http_client;
use self::http_client::with_retries;

mod types;
pub use self::types::*;

mod auth;
mod events;
mod instances;
mod settings;
mod workflows;

pub use self::events::EVENT_FETCH_LIMIT;

/// Blocking client for the backend REST API. Auth endpoints work without a
/// token; everything else sends the bearer token it was built with.
pub struct RemoteClient {
    base_url: String,
    token: Option<String>,
    client: reqwest::blocking::Client,
}

impl RemoteClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("flowdeck")
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
