use catalog_core::{GameDetail, GameSummary, ParseError};
use reqwest::{Client, StatusCode};

use crate::config::Config;

#[derive(Debug, thiserror::Error)]
pub enum GeekdoError {
    #[error("Upstream request timed out: {0}")]
    Timeout(reqwest::Error),

    #[error("Upstream unreachable: {0}")]
    Transport(reqwest::Error),

    #[error("Upstream HTTP {0}")]
    UpstreamStatus(StatusCode),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl From<reqwest::Error> for GeekdoError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            GeekdoError::Timeout(e)
        } else {
            GeekdoError::Transport(e)
        }
    }
}

/// Client for the geekdo XML API (collection + boardgame endpoints).
#[derive(Clone, Debug)]
pub struct GeekdoClient {
    client: Client,
    owner: String,
    collection_base_url: String,
    boardgame_base_url: String,
}

impl GeekdoClient {
    pub fn new(config: &Config) -> reqwest::Result<Self> {
        let client = Client::builder()
            .user_agent("LudoProxy/1.0")
            .timeout(config.upstream_timeout)
            .build()?;
        Ok(Self {
            client,
            owner: config.owner.clone(),
            collection_base_url: config.collection_base_url.clone(),
            boardgame_base_url: config.boardgame_base_url.clone(),
        })
    }

    /// Fetch the configured owner's collection, one summary per item in document order.
    pub async fn fetch_collection(&self) -> Result<Vec<GameSummary>, GeekdoError> {
        let url = format!("{}/{}", self.collection_base_url, self.owner);
        let body = self.get_xml(&url).await?;
        Ok(catalog_core::parse_collection(&body)?)
    }

    /// Fetch one game. `Ok(None)` when the upstream document carries no boardgame.
    pub async fn fetch_game(&self, game_id: u64) -> Result<Option<GameDetail>, GeekdoError> {
        let url = format!("{}/{}", self.boardgame_base_url, game_id);
        let body = self.get_xml(&url).await?;
        Ok(catalog_core::parse_detail(&body)?)
    }

    async fn get_xml(&self, url: &str) -> Result<String, GeekdoError> {
        tracing::debug!(%url, "Upstream request");

        let resp = self.client.get(url).send().await?;

        // The API answers 201 for some collection requests; both carry a usable body.
        let status = resp.status();
        if status != StatusCode::OK && status != StatusCode::CREATED {
            tracing::warn!(%url, %status, "Upstream returned non-success status");
            return Err(GeekdoError::UpstreamStatus(status));
        }

        Ok(resp.text().await?)
    }
}
