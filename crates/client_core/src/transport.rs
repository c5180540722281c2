use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;

use shared::domain::{CommitteeId, QualificationId, WeightId};

pub const QUALIFICATIONS_ENDPOINT: &str = "/api/qualifiche";
pub const WEIGHTS_ENDPOINT: &str = "/api/pesi";

/// Option-fragment fetches and selection-context commands against the
/// search backend.
#[async_trait]
pub trait SelectionGateway: Send + Sync {
    async fn fetch_qualifications(&self) -> Result<String>;
    async fn fetch_weights(&self) -> Result<String>;
    async fn commit_committee(&self, id: &CommitteeId) -> Result<()>;
    async fn commit_qualification(&self, id: &QualificationId) -> Result<()>;
    async fn commit_weight(&self, id: &WeightId) -> Result<()>;
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("transport failure calling {endpoint}: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("unexpected status {status} from {endpoint}")]
    UnexpectedStatus { endpoint: String, status: StatusCode },
}

/// Gateway over the live backend. Keeps a cookie jar so consecutive commits
/// land on the same server-held selection context.
pub struct HttpSelectionGateway {
    http: Client,
    base_url: String,
}

impl HttpSelectionGateway {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder().cookie_store(true).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    async fn get_text(&self, endpoint: &str) -> Result<String, GatewayError> {
        let response = self
            .http
            .get(format!("{}{endpoint}", self.base_url))
            .send()
            .await
            .map_err(|source| GatewayError::Transport {
                endpoint: endpoint.to_string(),
                source,
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::UnexpectedStatus {
                endpoint: endpoint.to_string(),
                status,
            });
        }
        response
            .text()
            .await
            .map_err(|source| GatewayError::Transport {
                endpoint: endpoint.to_string(),
                source,
            })
    }

    // Update responses carry no payload the client cares about.
    async fn commit(&self, entity: &str, id: &str) -> Result<(), GatewayError> {
        self.get_text(&format!("/api/update/{entity}/{id}"))
            .await
            .map(|_| ())
    }
}

#[async_trait]
impl SelectionGateway for HttpSelectionGateway {
    async fn fetch_qualifications(&self) -> Result<String> {
        Ok(self.get_text(QUALIFICATIONS_ENDPOINT).await?)
    }

    async fn fetch_weights(&self) -> Result<String> {
        Ok(self.get_text(WEIGHTS_ENDPOINT).await?)
    }

    async fn commit_committee(&self, id: &CommitteeId) -> Result<()> {
        Ok(self.commit("comitato", &id.0).await?)
    }

    async fn commit_qualification(&self, id: &QualificationId) -> Result<()> {
        Ok(self.commit("qualifica", &id.0).await?)
    }

    async fn commit_weight(&self, id: &WeightId) -> Result<()> {
        Ok(self.commit("peso", &id.0).await?)
    }
}

/// Fails every operation; for hosts wired without a backend.
pub struct MissingSelectionGateway;

#[async_trait]
impl SelectionGateway for MissingSelectionGateway {
    async fn fetch_qualifications(&self) -> Result<String> {
        Err(anyhow!("selection backend unavailable"))
    }

    async fn fetch_weights(&self) -> Result<String> {
        Err(anyhow!("selection backend unavailable"))
    }

    async fn commit_committee(&self, id: &CommitteeId) -> Result<()> {
        Err(anyhow!("selection backend unavailable for committee {id}"))
    }

    async fn commit_qualification(&self, id: &QualificationId) -> Result<()> {
        Err(anyhow!(
            "selection backend unavailable for qualification {id}"
        ))
    }

    async fn commit_weight(&self, id: &WeightId) -> Result<()> {
        Err(anyhow!("selection backend unavailable for weight {id}"))
    }
}
