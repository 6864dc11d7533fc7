//! HTTP client for the remote search index.

use std::time::Duration;

use tokio::time::timeout;
use tracing::debug;

use crate::catalog::{ProductRecord, QueryHit};
use crate::config::SearchConfig;
use crate::query::error::QueryError;
use crate::query::payload::{FilterPayload, QueryRequest};

/// Client for the product query endpoint.
///
/// Wraps a pooled reqwest client; cheap to clone. The connect timeout is
/// fixed at build time, the total request timeout is applied per query.
#[derive(Clone)]
pub struct SearchClient {
    client: reqwest::Client,
    endpoint: String,
    request_timeout: Duration,
}

impl SearchClient {
    pub fn new(config: &SearchConfig) -> Result<Self, QueryError> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .build()
            .map_err(QueryError::ClientBuild)?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            request_timeout: Duration::from_secs(config.timeout_seconds.into()),
        })
    }

    /// Issue one query and decode the hit list into products.
    ///
    /// Hits without metadata are skipped; result order is the order the
    /// index returned.
    pub async fn query(&self, filter: &FilterPayload) -> Result<Vec<ProductRecord>, QueryError> {
        let body = QueryRequest {
            filter: filter.clone(),
        };

        match timeout(self.request_timeout, self.send(&body)).await {
            Ok(outcome) => outcome,
            Err(_) => Err(QueryError::Timeout {
                duration: self.request_timeout.as_secs(),
            }),
        }
    }

    async fn send(&self, body: &QueryRequest) -> Result<Vec<ProductRecord>, QueryError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(body)
            .send()
            .await
            .map_err(|source| QueryError::Connection {
                endpoint: self.endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(QueryError::Index {
                status: status.as_u16(),
                message,
            });
        }

        let hits: Vec<QueryHit> = response.json().await.map_err(QueryError::Decode)?;
        debug!(hits = hits.len(), "index query completed");
        Ok(hits.into_iter().filter_map(|hit| hit.metadata).collect())
    }
}
