//! Shared HTTP plumbing for the per-entity gateways.
//!
//! One `Api` instance wraps the backend base address and a pooled
//! [`reqwest::Client`]; the entity gateways clone it freely. The status-code
//! contract lives here in one place: GET and PUT accept 200, POST accepts
//! 200 or 201, DELETE accepts 200 or 204. Anything else becomes a
//! [`TransportError::Status`] carrying the raw code and body.

use desk_framework::TransportError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

#[derive(Clone)]
pub struct Api {
    http: reqwest::Client,
    base_url: String,
}

impl Api {
    /// Wraps `base_url` (a trailing slash is tolerated and trimmed).
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, TransportError> {
        debug!(path, "GET");
        let response = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(network)?;
        decode(accept(response, &[200]).await?).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, TransportError> {
        debug!(path, "POST");
        let response = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(network)?;
        decode(accept(response, &[200, 201]).await?).await
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, TransportError> {
        debug!(path, "PUT");
        let response = self
            .http
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(network)?;
        decode(accept(response, &[200]).await?).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), TransportError> {
        debug!(path, "DELETE");
        let response = self
            .http
            .delete(self.url(path))
            .send()
            .await
            .map_err(network)?;
        accept(response, &[200, 204]).await?;
        Ok(())
    }
}

fn network(error: reqwest::Error) -> TransportError {
    TransportError::Network(error.to_string())
}

async fn accept(
    response: reqwest::Response,
    allowed: &[u16],
) -> Result<reqwest::Response, TransportError> {
    let status = response.status().as_u16();
    if allowed.contains(&status) {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(TransportError::Status { status, body })
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, TransportError> {
    response
        .json()
        .await
        .map_err(|e| TransportError::Decode(e.to_string()))
}
