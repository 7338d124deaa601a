use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error};

/// HTTP client for the Late Show API.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client; a trailing `/` on the base URL is dropped.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> anyhow::Result<T> {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            error!("GET request failed {}: {}", url, e);
            anyhow::anyhow!("GET request failed: {}", e)
        })?;

        Self::decode(response, "GET", &url).await
    }

    /// Sends a POST request with a JSON body
    pub async fn post<T: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> anyhow::Result<R> {
        let url = self.url(path);
        debug!("POST {} with body", url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                error!("POST request failed {}: {}", url, e);
                anyhow::anyhow!("POST request failed: {}", e)
            })?;

        Self::decode(response, "POST", &url).await
    }

    /// Sends a DELETE request
    pub async fn delete(&self, path: &str) -> anyhow::Result<()> {
        let url = self.url(path);
        debug!("DELETE {}", url);

        let response = self.client.delete(&url).send().await.map_err(|e| {
            error!("DELETE request failed {}: {}", url, e);
            anyhow::anyhow!("DELETE request failed: {}", e)
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            error!("DELETE {} returned {}: {}", url, status, text);
            return Err(http_error(status, &text));
        }

        Ok(())
    }

    async fn decode<R: DeserializeOwned>(
        response: reqwest::Response,
        method: &str,
        url: &str,
    ) -> anyhow::Result<R> {
        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            error!("{} {} returned {}: {}", method, url, status, text);
            return Err(http_error(status, &text));
        }

        response.json::<R>().await.map_err(|e| {
            error!("Failed to parse JSON: {}", e);
            anyhow::anyhow!("Failed to parse response: {}", e)
        })
    }
}

/// Prefers the API's own error message over the raw body.
pub fn http_error(status: reqwest::StatusCode, body: &str) -> anyhow::Error {
    let message = shared::error_message(body).unwrap_or_else(|| body.to_string());
    anyhow::anyhow!("HTTP {}: {}", status, message)
}
