//! HTTP client for the warehouse server

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::error::ApiResponse;
use shared::models::{WarehouseCreated, Zone};

use crate::{ClientConfig, ClientError, ClientResult};

/// Path of the bulk submission endpoint
pub const ADD_WAREHOUSE_PATH: &str = "/api/addwarehouse";

/// Server operations the form needs
#[async_trait]
pub trait WarehouseApi: Send + Sync {
    /// Submit a full zone array as one warehouse
    async fn add_warehouse(&self, zones: &[Zone]) -> ClientResult<WarehouseCreated>;
}

/// HTTP client for making requests to the warehouse server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Liveness probe (`GET /`), returns the server's fixed text body
    pub async fn liveness(&self) -> ClientResult<String> {
        let response = self.client.get(self.url("/")).send().await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(ClientError::Server {
                status: status.as_u16(),
                message: text,
            });
        }
        Ok(text)
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            // Error bodies are `{code, message, details}`; fall back to raw text.
            let (code, message) = match serde_json::from_str::<ApiResponse<()>>(&text) {
                Ok(body) => (body.code, body.message),
                Err(_) => (None, text),
            };
            return match status {
                StatusCode::BAD_REQUEST => Err(ClientError::Validation { code, message }),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
                _ => Err(ClientError::Server {
                    status: status.as_u16(),
                    message,
                }),
            };
        }

        response.json().await.map_err(Into::into)
    }
}

#[async_trait]
impl WarehouseApi for HttpClient {
    async fn add_warehouse(&self, zones: &[Zone]) -> ClientResult<WarehouseCreated> {
        tracing::debug!(zones = zones.len(), "Submitting warehouse");
        self.post::<ApiResponse<WarehouseCreated>, _>(ADD_WAREHOUSE_PATH, zones)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing warehouse data".to_string()))
    }
}
