//! HTTP client for network-based API calls

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::{Employee, PinChangeRequest, PinUpdateResponse};

use crate::{ClientConfig, ClientError, ClientResult, DirectoryApi};

/// HTTP client for making network requests to the directory service
#[derive(Debug, Clone)]
pub struct HttpDirectoryClient {
    client: Client,
    base_url: String,
}

impl HttpDirectoryClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return Err(Self::error_for(status, &text));
        }

        response.json().await.map_err(Into::into)
    }

    /// Map a non-success status to a client error, carrying the server's
    /// `message` field when the body has one
    fn error_for(status: StatusCode, body: &str) -> ClientError {
        let message = extract_message(body);
        match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
            StatusCode::FORBIDDEN => ClientError::Forbidden(message),
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            StatusCode::BAD_REQUEST => ClientError::Validation(message),
            _ => ClientError::Internal(message),
        }
    }
}

/// Pull the `message` field out of a JSON error body, falling back to the
/// raw text
fn extract_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}

#[async_trait]
impl DirectoryApi for HttpDirectoryClient {
    async fn employee(&self, emp_id: i64) -> ClientResult<Employee> {
        self.get(&format!("employees/{emp_id}")).await
    }

    async fn employees(&self) -> ClientResult<Vec<Employee>> {
        self.get("employees").await
    }

    async fn update_pin(&self, request: &PinChangeRequest) -> ClientResult<PinUpdateResponse> {
        let response = self
            .client
            .put(self.url("employees/update-pin"))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        // The update endpoint may answer with a bare text body, so read the
        // body as text and normalize instead of forcing JSON
        let text = response.text().await?;

        if !status.is_success() {
            return Err(Self::error_for(status, &text));
        }

        tracing::debug!(emp_id = request.emp_id, "PIN update accepted by server");
        Ok(PinUpdateResponse::from_body(&text))
    }
}
