use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::{api::types::ApiError, config};

#[derive(Clone, Default)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(super) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(super) fn http_client(&self) -> &Client {
        &self.client
    }

    /// Sends the session cookie along with browser requests.
    pub(super) fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
        #[cfg(target_arch = "wasm32")]
        {
            builder.fetch_credentials_include()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder
        }
    }

    pub(super) async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = Self::with_credentials(builder)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    pub(super) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        self.send(builder)
            .await?
            .json::<T>()
            .await
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
    }

    async fn error_from_response(response: Response) -> ApiError {
        let status = response.status();
        match response.json::<ApiError>().await {
            Ok(error) => error,
            Err(_) => ApiError::request_failed(format!("Request failed with status {}", status)),
        }
    }
}
