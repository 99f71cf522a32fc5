use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE},
    Client, Method,
};
use serde_json::Value;
use tracing::{debug, error};

use shared_config::AppConfig;
use shared_models::adapter::ApiBody;
use shared_models::error::AppError;

/// Thin JSON client for the remote clinic API.
#[derive(Clone)]
pub struct ClinicApiClient {
    client: Client,
    base_url: String,
}

impl ClinicApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn get_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// Sends one request and reads the body as JSON, or as text when it is not JSON.
    ///
    /// Non-2xx responses become [`AppError::Server`] carrying the body's
    /// `message`/`error` field, or a synthesized status-and-path message.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<ApiBody, AppError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("Making {} request to {}", method, url);

        let mut req = self.client.request(method.clone(), &url).headers(self.get_headers());

        if let Some(body_data) = body {
            req = req.json(&body_data);
        }

        let response = req.send().await.map_err(|e| {
            error!("{} {} failed to complete: {}", method, url, e);
            AppError::Network(e.to_string())
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            error!("Failed to read response body from {}: {}", url, e);
            AppError::Network(e.to_string())
        })?;
        let data = ApiBody::from_text(text);

        if !status.is_success() {
            let message = data
                .error_message()
                .unwrap_or_else(|| format!("Request failed ({}) on {}", status.as_u16(), path));
            error!("API error ({}) on {} {}: {}", status, method, path, message);

            return Err(AppError::Server {
                status: status.as_u16(),
                message,
            });
        }

        Ok(data)
    }

    pub async fn get(&self, path: &str) -> Result<ApiBody, AppError> {
        self.request(Method::GET, path, None).await
    }

    pub async fn post(&self, path: &str, body: Value) -> Result<ApiBody, AppError> {
        self.request(Method::POST, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<ApiBody, AppError> {
        self.request(Method::DELETE, path, None).await
    }
}
