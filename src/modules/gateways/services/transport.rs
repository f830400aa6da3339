use async_trait::async_trait;
use reqwest::{header, Client};

use crate::core::{AppError, Result};

/// Posts a serialized transaction to the gateway and returns the response body
#[async_trait]
pub trait AimTransport: Send + Sync {
    async fn post(&self, endpoint: &str, body: &str) -> Result<String>;
}

/// User agent sent with every transaction request
pub fn user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!(
        "MarketPress/{}: http://premium.wpmudev.org/project/e-commerce | Authorize.net AIM Plugin/{}",
        version, version
    )
}

/// HTTP transport backed by reqwest.
///
/// Certificate verification is disabled. Any response that carries a
/// readable body is returned regardless of its status code.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .danger_accept_invalid_certs(true)
            .user_agent(user_agent())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl AimTransport for ReqwestTransport {
    async fn post(&self, endpoint: &str, body: &str) -> Result<String> {
        let response = self
            .client
            .post(endpoint)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body.to_string())
            .send()
            .await
            .map_err(|e| AppError::gateway(format!("Authorize.net request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                gateway = "authorizenet-aim",
                status = %status,
                "Gateway answered with a non-success status"
            );
        }

        response
            .text()
            .await
            .map_err(|e| AppError::gateway(format!("Failed to read Authorize.net response: {}", e)))
    }
}
