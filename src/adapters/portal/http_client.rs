//! HTTP portal client - the live remote-call wrapper.
//!
//! A pure transport adapter: no caching, no resilience policy, no status
//! interpretation. Cookies issued at login are carried verbatim on the
//! order lookups.

use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use crate::config::PortalApiConfig;
use crate::domain::{ChannelConfig, PortalConnection, RawOrderData};
use crate::ports::{LoginResult, PortalClient, PortalError};

#[derive(Serialize)]
struct LoginRequest<'a> {
    merchant_id: &'a str,
    username: &'a str,
    password: &'a str,
}

/// reqwest-based portal API client.
pub struct HttpPortalClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl HttpPortalClient {
    /// Creates a client from portal API configuration.
    pub fn new(config: &PortalApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout(),
        }
    }

    async fn fetch_order(
        &self,
        path: &str,
        connection: &PortalConnection,
        tracking_number: &str,
    ) -> Result<RawOrderData, PortalError> {
        let url = format!("{}/{}/{}", self.base_url, path, tracking_number);
        let response = self
            .http
            .get(&url)
            .header(reqwest::header::COOKIE, connection.cookies().join("; "))
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| PortalError::Network(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(RawOrderData::empty());
        }
        if !response.status().is_success() {
            return Err(PortalError::UnexpectedResponse(format!(
                "{} returned {}",
                path,
                response.status()
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| PortalError::UnexpectedResponse(e.to_string()))?;
        match body {
            Value::Object(fields) => Ok(RawOrderData::from_fields(fields.into_iter().collect())),
            Value::Null => Ok(RawOrderData::empty()),
            other => Err(PortalError::UnexpectedResponse(format!(
                "expected object payload, got {}",
                other
            ))),
        }
    }
}

#[async_trait]
impl PortalClient for HttpPortalClient {
    async fn login(&self, config: &ChannelConfig) -> Result<LoginResult, PortalError> {
        let url = format!("{}/auth/login", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&LoginRequest {
                merchant_id: &config.merchant_id,
                username: &config.username,
                password: config.password.expose_secret(),
            })
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| PortalError::Network(e.to_string()))?;

        let cookies: Vec<String> = response
            .headers()
            .get_all(reqwest::header::SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .map(|value| value.to_string())
            .collect();

        // The portal signals a rejected login with a non-2xx status; that
        // is an unsuccessful outcome, not a transport error.
        Ok(LoginResult {
            successful: response.status().is_success() && !cookies.is_empty(),
            cookies,
        })
    }

    async fn get_order_status(
        &self,
        connection: &PortalConnection,
        tracking_number: &str,
    ) -> Result<RawOrderData, PortalError> {
        self.fetch_order("orders/status", connection, tracking_number)
            .await
    }

    async fn get_cancelled_order(
        &self,
        connection: &PortalConnection,
        tracking_number: &str,
    ) -> Result<RawOrderData, PortalError> {
        self.fetch_order("orders/cancelled", connection, tracking_number)
            .await
    }
}
