use std::time::Duration;

use anyhow::Context;
use broker_core::ApiResponse;
use reqwest::{
    blocking::{Client, RequestBuilder},
    header::ACCEPT,
    Method,
};
use serde::{de::DeserializeOwned, de::IgnoredAny, Serialize};
use tracing::{debug, warn};

use crate::app_config::AppConfig;

pub mod auth;
pub mod consultation;
pub mod contract;
pub mod customer;
pub mod property;
pub mod sms;

/// HTTP gateway to the brokerage API.
///
/// Every operation returns an [`ApiResponse`]; transport errors, error
/// statuses and malformed bodies are all folded into the envelope. A server
/// provided envelope is passed through as-is, otherwise the operation's
/// localized fallback message is used.
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(
        base_url: &str,
        token: Option<String>,
        timeout: Option<Duration>,
    ) -> anyhow::Result<Self> {
        let mut builder =
            Client::builder().user_agent(concat!("broker/", env!("CARGO_PKG_VERSION")));

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        Self::new(
            &config.api_url,
            config.api_token.clone(),
            config.timeout_secs.map(Duration::from_secs),
        )
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let request = self.http.request(method, url).header(ACCEPT, "application/json");

        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub(crate) fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        fallback: &str,
    ) -> ApiResponse<T> {
        self.execute(self.request(Method::GET, path).query(query), fallback)
    }

    pub(crate) fn post<B, T>(&self, path: &str, body: &B, fallback: &str) -> ApiResponse<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(self.request(Method::POST, path).json(body), fallback)
    }

    pub(crate) fn put<B, T>(&self, path: &str, body: &B, fallback: &str) -> ApiResponse<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(self.request(Method::PUT, path).json(body), fallback)
    }

    /// PUT for operations that answer without payload
    pub(crate) fn put_unit<B>(&self, path: &str, body: &B, fallback: &str) -> ApiResponse<()>
    where
        B: Serialize + ?Sized,
    {
        unit(self.execute(self.request(Method::PUT, path).json(body), fallback))
    }

    /// POST for operations that answer without payload
    pub(crate) fn post_unit<B>(&self, path: &str, body: &B, fallback: &str) -> ApiResponse<()>
    where
        B: Serialize + ?Sized,
    {
        unit(self.execute(self.request(Method::POST, path).json(body), fallback))
    }

    pub(crate) fn delete(&self, path: &str, fallback: &str) -> ApiResponse<()> {
        unit(self.execute(self.request(Method::DELETE, path), fallback))
    }

    fn execute<T: DeserializeOwned>(&self, request: RequestBuilder, fallback: &str) -> ApiResponse<T> {
        let response = match request.send() {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "request did not complete");
                return ApiResponse::failure(fallback);
            }
        };

        let status = response.status();
        let url = response.url().path().to_string();
        debug!(%status, path = %url, "response received");

        let body = match response.text() {
            Ok(body) => body,
            Err(err) => {
                warn!(%status, path = %url, error = %err, "failed to read response body");
                return ApiResponse::failure(fallback);
            }
        };

        match serde_json::from_str::<ApiResponse<T>>(&body) {
            Ok(envelope) => {
                if !status.is_success() {
                    warn!(%status, path = %url, error = ?envelope.error_message(), "server reported failure");
                }
                envelope
            }
            Err(err) => {
                warn!(%status, path = %url, error = %err, "response is not an API envelope");
                ApiResponse::failure(fallback)
            }
        }
    }
}

/// Envelope of a payload-less operation: `data` is `Some(())` on success
fn unit(envelope: ApiResponse<IgnoredAny>) -> ApiResponse<()> {
    let success = envelope.success;
    let mut envelope = envelope.map(|_| ());
    envelope.data = success.then_some(());
    envelope
}
