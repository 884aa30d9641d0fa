//! Native HTTP transport built on the blocking `reqwest` client.

use crate::executor::config::ExecutionConfig;
use crate::executor::error::TransportError;
use crate::executor::Transport;
use crate::models::request::{ApiRequest, HttpMethod};
use crate::models::response::ApiResponse;
use std::collections::HashMap;
use std::time::Instant;

/// Blocking HTTP transport with a finite per-request timeout.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Builds the underlying client from the execution settings.
    pub fn new(config: &ExecutionConfig) -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout_duration())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| TransportError::BuildError(e.to_string()))?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        let start_time = Instant::now();

        let method = match request.method {
            HttpMethod::GET => reqwest::Method::GET,
            HttpMethod::POST => reqwest::Method::POST,
            HttpMethod::PUT => reqwest::Method::PUT,
        };

        let mut req_builder = self.client.request(method, &request.url);

        for (name, value) in &request.headers {
            req_builder = req_builder.header(name, value);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.clone());
        }

        let response = req_builder.send()?;

        let status_code = response.status().as_u16();
        let status_text = response
            .status()
            .canonical_reason()
            .unwrap_or("Unknown")
            .to_string();

        let mut headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(value_str) = value.to_str() {
                headers.insert(name.as_str().to_string(), value_str.to_string());
            }
        }

        let body = response.bytes()?.to_vec();

        Ok(ApiResponse {
            status_code,
            status_text,
            headers,
            body,
            duration: start_time.elapsed(),
        })
    }
}
