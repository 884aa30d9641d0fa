//! HTTP request executor.
//!
//! The rest of the crate talks to the service through the [`Transport`] trait:
//! hand it an [`ApiRequest`], get back an [`ApiResponse`] or a
//! [`TransportError`]. [`HttpTransport`] is the blocking `reqwest`
//! implementation used by the command-line tool.
//!
//! A transport reports whatever status the service answered with; turning a
//! non-2xx response into an error is the caller's job (see [`send_checked`]).

pub mod config;
pub mod error;
pub mod native;

#[cfg(test)]
pub(crate) mod testing;

pub use config::ExecutionConfig;
pub use error::TransportError;
pub use native::HttpTransport;

use crate::models::request::ApiRequest;
use crate::models::response::ApiResponse;

/// Something that can execute an [`ApiRequest`].
pub trait Transport {
    /// Sends the request and returns the response, whatever its status.
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        (**self).send(request)
    }
}

/// Sends a request and fails with [`TransportError::Status`] unless the
/// service answered with a 2xx status.
///
/// The error carries the response body so the service's own explanation
/// reaches the caller.
pub fn send_checked<T: Transport + ?Sized>(
    transport: &T,
    request: &ApiRequest,
) -> Result<ApiResponse, TransportError> {
    validate_url(&request.url)?;
    log::debug!("{} {}", request.method, request.url);

    let response = transport.send(request)?;
    log::debug!(
        "{} {} -> {} in {:?}",
        request.method,
        request.url,
        response.status_code,
        response.duration
    );

    if response.is_success() {
        Ok(response)
    } else {
        if let Some(activity_id) = response.activity_id() {
            log::warn!(
                "{} {} failed with {} (ActivityId {})",
                request.method,
                request.url,
                response.status_code,
                activity_id
            );
        }
        Err(TransportError::Status {
            method: request.method.to_string(),
            url: request.url.clone(),
            status: response.status_code,
            reason: response.status_text.clone(),
            body: response.body_text(),
        })
    }
}

/// Validates that the URL is well-formed and uses HTTP or HTTPS.
pub fn validate_url(url: &str) -> Result<url::Url, TransportError> {
    let parsed = url::Url::parse(url)?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(TransportError::InvalidUrl(format!(
            "Only HTTP and HTTPS are supported, got: {}",
            scheme
        )));
    }

    Ok(parsed)
}
