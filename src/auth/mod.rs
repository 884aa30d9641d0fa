//! Authentication and the session it produces.
//!
//! [`authenticate`] turns an account name and a personal access token into a
//! [`Session`] after checking the credentials against the service. The
//! session is an ordinary value; every reader and writer call takes it
//! explicitly and sends its Authorization header unchanged.

pub mod basic;

use crate::config::ClientConfig;
use crate::executor::{send_checked, Transport, TransportError};
use crate::models::request::{ApiRequest, HttpMethod};
use serde_json::Value;
use thiserror::Error;
use url::Url;

/// Errors that can occur while establishing a session.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The check request failed or found no projects for the account.
    #[error("invalid token or account: {0}")]
    InvalidCredentials(String),

    /// Account name or token was empty.
    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    /// The account URL could not be turned into a usable base URL.
    #[error("Invalid base URL '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },
}

/// Authenticated connection context.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    account: String,
    base_url: Url,
    auth_header: String,
}

impl Session {
    /// Account name the session was created for.
    pub fn account(&self) -> &str {
        &self.account
    }

    /// Base URL all API paths are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Authorization header value produced at authentication.
    pub fn auth_header(&self) -> &str {
        &self.auth_header
    }

    /// Appends path segments to the base URL, percent-encoding each segment.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Starts a request carrying the session's Authorization header.
    pub fn request(&self, method: HttpMethod, url: impl Into<String>) -> ApiRequest {
        ApiRequest::new(method, url)
            .with_header("Authorization", self.auth_header.clone())
            .with_header("Accept", "application/json")
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("account", &self.account)
            .field("base_url", &self.base_url.as_str())
            .field("auth_header", &"<redacted>")
            .finish()
    }
}

/// Authenticates against the account URL derived from the configured template.
pub fn authenticate<T: Transport + ?Sized>(
    transport: &T,
    config: &ClientConfig,
    account: &str,
    personal_access_token: &str,
) -> Result<Session, AuthError> {
    if account.trim().is_empty() {
        return Err(AuthError::MissingCredentials(
            "account name is empty".to_string(),
        ));
    }
    let base_url = config.account_url(account);
    authenticate_at(transport, config, account, &base_url, personal_access_token)
}

/// Authenticates against an explicit base URL (on-premises servers, test doubles).
///
/// Probes the account's project list with the token. Any failure of that
/// request, or an empty project list, is reported as
/// [`AuthError::InvalidCredentials`] and no session is returned.
pub fn authenticate_at<T: Transport + ?Sized>(
    transport: &T,
    config: &ClientConfig,
    account: &str,
    base_url: &str,
    personal_access_token: &str,
) -> Result<Session, AuthError> {
    if personal_access_token.trim().is_empty() {
        return Err(AuthError::MissingCredentials(
            "personal access token is empty".to_string(),
        ));
    }

    let base_url = parse_base_url(base_url)?;
    let session = Session {
        account: account.to_string(),
        base_url,
        auth_header: basic::token_auth(personal_access_token),
    };

    let mut check_url = session.endpoint(&["_apis", "projects"]);
    check_url
        .query_pairs_mut()
        .append_pair("api-version", &config.projects_api_version);

    let request = session.request(HttpMethod::GET, check_url.as_str());
    let response = send_checked(transport, &request).map_err(|e| match e {
        TransportError::Status { status, .. } => {
            AuthError::InvalidCredentials(format!("project list request returned {}", status))
        }
        other => AuthError::InvalidCredentials(other.to_string()),
    })?;

    let projects = response
        .json::<Value>()
        .map(|body| project_count(&body))
        .unwrap_or(0);

    if projects == 0 {
        log::warn!("No projects visible to account '{}'", account);
        return Err(AuthError::InvalidCredentials(
            "no projects returned for account".to_string(),
        ));
    }

    log::info!(
        "Authenticated to {} ({} project(s) visible)",
        session.base_url,
        projects
    );
    Ok(session)
}

fn parse_base_url(raw: &str) -> Result<Url, AuthError> {
    let invalid = |message: String| AuthError::InvalidBaseUrl {
        url: raw.to_string(),
        message,
    };

    let url = crate::executor::validate_url(raw).map_err(|e| invalid(e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(invalid("URL cannot be used as a base".to_string()));
    }
    Ok(url)
}

/// Counts projects in either the `{ "value": [...] }` envelope or a bare array.
fn project_count(body: &Value) -> usize {
    match body {
        Value::Array(items) => items.len(),
        Value::Object(map) => map
            .get("value")
            .and_then(Value::as_array)
            .map_or(0, Vec::len),
        _ => 0,
    }
}
