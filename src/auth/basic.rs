//! Basic HTTP authentication for personal access tokens.
//!
//! The service accepts a personal access token as the password of a Basic
//! credential with an empty user name (RFC 7617).

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Encodes username and password into a Basic authentication header value.
///
/// # Examples
///
/// ```
/// use vargroup::auth::basic::basic_auth;
///
/// let auth_header = basic_auth("user", "pass123");
/// assert_eq!(auth_header, "Basic dXNlcjpwYXNzMTIz");
/// ```
pub fn basic_auth(username: &str, password: &str) -> String {
    let credentials = format!("{}:{}", username, password);
    let encoded = STANDARD.encode(credentials.as_bytes());
    format!("Basic {}", encoded)
}

/// Builds the Authorization header value for a personal access token.
///
/// # Examples
///
/// ```
/// use vargroup::auth::basic::token_auth;
///
/// assert_eq!(token_auth("TOKEN"), "Basic OlRPS0VO");
/// ```
pub fn token_auth(personal_access_token: &str) -> String {
    basic_auth("", personal_access_token)
}
