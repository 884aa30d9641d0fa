//! Shared fixtures for integration tests.

pub mod auth_test;
pub mod list_test;
pub mod round_trip_test;

use mockito::{Matcher, Mock, ServerGuard};
use vargroup::config::ClientConfig;
use vargroup::executor::{ExecutionConfig, HttpTransport};
use vargroup::{authenticate_at, Session};

/// `Basic base64(":TOKEN")`
pub const TOKEN_HEADER: &str = "Basic OlRPS0VO";

pub fn transport() -> HttpTransport {
    HttpTransport::new(&ExecutionConfig::new(5)).expect("Failed to build transport")
}

/// Query matcher for the `api-version` parameter.
pub fn api_version(version: &str) -> Matcher {
    Matcher::UrlEncoded("api-version".to_string(), version.to_string())
}

pub fn mock_projects(server: &mut ServerGuard, body: &str) -> Mock {
    server
        .mock("GET", "/_apis/projects")
        .match_query(api_version("1.0"))
        .match_header("authorization", TOKEN_HEADER)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create()
}

pub fn mock_list(server: &mut ServerGuard, project: &str, body: &str) -> Mock {
    server
        .mock(
            "GET",
            format!("/{}/_apis/distributedtask/variablegroups", project).as_str(),
        )
        .match_header("authorization", TOKEN_HEADER)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create()
}

/// Authenticates against the mock server with `TOKEN`.
pub fn session(server: &mut ServerGuard, transport: &HttpTransport) -> Session {
    let _projects = mock_projects(server, r#"{"count":1,"value":[{}]}"#);
    authenticate_at(
        transport,
        &ClientConfig::default(),
        "demo",
        &server.url(),
        "TOKEN",
    )
    .expect("Failed to authenticate against mock server")
}
