//! Authentication against a mock service.

use super::{api_version, mock_projects, transport, TOKEN_HEADER};
use mockito::Server;
use vargroup::config::ClientConfig;
use vargroup::variable_groups::VariableGroupReader;
use vargroup::{authenticate, authenticate_at, AuthError};

#[test]
fn test_authenticate_with_valid_token() {
    let mut server = Server::new();
    let projects = mock_projects(&mut server, r#"{"count":1,"value":[{}]}"#);
    let transport = transport();

    let session =
        authenticate_at(&transport, &ClientConfig::default(), "demo", &server.url(), "TOKEN")
            .unwrap();

    projects.assert();
    assert_eq!(session.auth_header(), TOKEN_HEADER);
}

#[test]
fn test_authenticate_with_empty_project_list() {
    let mut server = Server::new();
    let _projects = mock_projects(&mut server, r#"{"count":0,"value":[]}"#);
    let transport = transport();

    let err = authenticate_at(&transport, &ClientConfig::default(), "demo", &server.url(), "TOKEN")
        .unwrap_err();

    assert!(matches!(err, AuthError::InvalidCredentials(_)));
}

#[test]
fn test_authenticate_with_rejected_token() {
    let mut server = Server::new();
    let _unauthorized = server
        .mock("GET", "/_apis/projects")
        .match_query(api_version("1.0"))
        .with_status(401)
        .create();
    let transport = transport();

    let err = authenticate_at(&transport, &ClientConfig::default(), "demo", &server.url(), "BAD")
        .unwrap_err();

    assert!(matches!(err, AuthError::InvalidCredentials(_)));
}

#[test]
fn test_authenticate_uses_account_url_template() {
    let mut server = Server::new();
    let _projects = server
        .mock("GET", "/demo/_apis/projects")
        .match_query(api_version("1.0"))
        .match_header("authorization", TOKEN_HEADER)
        .with_status(200)
        .with_body(r#"{"value":[{"name":"Proj1"}]}"#)
        .create();
    let transport = transport();
    let config = ClientConfig {
        account_url_template: format!("{}/{{account}}", server.url()),
        ..ClientConfig::default()
    };

    let session = authenticate(&transport, &config, "demo", "TOKEN").unwrap();
    assert_eq!(session.base_url().as_str(), format!("{}/demo", server.url()));
}

#[test]
fn test_session_header_is_reused_verbatim() {
    let mut server = Server::new();
    let transport = transport();
    let session = super::session(&mut server, &transport);
    let list = server
        .mock("GET", "/Proj1/_apis/distributedtask/variablegroups")
        .match_header("authorization", TOKEN_HEADER)
        .with_status(200)
        .with_body(r#"{"value":[]}"#)
        .expect(2)
        .create();

    let reader = VariableGroupReader::new(&transport, &session);
    reader.list("Proj1", None).unwrap();
    reader.list("Proj1", None).unwrap();

    list.assert();
}
