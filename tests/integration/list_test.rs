//! Listing and filtering through the HTTP transport.

use super::{mock_list, session, transport};
use mockito::Server;
use vargroup::variable_groups::VariableGroupReader;
use vargroup::{Error, TransportError};

const GROUPS: &str = r#"{
    "count": 2,
    "value": [
        { "id": 1, "name": "A", "variables": { "Key": { "value": "a" } } },
        { "id": 2, "name": "Other", "variables": {} }
    ]
}"#;

#[test]
fn test_list_with_missing_name_returns_only_existing() {
    let mut server = Server::new();
    let transport = transport();
    let session = session(&mut server, &transport);
    let _list = mock_list(&mut server, "Proj1", GROUPS);

    let names = vec!["A".to_string(), "B".to_string()];
    let groups = VariableGroupReader::new(&transport, &session)
        .list("Proj1", Some(names.as_slice()))
        .unwrap();

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].name, "A");
    assert_eq!(groups[0].variables["Key"].value.as_deref(), Some("a"));
}

#[test]
fn test_list_server_error_carries_body() {
    let mut server = Server::new();
    let transport = transport();
    let session = session(&mut server, &transport);
    let _list = server
        .mock("GET", "/Proj1/_apis/distributedtask/variablegroups")
        .with_status(500)
        .with_body("backend unavailable")
        .create();

    let err = VariableGroupReader::new(&transport, &session)
        .list("Proj1", None)
        .unwrap_err();

    match err {
        Error::Transport(TransportError::Status { status, body, .. }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "backend unavailable");
        }
        other => panic!("Expected Status error, got {:?}", other),
    }
}
