//! Export/import round trips against a mock service.

use super::{api_version, mock_list, session, transport, TOKEN_HEADER};
use mockito::{Matcher, Server};
use std::fs;
use tempfile::TempDir;
use vargroup::config::ClientConfig;
use vargroup::variable_groups::{ImportSource, VariableGroupWriter};
use vargroup::{Error, TransportError, VariableGroup};

const REMOTE: &str = r#"{
    "count": 2,
    "value": [
        {
            "id": 42,
            "type": "Vsts",
            "name": "Dev",
            "description": "development",
            "variables": {
                "ConnectionString": { "value": "Server=dev;Database=app" },
                "ApiKey": { "value": null, "isSecret": true }
            }
        },
        {
            "id": 43,
            "type": "Vsts",
            "name": "Prod",
            "variables": { "ConnectionString": { "value": "Server=prod" } }
        }
    ]
}"#;

fn remote_group(name: &str) -> VariableGroup {
    let list: serde_json::Value = serde_json::from_str(REMOTE).unwrap();
    list["value"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| serde_json::from_value::<VariableGroup>(g.clone()).unwrap())
        .find(|g| g.name == name)
        .unwrap()
}

#[test]
fn test_export_single_named_group() {
    let mut server = Server::new();
    let transport = transport();
    let session = session(&mut server, &transport);
    let _list = mock_list(&mut server, "Proj1", REMOTE);
    let config = ClientConfig::default();

    let names = vec!["Dev".to_string()];
    let report = VariableGroupWriter::new(&transport, &session, &config)
        .export("Proj1", Some(names.as_slice()), None, None)
        .unwrap();

    assert_eq!(report.documents.len(), 1);
    assert_eq!(
        VariableGroup::from_json(&report.documents[0]).unwrap(),
        remote_group("Dev")
    );
}

#[test]
fn test_export_then_create_in_other_project_keeps_variables() {
    let mut server = Server::new();
    let transport = transport();
    let session = session(&mut server, &transport);
    let _list = mock_list(&mut server, "Proj1", REMOTE);
    let config = ClientConfig::default();
    let writer = VariableGroupWriter::new(&transport, &session, &config);
    let dir = TempDir::new().unwrap();

    let report = writer
        .export("Proj1", None, None, Some(dir.path()))
        .unwrap();
    assert_eq!(
        report.written,
        vec![dir.path().join("Dev.json"), dir.path().join("Prod.json")]
    );
    assert_eq!(report.documents.len(), 2);

    let dev_document = fs::read_to_string(dir.path().join("Dev.json")).unwrap();
    let mut created = remote_group("Dev");
    created.id = Some(7);
    let create = server
        .mock("POST", "/Proj2/_apis/distributedtask/variablegroups")
        .match_query(api_version("4.1-preview.1"))
        .match_header("authorization", TOKEN_HEADER)
        .match_header("content-type", "application/json")
        .match_body(Matcher::Exact(dev_document))
        .with_status(200)
        .with_body(created.to_json(false).unwrap())
        .create();

    let written = writer
        .import(
            "Proj2",
            ImportSource::files([dir.path().join("Dev.json")]),
            false,
        )
        .unwrap();

    create.assert();
    assert_eq!(written.len(), 1);
    assert_eq!(written[0].id, Some(7));
    assert_eq!(written[0].variables, remote_group("Dev").variables);
}

#[test]
fn test_import_update_puts_to_existing_id() {
    let mut server = Server::new();
    let transport = transport();
    let session = session(&mut server, &transport);
    let _list = mock_list(&mut server, "Proj1", REMOTE);
    let config = ClientConfig::default();
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("dev.json");
    let document = r#"{"name":"Dev","variables":{"ConnectionString":{"value":"Server=dev2"}}}"#;
    fs::write(&file, document).unwrap();

    let update = server
        .mock("PUT", "/Proj1/_apis/distributedtask/variablegroups/42")
        .match_query(api_version("4.1-preview.1"))
        .match_body(Matcher::Exact(document.to_string()))
        .with_status(200)
        .with_body(
            r#"{"id":42,"name":"Dev","variables":{"ConnectionString":{"value":"Server=dev2"}}}"#,
        )
        .create();

    let written = VariableGroupWriter::new(&transport, &session, &config)
        .import("Proj1", ImportSource::files([&file]), true)
        .unwrap();

    update.assert();
    assert_eq!(written[0].id, Some(42));
}

#[test]
fn test_import_update_of_unknown_group_is_transport_error() {
    let mut server = Server::new();
    let transport = transport();
    let session = session(&mut server, &transport);
    let _list = mock_list(&mut server, "Proj1", REMOTE);
    let put = server
        .mock("PUT", Matcher::Any)
        .expect(0)
        .create();
    let config = ClientConfig::default();

    let err = VariableGroupWriter::new(&transport, &session, &config)
        .import(
            "Proj1",
            ImportSource::json(r#"{"name":"Staging","variables":{}}"#),
            true,
        )
        .unwrap_err();

    put.assert();
    assert!(matches!(
        err,
        Error::Transport(TransportError::GroupNotFound { .. })
    ));
}

#[test]
fn test_import_create_conflict_reports_service_message() {
    let mut server = Server::new();
    let transport = transport();
    let session = session(&mut server, &transport);
    let _conflict = server
        .mock("POST", "/Proj1/_apis/distributedtask/variablegroups")
        .match_query(api_version("4.1-preview.1"))
        .with_status(400)
        .with_body(r#"{"message":"Variable group with name Dev already exists."}"#)
        .create();
    let config = ClientConfig::default();

    let err = VariableGroupWriter::new(&transport, &session, &config)
        .import_group("Proj1", remote_group("Dev"), false)
        .unwrap_err();

    assert!(err.to_string().contains("already exists"));
}
