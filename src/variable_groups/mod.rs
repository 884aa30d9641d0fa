//! Variable group library operations: list, export and import.
//!
//! All endpoints live under `{base}/{project}/_apis/distributedtask/variablegroups`.
//! Listing uses the bare collection URL; creates and replaces carry the
//! configured `api-version` query parameter.

pub mod reader;
pub mod storage;
pub mod writer;

pub use reader::VariableGroupReader;
pub use writer::{ExportReport, ImportSource, VariableGroupWriter};

use crate::auth::Session;
use url::Url;

const COLLECTION_PATH: [&str; 3] = ["_apis", "distributedtask", "variablegroups"];

/// `{base}/{project}/_apis/distributedtask/variablegroups`
pub(crate) fn collection_endpoint(session: &Session, project: &str) -> Url {
    let mut segments = vec![project];
    segments.extend(COLLECTION_PATH);
    session.endpoint(&segments)
}

/// `{base}/{project}/_apis/distributedtask/variablegroups/{id}`
pub(crate) fn group_endpoint(session: &Session, project: &str, id: u64) -> Url {
    let id = id.to_string();
    let mut segments = vec![project];
    segments.extend(COLLECTION_PATH);
    segments.push(id.as_str());
    session.endpoint(&segments)
}
