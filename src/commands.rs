//! Command handlers behind the `vargroup` subcommands.
//!
//! Each handler runs one library operation and renders its result as text
//! for stdout. Argument parsing and process setup live in the binary.

use crate::auth::Session;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::executor::Transport;
use crate::models::variable_group::VariableGroup;
use crate::variable_groups::{
    storage, ExportReport, ImportSource, VariableGroupReader, VariableGroupWriter,
};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Lists groups of `project` and renders them as a JSON array.
pub fn list_command<T: Transport + ?Sized>(
    transport: &T,
    session: &Session,
    project: &str,
    names: &[String],
) -> Result<String> {
    let groups = VariableGroupReader::new(transport, session).list(project, name_filter(names))?;
    log::info!("Found {} variable group(s) in '{}'", groups.len(), project);
    render_json(&groups)
}

/// Exports groups, either fetched from `project` or re-read from `inputs`.
///
/// Returns the report together with the text to print: the documents as a
/// JSON array when no output directory was given, nothing otherwise.
pub fn export_command<T: Transport + ?Sized>(
    transport: &T,
    session: &Session,
    config: &ClientConfig,
    project: &str,
    names: &[String],
    inputs: &[PathBuf],
    out_dir: Option<&Path>,
) -> Result<(ExportReport, Option<String>)> {
    let source = if inputs.is_empty() {
        None
    } else {
        Some(read_groups(inputs)?)
    };

    let report = VariableGroupWriter::new(transport, session, config).export(
        project,
        name_filter(names),
        source,
        out_dir,
    )?;

    let output = match out_dir {
        Some(_) => None,
        None => Some(render_documents(&report.documents)?),
    };
    Ok((report, output))
}

/// Imports groups and renders the service's responses as a JSON array.
pub fn import_command<T: Transport + ?Sized>(
    transport: &T,
    session: &Session,
    config: &ClientConfig,
    project: &str,
    source: ImportSource,
    update: bool,
) -> Result<String> {
    let written = VariableGroupWriter::new(transport, session, config).import(project, source, update)?;
    log::info!(
        "{} {} variable group(s) in '{}'",
        if update { "Updated" } else { "Created" },
        written.len(),
        project
    );
    render_json(&written)
}

fn name_filter(names: &[String]) -> Option<&[String]> {
    if names.is_empty() {
        None
    } else {
        Some(names)
    }
}

/// Reads previously exported group files.
fn read_groups(paths: &[PathBuf]) -> Result<Vec<VariableGroup>> {
    paths
        .iter()
        .map(|path| {
            let content = storage::read_document(path)?;
            VariableGroup::from_json(&content).map_err(|e| {
                Error::invalid_group(Some(&path.display().to_string()), e.to_string())
            })
        })
        .collect()
}

fn render_json(groups: &[VariableGroup]) -> Result<String> {
    serde_json::to_string_pretty(groups).map_err(|e| Error::invalid_group(None, e.to_string()))
}

fn render_documents(documents: &[String]) -> Result<String> {
    let values = documents
        .iter()
        .map(|d| serde_json::from_str::<Value>(d))
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::invalid_group(None, e.to_string()))?;
    serde_json::to_string_pretty(&values).map_err(|e| Error::invalid_group(None, e.to_string()))
}
