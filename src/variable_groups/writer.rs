//! Exporting groups to JSON documents and importing them back.
//!
//! Export serializes groups (fetched, or supplied by the caller) and
//! optionally writes one `{name}.json` per group. Import sends each input
//! document as-is: POST to create, or PUT to the id of the same-named group
//! when updating.

use super::reader::VariableGroupReader;
use super::{collection_endpoint, group_endpoint, storage};
use crate::auth::Session;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::executor::{send_checked, Transport, TransportError};
use crate::models::request::HttpMethod;
use crate::models::variable_group::VariableGroup;
use serde_json::Value;
use std::path::{Path, PathBuf};
use url::Url;

/// Inputs accepted by [`VariableGroupWriter::import`]. Each entry becomes one write.
#[derive(Debug, Clone)]
pub enum ImportSource {
    /// Inline JSON documents.
    Json(Vec<String>),
    /// Files holding one JSON document each.
    Files(Vec<PathBuf>),
    /// A single in-memory group.
    Group(VariableGroup),
    /// Several in-memory groups.
    Groups(Vec<VariableGroup>),
}

impl ImportSource {
    pub fn json(document: impl Into<String>) -> Self {
        ImportSource::Json(vec![document.into()])
    }

    pub fn files<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        ImportSource::Files(paths.into_iter().map(Into::into).collect())
    }
}

impl From<VariableGroup> for ImportSource {
    fn from(group: VariableGroup) -> Self {
        ImportSource::Group(group)
    }
}

impl From<Vec<VariableGroup>> for ImportSource {
    fn from(groups: Vec<VariableGroup>) -> Self {
        ImportSource::Groups(groups)
    }
}

/// One resolved import input.
#[derive(Debug, Clone, PartialEq)]
struct ImportDocument {
    origin: Option<String>,
    name: String,
    body: String,
}

impl ImportDocument {
    fn parse(origin: Option<String>, body: String) -> Result<Self> {
        let value: Value = serde_json::from_str(&body)
            .map_err(|e| Error::invalid_group(origin.as_deref(), e.to_string()))?;

        let name = value
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::invalid_group(origin.as_deref(), "missing string field `name`"))?
            .to_string();

        Ok(Self { origin, name, body })
    }

    fn from_group(group: &VariableGroup) -> Result<Self> {
        let body = serde_json::to_string(group)
            .map_err(|e| Error::invalid_group(Some(&group.name), e.to_string()))?;
        Ok(Self {
            origin: None,
            name: group.name.clone(),
            body,
        })
    }
}

/// Outcome of an export.
///
/// `documents` always holds every serialization in processing order, whether
/// or not files were written. Failed file writes are collected in `failures`
/// and do not stop the remaining writes.
#[derive(Debug, Default)]
pub struct ExportReport {
    pub documents: Vec<String>,
    pub written: Vec<PathBuf>,
    pub failures: Vec<Error>,
}

impl ExportReport {
    /// `true` when no file write failed.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Creates, replaces and serializes variable groups.
pub struct VariableGroupWriter<'a, T: Transport + ?Sized> {
    transport: &'a T,
    session: &'a Session,
    config: &'a ClientConfig,
}

impl<'a, T: Transport + ?Sized> VariableGroupWriter<'a, T> {
    pub fn new(transport: &'a T, session: &'a Session, config: &'a ClientConfig) -> Self {
        Self {
            transport,
            session,
            config,
        }
    }

    fn reader(&self) -> VariableGroupReader<'a, T> {
        VariableGroupReader::new(self.transport, self.session)
    }

    /// Serializes groups and optionally writes them to `destination`.
    ///
    /// When `source` is given it is used as-is and nothing is fetched;
    /// otherwise the groups come from listing `project` filtered by `names`.
    pub fn export(
        &self,
        project: &str,
        names: Option<&[String]>,
        source: Option<Vec<VariableGroup>>,
        destination: Option<&Path>,
    ) -> Result<ExportReport> {
        let groups = match source {
            Some(groups) => groups,
            None => self.reader().list(project, names)?,
        };

        if let Some(dir) = destination {
            storage::ensure_dir(dir)?;
        }

        let mut report = ExportReport::default();
        for group in &groups {
            let document = group
                .to_json(self.config.pretty_export)
                .map_err(|e| Error::invalid_group(Some(&group.name), e.to_string()))?;

            if let Some(dir) = destination {
                let path = storage::export_path(dir, &group.name);
                match storage::write_document(&path, &document) {
                    Ok(()) => {
                        log::info!("Exported '{}' to {}", group.name, path.display());
                        report.written.push(path);
                    }
                    Err(e) => {
                        log::warn!("Failed to export '{}': {}", group.name, e);
                        report.failures.push(e);
                    }
                }
            }

            report.documents.push(document);
        }

        Ok(report)
    }

    /// Creates (`update == false`) or replaces (`update == true`) one group
    /// per input, in input order, and returns the service's responses.
    ///
    /// The original document is sent unmodified; a resolved id only goes into
    /// the URL. The first failure stops the batch. Updating a group the
    /// project does not contain fails with [`TransportError::GroupNotFound`]
    /// before anything is sent.
    pub fn import(
        &self,
        project: &str,
        source: ImportSource,
        update: bool,
    ) -> Result<Vec<VariableGroup>> {
        let documents = resolve_documents(source)?;

        let mut results = Vec::with_capacity(documents.len());
        for document in documents {
            let (method, url) = if update {
                let id = self.resolve_id(project, &document.name)?;
                (HttpMethod::PUT, group_endpoint(self.session, project, id))
            } else {
                (HttpMethod::POST, collection_endpoint(self.session, project))
            };
            let url = self.with_api_version(url);

            log::info!(
                "{} variable group '{}' in project '{}'{}",
                if update { "Updating" } else { "Creating" },
                document.name,
                project,
                document
                    .origin
                    .as_deref()
                    .map(|o| format!(" from {}", o))
                    .unwrap_or_default()
            );

            let request = self
                .session
                .request(method, url.as_str())
                .with_json_body(document.body);
            let response = send_checked(self.transport, &request)?;

            let written = response
                .json::<VariableGroup>()
                .map_err(|e| TransportError::InvalidResponse {
                    url: request.url.clone(),
                    message: e.to_string(),
                })?;
            results.push(written);
        }

        Ok(results)
    }

    /// Imports a single in-memory group.
    pub fn import_group(
        &self,
        project: &str,
        group: VariableGroup,
        update: bool,
    ) -> Result<VariableGroup> {
        let mut written = self.import(project, ImportSource::Group(group), update)?;
        written.pop().ok_or_else(|| {
            TransportError::InvalidResponse {
                url: collection_endpoint(self.session, project).to_string(),
                message: "no group returned".to_string(),
            }
            .into()
        })
    }

    /// Imports several in-memory groups.
    pub fn import_groups(
        &self,
        project: &str,
        groups: Vec<VariableGroup>,
        update: bool,
    ) -> Result<Vec<VariableGroup>> {
        self.import(project, ImportSource::Groups(groups), update)
    }

    fn resolve_id(&self, project: &str, name: &str) -> Result<u64> {
        let existing = self.reader().find(project, name)?;
        match existing.and_then(|g| g.id) {
            Some(id) => Ok(id),
            None => Err(TransportError::GroupNotFound {
                project: project.to_string(),
                name: name.to_string(),
            }
            .into()),
        }
    }

    fn with_api_version(&self, mut url: Url) -> Url {
        url.query_pairs_mut()
            .append_pair("api-version", &self.config.api_version);
        url
    }
}

fn resolve_documents(source: ImportSource) -> Result<Vec<ImportDocument>> {
    match source {
        ImportSource::Json(bodies) => bodies
            .into_iter()
            .map(|body| ImportDocument::parse(None, body))
            .collect(),
        ImportSource::Files(paths) => paths
            .iter()
            .map(|path| {
                let body = storage::read_document(path)?;
                ImportDocument::parse(Some(path.display().to_string()), body)
            })
            .collect(),
        ImportSource::Group(group) => Ok(vec![ImportDocument::from_group(&group)?]),
        ImportSource::Groups(groups) => groups.iter().map(ImportDocument::from_group).collect(),
    }
}
