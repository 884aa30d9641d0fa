//! Listing variable groups.

use super::collection_endpoint;
use crate::auth::Session;
use crate::error::Result;
use crate::executor::{send_checked, Transport, TransportError};
use crate::models::request::HttpMethod;
use crate::models::variable_group::{ListResponse, VariableGroup};

/// Reads variable groups of a project.
pub struct VariableGroupReader<'a, T: Transport + ?Sized> {
    transport: &'a T,
    session: &'a Session,
}

impl<'a, T: Transport + ?Sized> VariableGroupReader<'a, T> {
    pub fn new(transport: &'a T, session: &'a Session) -> Self {
        Self { transport, session }
    }

    /// Lists the groups of `project`.
    ///
    /// Without `names`, every group is returned in the order the service
    /// sends them. With `names`, the result holds the matches for the first
    /// name, then the matches for the second, and so on; a name with no
    /// match contributes nothing. Names compare case-insensitively, as the
    /// service does.
    pub fn list(&self, project: &str, names: Option<&[String]>) -> Result<Vec<VariableGroup>> {
        let url = collection_endpoint(self.session, project);
        let request = self.session.request(HttpMethod::GET, url.as_str());
        let response = send_checked(self.transport, &request)?;

        let groups = response
            .json::<ListResponse<VariableGroup>>()
            .map_err(|e| TransportError::InvalidResponse {
                url: request.url.clone(),
                message: e.to_string(),
            })?
            .value;

        log::debug!("Project '{}' has {} variable group(s)", project, groups.len());

        Ok(match names {
            Some(names) => filter_by_names(groups, names),
            None => groups,
        })
    }

    /// Returns the first group of `project` named `name`, if any.
    pub fn find(&self, project: &str, name: &str) -> Result<Option<VariableGroup>> {
        let names = [name.to_string()];
        Ok(self.list(project, Some(&names[..]))?.into_iter().next())
    }
}

/// Groups `groups` by the order of `names`, one run of matches per name.
pub fn filter_by_names(groups: Vec<VariableGroup>, names: &[String]) -> Vec<VariableGroup> {
    let groups = &groups;
    names
        .iter()
        .flat_map(move |name| groups.iter().filter(move |g| g.matches_name(name)))
        .cloned()
        .collect()
}
