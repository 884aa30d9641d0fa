//! Variable group data models.
//!
//! A variable group is a named, project-scoped collection of key/value
//! entries. Only the fields the client reasons about are named here; every
//! other field the service returns is carried along untouched so that an
//! exported document can be imported elsewhere without loss.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A single variable inside a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableValue {
    /// The variable's value. The service withholds it for secrets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Whether the service treats the value as a secret.
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_secret: bool,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VariableValue {
    /// Creates a plain (non-secret) variable.
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            is_secret: false,
            extra: Map::new(),
        }
    }

    /// Creates a secret variable.
    pub fn secret(value: Option<String>) -> Self {
        Self {
            value,
            is_secret: true,
            extra: Map::new(),
        }
    }
}

/// A variable group as returned by, or sent to, the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableGroup {
    /// Remote identifier. Absent until the group has been created in a project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Group name, unique within a project. Used as the lookup key.
    pub name: String,

    /// Variables keyed by name.
    #[serde(default)]
    pub variables: BTreeMap<String, VariableValue>,

    /// Remaining service fields (`type`, `description`, `createdBy`, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VariableGroup {
    /// Creates an empty group with no id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            variables: BTreeMap::new(),
            extra: Map::new(),
        }
    }

    /// Builder-style helper that inserts a variable.
    pub fn with_variable(mut self, name: impl Into<String>, value: VariableValue) -> Self {
        self.variables.insert(name.into(), value);
        self
    }

    /// Returns `true` when `other` names this group, using the service's
    /// case-insensitive comparison on Unicode lowercase forms.
    pub fn matches_name(&self, other: &str) -> bool {
        self.name.to_lowercase() == other.to_lowercase()
    }

    /// Serializes the group to JSON, pretty-printed or compact.
    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }

    /// Parses a group from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Envelope the service wraps collections in.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default)]
    pub count: Option<u64>,

    #[serde(default = "Vec::new")]
    pub value: Vec<T>,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}
