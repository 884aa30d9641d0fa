//! Configuration schema.
//!
//! Defines every user-configurable setting and its validation rules.

use serde::{Deserialize, Serialize};

/// Placeholder substituted with the account name in `account_url_template`.
pub const ACCOUNT_PLACEHOLDER: &str = "{account}";

/// Client settings. Missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Request timeout in seconds.
    ///
    /// Applies to every request, including the authentication check.
    /// Defaults to 30 seconds. Must be greater than 0.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Template for the account's base URL.
    ///
    /// `{account}` is replaced with the account name given at authentication.
    /// Defaults to `https://{account}.visualstudio.com`.
    #[serde(default = "default_account_url_template")]
    pub account_url_template: String,

    /// `api-version` query value used when creating or replacing groups.
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// `api-version` query value used by the project-list check.
    #[serde(default = "default_projects_api_version")]
    pub projects_api_version: String,

    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Whether exported documents are pretty-printed.
    #[serde(default = "default_pretty_export")]
    pub pretty_export: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            account_url_template: default_account_url_template(),
            api_version: default_api_version(),
            projects_api_version: default_projects_api_version(),
            user_agent: default_user_agent(),
            pretty_export: default_pretty_export(),
        }
    }
}

impl ClientConfig {
    /// Validates the configuration.
    ///
    /// # Returns
    ///
    /// `Ok(())` if all settings are valid, or `Err` with a descriptive message.
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_secs == 0 {
            return Err("timeoutSecs must be greater than 0".to_string());
        }

        if !self.account_url_template.contains(ACCOUNT_PLACEHOLDER) {
            return Err(format!(
                "accountUrlTemplate must contain {}",
                ACCOUNT_PLACEHOLDER
            ));
        }

        if self.api_version.trim().is_empty() {
            return Err("apiVersion must not be empty".to_string());
        }

        if self.projects_api_version.trim().is_empty() {
            return Err("projectsApiVersion must not be empty".to_string());
        }

        Ok(())
    }

    /// Expands the account URL template for `account`.
    pub fn account_url(&self, account: &str) -> String {
        self.account_url_template
            .replace(ACCOUNT_PLACEHOLDER, account)
    }
}

// Default value functions for serde

fn default_timeout_secs() -> u64 {
    30
}

fn default_account_url_template() -> String {
    "https://{account}.visualstudio.com".to_string()
}

fn default_api_version() -> String {
    "4.1-preview.1".to_string()
}

fn default_projects_api_version() -> String {
    "1.0".to_string()
}

fn default_user_agent() -> String {
    format!("vargroup/{}", env!("CARGO_PKG_VERSION"))
}

fn default_pretty_export() -> bool {
    true
}
