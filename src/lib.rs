//! Variable group client for Azure DevOps
//!
//! Lists, exports and imports the variable groups of a project's library so
//! they can be backed up to disk or moved between projects.
//!
//! # Architecture
//!
//! - **auth**: personal-access-token authentication and the [`Session`] it yields
//! - **variable_groups**: the reader (list) and writer (export/import)
//! - **executor**: the [`Transport`] seam and its `reqwest` implementation
//! - **models**: request/response descriptors and the variable group model
//! - **config**: client settings loaded from an optional JSON file
//! - **commands**: handlers behind the `vargroup` subcommands
//!
//! # Usage
//!
//! ```no_run
//! use vargroup::config::ClientConfig;
//! use vargroup::executor::{ExecutionConfig, HttpTransport};
//! use vargroup::variable_groups::{ImportSource, VariableGroupReader, VariableGroupWriter};
//! use vargroup::auth::authenticate;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::default();
//! let transport = HttpTransport::new(&ExecutionConfig::from(&config))?;
//! let session = authenticate(&transport, &config, "demo", "my-token")?;
//!
//! let groups = VariableGroupReader::new(&transport, &session).list("Proj1", None)?;
//! println!("{} groups", groups.len());
//!
//! let writer = VariableGroupWriter::new(&transport, &session, &config);
//! let report = writer.export("Proj1", None, None, Some(std::path::Path::new("backup")))?;
//! writer.import("Proj2", ImportSource::Files(report.written.clone()), false)?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod commands;
pub mod config;
pub mod error;
pub mod executor;
pub mod logging;
pub mod models;
pub mod variable_groups;

pub use auth::{authenticate, authenticate_at, AuthError, Session};
pub use error::{Error, Result};
pub use executor::{HttpTransport, Transport, TransportError};
pub use models::{VariableGroup, VariableValue};
