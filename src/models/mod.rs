//! Data models for API requests, responses and variable groups.

pub mod request;
pub mod response;
pub mod variable_group;

pub use request::{ApiRequest, HttpMethod};
pub use response::ApiResponse;
pub use variable_group::{ListResponse, VariableGroup, VariableValue};
