pub mod types;
pub mod write;

pub use types::{ParameterDocument, ParameterValue, CONTENT_VERSION, DEPLOYMENT_PARAMETERS_SCHEMA};
pub use write::{output_name, write_document};
