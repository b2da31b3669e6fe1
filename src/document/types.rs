// src/document/types.rs

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::source::Row;

/// Deployment-parameters schema every document points at.
pub const DEPLOYMENT_PARAMETERS_SCHEMA: &str =
    "http://schema.management.azure.com/schemas/2015-01-01/deploymentParameters.json#";

pub const CONTENT_VERSION: &str = "1.0.0.0";

/// `{"value": <cell>}`
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq)]
pub struct ParameterValue {
    pub value: String,
}

/// The per-row output artifact. Field order is the serialized key order.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct ParameterDocument {
    #[serde(rename = "$schema")]
    pub schema: String,
    #[serde(rename = "contentVersion")]
    pub content_version: String,
    pub parameters: IndexMap<String, ParameterValue>,
}

impl ParameterDocument {
    /// One parameter per column, in column order. A repeated column name keeps
    /// its first position but takes the last value.
    pub fn from_row(row: &Row) -> Self {
        let mut parameters = IndexMap::with_capacity(row.len());
        for (column, cell) in row.iter() {
            parameters.insert(
                column.to_string(),
                ParameterValue {
                    value: cell.to_string(),
                },
            );
        }
        Self {
            schema: DEPLOYMENT_PARAMETERS_SCHEMA.to_string(),
            content_version: CONTENT_VERSION.to_string(),
            parameters,
        }
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
