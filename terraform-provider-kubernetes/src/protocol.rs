//! Plugin Protocol Messages
//!
//! JSON-RPC envelope exchanged with Terraform, and the diagnostics carried
//! in successful results.

use crate::error::SchemaError;
use serde::{Deserialize, Serialize};

pub const JSONRPC_VERSION: &str = "2.0";

pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INTERNAL_ERROR: i32 = -32603;

/// JSON-RPC request
#[derive(Debug, Deserialize)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub id: i64,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// JSON-RPC response
#[derive(Debug, Serialize)]
pub struct RpcResponse {
    pub jsonrpc: &'static str,
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

#[derive(Debug, Serialize)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
}

impl RpcResponse {
    pub fn success(id: i64, result: serde_json::Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: i64, code: i32, message: &str) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            result: None,
            error: Some(RpcError {
                code,
                message: message.to_string(),
            }),
        }
    }
}

/// Only errors are reported; the schema core has nothing to warn about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiagnosticSeverity {
    Error,
}

/// Diagnostic message
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub severity: DiagnosticSeverity,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Path of the offending request field or schema member
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attribute: Vec<String>,
}

impl From<&SchemaError> for Diagnostic {
    fn from(err: &SchemaError) -> Self {
        let (detail, attribute) = match err {
            SchemaError::UnknownResource { .. } => (
                Some("the provider does not offer this resource".to_string()),
                vec!["type_name".to_string()],
            ),
            SchemaError::UnknownDataSource { .. } => (
                Some("the provider does not offer this data source".to_string()),
                vec!["type_name".to_string()],
            ),
            SchemaError::DuplicateMember { block, name } => (
                None,
                block
                    .split('.')
                    .map(String::from)
                    .chain(std::iter::once(name.clone()))
                    .collect(),
            ),
            SchemaError::InvalidAttributeRoles {
                block, attribute, ..
            } => (
                None,
                block
                    .split('.')
                    .map(String::from)
                    .chain(std::iter::once(attribute.clone()))
                    .collect(),
            ),
            SchemaError::InvalidItemBounds { type_name, .. } => (None, vec![type_name.clone()]),
            SchemaError::InvalidTypeExpression { .. } => (None, Vec::new()),
        };

        Self {
            severity: DiagnosticSeverity::Error,
            summary: err.to_string(),
            detail,
            attribute,
        }
    }
}
