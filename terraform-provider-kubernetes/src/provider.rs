//! Provider Implementation
//!
//! Answers schema and type requests from the catalog. Planning, apply and
//! the Kubernetes API client live outside this crate.

use crate::catalog::{data_source_schemas, resource_schemas};
use crate::error::SchemaError;
use crate::projection::{data_source_type_or_dynamic, resource_type_or_dynamic};
use crate::protocol::{
    Diagnostic, RpcRequest, RpcResponse, INTERNAL_ERROR, INVALID_REQUEST, JSONRPC_VERSION,
    METHOD_NOT_FOUND, PARSE_ERROR,
};
use crate::schema::Schema;
use crate::types::ValueType;
use crate::validate::validate_catalog;
use serde_json::Value;
use std::collections::HashMap;

/// Kubernetes manifest provider
pub struct KubernetesProvider {
    resources: &'static HashMap<String, Schema>,
    data_sources: &'static HashMap<String, Schema>,
}

impl KubernetesProvider {
    /// Create a new provider
    pub fn new() -> Self {
        Self {
            resources: resource_schemas(),
            data_sources: data_source_schemas(),
        }
    }

    /// Serialized catalog, as returned by GetProviderSchema
    pub fn schema_json(&self) -> Value {
        let diagnostics: Vec<Diagnostic> = match validate_catalog() {
            Ok(()) => Vec::new(),
            Err(e) => vec![Diagnostic::from(&e)],
        };

        serde_json::json!({
            "resource_schemas": self.resources,
            "data_source_schemas": self.data_sources,
            "diagnostics": diagnostics,
        })
    }

    /// Handle an RPC request
    pub fn handle_request(&self, input: &str) -> String {
        let request: RpcRequest = match serde_json::from_str(input) {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("Rejecting malformed request: {}", e);
                return serde_json::to_string(&RpcResponse::error(
                    0,
                    PARSE_ERROR,
                    &format!("Parse error: {}", e),
                ))
                .unwrap_or_default();
            }
        };

        if request.jsonrpc != JSONRPC_VERSION {
            return serde_json::to_string(&RpcResponse::error(
                request.id,
                INVALID_REQUEST,
                &format!("Unsupported jsonrpc version: {}", request.jsonrpc),
            ))
            .unwrap_or_default();
        }

        tracing::debug!(method = %request.method, id = request.id, "handling request");

        let response = match request.method.as_str() {
            "GetProviderSchema" => RpcResponse::success(request.id, self.schema_json()),
            "GetResourceType" => {
                let name = type_name_param(&request.params);
                type_response(request.id, resource_type_or_dynamic(name))
            }
            "GetDataSourceType" => {
                let name = type_name_param(&request.params);
                type_response(request.id, data_source_type_or_dynamic(name))
            }
            "StopProvider" => RpcResponse::success(request.id, serde_json::json!({})),
            _ => RpcResponse::error(
                request.id,
                METHOD_NOT_FOUND,
                &format!("Method not found: {}", request.method),
            ),
        };

        serde_json::to_string(&response).unwrap_or_else(|e| {
            serde_json::to_string(&RpcResponse::error(
                request.id,
                INTERNAL_ERROR,
                &format!("Serialization error: {}", e),
            ))
            .unwrap_or_default()
        })
    }
}

impl Default for KubernetesProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn type_name_param(params: &Value) -> &str {
    params
        .get("type_name")
        .and_then(|v| v.as_str())
        .unwrap_or("")
}

fn type_response(id: i64, lookup: (ValueType, Option<SchemaError>)) -> RpcResponse {
    let (ty, err) = lookup;
    let diagnostics: Vec<Diagnostic> = match err {
        Some(e) => {
            tracing::warn!("Type lookup failed: {}", e);
            vec![Diagnostic::from(&e)]
        }
        None => Vec::new(),
    };

    RpcResponse::success(
        id,
        serde_json::json!({
            "type": ty,
            "diagnostics": diagnostics
        }),
    )
}
