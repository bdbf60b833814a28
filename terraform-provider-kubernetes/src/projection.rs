//! Type Projection
//!
//! Collapses a schema into the single object type that can hold a complete
//! configuration value for it. Nested blocks become `list(object(...))`
//! fields whatever their nesting mode or item bounds; cardinality is
//! checked during validation, not encoded in the type.

use crate::catalog::{data_source_schemas, resource_schemas};
use crate::error::{Result, SchemaError};
use crate::schema::{Schema, SchemaBlock};
use crate::types::ValueType;
use std::collections::BTreeMap;

/// Object type able to represent any configuration value of `schema`
pub fn object_type_from_schema(schema: &Schema) -> ValueType {
    block_object_type(&schema.block)
}

fn block_object_type(block: &SchemaBlock) -> ValueType {
    let mut fields: BTreeMap<String, ValueType> = block
        .attributes
        .iter()
        .map(|attr| (attr.name.clone(), attr.attr_type.clone()))
        .collect();

    for nested in &block.block_types {
        fields.insert(
            nested.type_name.clone(),
            ValueType::list(block_object_type(&nested.block)),
        );
    }

    ValueType::Object(fields)
}

/// Object type of the managed resource `name`
pub fn resource_type(name: &str) -> Result<ValueType> {
    let schema = resource_schemas()
        .get(name)
        .ok_or_else(|| SchemaError::UnknownResource {
            name: name.to_string(),
        })?;
    tracing::debug!(target: "projection", resource = name, "projecting resource schema");
    Ok(object_type_from_schema(schema))
}

/// Object type of the data source `name`
pub fn data_source_type(name: &str) -> Result<ValueType> {
    let schema = data_source_schemas()
        .get(name)
        .ok_or_else(|| SchemaError::UnknownDataSource {
            name: name.to_string(),
        })?;
    tracing::debug!(target: "projection", data_source = name, "projecting data source schema");
    Ok(object_type_from_schema(schema))
}

/// Like [`resource_type`], but always yields a type: `dynamic` on a miss
pub fn resource_type_or_dynamic(name: &str) -> (ValueType, Option<SchemaError>) {
    split_fallback(resource_type(name))
}

/// Like [`data_source_type`], but always yields a type: `dynamic` on a miss
pub fn data_source_type_or_dynamic(name: &str) -> (ValueType, Option<SchemaError>) {
    split_fallback(data_source_type(name))
}

fn split_fallback(result: Result<ValueType>) -> (ValueType, Option<SchemaError>) {
    match result {
        Ok(ty) => (ty, None),
        Err(e) => (e.fallback_type(), Some(e)),
    }
}
