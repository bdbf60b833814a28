//! Schema validation
//!
//! Checks run over the catalog at startup. A malformed schema is a
//! programming error, so the provider refuses to serve rather than hand
//! Terraform an inconsistent surface.

use crate::catalog::{data_source_schemas, resource_schemas};
use crate::error::{Result, SchemaError};
use crate::schema::{Schema, SchemaAttribute, SchemaBlock};
use std::collections::HashSet;

/// Validate a single schema document
pub fn validate_schema(name: &str, schema: &Schema) -> Result<()> {
    validate_block(name, &schema.block)
}

/// Validate every registered resource and data source schema
pub fn validate_catalog() -> Result<()> {
    for (name, schema) in resource_schemas().iter().chain(data_source_schemas().iter()) {
        validate_schema(name, schema)?;
        tracing::debug!(schema = %name, version = schema.version, "schema validated");
    }
    Ok(())
}

fn validate_block(path: &str, block: &SchemaBlock) -> Result<()> {
    let mut seen = HashSet::new();
    for name in block.member_names() {
        if !seen.insert(name) {
            return Err(SchemaError::DuplicateMember {
                block: path.to_string(),
                name: name.to_string(),
            });
        }
    }

    for attr in &block.attributes {
        validate_roles(path, attr)?;
    }

    for nested in &block.block_types {
        if nested.max_items != 0 && nested.min_items > nested.max_items {
            return Err(SchemaError::InvalidItemBounds {
                type_name: nested.type_name.clone(),
                min_items: nested.min_items,
                max_items: nested.max_items,
            });
        }
        validate_block(&format!("{}.{}", path, nested.type_name), &nested.block)?;
    }

    Ok(())
}

fn validate_roles(path: &str, attr: &SchemaAttribute) -> Result<()> {
    let reason = match (attr.required, attr.optional, attr.computed) {
        (true, true, _) => "cannot be both required and optional",
        (true, _, true) => "cannot be both required and computed",
        (false, false, false) => "must be required, optional or computed",
        _ => return Ok(()),
    };
    Err(SchemaError::InvalidAttributeRoles {
        block: path.to_string(),
        attribute: attr.name.clone(),
        reason,
    })
}
