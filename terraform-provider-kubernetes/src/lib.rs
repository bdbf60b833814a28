//! Kubernetes manifest provider: schema core
//!
//! Declares the configuration surface of the `kubernetes_manifest` resource
//! and the `kubernetes_resource` data source, and projects each schema into
//! the structural type used to build, validate and encode values.

pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod projection;
pub mod protocol;
pub mod provider;
pub mod schema;
pub mod types;
pub mod validate;

pub use catalog::{data_source_schemas, resource_schemas, wait_for_type};
pub use error::{Result, SchemaError};
pub use projection::{data_source_type, object_type_from_schema, resource_type};
pub use schema::{NestedBlock, NestingMode, Schema, SchemaAttribute, SchemaBlock, StringKind};
pub use types::ValueType;
