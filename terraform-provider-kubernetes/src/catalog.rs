//! Schema Catalog
//!
//! The resources and data sources offered by the provider. Both registries
//! are built once on first access and shared read-only afterwards.

use crate::schema::{NestedBlock, Schema, SchemaAttribute, SchemaBlock};
use crate::types::ValueType;
use std::collections::HashMap;
use std::sync::OnceLock;

pub const MANIFEST_RESOURCE: &str = "kubernetes_manifest";
pub const RESOURCE_DATA_SOURCE: &str = "kubernetes_resource";

const WAIT_FOR_DESCRIPTION: &str = "A map of attribute paths and desired patterns to be matched. After each apply the provider will wait for all attributes listed here to reach a value that matches the desired pattern.";

static RESOURCE_SCHEMAS: OnceLock<HashMap<String, Schema>> = OnceLock::new();
static DATA_SOURCE_SCHEMAS: OnceLock<HashMap<String, Schema>> = OnceLock::new();

/// Type of the `wait_for` attribute, shared by the resource and the data source
pub fn wait_for_type() -> ValueType {
    ValueType::object([("fields", ValueType::map(ValueType::String))])
}

/// All supported managed resources
pub fn resource_schemas() -> &'static HashMap<String, Schema> {
    RESOURCE_SCHEMAS.get_or_init(|| {
        HashMap::from([(MANIFEST_RESOURCE.to_string(), manifest_schema())])
    })
}

/// All supported data sources
pub fn data_source_schemas() -> &'static HashMap<String, Schema> {
    DATA_SOURCE_SCHEMAS.get_or_init(|| {
        HashMap::from([(RESOURCE_DATA_SOURCE.to_string(), resource_data_source_schema())])
    })
}

fn manifest_schema() -> Schema {
    let timeouts = NestedBlock::list(
        "timeouts",
        SchemaBlock::new()
            .with_attribute(
                SchemaAttribute::string("create")
                    .with_description("Timeout for the create operation.")
                    .optional(),
            )
            .with_attribute(
                SchemaAttribute::string("update")
                    .with_description("Timeout for the update operation.")
                    .optional(),
            )
            .with_attribute(
                SchemaAttribute::string("delete")
                    .with_description("Timeout for the delete operation.")
                    .optional(),
            ),
    )
    .with_min_items(0)
    .with_max_items(1);

    let field_manager = NestedBlock::list(
        "field_manager",
        SchemaBlock::new()
            .with_description("Configure field manager options.")
            .with_attribute(
                SchemaAttribute::string("name")
                    .with_description(
                        "The name to use for the field manager when creating and updating the resource.",
                    )
                    .optional(),
            )
            .with_attribute(
                SchemaAttribute::bool("force_conflicts")
                    .with_description("Force changes against conflicts.")
                    .optional(),
            ),
    )
    .with_min_items(0)
    .with_max_items(1);

    let block = SchemaBlock::new()
        .with_attribute(
            SchemaAttribute::dynamic("manifest")
                .with_description(
                    "A Kubernetes manifest describing the desired state of the resource in HCL format.",
                )
                .required(),
        )
        .with_attribute(
            SchemaAttribute::dynamic("object")
                .with_description(
                    "The resulting resource state, as returned by the API server after applying the desired state from `manifest`.",
                )
                .optional()
                .computed(),
        )
        .with_attribute(
            SchemaAttribute::new("wait_for", wait_for_type())
                .with_description(WAIT_FOR_DESCRIPTION)
                .optional(),
        )
        // The default is applied when the manifest is decoded, not here.
        .with_attribute(
            SchemaAttribute::list("computed_fields", ValueType::String)
                .with_description(
                    "List of manifest fields whose values can be altered by the API server during 'apply'. Defaults to: [\"metadata.annotations\", \"metadata.labels\"]",
                )
                .optional(),
        )
        .with_block(timeouts)
        .with_block(field_manager);

    Schema::new(1, block)
}

fn resource_data_source_schema() -> Schema {
    let metadata = NestedBlock::list(
        "metadata",
        SchemaBlock::new()
            .with_description("Metadata for the resource")
            .with_attribute(
                SchemaAttribute::string("name")
                    .with_description("The resource name.")
                    .required(),
            )
            .with_attribute(
                SchemaAttribute::string("namespace")
                    .with_description("The resource namespace.")
                    .optional(),
            ),
    )
    .with_min_items(1)
    .with_max_items(1);

    let block = SchemaBlock::new()
        .with_attribute(
            SchemaAttribute::string("api_version")
                .with_description("The resource apiVersion.")
                .required(),
        )
        .with_attribute(
            SchemaAttribute::string("kind")
                .with_description("The resource kind.")
                .required(),
        )
        .with_attribute(
            SchemaAttribute::dynamic("object")
                .with_description("The response from the API server.")
                .optional()
                .computed(),
        )
        .with_attribute(
            SchemaAttribute::new("wait_for", wait_for_type())
                .with_description(WAIT_FOR_DESCRIPTION)
                .optional(),
        )
        .with_block(metadata);

    Schema::new(1, block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::NestingMode;

    #[test]
    fn test_registries_have_one_entry_each() {
        assert_eq!(resource_schemas().len(), 1);
        assert!(resource_schemas().contains_key(MANIFEST_RESOURCE));
        assert_eq!(data_source_schemas().len(), 1);
        assert!(data_source_schemas().contains_key(RESOURCE_DATA_SOURCE));
    }

    #[test]
    fn test_manifest_schema_surface() {
        let schema = &resource_schemas()[MANIFEST_RESOURCE];
        assert_eq!(schema.version, 1);

        let manifest = schema.block.attribute("manifest").unwrap();
        assert_eq!(manifest.attr_type, ValueType::Dynamic);
        assert!(manifest.required);

        let object = schema.block.attribute("object").unwrap();
        assert!(object.optional && object.computed && !object.required);

        let computed_fields = schema.block.attribute("computed_fields").unwrap();
        assert_eq!(computed_fields.attr_type, ValueType::list(ValueType::String));
        assert!(computed_fields
            .description
            .as_deref()
            .unwrap()
            .ends_with(r#"Defaults to: ["metadata.annotations", "metadata.labels"]"#));

        for name in ["timeouts", "field_manager"] {
            let nested = schema.block.block_type(name).unwrap();
            assert_eq!(nested.nesting, NestingMode::List);
            assert_eq!((nested.min_items, nested.max_items), (0, 1));
        }
        let timeouts = schema.block.block_type("timeouts").unwrap();
        assert_eq!(
            timeouts.block.member_names().collect::<Vec<_>>(),
            vec!["create", "update", "delete"]
        );
    }

    #[test]
    fn test_resource_data_source_surface() {
        let schema = &data_source_schemas()[RESOURCE_DATA_SOURCE];
        assert_eq!(schema.version, 1);
        assert!(schema.block.attribute("api_version").unwrap().required);
        assert!(schema.block.attribute("kind").unwrap().required);

        let metadata = schema.block.block_type("metadata").unwrap();
        assert_eq!((metadata.min_items, metadata.max_items), (1, 1));
        assert!(metadata.block.attribute("name").unwrap().required);
        assert!(metadata.block.attribute("namespace").unwrap().optional);
    }

    #[test]
    fn test_wait_for_is_shared() {
        let resource = resource_schemas()[MANIFEST_RESOURCE]
            .block
            .attribute("wait_for")
            .unwrap();
        let data_source = data_source_schemas()[RESOURCE_DATA_SOURCE]
            .block
            .attribute("wait_for")
            .unwrap();
        assert_eq!(resource.attr_type, wait_for_type());
        assert_eq!(resource.attr_type, data_source.attr_type);
    }

    #[test]
    fn test_registries_are_stable_across_calls() {
        assert!(std::ptr::eq(resource_schemas(), resource_schemas()));
        assert_eq!(resource_schemas().clone(), resource_schemas().clone());
    }
}
