//! Projection tests against the shipped catalog and generated schemas

use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use terraform_provider_kubernetes::projection::{
    data_source_type_or_dynamic, resource_type_or_dynamic,
};
use terraform_provider_kubernetes::{
    data_source_schemas, data_source_type, object_type_from_schema, resource_schemas,
    resource_type, wait_for_type, NestedBlock, NestingMode, Schema, SchemaAttribute, SchemaBlock,
    SchemaError, ValueType,
};

fn all_schemas() -> Vec<&'static Schema> {
    resource_schemas()
        .values()
        .chain(data_source_schemas().values())
        .collect()
}

fn fields(ty: &ValueType) -> &BTreeMap<String, ValueType> {
    ty.attribute_types().expect("projection must be an object type")
}

fn field_names(ty: &ValueType) -> BTreeSet<&str> {
    fields(ty).keys().map(String::as_str).collect()
}

fn check_projection(schema: &Schema) {
    let projected = object_type_from_schema(schema);

    let expected: BTreeSet<&str> = schema.block.member_names().collect();
    assert_eq!(field_names(&projected), expected);

    for attr in &schema.block.attributes {
        assert_eq!(fields(&projected)[&attr.name], attr.attr_type);
    }

    for nested in &schema.block.block_types {
        let element = ValueType::object(
            nested
                .block
                .attributes
                .iter()
                .map(|a| (a.name.clone(), a.attr_type.clone())),
        );
        assert_eq!(
            fields(&projected)[&nested.type_name],
            ValueType::list(element)
        );
    }
}

#[test]
fn test_catalog_projections_are_complete() {
    for schema in all_schemas() {
        check_projection(schema);
    }
}

#[test]
fn test_projection_is_deterministic() {
    for schema in all_schemas() {
        assert_eq!(object_type_from_schema(schema), object_type_from_schema(schema));
    }
}

#[test]
fn test_lookup_hits_match_projection() {
    assert_eq!(
        resource_type("kubernetes_manifest").unwrap(),
        object_type_from_schema(&resource_schemas()["kubernetes_manifest"])
    );
    assert_eq!(
        data_source_type("kubernetes_resource").unwrap(),
        object_type_from_schema(&data_source_schemas()["kubernetes_resource"])
    );
}

#[test]
fn test_lookup_misses() {
    let err = resource_type("nope").unwrap_err();
    assert_eq!(err.to_string(), "unknown resource nope - cannot find schema");
    assert_eq!(err.fallback_type(), ValueType::Dynamic);

    let err = data_source_type("nope").unwrap_err();
    assert_eq!(err.to_string(), "unknown data source \"nope\": cannot find schema");
    assert_eq!(err.fallback_type(), ValueType::Dynamic);

    let err = data_source_type("a\u{0}b\u{7}").unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"unknown data source "a\x00b\a": cannot find schema"#
    );

    let (ty, err) = data_source_type_or_dynamic("nope");
    assert_eq!(ty, ValueType::Dynamic);
    assert!(matches!(err, Some(SchemaError::UnknownDataSource { .. })));
}

#[test]
fn test_manifest_resource_type() {
    let ty = resource_type("kubernetes_manifest").unwrap();
    assert_eq!(
        field_names(&ty),
        BTreeSet::from([
            "manifest",
            "object",
            "wait_for",
            "computed_fields",
            "timeouts",
            "field_manager",
        ])
    );

    let f = fields(&ty);
    assert_eq!(f["manifest"], ValueType::Dynamic);
    assert_eq!(f["object"], ValueType::Dynamic);
    assert_eq!(f["computed_fields"], ValueType::list(ValueType::String));
    assert_eq!(
        f["timeouts"],
        ValueType::list(ValueType::object([
            ("create", ValueType::String),
            ("update", ValueType::String),
            ("delete", ValueType::String),
        ]))
    );
    assert_eq!(
        f["field_manager"],
        ValueType::list(ValueType::object([
            ("name", ValueType::String),
            ("force_conflicts", ValueType::Bool),
        ]))
    );
}

#[test]
fn test_resource_data_source_type() {
    let ty = data_source_type("kubernetes_resource").unwrap();
    assert_eq!(
        field_names(&ty),
        BTreeSet::from(["api_version", "kind", "object", "wait_for", "metadata"])
    );
    assert_eq!(
        fields(&ty)["metadata"],
        ValueType::list(ValueType::object([
            ("name", ValueType::String),
            ("namespace", ValueType::String),
        ]))
    );
}

#[test]
fn test_wait_for_projects_identically() {
    let resource = resource_type("kubernetes_manifest").unwrap();
    let data_source = data_source_type("kubernetes_resource").unwrap();

    let expected = ValueType::object([("fields", ValueType::map(ValueType::String))]);
    assert_eq!(expected, wait_for_type());
    assert_eq!(fields(&resource)["wait_for"], expected);
    assert_eq!(fields(&resource)["wait_for"], fields(&data_source)["wait_for"]);
}

#[test]
fn test_cross_registry_misses() {
    let (ty, err) = resource_type_or_dynamic("kubernetes_resource");
    assert!(ty.is_dynamic());
    assert_eq!(
        err.unwrap().to_string(),
        "unknown resource kubernetes_resource - cannot find schema"
    );

    let err = data_source_type("kubernetes_manifest").unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown data source \"kubernetes_manifest\": cannot find schema"
    );
}

#[test]
fn test_catalog_reads_are_stable() {
    let first = resource_schemas().clone();
    let second = resource_schemas().clone();
    assert_eq!(first, second);
    assert_eq!(
        first["kubernetes_manifest"],
        resource_schemas()["kubernetes_manifest"]
    );
}

fn value_type() -> impl Strategy<Value = ValueType> {
    let leaf = prop_oneof![
        Just(ValueType::String),
        Just(ValueType::Number),
        Just(ValueType::Bool),
        Just(ValueType::Dynamic),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            inner.clone().prop_map(ValueType::list),
            inner.clone().prop_map(ValueType::set),
            inner.clone().prop_map(ValueType::map),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..4).prop_map(ValueType::Object),
        ]
    })
}

fn nesting_mode() -> impl Strategy<Value = NestingMode> {
    prop_oneof![
        Just(NestingMode::Single),
        Just(NestingMode::List),
        Just(NestingMode::Set),
        Just(NestingMode::Map),
        Just(NestingMode::Group),
    ]
}

fn attributes() -> impl Strategy<Value = BTreeMap<String, ValueType>> {
    prop::collection::btree_map("a_[a-z]{1,5}", value_type(), 0..5)
}

// Attribute and block names use distinct prefixes so they never collide.
fn schema_strategy() -> impl Strategy<Value = Schema> {
    let nested = (attributes(), nesting_mode(), 0u64..3, 0u64..3);
    (
        attributes(),
        prop::collection::btree_map("b_[a-z]{1,5}", nested, 0..3),
    )
        .prop_map(|(attrs, blocks)| {
            let mut block = SchemaBlock::new();
            for (name, ty) in attrs {
                block = block.with_attribute(SchemaAttribute::new(&name, ty).optional());
            }
            for (name, (attrs, nesting, min_items, max_items)) in blocks {
                let mut inner = SchemaBlock::new();
                for (attr_name, ty) in attrs {
                    inner = inner.with_attribute(SchemaAttribute::new(&attr_name, ty).optional());
                }
                block = block.with_block(
                    NestedBlock::new(&name, nesting, inner)
                        .with_min_items(min_items)
                        .with_max_items(max_items),
                );
            }
            Schema::new(1, block)
        })
}

proptest! {
    #[test]
    fn prop_projection_mirrors_schema(schema in schema_strategy()) {
        check_projection(&schema);
    }

    #[test]
    fn prop_projection_is_deterministic(schema in schema_strategy()) {
        let cloned = schema.clone();
        prop_assert_eq!(object_type_from_schema(&schema), object_type_from_schema(&cloned));
    }

    #[test]
    fn prop_wire_form_decodes_back(ty in value_type()) {
        let encoded = serde_json::to_string(&ty).unwrap();
        let decoded: ValueType = serde_json::from_str(&encoded).unwrap();
        prop_assert_eq!(decoded, ty);
    }
}
