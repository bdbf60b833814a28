//! Terraform Schema Types
//!
//! Defines the schema documents describing resource and data source
//! configuration surfaces, as served over the Terraform Plugin Protocol.

use crate::types::ValueType;
use serde::{Deserialize, Serialize};

/// Format of a description string
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StringKind {
    #[default]
    Plain,
    Markdown,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Schema attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaAttribute {
    pub name: String,
    #[serde(rename = "type")]
    pub attr_type: ValueType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub computed: bool,
    #[serde(default)]
    pub sensitive: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub deprecated: bool,
    #[serde(default)]
    pub description_kind: StringKind,
}

impl SchemaAttribute {
    pub fn new(name: &str, attr_type: ValueType) -> Self {
        Self {
            name: name.to_string(),
            attr_type,
            description: None,
            required: false,
            optional: false,
            computed: false,
            sensitive: false,
            deprecated: false,
            description_kind: StringKind::Plain,
        }
    }

    pub fn string(name: &str) -> Self {
        Self::new(name, ValueType::String)
    }

    pub fn bool(name: &str) -> Self {
        Self::new(name, ValueType::Bool)
    }

    pub fn dynamic(name: &str) -> Self {
        Self::new(name, ValueType::Dynamic)
    }

    pub fn list(name: &str, element_type: ValueType) -> Self {
        Self::new(name, ValueType::list(element_type))
    }

    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    pub fn with_markdown_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self.description_kind = StringKind::Markdown;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self.optional = false;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self.required = false;
        self
    }

    pub fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }
}

/// A group of attributes plus nested block definitions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaBlock {
    #[serde(default)]
    pub attributes: Vec<SchemaAttribute>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub block_types: Vec<NestedBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub description_kind: StringKind,
    #[serde(default, skip_serializing_if = "is_false")]
    pub deprecated: bool,
}

impl SchemaBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute(mut self, attr: SchemaAttribute) -> Self {
        self.attributes.push(attr);
        self
    }

    pub fn with_block(mut self, block: NestedBlock) -> Self {
        self.block_types.push(block);
        self
    }

    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&SchemaAttribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn block_type(&self, type_name: &str) -> Option<&NestedBlock> {
        self.block_types.iter().find(|b| b.type_name == type_name)
    }

    /// Attribute names followed by nested block type names, in declaration order
    pub fn member_names(&self) -> impl Iterator<Item = &str> {
        self.attributes
            .iter()
            .map(|a| a.name.as_str())
            .chain(self.block_types.iter().map(|b| b.type_name.as_str()))
    }
}

/// Nested block type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestedBlock {
    pub type_name: String,
    pub nesting: NestingMode,
    pub block: SchemaBlock,
    #[serde(default)]
    pub min_items: u64,
    /// Zero means unbounded
    #[serde(default)]
    pub max_items: u64,
}

impl NestedBlock {
    pub fn new(type_name: &str, nesting: NestingMode, block: SchemaBlock) -> Self {
        Self {
            type_name: type_name.to_string(),
            nesting,
            block,
            min_items: 0,
            max_items: 0,
        }
    }

    pub fn list(type_name: &str, block: SchemaBlock) -> Self {
        Self::new(type_name, NestingMode::List, block)
    }

    pub fn with_min_items(mut self, min_items: u64) -> Self {
        self.min_items = min_items;
        self
    }

    pub fn with_max_items(mut self, max_items: u64) -> Self {
        self.max_items = max_items;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NestingMode {
    Single,
    List,
    Set,
    Map,
    Group,
}

/// Versioned schema of a resource or data source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub version: i64,
    pub block: SchemaBlock,
}

impl Schema {
    pub fn new(version: i64, block: SchemaBlock) -> Self {
        Self { version, block }
    }
}
