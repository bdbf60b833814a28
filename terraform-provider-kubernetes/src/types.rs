//! Value Types
//!
//! Structural types describing configuration values, as exchanged with
//! Terraform over the plugin protocol.

use crate::error::{Result, SchemaError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Structural type of a configuration value
///
/// Equality is structural: two object types are equal when they carry the
/// same attribute names mapped to equal types.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueType {
    String,
    Number,
    Bool,
    List(Box<ValueType>),
    Set(Box<ValueType>),
    Map(Box<ValueType>),
    Object(BTreeMap<String, ValueType>),
    /// Type is carried per value at runtime
    Dynamic,
}

impl ValueType {
    pub fn list(element_type: ValueType) -> Self {
        ValueType::List(Box::new(element_type))
    }

    pub fn set(element_type: ValueType) -> Self {
        ValueType::Set(Box::new(element_type))
    }

    pub fn map(element_type: ValueType) -> Self {
        ValueType::Map(Box::new(element_type))
    }

    /// Build an object type from `(name, type)` pairs
    pub fn object<I, K>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, ValueType)>,
        K: Into<String>,
    {
        ValueType::Object(
            attributes
                .into_iter()
                .map(|(name, ty)| (name.into(), ty))
                .collect(),
        )
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self, ValueType::Dynamic)
    }

    pub fn is_object(&self) -> bool {
        matches!(self, ValueType::Object(_))
    }

    /// Attribute types of an object type, `None` for anything else
    pub fn attribute_types(&self) -> Option<&BTreeMap<String, ValueType>> {
        match self {
            ValueType::Object(attrs) => Some(attrs),
            _ => None,
        }
    }

    /// Element type of a list, set or map
    pub fn element_type(&self) -> Option<&ValueType> {
        match self {
            ValueType::List(inner) | ValueType::Set(inner) | ValueType::Map(inner) => Some(inner),
            _ => None,
        }
    }

    /// Encode as a JSON type expression
    pub fn to_json(&self) -> Value {
        match self {
            ValueType::String => Value::from("string"),
            ValueType::Number => Value::from("number"),
            ValueType::Bool => Value::from("bool"),
            ValueType::Dynamic => Value::from("dynamic"),
            ValueType::List(inner) => serde_json::json!(["list", inner.to_json()]),
            ValueType::Set(inner) => serde_json::json!(["set", inner.to_json()]),
            ValueType::Map(inner) => serde_json::json!(["map", inner.to_json()]),
            ValueType::Object(attrs) => {
                let fields: serde_json::Map<String, Value> = attrs
                    .iter()
                    .map(|(name, ty)| (name.clone(), ty.to_json()))
                    .collect();
                serde_json::json!(["object", fields])
            }
        }
    }

    /// Decode a JSON type expression
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::String(name) => match name.as_str() {
                "string" => Ok(ValueType::String),
                "number" => Ok(ValueType::Number),
                "bool" => Ok(ValueType::Bool),
                "dynamic" => Ok(ValueType::Dynamic),
                other => Err(invalid(format!("unknown primitive type {:?}", other))),
            },
            Value::Array(items) if items.len() == 2 => {
                let kind = items[0]
                    .as_str()
                    .ok_or_else(|| invalid("type kind must be a string".to_string()))?;
                match kind {
                    "list" => Ok(ValueType::list(Self::from_json(&items[1])?)),
                    "set" => Ok(ValueType::set(Self::from_json(&items[1])?)),
                    "map" => Ok(ValueType::map(Self::from_json(&items[1])?)),
                    "object" => {
                        let fields = items[1].as_object().ok_or_else(|| {
                            invalid("object attribute types must be a JSON object".to_string())
                        })?;
                        let attrs = fields
                            .iter()
                            .map(|(name, ty)| -> Result<(String, ValueType)> {
                                Ok((name.clone(), Self::from_json(ty)?))
                            })
                            .collect::<Result<BTreeMap<_, _>>>()?;
                        Ok(ValueType::Object(attrs))
                    }
                    other => Err(invalid(format!("unknown type kind {:?}", other))),
                }
            }
            other => Err(invalid(format!("unexpected type expression {}", other))),
        }
    }
}

fn invalid(message: String) -> SchemaError {
    SchemaError::InvalidTypeExpression { message }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::String => write!(f, "string"),
            ValueType::Number => write!(f, "number"),
            ValueType::Bool => write!(f, "bool"),
            ValueType::Dynamic => write!(f, "any"),
            ValueType::List(inner) => write!(f, "list({})", inner),
            ValueType::Set(inner) => write!(f, "set({})", inner),
            ValueType::Map(inner) => write!(f, "map({})", inner),
            ValueType::Object(attrs) => {
                write!(f, "object({{")?;
                for (i, (name, ty)) in attrs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}={}", name, ty)?;
                }
                write!(f, "}})")
            }
        }
    }
}

impl Serialize for ValueType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ValueType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        ValueType::from_json(&value).map_err(serde::de::Error::custom)
    }
}
