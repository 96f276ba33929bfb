//! Swagger schema fragment produced by projection.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::literals::{DataFormat, DataType};

/// A value schema in Swagger object grammar.
///
/// Unset fields are omitted on serialization, so the void and reference
/// fragments serialize to `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<DataType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<DataFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<bool>,
}

impl Schema {
    /// Schema with only `type` set.
    pub fn of_type(data_type: DataType) -> Self {
        Self {
            data_type: Some(data_type),
            ..Default::default()
        }
    }

    /// Schema with `type` and `format` set.
    pub fn formatted(data_type: DataType, format: DataFormat) -> Self {
        Self {
            data_type: Some(data_type),
            format: Some(format),
            ..Default::default()
        }
    }

    /// Free-form object schema.
    pub fn object(additional_properties: bool) -> Self {
        Self {
            data_type: Some(DataType::Object),
            additional_properties: Some(additional_properties),
            ..Default::default()
        }
    }

    /// Returns true if no keyword is set.
    pub fn is_empty(&self) -> bool {
        self == &Schema::default()
    }

    /// Convert to a JSON value for embedding in a document.
    pub fn to_value(&self) -> Value {
        // Every field is a plain string, bool, or nested Schema.
        serde_json::to_value(self).expect("schema fields always serialize to JSON")
    }
}
