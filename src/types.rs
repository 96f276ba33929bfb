//! Type descriptor model and projector configuration.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Shape of an API value as produced by metadata extraction.
///
/// The set of tags is closed. JSON input with any other `dataType` fails to
/// deserialize, so an unknown kind never reaches the projector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "dataType", rename_all = "camelCase")]
pub enum TypeDescriptor {
    Void,
    Any,
    Binary,
    Boolean,
    Buffer,
    Byte,
    Date,
    Datetime,
    Double,
    Float,
    Integer,
    Long,
    Object,
    String,
    Array {
        #[serde(rename = "elementType")]
        element_type: Box<TypeDescriptor>,
    },
    Enum {
        enums: Vec<EnumMember>,
    },
    RefObject {
        #[serde(rename = "refName")]
        ref_name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    RefEnum {
        #[serde(rename = "refName")]
        ref_name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
}

impl TypeDescriptor {
    /// Wrap `element` in an array descriptor.
    pub fn array_of(element: TypeDescriptor) -> Self {
        TypeDescriptor::Array {
            element_type: Box::new(element),
        }
    }

    /// Build an enum descriptor from its members, in declaration order.
    pub fn enumeration<I, M>(members: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<EnumMember>,
    {
        TypeDescriptor::Enum {
            enums: members.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the `dataType` tag of this descriptor.
    pub fn tag(&self) -> &'static str {
        match self {
            TypeDescriptor::Void => "void",
            TypeDescriptor::Any => "any",
            TypeDescriptor::Binary => "binary",
            TypeDescriptor::Boolean => "boolean",
            TypeDescriptor::Buffer => "buffer",
            TypeDescriptor::Byte => "byte",
            TypeDescriptor::Date => "date",
            TypeDescriptor::Datetime => "datetime",
            TypeDescriptor::Double => "double",
            TypeDescriptor::Float => "float",
            TypeDescriptor::Integer => "integer",
            TypeDescriptor::Long => "long",
            TypeDescriptor::Object => "object",
            TypeDescriptor::String => "string",
            TypeDescriptor::Array { .. } => "array",
            TypeDescriptor::Enum { .. } => "enum",
            TypeDescriptor::RefObject { .. } => "refObject",
            TypeDescriptor::RefEnum { .. } => "refEnum",
        }
    }

    /// Narrow this descriptor to its primitive leaf kind, if it is one.
    pub fn primitive_kind(&self) -> Option<PrimitiveKind> {
        let kind = match self {
            TypeDescriptor::Any => PrimitiveKind::Any,
            TypeDescriptor::Binary => PrimitiveKind::Binary,
            TypeDescriptor::Boolean => PrimitiveKind::Boolean,
            TypeDescriptor::Buffer => PrimitiveKind::Buffer,
            TypeDescriptor::Byte => PrimitiveKind::Byte,
            TypeDescriptor::Date => PrimitiveKind::Date,
            TypeDescriptor::Datetime => PrimitiveKind::Datetime,
            TypeDescriptor::Double => PrimitiveKind::Double,
            TypeDescriptor::Float => PrimitiveKind::Float,
            TypeDescriptor::Integer => PrimitiveKind::Integer,
            TypeDescriptor::Long => PrimitiveKind::Long,
            TypeDescriptor::Object => PrimitiveKind::Object,
            TypeDescriptor::String => PrimitiveKind::String,
            TypeDescriptor::Void
            | TypeDescriptor::Array { .. }
            | TypeDescriptor::Enum { .. }
            | TypeDescriptor::RefObject { .. }
            | TypeDescriptor::RefEnum { .. } => return None,
        };
        Some(kind)
    }
}

impl From<PrimitiveKind> for TypeDescriptor {
    fn from(kind: PrimitiveKind) -> Self {
        match kind {
            PrimitiveKind::Any => TypeDescriptor::Any,
            PrimitiveKind::Binary => TypeDescriptor::Binary,
            PrimitiveKind::Boolean => TypeDescriptor::Boolean,
            PrimitiveKind::Buffer => TypeDescriptor::Buffer,
            PrimitiveKind::Byte => TypeDescriptor::Byte,
            PrimitiveKind::Date => TypeDescriptor::Date,
            PrimitiveKind::Datetime => TypeDescriptor::Datetime,
            PrimitiveKind::Double => TypeDescriptor::Double,
            PrimitiveKind::Float => TypeDescriptor::Float,
            PrimitiveKind::Integer => TypeDescriptor::Integer,
            PrimitiveKind::Long => TypeDescriptor::Long,
            PrimitiveKind::Object => TypeDescriptor::Object,
            PrimitiveKind::String => TypeDescriptor::String,
        }
    }
}

/// Scalar leaf kinds handled by the primitive projector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Any,
    Binary,
    Boolean,
    Buffer,
    Byte,
    Date,
    Datetime,
    Double,
    Float,
    Integer,
    Long,
    Object,
    String,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 13] = [
        PrimitiveKind::Any,
        PrimitiveKind::Binary,
        PrimitiveKind::Boolean,
        PrimitiveKind::Buffer,
        PrimitiveKind::Byte,
        PrimitiveKind::Date,
        PrimitiveKind::Datetime,
        PrimitiveKind::Double,
        PrimitiveKind::Float,
        PrimitiveKind::Integer,
        PrimitiveKind::Long,
        PrimitiveKind::Object,
        PrimitiveKind::String,
    ];

    /// Returns the descriptor tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveKind::Any => "any",
            PrimitiveKind::Binary => "binary",
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Buffer => "buffer",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Date => "date",
            PrimitiveKind::Datetime => "datetime",
            PrimitiveKind::Double => "double",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Integer => "integer",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Object => "object",
            PrimitiveKind::String => "string",
        }
    }
}

/// A literal enum member. Members keep their source literal type here and are
/// stringified only when projected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnumMember {
    String(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl fmt::Display for EnumMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnumMember::String(s) => f.write_str(s),
            EnumMember::Number(n) => f.write_str(&decimal_form(n)),
            EnumMember::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// Render a JSON number the way a JavaScript producer would print it:
/// integral values in plain decimal, `-0` as `0`, and exponent form only
/// outside `[1e-6, 1e21)`.
fn decimal_form(n: &serde_json::Number) -> String {
    let Some(value) = n.as_f64().filter(|_| n.is_f64()) else {
        return n.to_string();
    };
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        // f64 Display is shortest round-trip and never uses an exponent.
        return value.to_string();
    }

    let rendered = format!("{:e}", value);
    match rendered.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => rendered,
    }
}

impl From<&str> for EnumMember {
    fn from(s: &str) -> Self {
        EnumMember::String(s.to_string())
    }
}

impl From<String> for EnumMember {
    fn from(s: String) -> Self {
        EnumMember::String(s)
    }
}

impl From<i64> for EnumMember {
    fn from(n: i64) -> Self {
        EnumMember::Number(n.into())
    }
}

impl From<bool> for EnumMember {
    fn from(b: bool) -> Self {
        EnumMember::Bool(b)
    }
}

/// One declared response of a method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseDescriptor {
    /// Status code or response key (e.g. "200", "default").
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<TypeDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Value>,
}

impl ResponseDescriptor {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schema: None,
            examples: None,
        }
    }

    pub fn schema(mut self, schema: TypeDescriptor) -> Self {
        self.schema = Some(schema);
        self
    }

    pub fn examples(mut self, examples: Value) -> Self {
        self.examples = Some(examples);
        self
    }
}

/// A controller method and its responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub responses: Vec<ResponseDescriptor>,
}

impl MethodDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            responses: Vec::new(),
        }
    }

    pub fn response(mut self, response: ResponseDescriptor) -> Self {
        self.responses.push(response);
        self
    }
}

/// Options for schema projection.
///
/// Read-only for the lifetime of a projection session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectorConfig {
    /// When true, free-form `object` schemas get `additionalProperties: false`.
    /// Defaults to false, leaving free-form objects open.
    pub no_implicit_additional_properties: bool,
    /// Silences the free-form `object` advisory (test runs, batch tooling).
    pub suppress_advisory_warnings: bool,
}

impl ProjectorConfig {
    /// Create a permissive configuration with advisories enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether free-form objects forbid unknown properties.
    pub fn no_implicit_additional_properties(mut self, forbid: bool) -> Self {
        self.no_implicit_additional_properties = forbid;
        self
    }

    /// Set whether the free-form object advisory is silenced.
    pub fn suppress_advisory_warnings(mut self, suppress: bool) -> Self {
        self.suppress_advisory_warnings = suppress;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn descriptor_tags_round_through_serde() {
        let descriptor: TypeDescriptor = serde_json::from_value(json!({
            "dataType": "array",
            "elementType": { "dataType": "datetime" }
        }))
        .unwrap();
        assert_eq!(descriptor, TypeDescriptor::array_of(TypeDescriptor::Datetime));
        assert_eq!(descriptor.tag(), "array");

        let reference: TypeDescriptor =
            serde_json::from_value(json!({ "dataType": "refObject", "refName": "User" })).unwrap();
        assert_eq!(reference.tag(), "refObject");
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let result = serde_json::from_value::<TypeDescriptor>(json!({ "dataType": "union" }));
        assert!(result.is_err());

        let result = serde_json::from_value::<TypeDescriptor>(json!({ "type": "string" }));
        assert!(result.is_err());
    }

    #[test]
    fn array_requires_element_type() {
        let result = serde_json::from_value::<TypeDescriptor>(json!({ "dataType": "array" }));
        assert!(result.is_err());
    }

    #[test]
    fn primitive_kind_covers_every_leaf() {
        for kind in PrimitiveKind::ALL {
            let descriptor = TypeDescriptor::from(kind);
            assert_eq!(descriptor.primitive_kind(), Some(kind));
            assert_eq!(descriptor.tag(), kind.as_str());
        }
        assert_eq!(TypeDescriptor::Void.primitive_kind(), None);
        assert_eq!(TypeDescriptor::enumeration(["a"]).primitive_kind(), None);
    }

    #[test]
    fn enum_members_keep_literal_type() {
        let descriptor: TypeDescriptor = serde_json::from_value(json!({
            "dataType": "enum",
            "enums": [1, "two", 2.5, true]
        }))
        .unwrap();
        let TypeDescriptor::Enum { enums } = descriptor else {
            panic!("expected enum descriptor");
        };
        let rendered: Vec<String> = enums.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["1", "two", "2.5", "true"]);
    }

    #[test]
    fn float_members_use_decimal_form() {
        let members: Vec<EnumMember> = serde_json::from_str(
            "[1.0, 100000000000000000000, -0.0, 1e21, 2.5, 1.5e-7, 0.000001, -42.0]",
        )
        .unwrap();
        let rendered: Vec<String> = members.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            ["1", "100000000000000000000", "0", "1e+21", "2.5", "1.5e-7", "0.000001", "-42"]
        );
    }

    #[test]
    fn integer_members_print_exactly() {
        let members: Vec<EnumMember> =
            serde_json::from_str("[0, -7, 18446744073709551615]").unwrap();
        let rendered: Vec<String> = members.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["0", "-7", "18446744073709551615"]);
    }

    #[test]
    fn method_descriptor_defaults() {
        let method: MethodDescriptor = serde_json::from_value(json!({
            "name": "getUser",
            "responses": [{ "name": "204", "description": "No content" }]
        }))
        .unwrap();
        assert_eq!(method.responses.len(), 1);
        assert!(method.responses[0].schema.is_none());
        assert!(method.responses[0].examples.is_none());
    }

    #[test]
    fn config_builder_and_serde() {
        let config = ProjectorConfig::new()
            .no_implicit_additional_properties(true)
            .suppress_advisory_warnings(true);
        assert!(config.no_implicit_additional_properties);
        assert!(config.suppress_advisory_warnings);

        let config: ProjectorConfig =
            serde_json::from_value(json!({ "noImplicitAdditionalProperties": true })).unwrap();
        assert!(config.no_implicit_additional_properties);
        assert!(!config.suppress_advisory_warnings);
    }
}
