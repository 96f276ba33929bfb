//! Operation fragments: operation id, content type and projected responses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::projector::SchemaProjector;
use crate::schema::Schema;
use crate::types::{MethodDescriptor, TypeDescriptor};

/// The only content type operations declare.
pub const APPLICATION_JSON: &str = "application/json";

/// Swagger operation for one controller method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub operation_id: String,
    pub produces: Vec<String>,
    pub responses: BTreeMap<String, ResponseObject>,
}

/// A single entry of an operation's `responses` map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseObject {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<ResponseExamples>,
}

/// Response examples keyed by media type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseExamples {
    #[serde(rename = "application/json")]
    pub application_json: Value,
}

impl Operation {
    /// Convert to a JSON value for embedding under a path item.
    pub fn to_value(&self) -> Value {
        // Keys are strings and every leaf is a Schema or an already-parsed Value.
        serde_json::to_value(self).expect("operation fields always serialize to JSON")
    }
}

impl SchemaProjector {
    /// Build the operation fragment for `method`.
    ///
    /// Responses are keyed by name; when two share a name the later one wins.
    pub fn build_operation(&self, controller_name: &str, method: &MethodDescriptor) -> Operation {
        tracing::debug!(
            controller = controller_name,
            method = %method.name,
            responses = method.responses.len(),
            "building operation"
        );

        let mut responses = BTreeMap::new();
        for response in &method.responses {
            let schema = match &response.schema {
                Some(TypeDescriptor::Void) | None => None,
                Some(descriptor) => Some(self.project_type(descriptor)),
            };
            let examples = response
                .examples
                .clone()
                .map(|application_json| ResponseExamples { application_json });

            responses.insert(
                response.name.clone(),
                ResponseObject {
                    description: response.description.clone(),
                    schema,
                    examples,
                },
            );
        }

        Operation {
            operation_id: operation_id(&method.name),
            produces: vec![APPLICATION_JSON.to_string()],
            responses,
        }
    }
}

/// Method name with its first character upper-cased.
pub fn operation_id(method_name: &str) -> String {
    let mut chars = method_name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ProjectorConfig, ResponseDescriptor};
    use serde_json::json;

    fn projector() -> SchemaProjector {
        SchemaProjector::new(ProjectorConfig::new().suppress_advisory_warnings(true))
    }

    #[test]
    fn operation_id_uppercases_first_char() {
        assert_eq!(operation_id("getUser"), "GetUser");
        assert_eq!(operation_id("List"), "List");
        assert_eq!(operation_id("x"), "X");
        assert_eq!(operation_id(""), "");
        assert_eq!(operation_id("état"), "État");
    }

    #[test]
    fn single_string_response() {
        let method = MethodDescriptor::new("methodName")
            .response(ResponseDescriptor::new("200", "ok").schema(TypeDescriptor::String));

        let operation = projector().build_operation("UserController", &method);
        assert_eq!(
            operation.to_value(),
            json!({
                "operationId": "MethodName",
                "produces": ["application/json"],
                "responses": {
                    "200": { "description": "ok", "schema": { "type": "string" } }
                }
            })
        );
    }

    #[test]
    fn void_and_missing_schema_are_omitted() {
        let method = MethodDescriptor::new("remove")
            .response(ResponseDescriptor::new("204", "gone").schema(TypeDescriptor::Void))
            .response(ResponseDescriptor::new("404", "missing"));

        let value = projector().build_operation("C", &method).to_value();
        assert_eq!(value["responses"]["204"], json!({ "description": "gone" }));
        assert_eq!(value["responses"]["404"], json!({ "description": "missing" }));
    }

    #[test]
    fn examples_are_keyed_by_media_type() {
        let method = MethodDescriptor::new("get").response(
            ResponseDescriptor::new("200", "ok")
                .schema(TypeDescriptor::array_of(TypeDescriptor::Integer))
                .examples(json!([1, 2, 3])),
        );

        let value = projector().build_operation("C", &method).to_value();
        assert_eq!(
            value["responses"]["200"]["examples"],
            json!({ "application/json": [1, 2, 3] })
        );
    }

    #[test]
    fn later_response_with_same_name_wins() {
        let method = MethodDescriptor::new("get")
            .response(ResponseDescriptor::new("200", "first").schema(TypeDescriptor::String))
            .response(ResponseDescriptor::new("200", "second"));

        let operation = projector().build_operation("C", &method);
        assert_eq!(operation.responses.len(), 1);
        assert_eq!(operation.responses["200"].description, "second");
        assert!(operation.responses["200"].schema.is_none());
    }

    #[test]
    fn falsy_examples_are_kept() {
        let method = MethodDescriptor::new("get")
            .response(ResponseDescriptor::new("200", "zero").examples(json!(0)))
            .response(ResponseDescriptor::new("201", "empty").examples(json!("")))
            .response(ResponseDescriptor::new("202", "no").examples(json!(false)));

        let value = projector().build_operation("C", &method).to_value();
        assert!(value.is_object());
        assert_eq!(value["responses"]["200"]["examples"], json!({ "application/json": 0 }));
        assert_eq!(value["responses"]["201"]["examples"], json!({ "application/json": "" }));
        assert_eq!(value["responses"]["202"]["examples"], json!({ "application/json": false }));
    }

    #[test]
    fn no_responses_yields_empty_map() {
        let operation = projector().build_operation("C", &MethodDescriptor::new("ping"));
        assert_eq!(operation.to_value()["responses"], json!({}));
    }
}
