//! Checking response examples against their projected schemas.

use serde_json::Value;

use crate::error::{ExampleError, ValidateError};
use crate::operation::Operation;
use crate::schema::Schema;

/// Validate an example value against a projected schema fragment.
///
/// # Errors
///
/// Returns `ValidateError::InvalidSchema` if the fragment cannot be compiled,
/// or `ValidateError::Invalid` with every violation found in `example`.
pub fn validate_example(schema: &Schema, example: &Value) -> Result<(), ValidateError> {
    let validator = jsonschema::validator_for(&schema.to_value()).map_err(|e| {
        ValidateError::InvalidSchema {
            message: e.to_string(),
        }
    })?;

    let errors: Vec<ExampleError> = validator
        .iter_errors(example)
        .map(|e| ExampleError {
            path: e.instance_path.to_string(),
            message: e.to_string(),
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidateError::Invalid { errors })
    }
}

/// Validate the examples of every response that declares both a schema and
/// examples. Returns the failing response names with their errors.
pub fn validate_operation_examples(operation: &Operation) -> Vec<(String, ValidateError)> {
    operation
        .responses
        .iter()
        .filter_map(|(name, response)| {
            let schema = response.schema.as_ref()?;
            let examples = response.examples.as_ref()?;
            validate_example(schema, &examples.application_json)
                .err()
                .map(|e| (name.clone(), e))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literals::DataType;
    use crate::projector::SchemaProjector;
    use crate::types::{MethodDescriptor, ProjectorConfig, ResponseDescriptor, TypeDescriptor};
    use serde_json::json;

    #[test]
    fn matching_example_passes() {
        let schema = Schema::of_type(DataType::String);
        assert!(validate_example(&schema, &json!("hello")).is_ok());
    }

    #[test]
    fn wrong_type_fails() {
        let schema = Schema::of_type(DataType::Boolean);
        let result = validate_example(&schema, &json!("yes"));
        assert!(matches!(result, Err(ValidateError::Invalid { .. })));
    }

    #[test]
    fn collects_errors_with_paths() {
        let projector = SchemaProjector::default();
        let schema = projector.project_type(&TypeDescriptor::array_of(TypeDescriptor::Integer));

        match validate_example(&schema, &json!([1, "two", 3, "four"])) {
            Err(ValidateError::Invalid { errors }) => {
                let paths: Vec<&str> = errors.iter().map(|e| e.path.as_str()).collect();
                assert_eq!(paths, ["/1", "/3"]);
            }
            other => panic!("expected two example errors, got {:?}", other),
        }
    }

    #[test]
    fn enum_example_must_be_member() {
        let projector = SchemaProjector::default();
        let schema = projector.project_type(&TypeDescriptor::enumeration(["open", "closed"]));

        assert!(validate_example(&schema, &json!("open")).is_ok());
        assert!(validate_example(&schema, &json!("pending")).is_err());
    }

    #[test]
    fn empty_schema_accepts_anything() {
        assert!(validate_example(&Schema::default(), &json!({ "any": [1, null] })).is_ok());
    }

    #[test]
    fn operation_examples_report_failing_responses() {
        let projector =
            SchemaProjector::new(ProjectorConfig::new().suppress_advisory_warnings(true));
        let method = MethodDescriptor::new("get")
            .response(
                ResponseDescriptor::new("200", "ok")
                    .schema(TypeDescriptor::String)
                    .examples(json!("fine")),
            )
            .response(
                ResponseDescriptor::new("400", "bad")
                    .schema(TypeDescriptor::Integer)
                    .examples(json!("not a number")),
            )
            .response(ResponseDescriptor::new("500", "boom").examples(json!(42)));

        let failures = validate_operation_examples(&projector.build_operation("C", &method));
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, "400");
    }
}
