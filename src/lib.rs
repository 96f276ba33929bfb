//! Swagger Schema Projector
//!
//! Translates API type descriptors into Swagger (OpenAPI 2.0) schema fragments,
//! and controller methods into operation fragments.
//!
//! # Example
//!
//! ```
//! use swagger_projector::{ProjectorConfig, SchemaProjector, TypeDescriptor};
//! use serde_json::json;
//!
//! let projector = SchemaProjector::new(ProjectorConfig::new());
//! let descriptor = TypeDescriptor::array_of(TypeDescriptor::Datetime);
//!
//! assert_eq!(
//!     projector.project_type(&descriptor).to_value(),
//!     json!({ "type": "array", "items": { "type": "string", "format": "date-time" } })
//! );
//! ```
//!
//! # Primitive Mapping
//!
//! | Descriptor | `type` | `format` |
//! |------------|--------|----------|
//! | `any` | `object` | (`additionalProperties: true`) |
//! | `binary` | `string` | `binary` |
//! | `boolean` | `boolean` | |
//! | `buffer`, `byte` | `string` | `byte` |
//! | `date` | `string` | `date` |
//! | `datetime` | `string` | `date-time` |
//! | `double` | `number` | `double` |
//! | `float` | `number` | `float` |
//! | `integer` | `integer` | `int32` |
//! | `long` | `integer` | `int64` |
//! | `object` | `object` | (`additionalProperties` from config) |
//! | `string` | `string` | |
//!
//! `void` and reference descriptors project to an empty schema `{}`.

mod error;
mod linter;
mod literals;
mod loader;
mod operation;
mod projector;
mod schema;
mod types;
mod validator;

pub use error::{ExampleError, LiteralError, LoadError, ValidateError};
pub use linter::{lint, lint_file, Diagnostic, FileResult, FileStatus, LintResult, Severity};
pub use literals::{throw_if_not_data_format, throw_if_not_data_type, DataFormat, DataType};
pub use loader::{
    descriptor_from_value, is_url, load_config, load_descriptor, load_descriptor_auto,
    load_descriptor_str, load_json, load_json_auto, load_method, load_method_auto,
    load_method_str, method_from_value,
};
pub use operation::{operation_id, Operation, ResponseExamples, ResponseObject, APPLICATION_JSON};
pub use projector::{project_type, SchemaProjector, ADVISORY_TARGET, FREE_FORM_OBJECT_ADVICE};
pub use schema::Schema;
pub use types::{
    EnumMember, MethodDescriptor, PrimitiveKind, ProjectorConfig, ResponseDescriptor,
    TypeDescriptor,
};
pub use validator::{validate_example, validate_operation_examples};

#[cfg(feature = "remote")]
pub use loader::load_json_url;
