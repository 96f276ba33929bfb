//! Projection of type descriptors onto schema fragments.
//!
//! Dispatch is a total match over [`TypeDescriptor`]: adding a descriptor kind
//! without a projection is a compile error here, never an empty schema.

use crate::literals::{DataFormat, DataType};
use crate::schema::Schema;
use crate::types::{EnumMember, PrimitiveKind, ProjectorConfig, TypeDescriptor};

/// Log target for advisories about discouraged descriptor shapes.
pub const ADVISORY_TARGET: &str = "swagger_projector::advisory";

/// Advice printed when a free-form `object` is projected.
pub const FREE_FORM_OBJECT_ADVICE: &str = "the type Object is discouraged; \
    consider a named record such as `interface StringDictionary { [key: string]: string }` \
    or `interface RecordOfAny { [key: string]: any }`";

/// Stateless projector over a read-only configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaProjector {
    config: ProjectorConfig,
}

impl SchemaProjector {
    pub fn new(config: ProjectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectorConfig {
        &self.config
    }

    /// Project any descriptor onto its schema fragment.
    pub fn project_type(&self, descriptor: &TypeDescriptor) -> Schema {
        match descriptor {
            TypeDescriptor::Void => self.project_void(),
            TypeDescriptor::RefObject { .. } | TypeDescriptor::RefEnum { .. } => {
                self.project_reference(descriptor)
            }
            TypeDescriptor::Any => self.project_primitive(PrimitiveKind::Any),
            TypeDescriptor::Binary => self.project_primitive(PrimitiveKind::Binary),
            TypeDescriptor::Boolean => self.project_primitive(PrimitiveKind::Boolean),
            TypeDescriptor::Buffer => self.project_primitive(PrimitiveKind::Buffer),
            TypeDescriptor::Byte => self.project_primitive(PrimitiveKind::Byte),
            TypeDescriptor::Date => self.project_primitive(PrimitiveKind::Date),
            TypeDescriptor::Datetime => self.project_primitive(PrimitiveKind::Datetime),
            TypeDescriptor::Double => self.project_primitive(PrimitiveKind::Double),
            TypeDescriptor::Float => self.project_primitive(PrimitiveKind::Float),
            TypeDescriptor::Integer => self.project_primitive(PrimitiveKind::Integer),
            TypeDescriptor::Long => self.project_primitive(PrimitiveKind::Long),
            TypeDescriptor::Object => self.project_primitive(PrimitiveKind::Object),
            TypeDescriptor::String => self.project_primitive(PrimitiveKind::String),
            TypeDescriptor::Array { element_type } => self.project_array(element_type),
            TypeDescriptor::Enum { enums } => self.project_enum(enums),
        }
    }

    /// Project the value type of a model's extra (dictionary) properties.
    pub fn build_additional_properties(&self, descriptor: &TypeDescriptor) -> Schema {
        self.project_type(descriptor)
    }

    /// Fixed fragment for a scalar leaf kind.
    pub fn project_primitive(&self, kind: PrimitiveKind) -> Schema {
        if kind == PrimitiveKind::Object {
            self.advise_free_form_object();
        }

        match kind {
            // `any` is unconstrained by definition, whatever the config says.
            PrimitiveKind::Any => Schema::object(true),
            PrimitiveKind::Binary => Schema::formatted(DataType::String, DataFormat::Binary),
            PrimitiveKind::Boolean => Schema::of_type(DataType::Boolean),
            PrimitiveKind::Buffer => Schema::formatted(DataType::String, DataFormat::Byte),
            PrimitiveKind::Byte => Schema::formatted(DataType::String, DataFormat::Byte),
            PrimitiveKind::Date => Schema::formatted(DataType::String, DataFormat::Date),
            PrimitiveKind::Datetime => Schema::formatted(DataType::String, DataFormat::DateTime),
            PrimitiveKind::Double => Schema::formatted(DataType::Number, DataFormat::Double),
            PrimitiveKind::Float => Schema::formatted(DataType::Number, DataFormat::Float),
            PrimitiveKind::Integer => Schema::formatted(DataType::Integer, DataFormat::Int32),
            PrimitiveKind::Long => Schema::formatted(DataType::Integer, DataFormat::Int64),
            PrimitiveKind::Object => {
                Schema::object(!self.config.no_implicit_additional_properties)
            }
            PrimitiveKind::String => Schema::of_type(DataType::String),
        }
    }

    /// "No content" schema. Swagger forbids `additionalProperties` here, even
    /// `false`, so the fragment is empty.
    pub fn project_void(&self) -> Schema {
        Schema::default()
    }

    /// References project to an empty fragment; the `$ref` link is attached by
    /// whoever owns the registry of named models.
    pub fn project_reference(&self, _reference: &TypeDescriptor) -> Schema {
        Schema::default()
    }

    pub fn project_array(&self, element_type: &TypeDescriptor) -> Schema {
        Schema {
            data_type: Some(DataType::Array),
            items: Some(Box::new(self.project_type(element_type))),
            ..Default::default()
        }
    }

    /// Enum members are stringified in declaration order.
    pub fn project_enum(&self, members: &[EnumMember]) -> Schema {
        Schema {
            data_type: Some(DataType::String),
            enum_values: Some(members.iter().map(ToString::to_string).collect()),
            ..Default::default()
        }
    }

    fn advise_free_form_object(&self) {
        if self.config.suppress_advisory_warnings {
            return;
        }
        tracing::warn!(target: ADVISORY_TARGET, "{}", FREE_FORM_OBJECT_ADVICE);
    }
}

/// Project `descriptor` with a one-off projector.
pub fn project_type(descriptor: &TypeDescriptor, config: &ProjectorConfig) -> Schema {
    SchemaProjector::new(*config).project_type(descriptor)
}
