//! Closed literal sets for Swagger `type` and `format` values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LiteralError;

/// Recognized values of a schema's `format` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataFormat {
    #[serde(rename = "int32")]
    Int32,
    #[serde(rename = "int64")]
    Int64,
    #[serde(rename = "float")]
    Float,
    #[serde(rename = "double")]
    Double,
    #[serde(rename = "byte")]
    Byte,
    #[serde(rename = "binary")]
    Binary,
    #[serde(rename = "date")]
    Date,
    #[serde(rename = "date-time")]
    DateTime,
    #[serde(rename = "password")]
    Password,
}

impl DataFormat {
    pub const ALL: [DataFormat; 9] = [
        DataFormat::Int32,
        DataFormat::Int64,
        DataFormat::Float,
        DataFormat::Double,
        DataFormat::Byte,
        DataFormat::Binary,
        DataFormat::Date,
        DataFormat::DateTime,
        DataFormat::Password,
    ];

    /// Returns the wire literal for this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataFormat::Int32 => "int32",
            DataFormat::Int64 => "int64",
            DataFormat::Float => "float",
            DataFormat::Double => "double",
            DataFormat::Byte => "byte",
            DataFormat::Binary => "binary",
            DataFormat::Date => "date",
            DataFormat::DateTime => "date-time",
            DataFormat::Password => "password",
        }
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataFormat {
    type Err = LiteralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DataFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| LiteralError::UnknownFormat {
                value: s.to_string(),
            })
    }
}

/// Recognized values of a schema's `type` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Array,
    Boolean,
    Integer,
    Number,
    Object,
    String,
}

impl DataType {
    pub const ALL: [DataType; 6] = [
        DataType::Array,
        DataType::Boolean,
        DataType::Integer,
        DataType::Number,
        DataType::Object,
        DataType::String,
    ];

    /// Returns the wire literal for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Array => "array",
            DataType::Boolean => "boolean",
            DataType::Integer => "integer",
            DataType::Number => "number",
            DataType::Object => "object",
            DataType::String => "string",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = LiteralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DataType::ALL
            .into_iter()
            .find(|data_type| data_type.as_str() == s)
            .ok_or_else(|| LiteralError::UnknownDataType {
                value: s.to_string(),
            })
    }
}

/// Narrow `s` to a [`DataFormat`].
///
/// # Panics
///
/// Panics if `s` is not a recognized format literal. A miss here means the
/// literal set and its producer have drifted apart, which must not reach a
/// published document.
pub fn throw_if_not_data_format(s: &str) -> DataFormat {
    s.parse().unwrap_or_else(|e: LiteralError| panic!("{}", e))
}

/// Narrow `s` to a [`DataType`].
///
/// # Panics
///
/// Panics if `s` is not a recognized data type literal.
pub fn throw_if_not_data_type(s: &str) -> DataType {
    s.parse().unwrap_or_else(|e: LiteralError| panic!("{}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_format_literal_passes_through() {
        for literal in [
            "int32",
            "int64",
            "float",
            "double",
            "byte",
            "binary",
            "date",
            "date-time",
            "password",
        ] {
            assert_eq!(throw_if_not_data_format(literal).as_str(), literal);
        }
    }

    #[test]
    fn every_data_type_literal_passes_through() {
        for literal in ["array", "boolean", "integer", "number", "object", "string"] {
            assert_eq!(throw_if_not_data_type(literal).as_str(), literal);
        }
    }

    #[test]
    fn parse_reports_unknown_literals() {
        assert_eq!(
            "datetime".parse::<DataFormat>(),
            Err(LiteralError::UnknownFormat {
                value: "datetime".into()
            })
        );
        assert_eq!(
            "null".parse::<DataType>(),
            Err(LiteralError::UnknownDataType {
                value: "null".into()
            })
        );
    }

    #[test]
    fn literals_are_case_sensitive() {
        assert!("Int32".parse::<DataFormat>().is_err());
        assert!("STRING".parse::<DataType>().is_err());
    }

    #[test]
    #[should_panic(expected = "unrecognized format literal \"uuid\"")]
    fn unknown_format_panics() {
        throw_if_not_data_format("uuid");
    }

    #[test]
    #[should_panic(expected = "unrecognized data type literal \"file\"")]
    fn unknown_data_type_panics() {
        throw_if_not_data_type("file");
    }

    #[test]
    #[should_panic]
    fn format_literal_is_not_a_data_type() {
        throw_if_not_data_type("int32");
    }

    #[test]
    fn serde_uses_wire_literals() {
        assert_eq!(
            serde_json::to_value(DataFormat::DateTime).unwrap(),
            serde_json::json!("date-time")
        );
        assert_eq!(
            serde_json::to_value(DataType::Integer).unwrap(),
            serde_json::json!("integer")
        );
    }
}
