//! Descriptor and configuration loading from files, strings, and HTTP URLs.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::LoadError;
use crate::types::{MethodDescriptor, ProjectorConfig, TypeDescriptor};

#[cfg(feature = "remote")]
use std::time::Duration;

/// Default timeout for HTTP requests (10 seconds).
#[cfg(feature = "remote")]
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

const TYPE_DESCRIPTOR: &str = "type descriptor";
const METHOD_DESCRIPTOR: &str = "method descriptor";
const CONFIG: &str = "projector config";

/// Load raw JSON from a file path.
///
/// # Errors
///
/// Returns `LoadError::FileNotFound` if the file doesn't exist,
/// or `LoadError::InvalidJson` if the file isn't valid JSON.
pub fn load_json(path: &Path) -> Result<Value, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| LoadError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| LoadError::InvalidJson { source })
}

/// Load raw JSON from an HTTP/HTTPS URL.
///
/// Requires the `remote` feature (enabled by default).
#[cfg(feature = "remote")]
pub fn load_json_url(url: &str) -> Result<Value, LoadError> {
    let network_error = |source| LoadError::NetworkError {
        url: url.to_string(),
        source,
    };

    let client = reqwest::blocking::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .map_err(network_error)?;

    client
        .get(url)
        .send()
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.json())
        .map_err(network_error)
}

/// Load raw JSON from a file path or, with the `remote` feature, a URL.
pub fn load_json_auto(source: &str) -> Result<Value, LoadError> {
    #[cfg(feature = "remote")]
    if is_url(source) {
        return load_json_url(source);
    }

    load_json(Path::new(source))
}

/// Check if a string looks like a URL (starts with http:// or https://).
pub fn is_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

fn from_json<T: DeserializeOwned>(value: Value, kind: &'static str) -> Result<T, LoadError> {
    serde_json::from_value(value).map_err(|source| LoadError::InvalidDescriptor { kind, source })
}

/// Interpret a JSON value as a type descriptor.
///
/// A `dataType` outside the closed tag set is rejected here.
pub fn descriptor_from_value(value: Value) -> Result<TypeDescriptor, LoadError> {
    from_json(value, TYPE_DESCRIPTOR)
}

/// Interpret a JSON value as a method descriptor.
pub fn method_from_value(value: Value) -> Result<MethodDescriptor, LoadError> {
    from_json(value, METHOD_DESCRIPTOR)
}

pub fn load_descriptor(path: &Path) -> Result<TypeDescriptor, LoadError> {
    descriptor_from_value(load_json(path)?)
}

pub fn load_descriptor_str(content: &str) -> Result<TypeDescriptor, LoadError> {
    let value = serde_json::from_str(content).map_err(|source| LoadError::InvalidJson { source })?;
    descriptor_from_value(value)
}

pub fn load_descriptor_auto(source: &str) -> Result<TypeDescriptor, LoadError> {
    descriptor_from_value(load_json_auto(source)?)
}

pub fn load_method(path: &Path) -> Result<MethodDescriptor, LoadError> {
    method_from_value(load_json(path)?)
}

pub fn load_method_str(content: &str) -> Result<MethodDescriptor, LoadError> {
    let value = serde_json::from_str(content).map_err(|source| LoadError::InvalidJson { source })?;
    method_from_value(value)
}

pub fn load_method_auto(source: &str) -> Result<MethodDescriptor, LoadError> {
    method_from_value(load_json_auto(source)?)
}

/// Load projector options from a JSON config file.
///
/// Missing keys fall back to [`ProjectorConfig::default`].
pub fn load_config(path: &Path) -> Result<ProjectorConfig, LoadError> {
    from_json(load_json(path)?, CONFIG)
}
