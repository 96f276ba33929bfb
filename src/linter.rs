//! Method descriptor linting - static analysis of descriptor files.
//!
//! Checks descriptor files for:
//! - JSON syntax errors and descriptors outside the closed tag set
//! - Response examples that don't satisfy their projected schema
//! - Free-form `object` types
//! - Responses shadowed by a later response with the same name

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::ValidateError;
use crate::loader::load_method;
use crate::projector::{SchemaProjector, FREE_FORM_OBJECT_ADVICE};
use crate::types::{ProjectorConfig, TypeDescriptor};
use crate::validator::validate_example;

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A single diagnostic message from linting.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: String,
    pub file: PathBuf,
    /// JSON path to the issue (e.g., "/responses/0/schema/elementType")
    pub path: String,
    pub message: String,
}

/// Result of linting a single file.
#[derive(Debug, Clone, Serialize)]
pub struct FileResult {
    pub file: PathBuf,
    pub status: FileStatus,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

/// Status of a linted file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Ok,
    Error,
    Warning,
}

/// Result of linting a directory or set of files.
#[derive(Debug, Clone, Serialize)]
pub struct LintResult {
    pub path: PathBuf,
    pub files_checked: usize,
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
    pub warnings: usize,
    pub results: Vec<FileResult>,
}

impl LintResult {
    /// Returns true if all files passed (no errors).
    pub fn is_ok(&self) -> bool {
        self.errors == 0
    }
}

/// Lint a method descriptor file or a directory of them.
///
/// If path is a directory, recursively finds all .json files.
/// If `strict` is true, files with warnings count as failed.
pub fn lint(path: &Path, strict: bool, config: &ProjectorConfig) -> LintResult {
    let files = collect_descriptor_files(path);
    let mut results = Vec::new();
    let mut total_errors = 0;
    let mut total_warnings = 0;

    for file in &files {
        let file_result = lint_file(file, path, config);
        total_errors += file_result
            .diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count();
        total_warnings += file_result
            .diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count();
        results.push(file_result);
    }

    let failed = results
        .iter()
        .filter(|r| {
            if strict {
                r.status != FileStatus::Ok
            } else {
                r.status == FileStatus::Error
            }
        })
        .count();

    LintResult {
        path: path.to_path_buf(),
        files_checked: files.len(),
        passed: files.len() - failed,
        failed,
        errors: total_errors,
        warnings: total_warnings,
        results,
    }
}

/// Lint a single method descriptor file.
pub fn lint_file(file: &Path, base_path: &Path, config: &ProjectorConfig) -> FileResult {
    let mut diagnostics = Vec::new();
    let display_file = file.strip_prefix(base_path).unwrap_or(file).to_path_buf();

    let method = match load_method(file) {
        Ok(m) => m,
        Err(e) => {
            diagnostics.push(Diagnostic {
                severity: Severity::Error,
                code: "E001".to_string(),
                file: file.to_path_buf(),
                path: "/".to_string(),
                message: e.to_string(),
            });
            return FileResult {
                file: display_file,
                status: FileStatus::Error,
                diagnostics,
            };
        }
    };

    // The linter reports free-form objects itself as W001.
    let projector = SchemaProjector::new(config.suppress_advisory_warnings(true));
    let mut seen = HashSet::new();

    for (index, response) in method.responses.iter().enumerate() {
        let response_path = format!("/responses/{}", index);

        if !seen.insert(response.name.as_str()) {
            diagnostics.push(Diagnostic {
                severity: Severity::Warning,
                code: "W002".to_string(),
                file: file.to_path_buf(),
                path: response_path.clone(),
                message: format!(
                    "response \"{}\" is declared more than once; only the last declaration is kept",
                    response.name
                ),
            });
        }

        let Some(descriptor) = &response.schema else {
            continue;
        };

        let schema_path = format!("{}/schema", response_path);
        check_free_form_objects(descriptor, file, &schema_path, &mut diagnostics);

        if matches!(descriptor, TypeDescriptor::Void) {
            continue;
        }
        if let Some(examples) = &response.examples {
            let schema = projector.project_type(descriptor);
            if let Err(e) = validate_example(&schema, examples) {
                push_example_errors(e, file, &response_path, &mut diagnostics);
            }
        }
    }

    let has_errors = diagnostics.iter().any(|d| d.severity == Severity::Error);
    let has_warnings = diagnostics.iter().any(|d| d.severity == Severity::Warning);

    let status = if has_errors {
        FileStatus::Error
    } else if has_warnings {
        FileStatus::Warning
    } else {
        FileStatus::Ok
    };

    FileResult {
        file: display_file,
        status,
        diagnostics,
    }
}

/// Recursively flag free-form `object` descriptors.
fn check_free_form_objects(
    descriptor: &TypeDescriptor,
    file: &Path,
    path: &str,
    diagnostics: &mut Vec<Diagnostic>,
) {
    match descriptor {
        TypeDescriptor::Object => diagnostics.push(Diagnostic {
            severity: Severity::Warning,
            code: "W001".to_string(),
            file: file.to_path_buf(),
            path: path.to_string(),
            message: FREE_FORM_OBJECT_ADVICE.to_string(),
        }),
        TypeDescriptor::Array { element_type } => {
            let child_path = format!("{}/elementType", path);
            check_free_form_objects(element_type, file, &child_path, diagnostics);
        }
        TypeDescriptor::Void
        | TypeDescriptor::Any
        | TypeDescriptor::Binary
        | TypeDescriptor::Boolean
        | TypeDescriptor::Buffer
        | TypeDescriptor::Byte
        | TypeDescriptor::Date
        | TypeDescriptor::Datetime
        | TypeDescriptor::Double
        | TypeDescriptor::Float
        | TypeDescriptor::Integer
        | TypeDescriptor::Long
        | TypeDescriptor::String
        | TypeDescriptor::Enum { .. }
        | TypeDescriptor::RefObject { .. }
        | TypeDescriptor::RefEnum { .. } => {}
    }
}

fn push_example_errors(
    error: ValidateError,
    file: &Path,
    response_path: &str,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let examples_path = format!("{}/examples", response_path);
    match error {
        ValidateError::Invalid { errors } => {
            for e in errors {
                diagnostics.push(Diagnostic {
                    severity: Severity::Error,
                    code: "E002".to_string(),
                    file: file.to_path_buf(),
                    path: format!("{}{}", examples_path, e.path),
                    message: format!("example does not match schema: {}", e.message),
                });
            }
        }
        other => diagnostics.push(Diagnostic {
            severity: Severity::Error,
            code: "E002".to_string(),
            file: file.to_path_buf(),
            path: examples_path,
            message: other.to_string(),
        }),
    }
}

/// Collect all .json files from a path (file or directory).
fn collect_descriptor_files(path: &Path) -> Vec<PathBuf> {
    if path.is_file() {
        if path.extension().map(|e| e == "json").unwrap_or(false) {
            return vec![path.to_path_buf()];
        }
        return vec![];
    }

    let mut files = Vec::new();
    collect_files_recursive(path, &mut files);
    files.sort();
    files
}

fn collect_files_recursive(dir: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_files_recursive(&path, files);
        } else if path.extension().map(|e| e == "json").unwrap_or(false) {
            files.push(path);
        }
    }
}
