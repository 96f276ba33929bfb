//! Swagger Projector CLI
//!
//! Command-line interface for projecting type and method descriptors onto
//! Swagger schema and operation fragments.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use swagger_projector::{
    lint, load_config, load_descriptor_auto, load_method_auto, validate_operation_examples,
    FileStatus, ProjectorConfig, SchemaProjector, Severity, ValidateError,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "swagger-projector")]
#[command(about = "Project API type descriptors onto Swagger schema fragments")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the schema fragment for a type descriptor
    Project {
        /// Descriptor source: file path or URL (http:// or https://)
        descriptor: String,

        #[command(flatten)]
        projection: ProjectionArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the operation fragment for a method descriptor
    Operation {
        /// Method descriptor source: file path or URL (http:// or https://)
        method: String,

        /// Name of the controller the method belongs to
        #[arg(long, short)]
        controller: String,

        /// Fail if a response example does not match its schema
        #[arg(long)]
        check_examples: bool,

        #[command(flatten)]
        projection: ProjectionArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Lint method descriptor files (syntax, unknown types, examples, discouraged shapes)
    Lint {
        /// File or directory to lint
        path: PathBuf,

        /// Output format: text (default) or json
        #[arg(long, default_value = "text")]
        format: String,

        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,

        /// Suppress progress output, only show errors
        #[arg(long, short)]
        quiet: bool,

        #[command(flatten)]
        projection: ProjectionArgs,
    },
}

#[derive(Args)]
struct ProjectionArgs {
    /// JSON config file (noImplicitAdditionalProperties, suppressAdvisoryWarnings)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit additionalProperties=false for free-form objects
    #[arg(long)]
    no_implicit_additional_properties: bool,

    /// Silence advisories about discouraged descriptor shapes
    #[arg(long)]
    quiet_advisories: bool,
}

impl ProjectionArgs {
    /// Config file values, overridden by any flag that is set.
    fn resolve(&self) -> Result<ProjectorConfig, u8> {
        let mut config = match &self.config {
            Some(path) => load_config(path).map_err(|e| {
                eprintln!("Error loading config: {}", e);
                e.exit_code() as u8
            })?,
            None => ProjectorConfig::default(),
        };

        if self.no_implicit_additional_properties {
            config = config.no_implicit_additional_properties(true);
        }
        if self.quiet_advisories {
            config = config.suppress_advisory_warnings(true);
        }
        Ok(config)
    }
}

#[derive(Args)]
struct OutputArgs {
    /// Output file (stdout if not specified)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Project {
            descriptor,
            projection,
            output,
        } => run_project(&descriptor, &projection, &output),

        Commands::Operation {
            method,
            controller,
            check_examples,
            projection,
            output,
        } => run_operation(&method, &controller, check_examples, &projection, &output),

        Commands::Lint {
            path,
            format,
            strict,
            quiet,
            projection,
        } => run_lint(&path, &format, strict, quiet, &projection),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => ExitCode::from(code),
    }
}

/// Log to stderr, filtered by RUST_LOG (default: warn).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_project(source: &str, projection: &ProjectionArgs, output: &OutputArgs) -> Result<(), u8> {
    let config = projection.resolve()?;

    let descriptor = load_descriptor_auto(source).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    let schema = SchemaProjector::new(config).project_type(&descriptor);
    write_output(&schema, output)
}

fn run_operation(
    source: &str,
    controller: &str,
    check_examples: bool,
    projection: &ProjectionArgs,
    output: &OutputArgs,
) -> Result<(), u8> {
    let config = projection.resolve()?;

    let method = load_method_auto(source).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    let operation = SchemaProjector::new(config).build_operation(controller, &method);

    if check_examples {
        let failures = validate_operation_examples(&operation);
        if !failures.is_empty() {
            eprintln!("Example validation failed:");
            let mut code = 1;
            for (response, error) in failures {
                eprintln!("  response {}: {}", response, error);
                if let ValidateError::Invalid { errors } = &error {
                    for e in errors {
                        eprintln!("    {}", e);
                    }
                }
                code = code.max(error.exit_code() as u8);
            }
            return Err(code);
        }
    }

    write_output(&operation, output)
}

fn write_output<T: Serialize>(value: &T, output: &OutputArgs) -> Result<(), u8> {
    let json_output = if output.pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(|e| {
        eprintln!("Error serializing output: {}", e);
        2u8
    })?;

    match &output.output {
        Some(path) => {
            std::fs::write(path, &json_output).map_err(|e| {
                eprintln!("Error writing to {}: {}", path.display(), e);
                3u8
            })?;
        }
        None => {
            println!("{}", json_output);
        }
    }

    Ok(())
}

fn run_lint(
    path: &Path,
    format: &str,
    strict: bool,
    quiet: bool,
    projection: &ProjectionArgs,
) -> Result<(), u8> {
    if !path.exists() {
        eprintln!("Error: path not found: {}", path.display());
        return Err(2);
    }

    let config = projection.resolve()?;
    let result = lint(path, strict, &config);

    if format == "json" {
        let rendered = serde_json::to_string_pretty(&result).map_err(|e| {
            eprintln!("Error serializing output: {}", e);
            2u8
        })?;
        println!("{}", rendered);
    } else {
        if !quiet {
            println!("Linting {} ...\n", path.display());
        }

        for file_result in &result.results {
            let status_icon = match file_result.status {
                FileStatus::Ok => "\x1b[32m✓\x1b[0m",
                FileStatus::Warning => "\x1b[33m⚠\x1b[0m",
                FileStatus::Error => "\x1b[31m✗\x1b[0m",
            };

            if !quiet || file_result.status != FileStatus::Ok {
                println!("  {} {}", status_icon, file_result.file.display());
            }

            for diag in &file_result.diagnostics {
                let (color, label) = match diag.severity {
                    Severity::Error => ("\x1b[31m", "error"),
                    Severity::Warning => ("\x1b[33m", "warning"),
                };
                if !quiet || diag.severity == Severity::Error {
                    println!(
                        "    {}{}[{}]\x1b[0m: {} - {}",
                        color, label, diag.code, diag.path, diag.message
                    );
                }
            }
        }

        println!();
        if result.is_ok() && (!strict || result.warnings == 0) {
            println!(
                "\x1b[32m✓ {} files checked, all passed\x1b[0m",
                result.files_checked
            );
        } else {
            println!(
                "\x1b[31m✗ {} files checked: {} passed, {} failed ({} errors, {} warnings)\x1b[0m",
                result.files_checked, result.passed, result.failed, result.errors, result.warnings
            );
        }
    }

    if result.is_ok() && (!strict || result.warnings == 0) {
        Ok(())
    } else {
        Err(1)
    }
}
