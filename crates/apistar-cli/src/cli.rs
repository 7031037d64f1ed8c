//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API. The two
//! subcommands accept different schema-kind domains, enforced with two
//! distinct value enums so the restriction lives at the argument boundary.

use apistar_docs::DocKind;
use apistar_schemas::{BaseFormat, SchemaKind};
use clap::{Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;
use std::path::PathBuf;

/// API Star CLI - API schema validation and documentation
///
/// Validates JSON/YAML, JSON Schema, OpenAPI, and Swagger documents, and
/// builds a static documentation site from a validated OpenAPI or Swagger
/// schema.
#[derive(Parser, Debug)]
#[command(
    name = "apistar",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "APISTAR_CONFIG")]
    pub config: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate an API schema document
    Validate(ValidateArgs),

    /// Build a static documentation site from an OpenAPI or Swagger schema
    Docs(DocsArgs),
}

/// Arguments for the validate command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to the schema document (JSON or YAML)
    #[arg(value_name = "SCHEMA")]
    pub schema: PathBuf,

    /// Schema kind to validate against
    #[arg(long, value_enum)]
    pub format: ValidateFormat,

    /// Base syntax of the document; derived from the filename extension
    /// when omitted
    #[arg(long, value_enum)]
    pub base_format: Option<BaseFormatArg>,

    /// Annotated-source diagnostic output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Arguments for the docs command
#[derive(Parser, Debug)]
pub struct DocsArgs {
    /// Path to the schema document (JSON or YAML)
    #[arg(value_name = "SCHEMA")]
    pub schema: PathBuf,

    /// Schema kind to validate against
    #[arg(long, value_enum)]
    pub format: DocsFormat,

    /// Base syntax of the document; derived from the filename extension
    /// when omitted
    #[arg(long, value_enum)]
    pub base_format: Option<BaseFormatArg>,

    /// Annotated-source diagnostic output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Schema kinds the validate command accepts
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ValidateFormat {
    Json,
    Yaml,
    Config,
    Jsonschema,
    Openapi,
    Swagger,
}

/// Schema kinds documentation can be built from
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum DocsFormat {
    Openapi,
    Swagger,
}

/// Base syntax options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BaseFormatArg {
    Json,
    Yaml,
}

impl From<ValidateFormat> for SchemaKind {
    fn from(format: ValidateFormat) -> Self {
        match format {
            ValidateFormat::Json => SchemaKind::Json,
            ValidateFormat::Yaml => SchemaKind::Yaml,
            ValidateFormat::Config => SchemaKind::Config,
            ValidateFormat::Jsonschema => SchemaKind::JsonSchema,
            ValidateFormat::Openapi => SchemaKind::OpenApi,
            ValidateFormat::Swagger => SchemaKind::Swagger,
        }
    }
}

impl From<DocsFormat> for SchemaKind {
    fn from(format: DocsFormat) -> Self {
        match format {
            DocsFormat::Openapi => SchemaKind::OpenApi,
            DocsFormat::Swagger => SchemaKind::Swagger,
        }
    }
}

impl DocsFormat {
    /// The decoder selected for this format.
    pub fn doc_kind(self) -> DocKind {
        match self {
            DocsFormat::Openapi => DocKind::OpenApi,
            DocsFormat::Swagger => DocKind::Swagger,
        }
    }
}

impl From<BaseFormatArg> for BaseFormat {
    fn from(arg: BaseFormatArg) -> Self {
        match arg {
            BaseFormatArg::Json => BaseFormat::Json,
            BaseFormatArg::Yaml => BaseFormat::Yaml,
        }
    }
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}
