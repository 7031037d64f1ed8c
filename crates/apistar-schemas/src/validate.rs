//! Validation adapter over the JSON/YAML parsers and the JSON Schema engine
//!
//! Folds the two recoverable failure categories (syntax-level parse
//! failure, semantic schema failure) into a positioned [`Diagnostic`];
//! everything else is a fatal [`Error`]. Validation is a pure computation
//! over the input bytes: identical arguments produce identical outcomes.
//!
//! Copyright (c) 2025 API Star Team
//! Licensed under the Apache-2.0 license

use crate::diagnostics::{Diagnostic, Message, PathIndex, PathSegment, Position};
use crate::format::{BaseFormat, SchemaKind};
use crate::position::SourceLocator;
use jsonschema::error::ValidationErrorKind;
use serde_json::Value;

const CONFIG_SCHEMA: &str = include_str!("../../../schemas/config.schema.json");
const JSONSCHEMA_SCHEMA: &str = include_str!("../../../schemas/jsonschema.schema.json");
const OPENAPI_SCHEMA: &str = include_str!("../../../schemas/openapi-3.0.schema.json");
const SWAGGER_SCHEMA: &str = include_str!("../../../schemas/swagger-2.0.schema.json");

/// The outcome of one validation attempt, returned by value so callers
/// must handle both branches.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    Success(Value),
    Failure(Diagnostic),
}

impl ValidationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ValidationOutcome::Success(_))
    }
}

/// Fatal adapter failures. These are never folded into a diagnostic.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("embedded schema for kind '{kind}' is not valid JSON: {reason}")]
    SchemaLoad { kind: SchemaKind, reason: String },

    #[error("embedded schema for kind '{kind}' failed to compile: {reason}")]
    SchemaCompile { kind: SchemaKind, reason: String },
}

/// Result type alias for adapter operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Validate raw document bytes against a schema kind.
///
/// Parse failures and schema violations come back as
/// [`ValidationOutcome::Failure`]; the outer `Result` only carries fatal
/// failures of the adapter itself.
pub fn validate(
    content: &[u8],
    kind: SchemaKind,
    base_format: Option<BaseFormat>,
) -> Result<ValidationOutcome> {
    let declared = parse_syntax(kind, base_format);
    let text = match std::str::from_utf8(content) {
        Ok(text) => text,
        Err(err) => {
            return Ok(ValidationOutcome::Failure(encoding_diagnostic(
                content, &err, declared, kind,
            )))
        }
    };

    let (value, syntax) = match parse(text, declared) {
        Ok(parsed) => parsed,
        Err(diagnostic) => return Ok(ValidationOutcome::Failure(diagnostic)),
    };

    let Some(validator) = schema_validator(kind)? else {
        return Ok(ValidationOutcome::Success(value));
    };

    let locator = SourceLocator::new(text, syntax);
    let messages = semantic_messages(&validator, &value, &locator);
    if messages.is_empty() {
        Ok(ValidationOutcome::Success(value))
    } else {
        Ok(ValidationOutcome::Failure(Diagnostic::new(
            messages,
            kind.failure_summary(),
        )))
    }
}

/// The syntax the parse step must use. The `json` and `yaml` kinds pin
/// their own syntax; the schema kinds follow the declared base format,
/// or auto-detect when it is absent.
fn parse_syntax(kind: SchemaKind, base_format: Option<BaseFormat>) -> Option<BaseFormat> {
    match kind {
        SchemaKind::Json => Some(BaseFormat::Json),
        SchemaKind::Yaml => Some(BaseFormat::Yaml),
        _ => base_format,
    }
}

fn parse(
    text: &str,
    syntax: Option<BaseFormat>,
) -> std::result::Result<(Value, BaseFormat), Diagnostic> {
    match syntax {
        Some(BaseFormat::Json) => parse_json(text).map(|value| (value, BaseFormat::Json)),
        Some(BaseFormat::Yaml) => parse_yaml(text).map(|value| (value, BaseFormat::Yaml)),
        None => {
            if let Ok(value) = parse_json(text) {
                return Ok((value, BaseFormat::Json));
            }
            if let Ok(value) = parse_yaml(text) {
                return Ok((value, BaseFormat::Yaml));
            }
            // Both parsers rejected the document; report in the syntax
            // it most resembles.
            match sniff(text) {
                BaseFormat::Json => parse_json(text).map(|value| (value, BaseFormat::Json)),
                BaseFormat::Yaml => parse_yaml(text).map(|value| (value, BaseFormat::Yaml)),
            }
        }
    }
}

fn sniff(text: &str) -> BaseFormat {
    match text.trim_start().chars().next() {
        Some('{') | Some('[') | Some('"') => BaseFormat::Json,
        _ => BaseFormat::Yaml,
    }
}

fn parse_json(text: &str) -> std::result::Result<Value, Diagnostic> {
    serde_json::from_str(text).map_err(|err| {
        let position = Position::new(err.line(), err.column());
        Diagnostic::new(
            vec![Message::new(
                strip_location_suffix(&err.to_string()),
                "parse",
                position,
                PathIndex::root(),
            )],
            SchemaKind::Json.failure_summary(),
        )
    })
}

fn parse_yaml(text: &str) -> std::result::Result<Value, Diagnostic> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(text).map_err(yaml_diagnostic)?;
    // Re-express as a JSON value for uniform downstream handling.
    serde_json::to_value(yaml).map_err(|err| {
        Diagnostic::new(
            vec![Message::new(
                format!("document cannot be represented as JSON: {}", err),
                "parse",
                Position::start(),
                PathIndex::root(),
            )],
            SchemaKind::Yaml.failure_summary(),
        )
    })
}

fn yaml_diagnostic(err: serde_yaml::Error) -> Diagnostic {
    let position = err
        .location()
        .map(|loc| Position::new(loc.line(), loc.column()))
        .unwrap_or_else(Position::start);
    Diagnostic::new(
        vec![Message::new(
            strip_location_suffix(&err.to_string()),
            "parse",
            position,
            PathIndex::root(),
        )],
        SchemaKind::Yaml.failure_summary(),
    )
}

fn encoding_diagnostic(
    content: &[u8],
    err: &std::str::Utf8Error,
    declared: Option<BaseFormat>,
    kind: SchemaKind,
) -> Diagnostic {
    let prefix = std::str::from_utf8(&content[..err.valid_up_to()]).unwrap_or("");
    let position = end_position(prefix);
    let summary = match declared {
        Some(BaseFormat::Json) => SchemaKind::Json.failure_summary(),
        Some(BaseFormat::Yaml) => SchemaKind::Yaml.failure_summary(),
        None => kind.failure_summary(),
    };
    Diagnostic::new(
        vec![Message::new(
            "document is not valid UTF-8",
            "parse",
            position,
            PathIndex::root(),
        )],
        summary,
    )
}

fn end_position(prefix: &str) -> Position {
    let mut line_no = 1;
    let mut column_no = 1;
    for ch in prefix.chars() {
        if ch == '\n' {
            line_no += 1;
            column_no = 1;
        } else {
            column_no += 1;
        }
    }
    Position::new(line_no, column_no)
}

/// serde errors append " at line L column C"; the renderer prints the
/// position itself, so the suffix is dropped from the message text.
fn strip_location_suffix(message: &str) -> String {
    match message.rfind(" at line ") {
        Some(cut) => message[..cut].to_string(),
        None => message.to_string(),
    }
}

/// The embedded schema document for a kind, or `None` for the two
/// syntax-only kinds.
fn embedded_schema(kind: SchemaKind) -> Option<&'static str> {
    match kind {
        SchemaKind::Json | SchemaKind::Yaml => None,
        SchemaKind::Config => Some(CONFIG_SCHEMA),
        SchemaKind::JsonSchema => Some(JSONSCHEMA_SCHEMA),
        SchemaKind::OpenApi => Some(OPENAPI_SCHEMA),
        SchemaKind::Swagger => Some(SWAGGER_SCHEMA),
    }
}

fn schema_validator(kind: SchemaKind) -> Result<Option<jsonschema::Validator>> {
    let Some(source) = embedded_schema(kind) else {
        return Ok(None);
    };
    let schema: Value = serde_json::from_str(source).map_err(|err| Error::SchemaLoad {
        kind,
        reason: err.to_string(),
    })?;
    let validator = jsonschema::options()
        .with_draft(jsonschema::Draft::Draft7)
        .should_validate_formats(true)
        .build(&schema)
        .map_err(|err| Error::SchemaCompile {
            kind,
            reason: err.to_string(),
        })?;
    Ok(Some(validator))
}

fn semantic_messages(
    validator: &jsonschema::Validator,
    value: &Value,
    locator: &SourceLocator<'_>,
) -> Vec<Message> {
    let mut messages = Vec::new();
    for error in validator.iter_errors(value) {
        let mut index = PathIndex::from_json_pointer(&error.instance_path.to_string());
        if let ValidationErrorKind::Required { property } = &error.kind {
            // Point at the missing child itself; the compact renderer
            // trims back to the parent.
            if let Some(name) = property.as_str() {
                index.push(PathSegment::Key(name.to_string()));
            }
        }
        let position = locator.locate(&index);
        messages.push(Message::new(
            error.to_string(),
            error_code(&error.kind),
            position,
            index,
        ));
    }
    messages
}

/// Categorical tag for a schema violation, mirroring the keyword that
/// produced it.
fn error_code(kind: &ValidationErrorKind) -> &'static str {
    match kind {
        ValidationErrorKind::Required { .. } => "required",
        ValidationErrorKind::Type { .. } => "type",
        ValidationErrorKind::Format { .. } => "format",
        ValidationErrorKind::Enum { .. } => "enum",
        ValidationErrorKind::Pattern { .. } => "pattern",
        ValidationErrorKind::AdditionalProperties { .. } => "additionalProperties",
        ValidationErrorKind::Minimum { .. } => "minimum",
        ValidationErrorKind::Maximum { .. } => "maximum",
        ValidationErrorKind::MinLength { .. } => "minLength",
        ValidationErrorKind::MaxLength { .. } => "maxLength",
        ValidationErrorKind::MinItems { .. } => "minItems",
        ValidationErrorKind::MaxItems { .. } => "maxItems",
        ValidationErrorKind::MinProperties { .. } => "minProperties",
        _ => "schema",
    }
}
