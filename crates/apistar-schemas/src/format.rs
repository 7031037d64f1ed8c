//! Base-syntax resolution and schema-kind definitions
//!
//! Copyright (c) 2025 API Star Team
//! Licensed under the Apache-2.0 license

use std::fmt;
use std::path::Path;

/// The textual encoding of a document, independent of its semantic schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseFormat {
    Json,
    Yaml,
}

impl BaseFormat {
    /// Detect the base syntax from a filename extension. Returns `None`
    /// for unknown or missing extensions so the validator can auto-detect.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension().and_then(|ext| ext.to_str())?;
        match extension.to_ascii_lowercase().as_str() {
            "json" => Some(BaseFormat::Json),
            "yml" | "yaml" => Some(BaseFormat::Yaml),
            _ => None,
        }
    }

    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            BaseFormat::Json => &["json"],
            BaseFormat::Yaml => &["yaml", "yml"],
        }
    }
}

impl fmt::Display for BaseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaseFormat::Json => write!(f, "json"),
            BaseFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// Resolve the base syntax for an input document. A caller-declared
/// override always wins; otherwise the filename extension decides.
///
/// Pure and total: the worst case is `None`, which means "let the
/// validator auto-detect or fail".
pub fn resolve_base_format(explicit: Option<BaseFormat>, filename: &Path) -> Option<BaseFormat> {
    explicit.or_else(|| BaseFormat::from_path(filename))
}

/// The semantic contract a document is validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaKind {
    Json,
    Yaml,
    Config,
    JsonSchema,
    OpenApi,
    Swagger,
}

impl SchemaKind {
    /// The summary line carried by a failed validation's diagnostic,
    /// one per kind.
    pub fn failure_summary(&self) -> &'static str {
        match self {
            SchemaKind::Json => "Invalid JSON.",
            SchemaKind::Yaml => "Invalid YAML.",
            SchemaKind::Config => "Invalid APIStar config.",
            SchemaKind::JsonSchema => "Invalid JSONSchema document.",
            SchemaKind::OpenApi => "Invalid OpenAPI schema.",
            SchemaKind::Swagger => "Invalid Swagger schema.",
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaKind::Json => write!(f, "json"),
            SchemaKind::Yaml => write!(f, "yaml"),
            SchemaKind::Config => write!(f, "config"),
            SchemaKind::JsonSchema => write!(f, "jsonschema"),
            SchemaKind::OpenApi => write!(f, "openapi"),
            SchemaKind::Swagger => write!(f, "swagger"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_extension_detection() {
        assert_eq!(
            BaseFormat::from_path(Path::new("schema.json")),
            Some(BaseFormat::Json)
        );
        assert_eq!(
            BaseFormat::from_path(Path::new("schema.yml")),
            Some(BaseFormat::Yaml)
        );
        assert_eq!(
            BaseFormat::from_path(Path::new("schema.yaml")),
            Some(BaseFormat::Yaml)
        );
        assert_eq!(BaseFormat::from_path(Path::new("schema.txt")), None);
        assert_eq!(BaseFormat::from_path(Path::new("schema")), None);
    }

    #[test]
    fn test_extension_detection_is_case_insensitive() {
        assert_eq!(
            BaseFormat::from_path(Path::new("SCHEMA.JSON")),
            Some(BaseFormat::Json)
        );
        assert_eq!(
            BaseFormat::from_path(Path::new("Schema.Yaml")),
            Some(BaseFormat::Yaml)
        );
    }

    #[test]
    fn test_explicit_override_wins() {
        assert_eq!(
            resolve_base_format(Some(BaseFormat::Yaml), Path::new("schema.json")),
            Some(BaseFormat::Yaml)
        );
        assert_eq!(
            resolve_base_format(Some(BaseFormat::Json), Path::new("whatever.bin")),
            Some(BaseFormat::Json)
        );
    }

    #[test]
    fn test_failure_summaries_are_distinct() {
        let kinds = [
            SchemaKind::Json,
            SchemaKind::Yaml,
            SchemaKind::Config,
            SchemaKind::JsonSchema,
            SchemaKind::OpenApi,
            SchemaKind::Swagger,
        ];
        for (i, a) in kinds.iter().enumerate() {
            assert!(!a.failure_summary().is_empty());
            for b in &kinds[i + 1..] {
                assert_ne!(a.failure_summary(), b.failure_summary());
            }
        }
    }

    proptest! {
        #[test]
        fn prop_resolver_follows_extension(stem in "[a-zA-Z0-9_/.-]{0,24}") {
            let json = format!("{}name.json", stem);
            prop_assert_eq!(
                resolve_base_format(None, Path::new(&json)),
                Some(BaseFormat::Json)
            );

            let yml = format!("{}name.yml", stem);
            prop_assert_eq!(
                resolve_base_format(None, Path::new(&yml)),
                Some(BaseFormat::Yaml)
            );

            let yaml = format!("{}name.yaml", stem);
            prop_assert_eq!(
                resolve_base_format(None, Path::new(&yaml)),
                Some(BaseFormat::Yaml)
            );
        }

        #[test]
        fn prop_explicit_always_wins(stem in "[a-zA-Z0-9_/.-]{0,32}") {
            let path = format!("{}file.yaml", stem);
            prop_assert_eq!(
                resolve_base_format(Some(BaseFormat::Json), Path::new(&path)),
                Some(BaseFormat::Json)
            );
        }
    }
}
