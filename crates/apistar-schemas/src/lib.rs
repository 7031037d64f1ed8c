//! API Star Schemas - schema kinds, validation adapter, and diagnostics
//!
//! This crate is the validation boundary of the `apistar` tool. It
//! resolves the base syntax of an input document (JSON or YAML), parses
//! it, validates it against the embedded schema document for the
//! requested kind, and reports failures as ordered, positioned
//! [`Diagnostic`]s.
//!
//! ## Quick Start
//!
//! ```rust
//! use apistar_schemas::{validate, SchemaKind, ValidationOutcome};
//!
//! let content = br#"{"openapi": "3.0.0", "info": {"title": "Pets", "version": "1.0"}, "paths": {}}"#;
//!
//! match validate(content, SchemaKind::OpenApi, None).unwrap() {
//!     ValidationOutcome::Success(_) => println!("valid"),
//!     ValidationOutcome::Failure(diagnostic) => println!("{}", diagnostic.summary),
//! }
//! ```
//!
//! Copyright (c) 2025 API Star Team
//! Licensed under the Apache-2.0 license

pub mod diagnostics;
pub mod format;
pub mod position;
pub mod validate;

pub use diagnostics::{Diagnostic, Message, PathIndex, PathSegment, Position};
pub use format::{resolve_base_format, BaseFormat, SchemaKind};
pub use position::SourceLocator;
pub use validate::{validate, Error, ValidationOutcome};
