//! API Star Docs - static documentation builder for OpenAPI and Swagger
//!
//! Decodes a generically-validated schema value into a strongly-shaped
//! [`Document`], renders it through the bundled Tera template, and
//! assembles the output site next to the bundled static assets.
//!
//! Copyright (c) 2025 API Star Team
//! Licensed under the Apache-2.0 license

pub mod decode;
pub mod document;
pub mod render;
pub mod site;

pub use decode::{decode, DocKind};
pub use document::{Document, Operation, Parameter, Section};
pub use render::{identity_url, render_index, RenderContext, SUPPORTED_LANGS};
pub use site::{SiteBuilder, ASSET_SUBDIR, DEFAULT_SITE_DIR};

use std::path::PathBuf;

/// Failures of the documentation build pipeline.
#[derive(Debug, thiserror::Error)]
pub enum DocsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    #[error("failed to decode document: {0}")]
    Decode(String),

    #[error(
        "static asset directory already exists: {} (remove it and build again)",
        path.display()
    )]
    AssetDirExists { path: PathBuf },
}
