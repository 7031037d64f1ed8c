//! Static documentation site assembly
//!
//! Copyright (c) 2025 API Star Team
//! Licensed under the Apache-2.0 license

use crate::decode::{decode, DocKind};
use crate::render::{render_index, RenderContext};
use crate::DocsError;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Default output directory, relative to the working directory.
pub const DEFAULT_SITE_DIR: &str = "site";

/// Subdirectory the bundled assets are copied into.
pub const ASSET_SUBDIR: &str = "apistar";

/// The bundled static-asset tree, embedded in the binary.
const STATIC_ASSETS: &[(&str, &str)] = &[
    ("css/base.css", include_str!("../static/css/base.css")),
    ("css/docs.css", include_str!("../static/css/docs.css")),
    ("js/base.js", include_str!("../static/js/base.js")),
];

/// Builds the static site for a validated document.
pub struct SiteBuilder {
    directory: PathBuf,
}

impl SiteBuilder {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Decode, render, and write the site. Returns the path of the
    /// written index page.
    ///
    /// The target directory is created when absent. The asset
    /// subdirectory must not already exist: a second build against the
    /// same target fails with [`DocsError::AssetDirExists`] rather than
    /// silently overwriting.
    pub fn build(&self, kind: DocKind, value: &Value) -> Result<PathBuf, DocsError> {
        let document = decode(kind, value)?;
        let context = RenderContext::new(&document);
        let output_text = render_index(&context)?;

        fs::create_dir_all(&self.directory)?;
        let index_path = self.directory.join("index.html");
        fs::write(&index_path, output_text)?;

        self.copy_assets()?;
        Ok(index_path)
    }

    fn copy_assets(&self) -> Result<(), DocsError> {
        let destination = self.directory.join(ASSET_SUBDIR);
        if destination.exists() {
            return Err(DocsError::AssetDirExists { path: destination });
        }
        for (relative, contents) in STATIC_ASSETS {
            let target = destination.join(relative);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&target, contents)?;
        }
        Ok(())
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}
