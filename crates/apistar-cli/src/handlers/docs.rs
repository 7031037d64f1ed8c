//! Docs command handler

use crate::cli::DocsArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use crate::render::DiagnosticRenderer;
use apistar_docs::SiteBuilder;
use apistar_schemas::{resolve_base_format, validate, SchemaKind, ValidationOutcome};
use std::fs;
use tracing::{debug, info, instrument, warn};

/// Handle the docs command
#[instrument(skip(config, output), fields(file = %args.schema.display(), format = ?args.format))]
pub fn handle_docs(args: DocsArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    info!("Starting documentation build");

    if !args.schema.exists() {
        return Err(Error::FileNotFound {
            path: args.schema.clone(),
        });
    }

    let content = fs::read(&args.schema)?;
    debug!("File read successfully, {} bytes", content.len());

    let kind: SchemaKind = args.format.into();
    let base_format = resolve_base_format(args.base_format.map(Into::into), &args.schema);
    debug!(?base_format, "Resolved base format");

    let value = match validate(&content, kind, base_format)? {
        ValidationOutcome::Success(value) => value,
        ValidationOutcome::Failure(diagnostic) => {
            warn!(
                messages = diagnostic.messages.len(),
                "Validation failed, nothing written"
            );
            let source = String::from_utf8_lossy(&content);
            let renderer = DiagnosticRenderer::new(output.use_color());
            return renderer.render(&diagnostic, &source, args.verbose, output);
        }
    };

    let builder = SiteBuilder::new(&config.docs.site_dir);
    let index_path = builder.build(args.format.doc_kind(), &value)?;
    info!(path = %index_path.display(), "Site written");

    output.writeln(&format!("Documentation built at {}", index_path.display()))
}
