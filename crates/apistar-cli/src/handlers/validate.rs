//! Validate command handler

use crate::cli::ValidateArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use crate::render::DiagnosticRenderer;
use apistar_schemas::{resolve_base_format, validate, SchemaKind, ValidationOutcome};
use std::fs;
use tracing::{debug, info, instrument, warn};

/// Handle the validate command
#[instrument(skip(_config, output), fields(file = %args.schema.display(), format = ?args.format))]
pub fn handle_validate(
    args: ValidateArgs,
    _config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    info!("Starting validation");

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

    let renderer = DiagnosticRenderer::new(output.use_color());
    match validate(&content, kind, base_format)? {
        ValidationOutcome::Success(_) => {
            info!("Validation succeeded");
            renderer.render_success(kind, output)
        }
        ValidationOutcome::Failure(diagnostic) => {
            warn!(
                messages = diagnostic.messages.len(),
                "Validation failed"
            );
            let source = String::from_utf8_lossy(&content);
            // Rendering the report is the whole of the failure path; the
            // command's exit status does not distinguish it from success.
            renderer.render(&diagnostic, &source, args.verbose, output)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ValidateFormat;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn run(args: ValidateArgs) -> (Result<()>, String) {
        let buffer = SharedBuffer::default();
        let mut output = OutputWriter::with_writer(false, Box::new(buffer.clone()));
        let result = handle_validate(args, &Config::default(), &mut output);
        (result, buffer.contents())
    }

    fn args(path: &std::path::Path, format: ValidateFormat, verbose: bool) -> ValidateArgs {
        ValidateArgs {
            schema: path.to_path_buf(),
            format,
            base_format: None,
            verbose,
        }
    }

    #[test]
    fn test_valid_json_prints_success_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        fs::write(&path, r#"{"a": 1}"#).unwrap();

        let (result, printed) = run(args(&path, ValidateFormat::Json, false));
        assert!(result.is_ok());
        assert_eq!(printed, "✓ Valid JSON\n");
    }

    #[test]
    fn test_invalid_json_renders_compact_report_and_returns_ok() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        fs::write(&path, "{\n  \"a\": 1,\n}").unwrap();

        let (result, printed) = run(args(&path, ValidateFormat::Json, false));
        assert!(result.is_ok());
        assert!(printed.starts_with("* "));
        assert!(printed.ends_with("✘ Invalid JSON.\n"));
    }

    #[test]
    fn test_invalid_openapi_verbose_report_echoes_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        fs::write(
            &path,
            "{\n  \"openapi\": \"3.0.0\",\n  \"info\": {\"title\": \"T\"},\n  \"paths\": {}\n}",
        )
        .unwrap();

        let (result, printed) = run(args(&path, ValidateFormat::Openapi, true));
        assert!(result.is_ok());
        assert!(printed.contains("\"openapi\": \"3.0.0\""));
        assert!(printed.contains("^ "));
        assert!(printed.ends_with("✘ Invalid OpenAPI schema.\n"));
    }

    #[test]
    fn test_missing_file_is_a_fatal_error() {
        let (result, printed) = run(args(
            std::path::Path::new("no/such/file.json"),
            ValidateFormat::Json,
            false,
        ));
        assert!(matches!(result, Err(Error::FileNotFound { .. })));
        assert!(printed.is_empty());
    }
}
