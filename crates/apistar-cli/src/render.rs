//! Diagnostic rendering in compact and verbose styles
//!
//! Consumes one [`Diagnostic`] plus the original source text and produces
//! the user-facing report. Compact style lists one line per message;
//! verbose style re-emits the source with caret annotations inserted
//! under the offending lines. Both close with the diagnostic's summary
//! line. Color is explicit renderer state, threaded in from the CLI.

use crate::error::Result;
use crate::output::OutputWriter;
use apistar_schemas::{Diagnostic, Message, SchemaKind};
use colored::Colorize;

/// Marker glyph preceding a failure summary.
const FAILURE_MARKER: &str = "✘ ";

/// Marker glyph preceding a success summary.
const SUCCESS_MARKER: &str = "✓ ";

/// Renders diagnostics and success summaries.
pub struct DiagnosticRenderer {
    use_color: bool,
}

impl DiagnosticRenderer {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    /// Render a diagnostic in the selected style and write it out.
    pub fn render(
        &self,
        diagnostic: &Diagnostic,
        source: &str,
        verbose: bool,
        output: &mut OutputWriter,
    ) -> Result<()> {
        let report = if verbose {
            self.render_verbose(diagnostic, source)
        } else {
            self.render_compact(diagnostic)
        };
        for line in report {
            output.writeln(&line)?;
        }
        Ok(())
    }

    /// Render the success line for a schema kind and write it out.
    pub fn render_success(&self, kind: SchemaKind, output: &mut OutputWriter) -> Result<()> {
        output.writeln(&self.success_line(kind))
    }

    /// Compact style: one line per message, in validator order, then the
    /// summary.
    pub fn render_compact(&self, diagnostic: &Diagnostic) -> Vec<String> {
        let mut lines = Vec::with_capacity(diagnostic.messages.len() + 1);
        for message in &diagnostic.messages {
            lines.push(compact_line(message));
        }
        lines.push(self.failure_line(diagnostic));
        lines
    }

    /// Verbose style: the source with annotations inserted below the
    /// offending lines, a blank line, then the summary.
    ///
    /// Messages are processed in reverse sequence order so each insertion
    /// leaves the line numbers of the messages still to be processed
    /// untouched.
    pub fn render_verbose(&self, diagnostic: &Diagnostic, source: &str) -> Vec<String> {
        let mut lines: Vec<String> = source.lines().map(str::to_string).collect();
        for message in diagnostic.messages.iter().rev() {
            let mut annotation = " ".repeat(message.position.column_no.saturating_sub(1));
            annotation.push_str("^ ");
            annotation.push_str(&message.text);
            let annotation = if self.use_color {
                annotation.red().to_string()
            } else {
                annotation
            };
            // An out-of-range line lands at the end of the document.
            let at = message.position.line_no.min(lines.len());
            lines.insert(at, annotation);
        }
        lines.push(String::new());
        lines.push(self.failure_line(diagnostic));
        lines
    }

    /// The success summary for a schema kind.
    pub fn success_line(&self, kind: SchemaKind) -> String {
        let summary = match kind {
            SchemaKind::Json => "Valid JSON",
            SchemaKind::Yaml => "Valid YAML",
            SchemaKind::Config => "Valid APIStar config.",
            SchemaKind::JsonSchema => "Valid JSONSchema document.",
            SchemaKind::OpenApi => "Valid OpenAPI schema.",
            SchemaKind::Swagger => "Valid Swagger schema.",
        };
        let marker = if self.use_color {
            SUCCESS_MARKER.green().to_string()
        } else {
            SUCCESS_MARKER.to_string()
        };
        format!("{}{}", marker, summary)
    }

    fn failure_line(&self, diagnostic: &Diagnostic) -> String {
        let marker = if self.use_color {
            FAILURE_MARKER.red().to_string()
        } else {
            FAILURE_MARKER.to_string()
        };
        format!("{}{}", marker, diagnostic.summary)
    }
}

/// One compact-style line for a message.
///
/// A "required property missing" message's index points at the missing
/// child; the parent is the more useful anchor, so the last segment is
/// dropped for display.
fn compact_line(message: &Message) -> String {
    let display_index = if message.code == "required" {
        message.index.parent()
    } else {
        message.index.clone()
    };
    let position = &message.position;
    if display_index.is_empty() {
        format!(
            "* {} (At line {}, column {}.)",
            message.text, position.line_no, position.column_no
        )
    } else {
        format!(
            "* {} (At {}, line {}, column {}.)",
            message.text, display_index, position.line_no, position.column_no
        )
    }
}
