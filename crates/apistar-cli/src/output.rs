//! Output writing utilities
//!
//! A thin writer abstraction over stdout so handlers and the diagnostic
//! renderer can be exercised against an in-memory buffer in tests.

use crate::error::Result;
use colored::Colorize;
use std::io::{self, Write};

/// Writer for user-facing output with explicit color state.
pub struct OutputWriter {
    use_color: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a writer over stdout.
    pub fn new(use_color: bool) -> Self {
        Self {
            use_color,
            writer: Box::new(io::stdout()),
        }
    }

    /// Create a writer over a custom sink.
    #[allow(dead_code)]
    pub fn with_writer(use_color: bool, writer: Box<dyn Write>) -> Self {
        Self { use_color, writer }
    }

    /// Whether styled output is enabled.
    pub fn use_color(&self) -> bool {
        self.use_color
    }

    /// Write a line of output.
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message.
    #[allow(dead_code)]
    pub fn info(&mut self, message: &str) -> Result<()> {
        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(message)
        }
    }
}
