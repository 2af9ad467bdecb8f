//! Common types and utilities for expt commands.
//!
//! This module provides shared types, constants, and utility functions
//! used across all command implementations to ensure consistency.

use std::fmt;
use std::path::Path;

use crate::error::Result;

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats for the lex command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The token stream as a JSON array
    #[default]
    Json,
    /// Token counts per kind
    Summary,
}

impl OutputFormat {
    /// Parse a format name (case-insensitive).
    ///
    /// # Returns
    /// * `Option<OutputFormat>` - The parsed format or None if invalid
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "summary" => Some(Self::Summary),
            _ => None,
        }
    }

    /// The canonical name of this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Summary => "summary",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Output
// ============================================================================

/// Write rendered output to `path`, or to stdout when no path is given.
pub fn write_output(path: Option<&Path>, rendered: &str) -> Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, rendered)?;
        },
        None => {
            use std::io::Write;
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        },
    }
    Ok(())
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when an unknown format is specified.
    pub const UNKNOWN_FORMAT: &str = "Unknown format";

    /// Error when the init target is not a directory.
    pub const TARGET_NOT_DIR: &str = "Target path is not a directory:";

    /// Error when a configuration file would be overwritten.
    pub const CONFIG_EXISTS: &str = "Configuration file already exists:";
}

// ============================================================================
// Output Messages
// ============================================================================

/// Standard output message prefixes.
pub mod output_messages {
    /// Message when a file is created.
    pub const CREATED_FILE: &str = "✅ Created file:";

    /// Message when a source is lexed.
    pub const LEXED_FILE: &str = "✅ Lexed:";

    /// Message when a lex pass stops early.
    pub const LEX_FAILED: &str = "❌ Lexing stopped:";
}
