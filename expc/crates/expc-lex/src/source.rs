//! Source acquisition.
//!
//! The scanner works on a fully buffered `&str`. This module produces one
//! from a string, a byte buffer, a reader, or a file path. Directories are
//! rejected with [`SourceError::Unsupported`].

use std::fs::{self, File};
use std::io::{self, BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::error::{LexError, SourceError, SourceResult};
use crate::lexer::tokenize;
use crate::token::TokenStream;

/// How files are read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    /// Read the whole file in one call instead of streaming it through a
    /// buffered reader. Both produce the same text.
    pub prefetch: bool,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self { prefetch: true }
    }
}

/// A fully buffered source text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceText {
    text: String,
}

impl SourceText {
    /// Decodes bytes as UTF-8. Invalid sequences become U+FFFD.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            text: String::from_utf8_lossy(bytes).into_owned(),
        }
    }

    /// Reads everything from `reader`.
    pub fn from_reader<R: Read>(mut reader: R) -> SourceResult<Self> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|source| SourceError::Read { path: None, source })?;
        Ok(Self::from_bytes(&bytes))
    }

    /// Loads a file.
    ///
    /// # Errors
    ///
    /// [`SourceError::Unsupported`] if `path` is a directory,
    /// [`SourceError::Read`] if it cannot be inspected or read.
    pub fn from_path(path: impl AsRef<Path>, options: &SourceOptions) -> SourceResult<Self> {
        let path = path.as_ref();
        let read_error = |source: io::Error| SourceError::Read {
            path: Some(path.to_path_buf()),
            source,
        };

        let metadata = fs::metadata(path).map_err(read_error)?;
        if metadata.is_dir() {
            return Err(SourceError::Unsupported {
                path: path.to_path_buf(),
            });
        }

        let source = if options.prefetch {
            Self::from_bytes(&fs::read(path).map_err(read_error)?)
        } else {
            let file = File::open(path).map_err(read_error)?;
            Self::from_reader(BufReader::new(file)).map_err(|err| match err {
                SourceError::Read { source, .. } => read_error(source),
                other => other,
            })?
        };

        debug!(
            path = %path.display(),
            bytes = source.len(),
            prefetch = options.prefetch,
            "loaded source"
        );
        Ok(source)
    }

    /// The text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns true for an empty source.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Tokenizes this source. See [`tokenize`].
    pub fn tokenize(&self) -> (TokenStream, Option<LexError>) {
        tokenize(&self.text)
    }

    /// Consumes the source, returning the text.
    pub fn into_string(self) -> String {
        self.text
    }
}

impl From<String> for SourceText {
    fn from(text: String) -> Self {
        Self { text }
    }
}

impl From<&str> for SourceText {
    fn from(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl AsRef<str> for SourceText {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
