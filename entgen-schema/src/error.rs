use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for entgen-schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass --schema with the path to a schema snapshot"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema snapshot")]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("unknown table '{name}'")]
    #[diagnostic(help("the table is not part of the schema snapshot"))]
    UnknownTable { name: String },

    #[error("schema introspection failed: {message}")]
    Introspection { message: String },
}

impl Error {
    /// Create a parse error from a serde_json error, locating the span
    /// inside the snapshot text.
    pub fn parse(src: &str, filename: &str, source: serde_json::Error) -> Box<Self> {
        let offset = offset_of(src, source.line(), source.column());
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span: offset.map(|start| SourceSpan::from((start, 1))),
            message: source.to_string(),
        })
    }
}

/// Byte offset for a 1-based line/column pair.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let mut offset = 0;
    for (index, text) in src.split('\n').enumerate() {
        if index + 1 == line {
            return Some(offset + column.saturating_sub(1).min(text.len()));
        }
        offset += text.len() + 1;
    }
    None
}
