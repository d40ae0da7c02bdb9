use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceOffset, SourceSpan};
use schemata_core::UnknownType;
use thiserror::Error;

/// Result type for schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds the document text and the filename it was read from, so parse
/// failures can point at the offending location.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a malformed schema error from a JSON error.
    pub fn malformed(&self, source: serde_json::Error) -> Box<Error> {
        // serde_json reports line 0 when it has no position
        let span = (source.line() > 0).then(|| {
            let offset = SourceOffset::from_location(&self.src, source.line(), source.column());
            SourceSpan::new(offset, 0)
        });
        Box::new(Error::MalformedSchema {
            src: self.named_source(),
            span,
            source,
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("schema document not found at '{path}'")]
    #[diagnostic(
        code(schemata::not_found),
        help("documents are looked up at <root>/<version>/<name>.json, with '.' and '_' in the version read as directory separators")
    )]
    NotFound { path: PathBuf },

    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed schema document")]
    #[diagnostic(code(schemata::malformed_schema))]
    MalformedSchema {
        #[source_code]
        src: NamedSource<String>,
        #[label("{source}")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid schema version: {message}")]
    #[diagnostic(
        code(schemata::invalid_version),
        help("versions look like '7.4' or '7_4'")
    )]
    InvalidVersion { message: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    UnknownType(#[from] UnknownType),

    #[error("failed to serialize {what}")]
    Serialize {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an error for a failed read of `path`, telling a missing document
    /// apart from other I/O failures
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Box::new(Error::NotFound { path })
        } else {
            Box::new(Error::Io { path, source })
        }
    }

    /// Create a serialization error for an artifact
    pub fn serialize(what: &'static str, source: serde_json::Error) -> Box<Self> {
        Box::new(Error::Serialize { what, source })
    }

    /// Create an invalid version error
    pub fn invalid_version(message: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidVersion {
            message: message.into(),
        })
    }
}

impl From<UnknownType> for Box<Error> {
    fn from(err: UnknownType) -> Self {
        Box::new(Error::UnknownType(err))
    }
}
