//! Error types for reading, converting and writing gradients.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::source::EncodingError;

/// What is wrong with a `Point` attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    Missing,
    NotANumber(String),
    NotFinite(String),
}

/// A `Point` element whose attributes cannot be turned into a stop.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    /// 1-based index of the point in document order.
    pub point: usize,
    pub attribute: &'static str,
    pub kind: ParseErrorKind,
    /// 1-based source line of the `Point` element.
    pub line: u32,
    /// 1-based source column of the `Point` element.
    pub col: u32,
}

impl ParseError {
    pub(crate) fn new(
        point: usize,
        attribute: &'static str,
        kind: ParseErrorKind,
        line: u32,
        col: u32,
    ) -> Self {
        Self { point, attribute, kind, line, col }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point #{} at {}:{}: attribute `{}` ", self.point, self.line, self.col, self.attribute)?;
        match &self.kind {
            ParseErrorKind::Missing => f.write_str("is missing"),
            ParseErrorKind::NotANumber(raw) => write!(f, "is not a decimal number: {raw:?}"),
            ParseErrorKind::NotFinite(raw) => write!(f, "is not a finite number: {raw:?}"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Errors from turning a source document into a style document.
#[derive(Debug, Error)]
pub enum TranscodeError {
    #[error("cannot decode input")]
    Encoding(#[from] EncodingError),

    #[error("input is not well-formed XML")]
    Document(#[from] roxmltree::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("gradient has no Point elements; at least one stop is required")]
    EmptyGradient,
}

/// Errors from a full file-to-file conversion.
///
/// Every variant is raised before the output file is created.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("cannot read {path}")]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no usable ramp name in {path}")]
    InvalidPath { path: PathBuf },

    #[error("failed to convert {path}")]
    Transcode {
        path: PathBuf,
        #[source]
        source: TranscodeError,
    },

    #[error("cannot write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
