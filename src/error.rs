//! Error enum
use std::{fmt, path::PathBuf};

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// IO error happening on a known corpus file.
    File {
        path: PathBuf,
        err: std::io::Error,
    },
    /// Source and target sides do not hold the same number of lines.
    Alignment {
        source_lines: usize,
        target_lines: usize,
    },
    /// Reconstructed WMT files do not have `segments + documents - 1` lines.
    ConversionMismatch {
        documents: usize,
        segments: usize,
        expected: usize,
        actual: usize,
    },
    InvalidDocIndex(String),
    /// A line of the document index file is not a non-negative integer.
    ParseDocIndex {
        line: usize,
        content: String,
    },
    Serde(serde_json::Error),
}

impl Error {
    /// Attach a path to an IO error.
    pub fn file(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::File {
            path: path.into(),
            err,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::File { path, err } => write!(f, "{:?}: {}", path, err),
            Error::Alignment {
                source_lines,
                target_lines,
            } => write!(
                f,
                "source/target should be aligned: {} source lines but {} target lines",
                source_lines, target_lines
            ),
            Error::ConversionMismatch {
                documents,
                segments,
                expected,
                actual,
            } => write!(
                f,
                "bad conversion: {} documents of {} segments should give {} lines, got {}",
                documents, segments, expected, actual
            ),
            Error::InvalidDocIndex(msg) => write!(f, "invalid document index: {}", msg),
            Error::ParseDocIndex { line, content } => write!(
                f,
                "document index line {} is not a segment offset: {:?}",
                line, content
            ),
            Error::Serde(e) => write!(f, "serialization error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::File { err, .. } => Some(err),
            Error::Serde(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}
