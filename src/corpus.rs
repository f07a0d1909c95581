/*! Parallel corpus file naming.

A parallel corpus is a basename shared by a source and a target file, plus
optional side files such as the document index:

- `{basename}.{sl}`
- `{basename}.{tl}`
- `{basename}.{doc}`

Suffixes are always *appended*: `train.de-en` with suffix `de` gives `train.de-en.de`.
!*/
use std::path::{Path, PathBuf};

/// Default suffix of the document index file.
pub const DOC_SUFFIX: &str = "doc";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParallelCorpus {
    basename: PathBuf,
    sl: String,
    tl: String,
}

impl ParallelCorpus {
    pub fn new(basename: impl Into<PathBuf>, sl: &str, tl: &str) -> Self {
        Self {
            basename: basename.into(),
            sl: sl.to_string(),
            tl: tl.to_string(),
        }
    }

    /// Same language pair, different basename.
    pub fn with_basename(&self, basename: impl Into<PathBuf>) -> Self {
        Self {
            basename: basename.into(),
            sl: self.sl.clone(),
            tl: self.tl.clone(),
        }
    }

    /// Forge `{basename}.{suffix}`.
    pub fn path(&self, suffix: &str) -> PathBuf {
        let mut path = self.basename.clone().into_os_string();
        path.push(".");
        path.push(suffix);
        PathBuf::from(path)
    }

    pub fn source(&self) -> PathBuf {
        self.path(&self.sl)
    }

    pub fn target(&self) -> PathBuf {
        self.path(&self.tl)
    }

    pub fn basename(&self) -> &Path {
        &self.basename
    }
}
