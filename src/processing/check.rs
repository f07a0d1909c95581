//! Consistency checks on parallel corpora.
//!
//! Both conversions end by re-reading what they wrote and checking that source and target are still aligned.
//! [Check] runs the same verifications on an existing HAN doc corpus, without writing anything.
use std::path::Path;

use log::info;
use serde::Serialize;

use crate::{
    corpus::{ParallelCorpus, DOC_SUFFIX},
    error::Error,
    io::count_lines,
};

use super::han2wmt::{expected_lines, HanToWmt};

/// Fail with [Error::Alignment] if line counts differ, return the (shared) line count otherwise.
pub fn ensure_aligned(source_lines: usize, target_lines: usize) -> Result<usize, Error> {
    if source_lines == target_lines {
        Ok(source_lines)
    } else {
        Err(Error::Alignment {
            source_lines,
            target_lines,
        })
    }
}

/// Fail with [Error::ConversionMismatch] if `lines` differs from `expected`.
fn ensure_line_count(
    lines: usize,
    expected: usize,
    segments: usize,
    documents: usize,
) -> Result<usize, Error> {
    if lines == expected {
        Ok(lines)
    } else {
        Err(Error::ConversionMismatch {
            documents,
            segments,
            expected,
            actual: lines,
        })
    }
}

/// A WMT doc side holds each segment plus a blank line between two documents.
pub fn ensure_wmt_line_count(
    lines: usize,
    segments: usize,
    documents: usize,
) -> Result<usize, Error> {
    ensure_line_count(lines, expected_lines(segments, documents), segments, documents)
}

/// A HAN doc side holds segments only.
pub fn ensure_han_line_count(
    lines: usize,
    segments: usize,
    documents: usize,
) -> Result<usize, Error> {
    ensure_line_count(lines, segments, segments, documents)
}

/// Count lines of both files and check that they are equal.
pub fn check_aligned(source: &Path, target: &Path) -> Result<usize, Error> {
    let slen = count_lines(source)?;
    let tlen = count_lines(target)?;
    info!("output lines: {}/{}", slen, tlen);
    ensure_aligned(slen, tlen)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckSummary {
    pub documents: usize,
    pub segments: usize,
    /// Lines per side once converted to WMT doc.
    pub wmt_lines: usize,
}

impl std::fmt::Display for CheckSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} documents of {} valid segments ({} lines once converted).",
            self.documents, self.segments, self.wmt_lines
        )
    }
}

/// HAN doc corpus check: `{src}.{sl}`/`{src}.{tl}` are aligned and `{src}.{doc}` is a valid index for them.
pub struct Check {
    src: ParallelCorpus,
    doc_suffix: String,
}

impl Check {
    pub fn new(src: ParallelCorpus) -> Self {
        Self {
            src,
            doc_suffix: DOC_SUFFIX.to_string(),
        }
    }

    pub fn doc_suffix(mut self, suffix: &str) -> Self {
        self.doc_suffix = suffix.to_string();
        self
    }

    pub fn run(&self) -> Result<CheckSummary, Error> {
        info!("checking {:?}", self.src.basename());
        let segments = check_aligned(&self.src.source(), &self.src.target())?;
        let doc_index = HanToWmt::load_doc_index(&self.src.path(&self.doc_suffix), segments)?;
        doc_index.validate(segments)?;

        let documents = doc_index.len();
        Ok(CheckSummary {
            documents,
            segments,
            wmt_lines: expected_lines(segments, documents),
        })
    }
}
