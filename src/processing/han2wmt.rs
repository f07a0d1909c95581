/*! HAN doc to WMT doc

Inverse of [super::wmt2han]: a blank line is inserted on both sides between two consecutive documents,
as given by the document index file.

The resulting files must hold exactly `segments + documents - 1` lines, otherwise the conversion fails.
!*/
use std::{
    fs::File,
    io::{BufReader, Write},
    path::{Path, PathBuf},
};

use indicatif::ProgressBar;
use log::info;
use serde::Serialize;

use crate::{
    boundary::DocIndex,
    corpus::{ParallelCorpus, DOC_SUFFIX},
    error::Error,
    io::{read_lines, ParallelWriter},
};

use super::check::{check_aligned, ensure_aligned, ensure_wmt_line_count};

/// Number of lines of a WMT doc corpus: segments and one separator between each document.
#[inline]
pub fn expected_lines(segments: usize, documents: usize) -> usize {
    segments + documents.saturating_sub(1)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HanToWmtSummary {
    pub documents: usize,
    pub segments: usize,
    /// Lines per side in the produced files.
    pub lines: usize,
}

impl std::fmt::Display for HanToWmtSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Convert {} documents of {} valid segments into {} lines in total.",
            self.documents, self.segments, self.lines
        )
    }
}

/// Write each document of `source`/`target` into `out`, separated by blank lines.
///
/// `doc_index` has to be valid for the number of segments, see [DocIndex::validate].
pub fn insert_boundaries<W: Write>(
    source: &[String],
    target: &[String],
    doc_index: &DocIndex,
    out: &mut ParallelWriter<W>,
    progress: &ProgressBar,
) -> Result<(), Error> {
    ensure_aligned(source.len(), target.len())?;
    doc_index.validate(source.len())?;

    let nb_docs = doc_index.len();
    for (nb, doc) in doc_index.documents(source.len()).enumerate() {
        for (sline, tline) in source[doc.clone()].iter().zip(&target[doc]) {
            out.write_pair(sline, tline)?;
        }
        if nb + 1 < nb_docs {
            out.write_separator()?;
        }
        progress.inc(1);
    }

    Ok(())
}

/// HAN doc to WMT doc conversion of a parallel corpus.
///
/// Reads `{src}.{sl}`, `{src}.{tl}`, `{src}.{doc}` and writes `{dst}.{sl}`, `{dst}.{tl}`.
pub struct HanToWmt {
    src: ParallelCorpus,
    dst: ParallelCorpus,
    doc_suffix: String,
    progress: bool,
}

impl HanToWmt {
    pub fn new(src: ParallelCorpus, dst: PathBuf) -> Self {
        let dst = src.with_basename(dst);
        Self {
            src,
            dst,
            doc_suffix: DOC_SUFFIX.to_string(),
            progress: false,
        }
    }

    /// Set the suffix of the document index file to read.
    pub fn doc_suffix(mut self, suffix: &str) -> Self {
        self.doc_suffix = suffix.to_string();
        self
    }

    /// Show a progress bar on stderr.
    pub fn progress(mut self, show: bool) -> Self {
        self.progress = show;
        self
    }

    /// Read the document index, dropping a trailing end-of-corpus offset.
    pub(crate) fn load_doc_index(path: &Path, segments: usize) -> Result<DocIndex, Error> {
        let f = File::open(path).map_err(|e| Error::file(path, e))?;
        let mut doc_index = DocIndex::from_reader(BufReader::new(f))?;
        if doc_index.drop_sentinel(segments) {
            info!("remove last offset ({}): end of corpus", segments);
        }
        Ok(doc_index)
    }

    pub fn run(&self) -> Result<HanToWmtSummary, Error> {
        info!("forming document boundaries of {:?}", self.src.basename());
        let source = read_lines(&self.src.source())?;
        let target = read_lines(&self.src.target())?;
        ensure_aligned(source.len(), target.len())?;

        let segments = source.len();
        let doc_index = Self::load_doc_index(&self.src.path(&self.doc_suffix), segments)?;
        doc_index.validate(segments)?;
        let documents = doc_index.len();
        info!(
            "Total {} documents to be converted, {} segments in total.",
            documents, segments
        );

        let pb = super::progress_bar(documents as u64, self.progress, "documents");
        {
            let mut out = ParallelWriter::create(&self.dst.source(), &self.dst.target())?;
            insert_boundaries(&source, &target, &doc_index, &mut out, &pb)?;
            out.flush()?;
        }
        pb.finish_and_clear();

        let lines = check_aligned(&self.dst.source(), &self.dst.target())?;
        ensure_wmt_line_count(lines, segments, documents)?;

        Ok(HanToWmtSummary {
            documents,
            segments,
            lines,
        })
    }
}
