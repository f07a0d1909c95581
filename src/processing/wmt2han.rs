/*! WMT doc to HAN doc

Document boundaries are blank lines present at the same position in both source and target files.
They are removed from the text, and the offset of each document is written in a separate index file.

```text
a1        A1
a2        A2                a1  A1        0
                     =>     a2  A2        2
b1        B1                b1  B1
```

A line that is blank on one side only is malformed: the pair is dropped, reported and the conversion goes on.
!*/
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use indicatif::ProgressBar;
use log::{debug, info, warn};
use serde::Serialize;

use crate::{
    boundary::DocIndex,
    corpus::{ParallelCorpus, DOC_SUFFIX},
    error::Error,
    io::{read_lines, ParallelWriter},
};

use super::check::{check_aligned, ensure_han_line_count};

/// A line pair where only one side is blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MalformedBoundary {
    /// 1-based line number in the WMT files.
    pub line: usize,
    pub source: String,
    pub target: String,
}

/// Result of a boundary extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub doc_index: DocIndex,
    /// Number of segment pairs written.
    pub segments: usize,
    /// Number of line pairs read.
    pub scanned: usize,
    pub dropped: Vec<MalformedBoundary>,
}

impl Extraction {
    pub fn summary(&self) -> WmtToHanSummary {
        WmtToHanSummary {
            documents: self.doc_index.len(),
            segments: self.segments,
            scanned: self.scanned,
            dropped: self.dropped.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WmtToHanSummary {
    pub documents: usize,
    pub segments: usize,
    pub scanned: usize,
    pub dropped: Vec<MalformedBoundary>,
}

impl std::fmt::Display for WmtToHanSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Extract {} valid segments from {} lines, {} documents in total ({} bad blank line pairs dropped).",
            self.segments,
            self.scanned,
            self.documents,
            self.dropped.len()
        )
    }
}

#[inline]
fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Scan `source` and `target` pairwise, writing non-blank pairs into `out`
/// and recording the offset of each document.
///
/// If sides differ in length, scanning stops at the end of the shortest one.
pub fn extract_boundaries<W: Write>(
    source: &[String],
    target: &[String],
    out: &mut ParallelWriter<W>,
    progress: &ProgressBar,
) -> Result<Extraction, Error> {
    if source.len() != target.len() {
        warn!(
            "source has {} lines and target {}: only the first {} line pairs are scanned",
            source.len(),
            target.len(),
            source.len().min(target.len())
        );
    }

    let mut offsets = vec![0];
    let mut segments = 0;
    let mut scanned = 0;
    let mut dropped = Vec::new();

    for (idx, (sline, tline)) in source.iter().zip(target).enumerate() {
        scanned += 1;
        match (is_blank(sline), is_blank(tline)) {
            (true, true) => {
                // repeated blank pairs would give empty documents
                if offsets.last() == Some(&segments) {
                    debug!("line {}: no segment since last boundary", idx + 1);
                } else {
                    offsets.push(segments);
                }
            }
            (false, false) => {
                segments += 1;
                out.write_pair(sline, tline)?;
            }
            _ => {
                warn!(
                    "line {}: not simultaneously blank: [{}]|[{}]",
                    idx + 1,
                    sline.trim_end_matches(&['\r', '\n'][..]),
                    tline.trim_end_matches(&['\r', '\n'][..])
                );
                dropped.push(MalformedBoundary {
                    line: idx + 1,
                    source: sline.clone(),
                    target: tline.clone(),
                });
            }
        }
        progress.inc(1);
    }

    let mut doc_index = DocIndex::new(offsets);
    if doc_index.drop_sentinel(segments) {
        debug!("remove last boundary offset ({})", segments);
    }

    Ok(Extraction {
        doc_index,
        segments,
        scanned,
        dropped,
    })
}

/// WMT doc to HAN doc conversion of a parallel corpus.
///
/// Reads `{src}.{sl}`, `{src}.{tl}` and writes `{dst}.{sl}`, `{dst}.{tl}`, `{dst}.{doc}`.
pub struct WmtToHan {
    src: ParallelCorpus,
    dst: ParallelCorpus,
    doc_suffix: String,
    progress: bool,
}

impl WmtToHan {
    pub fn new(src: ParallelCorpus, dst: PathBuf) -> Self {
        let dst = src.with_basename(dst);
        Self {
            src,
            dst,
            doc_suffix: DOC_SUFFIX.to_string(),
            progress: false,
        }
    }

    /// Set the suffix of the produced document index file.
    pub fn doc_suffix(mut self, suffix: &str) -> Self {
        self.doc_suffix = suffix.to_string();
        self
    }

    /// Show a progress bar on stderr.
    pub fn progress(mut self, show: bool) -> Self {
        self.progress = show;
        self
    }

    pub fn run(&self) -> Result<WmtToHanSummary, Error> {
        info!("extracting document boundaries of {:?}", self.src.basename());
        let source = read_lines(&self.src.source())?;
        let target = read_lines(&self.src.target())?;

        let pb = super::progress_bar(
            source.len().min(target.len()) as u64,
            self.progress,
            "lines",
        );
        let extraction = {
            let mut out = ParallelWriter::create(&self.dst.source(), &self.dst.target())?;
            let extraction = extract_boundaries(&source, &target, &mut out, &pb)?;
            out.flush()?;
            extraction
        };
        pb.finish_and_clear();

        let out_lines = check_aligned(&self.dst.source(), &self.dst.target())?;
        ensure_han_line_count(out_lines, extraction.segments, extraction.doc_index.len())?;

        let doc_path = self.dst.path(&self.doc_suffix);
        info!("writing {} document offsets to {:?}", extraction.doc_index.len(), doc_path);
        let f = File::create(&doc_path).map_err(|e| Error::file(&doc_path, e))?;
        let mut doc_file = BufWriter::new(f);
        extraction.doc_index.write_to(&mut doc_file)?;
        doc_file.flush()?;

        info!("drop bad blank line pair: {}", extraction.dropped.len());
        Ok(extraction.summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(l: &[&str]) -> Vec<String> {
        l.iter().map(|x| format!("{}\n", x)).collect()
    }

    fn extract(src: &[&str], tgt: &[&str]) -> (Extraction, String, String) {
        let mut out = ParallelWriter::new(Vec::new(), Vec::new());
        let ex = extract_boundaries(&lines(src), &lines(tgt), &mut out, &ProgressBar::hidden())
            .unwrap();
        let (s, t) = out.into_inner();
        (ex, String::from_utf8(s).unwrap(), String::from_utf8(t).unwrap())
    }

    #[test]
    fn two_documents() {
        let (ex, src, tgt) = extract(&["a1", "a2", "", "b1", ""], &["A1", "A2", "", "B1", ""]);
        assert_eq!(src, "a1\na2\nb1\n");
        assert_eq!(tgt, "A1\nA2\nB1\n");
        assert_eq!(ex.doc_index.offsets(), &[0, 2]);
        assert_eq!(ex.segments, 3);
        assert_eq!(ex.scanned, 5);
        assert!(ex.dropped.is_empty());
    }

    #[test]
    fn no_trailing_blank() {
        let (ex, _, _) = extract(&["a1", "", "b1", "b2"], &["A1", "", "B1", "B2"]);
        assert_eq!(ex.doc_index.offsets(), &[0, 1]);
        assert_eq!(ex.segments, 3);
    }

    #[test]
    fn misaligned_blank_dropped() {
        let (ex, src, tgt) = extract(&["a1", "", "a3", "", "b1"], &["A1", "A2", "A3", "", "B1"]);
        assert_eq!(src, "a1\na3\nb1\n");
        assert_eq!(tgt, "A1\nA3\nB1\n");
        assert_eq!(ex.doc_index.offsets(), &[0, 2]);
        assert_eq!(
            ex.dropped,
            vec![MalformedBoundary {
                line: 2,
                source: "\n".to_string(),
                target: "A2\n".to_string(),
            }]
        );
    }

    #[test]
    fn whitespace_is_blank() {
        let (ex, src, _) = extract(&["a1", " \t", "b1"], &["A1", "\u{3000}", "B1"]);
        assert_eq!(src, "a1\nb1\n");
        assert_eq!(ex.doc_index.offsets(), &[0, 1]);
    }

    #[test]
    fn original_lines_kept() {
        let (_, src, _) = extract(&["  padded  "], &["x"]);
        assert_eq!(src, "  padded  \n");
    }

    #[test]
    fn repeated_blanks() {
        let (ex, _, _) = extract(&["", "a1", "", "", "b1"], &["", "A1", "", "", "B1"]);
        assert_eq!(ex.doc_index.offsets(), &[0, 1]);
        assert_eq!(ex.segments, 2);
    }

    #[test]
    fn truncated_to_shortest() {
        let (ex, src, tgt) = extract(&["a1", "a2", "a3"], &["A1", "A2"]);
        assert_eq!(ex.scanned, 2);
        assert_eq!(ex.segments, 2);
        assert_eq!(src, "a1\na2\n");
        assert_eq!(tgt, "A1\nA2\n");
    }

    #[test]
    fn empty() {
        let (ex, src, _) = extract(&[], &[]);
        assert!(ex.doc_index.is_empty());
        assert_eq!(ex.segments, 0);
        assert!(src.is_empty());
    }

    #[test]
    fn offsets_strictly_increasing() {
        let (ex, _, _) = extract(
            &["", "a", "", "b", "c", "", "", "d", ""],
            &["", "A", "", "B", "C", "", "", "D", ""],
        );
        assert_eq!(ex.doc_index.offsets(), &[0, 1, 3]);
        assert!(ex.doc_index.validate(ex.segments).is_ok());
    }
}
