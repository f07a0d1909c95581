/*! Corpus processing

Conversions between WMT doc and HAN doc parallel corpora, and checks on the produced files.

- [wmt2han]: blank line separated documents to an offset index.
- [han2wmt]: offset index to blank line separated documents.
- [check]: alignment checks.
!*/
pub mod check;
pub mod han2wmt;
pub mod wmt2han;

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use serde::Serialize;

use crate::error::Error;

pub use check::{Check, CheckSummary};
pub use han2wmt::{HanToWmt, HanToWmtSummary};
pub use wmt2han::{MalformedBoundary, WmtToHan, WmtToHanSummary};

/// Summary of a run, as written in a report file.
#[derive(Debug, Serialize)]
#[serde(tag = "command", rename_all = "kebab-case")]
pub enum Summary {
    WmtToHan(WmtToHanSummary),
    HanToWmt(HanToWmtSummary),
    Check(CheckSummary),
}

impl Summary {
    /// Write the summary as pretty-printed JSON.
    pub fn write_report(&self, dst: &Path) -> Result<(), Error> {
        info!("writing report to {:?}", dst);
        let f = File::create(dst).map_err(|e| Error::file(dst, e))?;
        let mut w = BufWriter::new(f);
        serde_json::to_writer_pretty(&mut w, self)?;
        w.flush()?;
        Ok(())
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Summary::WmtToHan(s) => write!(f, "{}", s),
            Summary::HanToWmt(s) => write!(f, "{}", s),
            Summary::Check(s) => write!(f, "{}", s),
        }
    }
}

impl From<WmtToHanSummary> for Summary {
    fn from(s: WmtToHanSummary) -> Self {
        Self::WmtToHan(s)
    }
}

impl From<HanToWmtSummary> for Summary {
    fn from(s: HanToWmtSummary) -> Self {
        Self::HanToWmt(s)
    }
}

impl From<CheckSummary> for Summary {
    fn from(s: CheckSummary) -> Self {
        Self::Check(s)
    }
}

/// Progress bar of `len` items, or a hidden one if `visible` is false.
pub(crate) fn progress_bar(len: u64, visible: bool, unit: &'static str) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg} ({eta})")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(style);
    pb.set_message(unit);
    pb
}
