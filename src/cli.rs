//! Command line arguments and parameters management/parsing.
use std::{ffi::OsString, path::PathBuf};

use handoc::corpus::ParallelCorpus;
use structopt::StructOpt;

/// Single dash spellings of long options, as accepted by older conversion scripts.
const SINGLE_DASH_LONGS: [(&str, &str); 3] = [("-sl", "--sl"), ("-tl", "--tl"), ("-doc", "--doc")];

/// Rewrite `-sl`, `-tl` and `-doc` into their `--` form, leaving other arguments untouched.
///
/// Only exact matches are rewritten: `-sl=de` is not supported.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            SINGLE_DASH_LONGS
                .iter()
                .find(|(single, _)| arg.to_str() == Some(*single))
                .map(|(_, long)| OsString::from(long))
                .unwrap_or(arg)
        })
        .collect()
}

#[derive(Debug, StructOpt)]
#[structopt(name = "handoc", about = "WMT doc/HAN doc corpus conversion tool.")]
pub struct Handoc {
    #[structopt(long = "no-progress", help = "do not show progress bars")]
    pub no_progress: bool,
    #[structopt(
        long = "report",
        parse(from_os_str),
        help = "write a JSON summary of the run at this location"
    )]
    pub report: Option<PathBuf>,
    #[structopt(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, StructOpt)]
/// Holds every command that is callable by the `handoc` command.
pub enum Command {
    #[structopt(about = "Extract doc boundaries from blank lines (WMT doc to HAN doc)")]
    WmtToHan(WmtToHan),
    #[structopt(about = "Form doc boundaries as blank lines (HAN doc to WMT doc)")]
    HanToWmt(HanToWmt),
    #[structopt(about = "Check that a HAN doc corpus is aligned and has a valid doc index")]
    Check(Check),
}

#[derive(Debug, StructOpt)]
/// Input corpus files: `{inputs}.{sl}` and `{inputs}.{tl}`.
pub struct Corpus {
    #[structopt(
        long = "inputs",
        short = "i",
        parse(from_os_str),
        help = "corpus files basename"
    )]
    pub inputs: PathBuf,
    #[structopt(long = "sl", help = "corpus source language suffix")]
    pub sl: String,
    #[structopt(long = "tl", help = "corpus target language suffix")]
    pub tl: String,
}

impl Corpus {
    pub fn parallel(&self) -> ParallelCorpus {
        ParallelCorpus::new(&self.inputs, &self.sl, &self.tl)
    }
}

#[derive(Debug, StructOpt)]
/// ```sh
/// USAGE:
///     handoc wmt-to-han [OPTIONS] --inputs <inputs> --output <output> --sl <sl> --tl <tl>
/// ```
pub struct WmtToHan {
    #[structopt(flatten)]
    pub corpus: Corpus,
    #[structopt(
        long = "output",
        short = "o",
        parse(from_os_str),
        help = "output files basename"
    )]
    pub output: PathBuf,
    #[structopt(
        long = "doc",
        default_value = "doc",
        help = "suffix for the produced doc index file"
    )]
    pub doc: String,
}

#[derive(Debug, StructOpt)]
/// ```sh
/// USAGE:
///     handoc han-to-wmt [OPTIONS] --inputs <inputs> --output <output> --sl <sl> --tl <tl>
/// ```
pub struct HanToWmt {
    #[structopt(flatten)]
    pub corpus: Corpus,
    #[structopt(long = "doc", default_value = "doc", help = "suffix for doc index file")]
    pub doc: String,
    #[structopt(
        long = "output",
        short = "o",
        parse(from_os_str),
        help = "output files basename"
    )]
    pub output: PathBuf,
}

#[derive(Debug, StructOpt)]
pub struct Check {
    #[structopt(flatten)]
    pub corpus: Corpus,
    #[structopt(long = "doc", default_value = "doc", help = "suffix for doc index file")]
    pub doc: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wmt_to_han() {
        let opt = Handoc::from_iter(&[
            "handoc",
            "wmt-to-han",
            "--inputs",
            "train",
            "--sl",
            "de",
            "--tl",
            "en",
            "-o",
            "han/train",
        ]);
        assert!(!opt.no_progress);
        match opt.cmd {
            Command::WmtToHan(c) => {
                assert_eq!(c.doc, "doc");
                assert_eq!(c.output, PathBuf::from("han/train"));
                assert_eq!(c.corpus.parallel().source(), PathBuf::from("train.de"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn han_to_wmt_doc_suffix() {
        let opt = Handoc::from_iter(&[
            "handoc",
            "--no-progress",
            "han-to-wmt",
            "-i",
            "train",
            "--sl",
            "de",
            "--tl",
            "en",
            "--doc",
            "idx",
            "--output",
            "wmt/train",
        ]);
        assert!(opt.no_progress);
        match opt.cmd {
            Command::HanToWmt(c) => assert_eq!(c.doc, "idx"),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn single_dash_longs() {
        let args = normalize_args(&[
            "handoc", "han-to-wmt", "-i", "train", "-sl", "de", "-tl", "en", "-doc", "idx", "-o",
            "wmt/train",
        ]);
        let opt = Handoc::from_iter_safe(args).unwrap();
        match opt.cmd {
            Command::HanToWmt(c) => {
                assert_eq!(c.corpus.sl, "de");
                assert_eq!(c.corpus.tl, "en");
                assert_eq!(c.doc, "idx");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn values_are_not_rewritten() {
        let args = normalize_args(&["handoc", "check", "-i", "-sl.txt", "-s", "--sl"]);
        assert_eq!(args[3], OsString::from("-sl.txt"));
        assert_eq!(args[4], OsString::from("-s"));
        assert_eq!(args[5], OsString::from("--sl"));
    }

    #[test]
    fn missing_language() {
        let res = Handoc::from_iter_safe(&["handoc", "check", "-i", "train", "--sl", "de"]);
        assert!(res.is_err());
    }
}
