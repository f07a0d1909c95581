//! # handoc
//!
//! Convert document-level parallel corpora between the WMT doc layout (blank line separated documents)
//! and the HAN doc layout (boundary-free text and a document offset index).
//!
//! ```sh
//! handoc 0.1.0
//! WMT doc/HAN doc corpus conversion tool.
//!
//! USAGE:
//!     handoc [FLAGS] [OPTIONS] <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help           Prints help information
//!         --no-progress    do not show progress bars
//!     -V, --version        Prints version information
//!
//! OPTIONS:
//!         --report <report>    write a JSON summary of the run at this location
//!
//! SUBCOMMANDS:
//!     check         Check that a HAN doc corpus is aligned and has a valid doc index
//!     han-to-wmt    Form doc boundaries as blank lines (HAN doc to WMT doc)
//!     help          Prints this message or the help of the given subcommand(s)
//!     wmt-to-han    Extract doc boundaries from blank lines (WMT doc to HAN doc)
//! ```
//!
//! Logging is configured with `RUST_LOG` and defaults to `info`.
use handoc::{
    error::Error,
    processing::{Check, HanToWmt, Summary, WmtToHan},
};
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn run(opt: cli::Handoc) -> Result<Summary, Error> {
    let progress = !opt.no_progress;
    let summary: Summary = match opt.cmd {
        cli::Command::WmtToHan(c) => WmtToHan::new(c.corpus.parallel(), c.output)
            .doc_suffix(&c.doc)
            .progress(progress)
            .run()?
            .into(),
        cli::Command::HanToWmt(c) => HanToWmt::new(c.corpus.parallel(), c.output)
            .doc_suffix(&c.doc)
            .progress(progress)
            .run()?
            .into(),
        cli::Command::Check(c) => Check::new(c.corpus.parallel())
            .doc_suffix(&c.doc)
            .run()?
            .into(),
    };

    if let Some(report) = opt.report {
        summary.write_report(&report)?;
    }
    Ok(summary)
}

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opt = cli::Handoc::from_iter(cli::normalize_args(std::env::args_os()));
    debug!("cli args\n{:#?}", opt);

    match run(opt) {
        Ok(summary) => {
            println!("{}", summary);
            Ok(())
        }
        Err(e) => {
            error!("{}", e);
            Err(e)
        }
    }
}
