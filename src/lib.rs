//! # handoc
//!
//! Conversion between the two document-level parallel corpus layouts:
//!
//! - **WMT doc**: documents are separated by a blank line, present at the same position in source and target files.
//! - **HAN doc**: source and target files hold segments only, and a `.doc` file lists the offset of the first segment of each document.
//!
//! ```no_run
//! use handoc::{corpus::ParallelCorpus, processing::WmtToHan};
//!
//! let corpus = ParallelCorpus::new("news.wmt", "de", "en");
//! let summary = WmtToHan::new(corpus, "news.han".into()).run()?;
//! println!("{}", summary);
//! # Ok::<(), handoc::error::Error>(())
//! ```
pub mod boundary;
pub mod corpus;
pub mod error;
pub mod io;
pub mod processing;
