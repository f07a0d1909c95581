/*!
# IO utilities

Whole-file line loading and newline-safe line writing for parallel corpora.
!*/
pub mod reader;
pub mod writer;

pub use reader::{count_lines, read_lines, LineReader};
pub use writer::{ParallelWriter, TextWriter};
