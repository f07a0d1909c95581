/*! Document boundary index

A [DocIndex] holds the offset of the first segment of each document,
inside a boundary-free (HAN) segment sequence.

On disk it is stored as one offset per line:

```text
0
2
4
```
!*/
use std::io::{BufRead, Write};
use std::ops::Range;

use itertools::Itertools;
use log::info;
use serde::Serialize;

use crate::error::Error;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DocIndex(Vec<usize>);

impl DocIndex {
    /// Wrap offsets. No check is done, see [DocIndex::validate].
    pub fn new(offsets: Vec<usize>) -> Self {
        Self(offsets)
    }

    pub fn offsets(&self) -> &[usize] {
        &self.0
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<usize> {
        self.0.last().copied()
    }

    /// Drop a trailing offset equal to `n_segments` (an "end of last document" marker).
    ///
    /// Returns `true` if an offset has been removed.
    pub fn drop_sentinel(&mut self, n_segments: usize) -> bool {
        if self.last() == Some(n_segments) {
            self.0.pop();
            true
        } else {
            false
        }
    }

    /// Check that offsets start at 0, are strictly increasing and point inside a sequence of
    /// `n_segments` segments.
    ///
    /// An empty index is only valid for an empty sequence.
    pub fn validate(&self, n_segments: usize) -> Result<(), Error> {
        match self.0.first() {
            None if n_segments == 0 => return Ok(()),
            None => {
                return Err(Error::InvalidDocIndex(format!(
                    "no document for {} segments",
                    n_segments
                )))
            }
            Some(0) => (),
            Some(first) => {
                return Err(Error::InvalidDocIndex(format!(
                    "first offset should be 0, got {}",
                    first
                )))
            }
        }

        if let Some((position, (prev, next))) = self
            .0
            .iter()
            .tuple_windows()
            .enumerate()
            .find(|(_, (prev, next))| prev >= next)
        {
            return Err(Error::InvalidDocIndex(format!(
                "offsets should be strictly increasing: {} then {} (documents {} and {})",
                prev,
                next,
                position,
                position + 1
            )));
        }

        match self.last() {
            Some(last) if last >= n_segments => Err(Error::InvalidDocIndex(format!(
                "offset {} out of bounds for {} segments",
                last, n_segments
            ))),
            _ => Ok(()),
        }
    }

    /// Segment ranges of each document, the last one ending at `n_segments`.
    pub fn documents(&self, n_segments: usize) -> impl Iterator<Item = Range<usize>> + '_ {
        self.0
            .iter()
            .copied()
            .chain(std::iter::once(n_segments))
            .tuple_windows()
            .map(|(begin, end)| begin..end)
    }

    /// Read a document index file.
    /// Whitespace around offsets is ignored.
    pub fn from_reader<R: BufRead>(r: R) -> Result<Self, Error> {
        let mut offsets = Vec::new();
        for (idx, line) in r.lines().enumerate() {
            let line = line?;
            let offset: usize = line.trim().parse().map_err(|_| Error::ParseDocIndex {
                line: idx + 1,
                content: line.clone(),
            })?;
            offsets.push(offset);
        }

        info!("read {} document offsets", offsets.len());
        Ok(Self(offsets))
    }

    /// Write offsets, one per line.
    pub fn write_to<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        for offset in &self.0 {
            writeln!(w, "{}", offset)?;
        }
        Ok(())
    }
}
