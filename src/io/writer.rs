/*! Line writers.

[TextWriter] writes lines, making sure each of them is newline terminated.
[ParallelWriter] holds a source/target couple of [TextWriter], so that segment pairs and
document separators are always written on both sides at once.
!*/
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use log::info;

use crate::error::Error;

pub struct TextWriter<W: Write> {
    inner: W,
}

impl TextWriter<BufWriter<File>> {
    /// Create (or truncate) the file at `dst`.
    pub fn create(dst: &Path) -> Result<Self, Error> {
        info!("creating {:?}", dst);
        let f = File::create(dst).map_err(|e| Error::file(dst, e))?;
        Ok(Self::new(BufWriter::new(f)))
    }
}

impl<W: Write> TextWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Write a line as is, adding a `\n` if it does not end with one.
    pub fn write_line(&mut self, line: &str) -> std::io::Result<()> {
        self.inner.write_all(line.as_bytes())?;
        if !line.ends_with('\n') {
            self.inner.write_all(b"\n")?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

pub struct ParallelWriter<W: Write> {
    source: TextWriter<W>,
    target: TextWriter<W>,
}

impl ParallelWriter<BufWriter<File>> {
    pub fn create(source: &Path, target: &Path) -> Result<Self, Error> {
        Ok(Self {
            source: TextWriter::create(source)?,
            target: TextWriter::create(target)?,
        })
    }
}

impl<W: Write> ParallelWriter<W> {
    pub fn new(source: W, target: W) -> Self {
        Self {
            source: TextWriter::new(source),
            target: TextWriter::new(target),
        }
    }

    pub fn write_pair(&mut self, source: &str, target: &str) -> std::io::Result<()> {
        self.source.write_line(source)?;
        self.target.write_line(target)
    }

    /// Write a blank line on both sides.
    pub fn write_separator(&mut self) -> std::io::Result<()> {
        self.write_pair("\n", "\n")
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.source.flush()?;
        self.target.flush()
    }

    pub fn into_inner(self) -> (W, W) {
        (self.source.into_inner(), self.target.into_inner())
    }
}
