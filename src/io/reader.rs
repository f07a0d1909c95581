/*! Reading facilities

[LineReader] yields raw lines, line terminators included, so that content can be
written back byte-for-byte.
!*/
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::{Path, PathBuf},
};

use log::debug;

use crate::error::Error;

#[derive(Debug)]
pub struct LineReader<T> {
    path: PathBuf,
    br: BufReader<T>,
}

impl LineReader<File> {
    pub fn new(src: &Path) -> Result<Self, Error> {
        debug!("opening {:?}", src);
        let f = File::open(src).map_err(|e| Error::file(src, e))?;
        Ok(Self::from_reader(src, f))
    }
}

impl<T: Read> LineReader<T> {
    /// `path` is only used to give context to errors.
    pub fn from_reader(path: &Path, inner: T) -> Self {
        Self {
            path: path.to_path_buf(),
            br: BufReader::new(inner),
        }
    }
}

impl<T: Read> Iterator for LineReader<T> {
    type Item = Result<String, Error>;

    /// Get next line (read until and including `\n`)
    fn next(&mut self) -> Option<Self::Item> {
        let mut s = String::new();
        match self.br.read_line(&mut s) {
            Ok(0) => None,
            Ok(_) => Some(Ok(s)),
            Err(e) => Some(Err(Error::file(&self.path, e))),
        }
    }
}

/// Read a whole file in memory, one [String] per line.
pub fn read_lines(src: &Path) -> Result<Vec<String>, Error> {
    let lines: Vec<String> = LineReader::new(src)?.collect::<Result<_, _>>()?;
    debug!("{:?}: {} lines", src, lines.len());
    Ok(lines)
}

/// Count lines of a file. A last line without newline is counted.
pub fn count_lines(src: &Path) -> Result<usize, Error> {
    LineReader::new(src)?.try_fold(0, |nb, line| line.map(|_| nb + 1))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn keeps_terminators() {
        let text = "hello\r\nworld\n\nlast";
        let lines: Vec<String> = LineReader::from_reader(Path::new("mem"), text.as_bytes())
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(lines, vec!["hello\r\n", "world\n", "\n", "last"]);
    }

    #[test]
    fn count() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "a\nb\n\nc").unwrap();
        assert_eq!(count_lines(f.path()).unwrap(), 4);
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.en");
        match read_lines(&path) {
            Err(Error::File { path: p, err }) => {
                assert_eq!(p, path);
                assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn invalid_utf8() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"ok\n\xff\xfe\n").unwrap();
        assert!(read_lines(f.path()).is_err());
    }
}
