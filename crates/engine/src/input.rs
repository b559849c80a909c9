use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use crate::error::{EngineError, Result};

/// Where the characters to scan come from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InputSource {
    #[default]
    Stdin,
    File(PathBuf),
}

impl InputSource {
    #[must_use]
    pub fn is_stdin(&self) -> bool {
        matches!(self, Self::Stdin)
    }

    /// Opens the source for reading.
    ///
    /// `stdin` is handed back unchanged for [`InputSource::Stdin`]; files are
    /// wrapped in a `BufReader` of `capacity` bytes. The returned reader is
    /// owned by the caller and closed when dropped.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Open`] if the file cannot be opened.
    pub fn open<'a, R>(&self, stdin: R, capacity: usize) -> Result<Box<dyn BufRead + 'a>>
    where
        R: BufRead + 'a,
    {
        match self {
            Self::Stdin => Ok(Box::new(stdin)),
            Self::File(path) => {
                let file = File::open(path).map_err(|source| EngineError::Open {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(BufReader::with_capacity(capacity, file)))
            }
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl From<PathBuf> for InputSource {
    fn from(path: PathBuf) -> Self {
        Self::File(path)
    }
}

impl From<Option<PathBuf>> for InputSource {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdin, Self::File)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    #[test]
    fn stdin_passes_the_reader_through() {
        let mut reader = InputSource::Stdin.open(Cursor::new(b"abc".to_vec()), 4).unwrap();
        let mut out = String::new();
        reader.read_to_string(&mut out).unwrap();
        assert_eq!(out, "abc");
    }

    #[test]
    fn opens_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, "from disk").unwrap();

        let mut reader = InputSource::from(path).open(std::io::empty(), 4).unwrap();
        let mut out = String::new();
        reader.read_to_string(&mut out).unwrap();
        assert_eq!(out, "from disk");
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = InputSource::File(path.clone())
            .open(std::io::empty(), 4)
            .err()
            .unwrap();
        match &err {
            EngineError::Open { path: p, source } => {
                assert_eq!(p, &path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().starts_with(&format!("open {}: ", path.display())));
    }

    #[test]
    fn optional_path_conversion() {
        assert_eq!(InputSource::from(None), InputSource::Stdin);
        assert_eq!(
            InputSource::from(Some(PathBuf::from("a.txt"))),
            InputSource::File(PathBuf::from("a.txt"))
        );
        assert_eq!(InputSource::Stdin.to_string(), "<stdin>");
    }
}
