//! Text sources for corpora and queries

use crate::error::{Error, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Source of text to ingest or classify
pub enum Input {
    /// Direct text input
    Text(String),
    /// File path input
    File(PathBuf),
    /// Raw bytes input
    Bytes(Vec<u8>),
    /// Reader input (boxed for object safety)
    Reader(Box<dyn Read + Send + Sync>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f
                .debug_struct("Input::Text")
                .field("length", &text.len())
                .finish(),
            Input::File(path) => f.debug_struct("Input::File").field("path", path).finish(),
            Input::Bytes(bytes) => f
                .debug_struct("Input::Bytes")
                .field("length", &bytes.len())
                .finish(),
            Input::Reader(_) => f.debug_struct("Input::Reader").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Input::File(path.as_ref().to_path_buf())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from reader
    pub fn from_reader(reader: impl Read + Send + Sync + 'static) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the whole source as UTF-8 text
    pub fn into_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => {
                let bytes = std::fs::read(&path).map_err(|source| Error::Io {
                    path: path.clone(),
                    source,
                })?;
                String::from_utf8(bytes).map_err(|e| {
                    Error::Encoding(format!("{} is not valid UTF-8: {}", path.display(), e))
                })
            }
            Input::Bytes(bytes) => String::from_utf8(bytes)
                .map_err(|e| Error::Encoding(format!("invalid UTF-8 encoding: {e}"))),
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer).map_err(|source| Error::Io {
                    path: PathBuf::from("<reader>"),
                    source,
                })?;
                String::from_utf8(buffer)
                    .map_err(|e| Error::Encoding(format!("invalid UTF-8 encoding: {e}")))
            }
        }
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::from_text(text)
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_text_input() {
        let text = Input::from_text("Some English here.").into_text().unwrap();
        assert_eq!(text, "Some English here.");
    }

    #[test]
    fn test_file_input() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("TEXT.txt");
        std::fs::write(&path, "Some English word here").unwrap();

        let text = Input::from_file(&path).into_text().unwrap();
        assert_eq!(text, "Some English word here");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Input::from_file("/nonexistent/ENGLISH.1")
            .into_text()
            .unwrap_err();
        match err {
            Error::Io { path, .. } => assert_eq!(path, PathBuf::from("/nonexistent/ENGLISH.1")),
            other => panic!("Expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_utf8_bytes() {
        let err = Input::from_bytes(vec![0x66, 0xff, 0x6f]).into_text().unwrap_err();
        assert!(matches!(err, Error::Encoding(_)));
    }

    #[test]
    fn test_reader_input() {
        let reader = Cursor::new(b"Pan wa doko desuka?".to_vec());
        let text = Input::from_reader(reader).into_text().unwrap();
        assert_eq!(text, "Pan wa doko desuka?");
    }

    #[test]
    fn test_debug_hides_content() {
        let debug = format!("{:?}", Input::from_text("secret words"));
        assert!(debug.contains("length"));
        assert!(!debug.contains("secret"));
    }
}
