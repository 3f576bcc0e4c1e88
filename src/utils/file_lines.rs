// ============================================================================
// Line Sources
// File-backed and in-memory implementations of LineSource
// ============================================================================
//
// File loading is synchronous and blocking. Async callers should go through
// `load_lines_async` (feature "async"), which moves the read onto tokio's
// blocking pool so arithmetic on executor threads is never stalled by I/O.

use crate::interfaces::{LineSource, SourceError};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Lines of a text file on disk.
#[derive(Debug, Clone)]
pub struct FileLineSource {
    path: PathBuf,
}

impl FileLineSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LineSource for FileLineSource {
    fn lines(&self) -> Result<Vec<String>, SourceError> {
        load_lines(&self.path)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// Read every line of `path`, terminators stripped, in file order.
///
/// # Errors
/// - `NotFound` if the file does not exist
/// - `Io` for any other open or read failure (including invalid UTF-8)
pub fn load_lines(path: &Path) -> Result<Vec<String>, SourceError> {
    let file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => SourceError::NotFound {
            path: path.to_path_buf(),
        },
        _ => SourceError::Io(err),
    })?;

    let lines = BufReader::new(file).lines().collect::<io::Result<Vec<_>>>()?;
    tracing::trace!(path = %path.display(), count = lines.len(), "Loaded lines");
    Ok(lines)
}

/// Async wrapper around [`load_lines`] that runs on the blocking pool.
#[cfg(feature = "async")]
pub async fn load_lines_async(path: impl Into<PathBuf>) -> Result<Vec<String>, SourceError> {
    let path = path.into();
    tokio::task::spawn_blocking(move || load_lines(&path))
        .await
        .map_err(|err| SourceError::Io(io::Error::other(err)))?
}

/// Lines of an in-memory text buffer.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLineSource {
    text: String,
}

impl InMemoryLineSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl LineSource for InMemoryLineSource {
    fn lines(&self) -> Result<Vec<String>, SourceError> {
        Ok(self.text.lines().map(str::to_string).collect())
    }

    fn describe(&self) -> String {
        format!("in-memory text ({} bytes)", self.text.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// Temp file removed on drop.
    struct TempFile(PathBuf);

    impl TempFile {
        fn with_contents(name: &str, contents: &[u8]) -> Self {
            let path = std::env::temp_dir().join(format!(
                "text-decimal-{}-{}",
                std::process::id(),
                name
            ));
            let mut file = File::create(&path).unwrap();
            file.write_all(contents).unwrap();
            TempFile(path)
        }
    }

    impl Drop for TempFile {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.0);
        }
    }

    #[test]
    fn test_loads_lines_in_order() {
        let file = TempFile::with_contents("order.txt", b"1.5\n-2\r\n+3.25");
        let lines = FileLineSource::new(file.0.clone()).lines().unwrap();
        assert_eq!(lines, vec!["1.5", "-2", "+3.25"]);
    }

    #[test]
    fn test_empty_file_is_not_missing() {
        let file = TempFile::with_contents("empty.txt", b"");
        let lines = load_lines(&file.0).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_missing_file_is_distinct() {
        let path = std::env::temp_dir().join("text-decimal-does-not-exist.txt");
        match load_lines(&path) {
            Err(SourceError::NotFound { path: reported }) => assert_eq!(reported, path),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let file = TempFile::with_contents("binary.txt", &[0xff, 0xfe, b'\n']);
        assert!(matches!(load_lines(&file.0), Err(SourceError::Io(_))));
    }

    #[test]
    fn test_in_memory_source() {
        let source = InMemoryLineSource::new("1\n\n2.5\r\n");
        assert_eq!(source.lines().unwrap(), vec!["1", "", "2.5"]);
        assert_eq!(source.describe(), "in-memory text (8 bytes)");
    }

    #[cfg(feature = "async")]
    #[tokio::test]
    async fn test_load_lines_async() {
        let file = TempFile::with_contents("async.txt", b"7\n8\n");
        let lines = load_lines_async(file.0.clone()).await.unwrap();
        assert_eq!(lines, vec!["7", "8"]);
    }
}
