//! Local file fetcher.
//!
//! Reads article text saved to disk. Files that are not valid UTF-8 are
//! decoded as Latin-1, which never fails.

use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tokio::fs;
use tracing::{info, instrument, warn};

use super::Fetch;
use crate::error::AnalyzerError;

/// File content plus filesystem metadata.
#[derive(Debug, Clone)]
pub struct FileMetadata {
    pub content: String,
    /// Size in bytes.
    pub size: u64,
    pub modified: Option<SystemTime>,
    pub path: PathBuf,
    pub filename: Option<String>,
    /// Extension including the leading dot, e.g. `".txt"`.
    pub extension: Option<String>,
}

/// Reads article text from local files.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileFetcher;

fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!("File is not valid UTF-8; decoding as Latin-1");
            e.into_bytes().into_iter().map(char::from).collect()
        }
    }
}

impl FileFetcher {
    /// Create a file fetcher.
    pub fn new() -> Self {
        Self
    }

    /// Read `filepath`, rejecting empty paths, missing files and directories.
    #[instrument(level = "info", skip_all, fields(%filepath))]
    pub async fn read(&self, filepath: &str) -> Result<String, AnalyzerError> {
        if filepath.trim().is_empty() {
            return Err(AnalyzerError::invalid_input("file path cannot be empty"));
        }

        let meta = fs::metadata(filepath)
            .await
            .map_err(|e| AnalyzerError::io(filepath, e))?;
        if !meta.is_file() {
            return Err(AnalyzerError::invalid_input(format!("not a file: {}", filepath)));
        }

        let bytes = fs::read(filepath)
            .await
            .map_err(|e| AnalyzerError::io(filepath, e))?;
        let text = decode(bytes);
        info!(bytes = meta.len(), "Read article file");
        Ok(text)
    }

    /// Read `filepath` and collect its filesystem metadata.
    pub async fn fetch_with_metadata(&self, filepath: &str) -> Result<FileMetadata, AnalyzerError> {
        let content = self.read(filepath).await?;
        let meta = fs::metadata(filepath)
            .await
            .map_err(|e| AnalyzerError::io(filepath, e))?;
        let path = Path::new(filepath);
        let absolute = fs::canonicalize(path)
            .await
            .map_err(|e| AnalyzerError::io(filepath, e))?;

        Ok(FileMetadata {
            content,
            size: meta.len(),
            modified: meta.modified().ok(),
            path: absolute,
            filename: path.file_name().map(|n| n.to_string_lossy().into_owned()),
            extension: path
                .extension()
                .map(|ext| format!(".{}", ext.to_string_lossy())),
        })
    }
}

impl Fetch for FileFetcher {
    async fn fetch(&self, source: &str) -> Result<String, AnalyzerError> {
        self.read(source).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_fetch_utf8_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Published 27 February 2025, 08:37 GMT").unwrap();
        let text = FileFetcher::new()
            .fetch(file.path().to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(text, "Published 27 February 2025, 08:37 GMT");
    }

    #[tokio::test]
    async fn test_latin1_fallback() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        // "café" in Latin-1
        file.write_all(&[0x63, 0x61, 0x66, 0xe9]).unwrap();
        let text = FileFetcher::new()
            .fetch(file.path().to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(text, "café");
    }

    #[tokio::test]
    async fn test_rejects_empty_missing_and_directory() {
        let fetcher = FileFetcher::new();
        assert!(fetcher.fetch("").await.unwrap_err().is_invalid_input());

        let err = fetcher.fetch("/no/such/article.txt").await.unwrap_err();
        assert!(matches!(err, AnalyzerError::Io { .. }));

        let dir = tempfile::tempdir().unwrap();
        let err = fetcher.fetch(dir.path().to_str().unwrap()).await.unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[tokio::test]
    async fn test_fetch_with_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("story.txt");
        std::fs::write(&path, "hello").unwrap();

        let meta = FileFetcher::new()
            .fetch_with_metadata(path.to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(meta.content, "hello");
        assert_eq!(meta.size, 5);
        assert_eq!(meta.filename.as_deref(), Some("story.txt"));
        assert_eq!(meta.extension.as_deref(), Some(".txt"));
        assert!(meta.path.is_absolute());
        assert!(meta.modified.is_some());
    }
}
