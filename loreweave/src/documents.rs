//! Document loading for the extraction pipeline.
//!
//! A document source yields a finite sequence of documents, each with a
//! stable identifier and a full text body. No streaming or partial reads are
//! required by the pipeline.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Error type for document loading.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// A file or directory could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configured document directory does not exist
    #[error("Document directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),
}

/// One bounded unit of text submitted to the extraction step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Stable identifier for the document
    pub id: String,

    /// Full text body
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Trait for components that yield a finite document set.
pub trait DocumentSource: std::fmt::Debug {
    /// Load all documents, in a stable order.
    fn load(&self) -> Result<Vec<Document>, DocumentError>;
}

/// Reads `.txt` and `.md` files from a directory tree.
///
/// Files are read recursively and returned in lexical path order so a fixed
/// corpus always produces the same document ordering (resolution is
/// order-sensitive). The path relative to the root becomes the document id.
#[derive(Debug, Clone)]
pub struct DirectoryReader {
    root: PathBuf,
}

impl DirectoryReader {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn collect_files(&self, dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), DocumentError> {
        let entries = fs::read_dir(dir).map_err(|source| DocumentError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        for entry in entries {
            let entry = entry.map_err(|source| DocumentError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();

            if path.is_dir() {
                self.collect_files(&path, files)?;
            } else if matches!(
                path.extension().and_then(|ext| ext.to_str()),
                Some("txt") | Some("md")
            ) {
                files.push(path);
            }
        }

        Ok(())
    }
}

impl DocumentSource for DirectoryReader {
    fn load(&self) -> Result<Vec<Document>, DocumentError> {
        if !self.root.is_dir() {
            return Err(DocumentError::MissingDirectory(self.root.clone()));
        }

        let mut files = Vec::new();
        self.collect_files(&self.root, &mut files)?;
        files.sort();

        let mut documents = Vec::with_capacity(files.len());
        for path in files {
            let text = fs::read_to_string(&path).map_err(|source| DocumentError::Io {
                path: path.clone(),
                source,
            })?;
            let id = path
                .strip_prefix(&self.root)
                .unwrap_or(&path)
                .to_string_lossy()
                .to_string();
            documents.push(Document::new(id, text));
        }

        info!(count = documents.len(), root = %self.root.display(), "Loaded documents");
        Ok(documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn reads_text_files_in_lexical_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "second").unwrap();
        fs::write(dir.path().join("a.txt"), "first").unwrap();
        fs::write(dir.path().join("ignored.bin"), "binary").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("c.md"), "third").unwrap();

        let documents = DirectoryReader::new(dir.path()).load().unwrap();

        assert_eq!(documents.len(), 3);
        assert_eq!(documents[0].id, "a.txt");
        assert_eq!(documents[0].text, "first");
        assert_eq!(documents[1].id, "b.txt");
        assert_eq!(documents[2].id, "nested/c.md");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let result = DirectoryReader::new("/nonexistent/loreweave-docs").load();
        assert!(matches!(result, Err(DocumentError::MissingDirectory(_))));
    }
}
