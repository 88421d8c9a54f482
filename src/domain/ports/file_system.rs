//! FileSystem port - abstraction over file I/O operations
//!
//! This trait allows the build pipeline to touch the disk without
//! depending on a concrete implementation (local disk or in-memory mock).

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Error, Debug)]
pub enum FsError {
    /// File not found
    #[error("{}: no such file or directory", .0.display())]
    NotFound(PathBuf),

    /// Permission denied
    #[error("{}: permission denied", .0.display())]
    PermissionDenied(PathBuf),

    /// File exists but is not UTF-8 text
    #[error("{}: file is not valid UTF-8", .0.display())]
    InvalidUtf8(PathBuf),

    /// Any other I/O failure
    #[error("{}: I/O error", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FsError {
    /// Classify an I/O error raised while operating on `path`
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            io::ErrorKind::InvalidData => FsError::InvalidUtf8(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    /// Path the failed operation was acting on
    pub fn path(&self) -> &Path {
        match self {
            FsError::NotFound(path)
            | FsError::PermissionDenied(path)
            | FsError::InvalidUtf8(path)
            | FsError::Io { path, .. } => path,
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O with atomic writes
/// - `MockFileSystem` - in-memory for testing
pub trait FileSystem {
    /// Read file content as UTF-8 string
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Write content to file, creating parent directories as needed
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Check if a file or directory exists
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and everything below it; succeeds if it is already gone
    fn remove_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;
}

/// Mock file system for testing
///
/// Uses `Arc<Mutex<>>` internally so it can be cloned and shared.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MockFileSystem {
    pub files: std::sync::Arc<std::sync::Mutex<std::collections::BTreeMap<PathBuf, String>>>,
    pub dirs: std::sync::Arc<std::sync::Mutex<std::collections::BTreeSet<PathBuf>>>,
    /// Number of writes that succeed before every further write fails
    pub write_budget: std::sync::Arc<std::sync::Mutex<Option<usize>>>,
}

#[cfg(test)]
impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every write after the first `n` fail with a permission error
    pub fn fail_writes_after(self, n: usize) -> Self {
        *self.write_budget.lock().unwrap() = Some(n);
        self
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), content.to_string());
        self
    }

    /// Files directly or transitively below `dir`
    pub fn files_under(&self, dir: &Path) -> Vec<PathBuf> {
        self.files
            .lock()
            .unwrap()
            .keys()
            .filter(|p| p.starts_with(dir))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
impl FileSystem for MockFileSystem {
    fn read(&self, path: &Path) -> FsResult<String> {
        let files = self.files.lock().unwrap();
        files
            .get(path)
            .cloned()
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        let mut budget = self.write_budget.lock().unwrap();
        match budget.as_mut() {
            Some(0) => return Err(FsError::PermissionDenied(path.to_path_buf())),
            Some(n) => *n -= 1,
            None => {}
        }
        if let Some(parent) = path.parent() {
            self.dirs.lock().unwrap().insert(parent.to_path_buf());
        }
        let mut files = self.files.lock().unwrap();
        files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path) || self.dirs.lock().unwrap().contains(path)
    }

    fn remove_dir_all(&self, path: &Path) -> FsResult<()> {
        self.files.lock().unwrap().retain(|p, _| !p.starts_with(path));
        self.dirs.lock().unwrap().retain(|p| !p.starts_with(path));
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        self.dirs.lock().unwrap().insert(path.to_path_buf());
        Ok(())
    }
}
