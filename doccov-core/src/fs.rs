//! Filesystem abstractions used by the report sinks.

use std::path::Path;

use crate::error::Result;

/// Abstraction over filesystem access for testability.
#[cfg_attr(test, mockall::automock)]
pub trait FileSystem {
    /// Create a directory and any missing parents.
    fn create_dir_all(&self, path: &Path) -> Result<()>;
    /// Write a file, replacing any existing contents.
    fn write(&self, path: &Path, contents: &str) -> Result<()>;
}

/// Default filesystem implementation backed by `std::fs`.
#[derive(Debug, Default, Clone)]
pub struct StdFileSystem;

impl StdFileSystem {
    /// Create a new standard filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for StdFileSystem {
    fn create_dir_all(&self, path: &Path) -> Result<()> {
        Ok(std::fs::create_dir_all(path)?)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        Ok(std::fs::write(path, contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::StdFileSystem;
    use crate::fs::FileSystem;
    use std::path::PathBuf;

    #[test]
    fn std_filesystem_creates_dirs_and_writes_files() {
        let root = std::env::temp_dir().join(unique_dir_name());
        let nested = root.join("images");

        let fs = StdFileSystem::new();
        fs.create_dir_all(&nested).expect("create nested dir");
        let file_path = nested.join("badge.svg");
        fs.write(&file_path, "<svg/>").expect("write file");

        let contents = std::fs::read_to_string(&file_path).expect("read file");
        assert_eq!(contents, "<svg/>");

        std::fs::remove_dir_all(&root).expect("cleanup temp dir");
    }

    #[test]
    fn std_filesystem_reports_write_into_missing_dir() {
        let fs = StdFileSystem::new();
        let missing = std::env::temp_dir().join(unique_dir_name()).join("coverage.json");
        assert!(fs.write(&missing, "{}").is_err());
    }

    fn unique_dir_name() -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("system time")
            .as_nanos();
        PathBuf::from(format!("doccov_core_test_{nanos}"))
    }
}
