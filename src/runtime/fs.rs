//! File system operations.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::Path;

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self, contents))]
    pub(crate) fn write_impl(&self, path: &Path, contents: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }
        fs::write(path, contents).with_context(|| format!("Failed to write to {:?}", path))?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn read_to_string_impl(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}

#[cfg(test)]
mod tests {
    use crate::runtime::{RealRuntime, Runtime};
    use tempfile::tempdir;

    #[test]
    fn test_real_runtime_write_and_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("catalog.html");
        let runtime = RealRuntime;

        assert!(!path.exists());
        runtime.write(&path, b"<p>hello</p>").unwrap();
        assert!(path.exists());
        assert_eq!(runtime.read_to_string(&path).unwrap(), "<p>hello</p>");
    }

    #[test]
    fn test_real_runtime_read_missing_file() {
        let dir = tempdir().unwrap();
        let runtime = RealRuntime;

        let err = runtime
            .read_to_string(&dir.path().join("index.yaml"))
            .unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
