//! Index read from the local filesystem.

use async_trait::async_trait;
use log::debug;
use std::path::PathBuf;

use crate::error::FetchError;
use crate::runtime::Runtime;

use super::IndexSource;

pub struct FileSource<'a, R: Runtime> {
    runtime: &'a R,
    path: PathBuf,
}

impl<'a, R: Runtime> FileSource<'a, R> {
    pub fn new(runtime: &'a R, path: impl Into<PathBuf>) -> Self {
        Self {
            runtime,
            path: path.into(),
        }
    }
}

#[async_trait]
impl<R: Runtime> IndexSource for FileSource<'_, R> {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<String, FetchError> {
        debug!("Reading index from {:?}", self.path);
        self.runtime
            .read_to_string(&self.path)
            .map_err(|source| FetchError::File {
                path: self.path.clone(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_fetch_reads_through_runtime() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_read_to_string()
            .with(eq(PathBuf::from("/srv/charts/index.yaml")))
            .returning(|_| Ok("entries: {}\n".to_string()));

        let source = FileSource::new(&runtime, "/srv/charts/index.yaml");
        assert_eq!(source.fetch().await.unwrap(), "entries: {}\n");
    }

    #[tokio::test]
    async fn test_fetch_missing_file() {
        let mut runtime = MockRuntime::new();
        runtime.expect_read_to_string().returning(|_| {
            Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "No such file or directory",
            ))
        });

        let source = FileSource::new(&runtime, "/missing/index.yaml");
        let err = source.fetch().await.unwrap_err();

        match err {
            FetchError::File { path, source } => {
                assert_eq!(path, PathBuf::from("/missing/index.yaml"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("Expected file error, got {:?}", other),
        }
    }
}
