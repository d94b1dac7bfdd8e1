use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Read access to DSL documents by logical path.
#[async_trait]
pub trait DslSource: Send + Sync {
    async fn read(&self, file: &str) -> std::io::Result<Vec<u8>>;
}

/// Reads DSL files from a directory on the local filesystem.
///
/// Logical paths are resolved relative to `root`; a leading `/` is ignored so
/// that `/connectors/main.conn.yaml` and `connectors/main.conn.yaml` name the
/// same file.
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn resolve(&self, file: &str) -> PathBuf {
        self.root.join(file.trim_start_matches('/'))
    }
}

#[async_trait]
impl DslSource for FsSource {
    async fn read(&self, file: &str) -> std::io::Result<Vec<u8>> {
        tokio::fs::read(self.resolve(file)).await
    }
}
