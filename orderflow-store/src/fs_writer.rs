use async_trait::async_trait;
use orderflow_core::{BoxError, FileWriter};
use std::path::Path;
use tracing::debug;

/// Writes files to the local filesystem, creating parent directories as needed
#[derive(Debug, Default, Clone)]
pub struct FsFileWriter;

impl FsFileWriter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileWriter for FsFileWriter {
    async fn write(&self, path: &Path, contents: &str) -> Result<(), BoxError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, contents).await?;
        debug!("Wrote {} bytes to {}", contents.len(), path.display());
        Ok(())
    }
}
