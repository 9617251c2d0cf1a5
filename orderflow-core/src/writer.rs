use async_trait::async_trait;
use std::path::Path;

use crate::BoxError;

#[async_trait]
pub trait FileWriter: Send + Sync {
    /// Write `contents` to `path`, replacing anything already there
    async fn write(&self, path: &Path, contents: &str) -> Result<(), BoxError>;
}
