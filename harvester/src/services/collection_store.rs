//! YAML-backed collection store
//!
//! Saves go through a temp file in the target directory followed by a
//! rename, so readers see either the previous or the new collection.

use std::path::PathBuf;

use async_trait::async_trait;
use shared::{Collection, SharedError};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::error::{HarvesterError, HarvesterResult};
use crate::traits::CollectionStore;

/// Collection stored as a YAML document with `people` and `planets` keys
pub struct YamlCollectionStore {
    path: PathBuf,
}

impl YamlCollectionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Sibling path used while writing
    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "collection".to_string());
        self.path.with_file_name(format!(".{}.tmp", file_name))
    }

    fn parse(&self, content: &str) -> HarvesterResult<Collection> {
        if content.trim().is_empty() {
            return Err(HarvesterError::corrupt(self.location(), "empty document"));
        }
        serde_yaml::from_str(content).map_err(|e| HarvesterError::corrupt(self.location(), e.to_string()))
    }
}

#[async_trait]
impl CollectionStore for YamlCollectionStore {
    async fn load(&self) -> HarvesterResult<Option<Collection>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(HarvesterError::IoError(e)),
        };

        self.parse(&content).map(Some)
    }

    async fn save(&self, collection: &Collection) -> HarvesterResult<()> {
        let content = serde_yaml::to_string(collection).map_err(|e| SharedError::SerializationError {
            message: e.to_string(),
        })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let temp_path = self.temp_path();
        let written = async {
            let mut file = fs::File::create(&temp_path).await?;
            file.write_all(content.as_bytes()).await?;
            file.sync_all().await?;
            drop(file);
            fs::rename(&temp_path, &self.path).await
        }
        .await;

        // Any failure past this point may have left a partial temp file
        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path).await;
            return Err(HarvesterError::IoError(e));
        }

        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
