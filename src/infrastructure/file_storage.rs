// File-backed layout storage, one JSON file per key
use crate::application::layout_storage::LayoutStorage;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileStorage {
    directory: PathBuf,
}

impl FileStorage {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys embed caller-supplied ids; encode so they stay a single file name.
        self.directory.join(format!("{}.json", urlencoding::encode(key)))
    }
}

#[async_trait]
impl LayoutStorage for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        let directory = self.directory.clone();
        let path = self.path_for(key);

        // Each write gets its own temp file next to the target, so concurrent
        // writers to one key never share it and the rename stays atomic.
        tokio::task::spawn_blocking(move || -> Result<()> {
            std::fs::create_dir_all(&directory)
                .with_context(|| format!("Failed to create {}", directory.display()))?;

            let mut tmp = tempfile::NamedTempFile::new_in(&directory).with_context(|| {
                format!("Failed to create temp file in {}", directory.display())
            })?;
            tmp.write_all(value.as_bytes())
                .with_context(|| format!("Failed to write {}", tmp.path().display()))?;
            tmp.persist(&path)
                .with_context(|| format!("Failed to move layout into {}", path.display()))?;

            Ok(())
        })
        .await
        .context("Layout write task failed")?
    }
}
