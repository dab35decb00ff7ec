//! Directory-backed document store
//!
//! One file per page, named `<slug>.md`, directly under the store root.
//! Writes go to a uniquely named hidden temp file in the same directory and
//! are published with a rename, so readers see either the old or the new
//! content in full. `rename` replaces the target atomically on POSIX
//! filesystems. On Windows the replace is done by `MoveFileEx`, which is not
//! guaranteed atomic on every filesystem.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use super::error::{Result, StoreError};
use super::slug::{validate, Slug};
use super::traits::{DocumentStore, WELCOME_CONTENT, WELCOME_SLUG};

/// Document store rooted at a local directory
#[derive(Debug, Clone)]
pub struct FsDocumentStore {
    root: PathBuf,
}

impl FsDocumentStore {
    /// Create a store over `root`. Nothing is touched on disk until
    /// [`DocumentStore::ensure_bootstrap`] or a write is called.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory of the store
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn page_path(&self, slug: &Slug) -> PathBuf {
        self.root.join(slug.file_name())
    }

    fn temp_path(&self, slug: &Slug) -> PathBuf {
        self.root.join(format!(".{}.{}.tmp", slug, Uuid::new_v4().simple()))
    }

    /// Write `content` to a temp file and rename it over the page file
    async fn write_atomic(&self, slug: &Slug, content: &str) -> Result<()> {
        let target = self.page_path(slug);
        let temp = self.temp_path(slug);

        if let Err(e) = write_and_sync(&temp, content.as_bytes()).await {
            discard_temp(&temp).await;
            return Err(StoreError::storage("writing", &temp)(e));
        }

        if let Err(e) = tokio::fs::rename(&temp, &target).await {
            discard_temp(&temp).await;
            return Err(StoreError::storage("publishing", &target)(e));
        }

        Ok(())
    }
}

/// Remove the temp file of a failed write
async fn discard_temp(temp: &Path) {
    match tokio::fs::remove_file(temp).await {
        Ok(()) => {}
        // Never created
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => {
            tracing::warn!(path = %temp.display(), error = %e, "Failed to remove temp file");
        }
    }
}

async fn write_and_sync(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = tokio::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await?;
    file.write_all(bytes).await?;
    file.flush().await?;
    file.sync_all().await
}

#[async_trait]
impl DocumentStore for FsDocumentStore {
    async fn list(&self) -> Result<Vec<Slug>> {
        let mut entries = tokio::fs::read_dir(&self.root)
            .await
            .map_err(StoreError::storage("listing", &self.root))?;

        let mut slugs = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(StoreError::storage("listing", &self.root))?
        {
            let file_name = entry.file_name();
            let Some(slug) = file_name.to_str().and_then(Slug::from_file_name) else {
                tracing::debug!(entry = ?file_name, "Skipping non-page entry");
                continue;
            };

            match entry.file_type().await {
                Ok(file_type) if file_type.is_file() => slugs.push(slug),
                Ok(_) => {
                    tracing::debug!(entry = ?file_name, "Skipping entry that is not a regular file");
                }
                Err(e) => {
                    // Removed between readdir and stat
                    tracing::debug!(entry = ?file_name, error = %e, "Skipping unreadable entry");
                }
            }
        }

        slugs.sort();
        Ok(slugs)
    }

    async fn create(&self, slug: &str, content: &str) -> Result<Slug> {
        let slug = validate(slug)?;
        self.write_atomic(&slug, content).await?;

        tracing::debug!(slug = %slug, bytes = content.len(), "Page written");
        Ok(slug)
    }

    async fn get(&self, slug: &str) -> Result<String> {
        let slug = validate(slug)?;
        let path = self.page_path(&slug);

        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                // A vanished root is a storage failure, not a missing page
                match tokio::fs::try_exists(&self.root).await {
                    Ok(true) => Err(StoreError::NotFound(slug.into_inner())),
                    Ok(false) => Err(StoreError::storage("reading", &path)(e)),
                    Err(stat_err) => Err(StoreError::storage("reading", &self.root)(stat_err)),
                }
            }
            Err(e) => Err(StoreError::storage("reading", &path)(e)),
        }
    }

    async fn ensure_bootstrap(&self) -> Result<bool> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(StoreError::storage("creating", &self.root))?;

        let welcome = validate(WELCOME_SLUG)?;
        let path = self.page_path(&welcome);
        let exists = tokio::fs::try_exists(&path)
            .await
            .map_err(StoreError::storage("checking", &path))?;

        if exists {
            tracing::debug!(root = %self.root.display(), "Store already initialized");
            return Ok(false);
        }

        self.write_atomic(&welcome, WELCOME_CONTENT).await?;
        tracing::info!(root = %self.root.display(), slug = WELCOME_SLUG, "Seeded welcome page");
        Ok(true)
    }
}
