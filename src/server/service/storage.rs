//! Local filesystem storage for uploaded media.
//!
//! Files land under the configured upload root, split into an `audio/` and an
//! `image/` subdirectory. Stored names are random UUIDs so uploads can never
//! collide or overwrite each other; the original name only contributes its
//! extension.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use uuid::Uuid;

use crate::server::error::AppError;

/// Which subdirectory an upload lands in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileCategory {
    Audio,
    Image,
}

impl FileCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Audio => "audio",
            Self::Image => "image",
        }
    }
}

/// A successfully stored upload.
pub struct StoredFile {
    /// Path relative to the upload root, e.g. `audio/<uuid>.mp3`.
    pub url: String,
    pub file_name: String,
    pub size: u64,
}

/// Writes and deletes uploads under a fixed root directory.
#[derive(Clone)]
pub struct StorageService {
    root: Arc<PathBuf>,
}

impl StorageService {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Arc::new(root.into()),
        }
    }

    /// Stores an upload and returns its relative URL.
    ///
    /// Empty payloads are rejected. The stored name is a fresh UUID plus the
    /// sanitized extension of the client-supplied name.
    ///
    /// # Arguments
    /// - `category` - Which subdirectory the file belongs in
    /// - `original_name` - Client-supplied file name, used only for its extension
    /// - `bytes` - File contents
    ///
    /// # Returns
    /// - `Ok(StoredFile)` - Relative URL, stored name, and size in bytes
    /// - `Err(AppError)` - Empty payload or filesystem error
    pub async fn store(
        &self,
        category: FileCategory,
        original_name: &str,
        bytes: &[u8],
    ) -> Result<StoredFile, AppError> {
        if bytes.is_empty() {
            return Err(AppError::BadRequest("Uploaded file is empty".to_string()));
        }

        let extension = sanitized_extension(original_name);
        let file_name = match extension {
            Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
            None => Uuid::new_v4().to_string(),
        };

        let dir = self.root.join(category.as_str());
        tokio::fs::create_dir_all(&dir).await?;
        tokio::fs::write(dir.join(&file_name), bytes).await?;

        Ok(StoredFile {
            url: format!("{}/{}", category.as_str(), file_name),
            file_name,
            size: bytes.len() as u64,
        })
    }

    /// Deletes a previously stored file by its relative URL.
    ///
    /// Paths that are absolute or contain parent components are rejected so a
    /// crafted URL cannot reach outside the upload root.
    pub async fn delete(&self, relative_path: &str) -> Result<(), AppError> {
        let path = Path::new(relative_path);

        let escapes_root = path.is_absolute()
            || path
                .components()
                .any(|component| !matches!(component, Component::Normal(_)));
        if escapes_root {
            return Err(AppError::BadRequest("Invalid file path".to_string()));
        }

        let full_path = self.root.join(path);
        if !tokio::fs::try_exists(&full_path).await? {
            return Err(AppError::NotFound("File not found".to_string()));
        }

        tokio::fs::remove_file(full_path).await?;

        Ok(())
    }
}

/// Extracts a lowercase alphanumeric extension, if the name carries a usable
/// one.
fn sanitized_extension(original_name: &str) -> Option<String> {
    let extension = Path::new(original_name).extension()?.to_str()?;

    if extension.is_empty() || !extension.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }

    Some(extension.to_ascii_lowercase())
}
