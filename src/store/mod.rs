//! JSON file store.
//!
//! A single JSON document on disk is the source of truth for all users and
//! their to-do lists.

mod repository;

pub use repository::*;

use std::path::Path;

use crate::errors::AppError;
use crate::models::Document;

/// Create an empty document at `data_path` unless a file already exists there.
///
/// Returns `true` when a new document was written.
pub async fn init_document(data_path: &Path) -> Result<bool, AppError> {
    if tokio::fs::try_exists(data_path).await? {
        return Ok(false);
    }

    // Ensure the parent directory exists
    if let Some(parent) = data_path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    Store::new(data_path).commit(&Document::default()).await?;
    Ok(true)
}

/// Serialize `document` with two-space indentation and swap it into place.
///
/// The bytes go to a sibling temp file first, so readers see either the old
/// or the new document, never a partial one.
pub(crate) async fn write_atomically(data_path: &Path, document: &Document) -> Result<(), AppError> {
    use tokio::io::AsyncWriteExt;

    let json = serde_json::to_vec_pretty(document)?;
    let tmp_path = temp_path_for(data_path);

    let mut file = tokio::fs::File::create(&tmp_path).await?;
    file.write_all(&json).await?;
    file.sync_all().await?;
    drop(file);

    if let Err(e) = tokio::fs::rename(&tmp_path, data_path).await {
        tokio::fs::remove_file(&tmp_path).await.ok();
        return Err(e.into());
    }

    Ok(())
}

fn temp_path_for(data_path: &Path) -> std::path::PathBuf {
    let file_name = data_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "data.json".to_string());
    data_path.with_file_name(format!(".{}.tmp", file_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_init_creates_empty_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("data.json");

        assert!(init_document(&path).await.unwrap());

        let raw = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(raw, "{\n  \"users\": [],\n  \"userTodoLists\": {}\n}");
    }

    #[tokio::test]
    async fn test_init_leaves_existing_file_alone() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");
        tokio::fs::write(&path, "keep me").await.unwrap();

        assert!(!init_document(&path).await.unwrap());
        assert_eq!(tokio::fs::read_to_string(&path).await.unwrap(), "keep me");
    }

    #[tokio::test]
    async fn test_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");

        write_atomically(&path, &Document::default()).await.unwrap();

        let mut entries = tokio::fs::read_dir(temp_dir.path()).await.unwrap();
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await.unwrap() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        assert_eq!(names, vec!["data.json".to_string()]);
    }
}
