use super::*;

/// Tests deleting a stored file by its relative URL.
///
/// Expected: Ok and the file gone from disk
#[tokio::test]
async fn deletes_stored_file() {
    let dir = tempfile::tempdir().unwrap();
    let storage = StorageService::new(dir.path());

    let stored = storage
        .store(FileCategory::Image, "cover.jpg", b"jpeg-data")
        .await
        .unwrap();

    storage.delete(&stored.url).await.unwrap();

    assert!(!dir.path().join(&stored.url).exists());
}

/// Tests parent traversal in the path.
///
/// Expected: BadRequest without touching the filesystem
#[tokio::test]
async fn rejects_parent_traversal() {
    let dir = tempfile::tempdir().unwrap();
    let storage = StorageService::new(dir.path());

    let result = storage.delete("audio/../../etc/passwd").await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

/// Tests an absolute path.
///
/// Expected: BadRequest
#[tokio::test]
async fn rejects_absolute_path() {
    let dir = tempfile::tempdir().unwrap();
    let storage = StorageService::new(dir.path());

    let result = storage.delete("/etc/passwd").await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

/// Tests a path inside the root that does not exist.
///
/// Expected: NotFound
#[tokio::test]
async fn missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let storage = StorageService::new(dir.path());

    let result = storage.delete("audio/ghost.mp3").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}
