use super::*;

/// Tests storing an audio file.
///
/// Expected: a uuid-named file under `audio/` with the original extension
#[tokio::test]
async fn stores_under_category_with_extension() {
    let dir = tempfile::tempdir().unwrap();
    let storage = StorageService::new(dir.path());

    let stored = storage
        .store(FileCategory::Audio, "field-recording.MP3", b"riff-data")
        .await
        .unwrap();

    assert!(stored.url.starts_with("audio/"));
    assert!(stored.url.ends_with(".mp3"));
    assert_eq!(stored.size, 9);

    let on_disk = tokio::fs::read(dir.path().join(&stored.url)).await.unwrap();
    assert_eq!(on_disk, b"riff-data");
}

/// Tests that two uploads of the same name never collide.
///
/// Expected: distinct stored names
#[tokio::test]
async fn same_name_never_collides() {
    let dir = tempfile::tempdir().unwrap();
    let storage = StorageService::new(dir.path());

    let first = storage
        .store(FileCategory::Image, "cover.png", b"a")
        .await
        .unwrap();
    let second = storage
        .store(FileCategory::Image, "cover.png", b"b")
        .await
        .unwrap();

    assert_ne!(first.url, second.url);
}

/// Tests an empty payload.
///
/// Expected: BadRequest and nothing written
#[tokio::test]
async fn rejects_empty_payload() {
    let dir = tempfile::tempdir().unwrap();
    let storage = StorageService::new(dir.path());

    let result = storage.store(FileCategory::Audio, "empty.mp3", b"").await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

/// Tests a name without a usable extension.
///
/// Expected: stored without an extension rather than failing
#[tokio::test]
async fn handles_missing_extension() {
    let dir = tempfile::tempdir().unwrap();
    let storage = StorageService::new(dir.path());

    let stored = storage
        .store(FileCategory::Audio, "no-extension", b"data")
        .await
        .unwrap();

    assert!(!stored.file_name.contains('.'));
}
