use super::*;

/// Tests a first like.
///
/// Expected: liked=true, counter 1, one like row
#[tokio::test]
async fn first_toggle_likes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_archive_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let uploader = UserFactory::new(db).build().await?;
    let fan = UserFactory::new(db).build().await?;
    let recording = RecordingFactory::new(db, uploader.id).build().await?;

    let response = RecordingService::new(db)
        .toggle_like(&fan, recording.id)
        .await
        .unwrap();

    assert!(response.liked);
    assert_eq!(response.like_count, 1);

    let likes = RecordingLikeRepository::new(db);
    assert!(likes.find(fan.id, recording.id).await?.is_some());

    Ok(())
}

/// Tests that toggling twice restores the starting state.
///
/// Expected: counter back to zero and no like row left
#[tokio::test]
async fn double_toggle_restores_state() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_archive_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let uploader = UserFactory::new(db).build().await?;
    let fan = UserFactory::new(db).build().await?;
    let recording = RecordingFactory::new(db, uploader.id).build().await?;

    let service = RecordingService::new(db);
    service.toggle_like(&fan, recording.id).await.unwrap();
    let response = service.toggle_like(&fan, recording.id).await.unwrap();

    assert!(!response.liked);
    assert_eq!(response.like_count, 0);

    let likes = RecordingLikeRepository::new(db);
    assert!(likes.find(fan.id, recording.id).await?.is_none());

    let reread = service.get(recording.id).await.unwrap();
    assert_eq!(reread.recording.like_count, 0);

    Ok(())
}

/// Tests that the counter recount corrects pre-existing drift.
///
/// Expected: the stored counter reflects the live rows after a toggle
#[tokio::test]
async fn recount_heals_drifted_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_archive_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let uploader = UserFactory::new(db).build().await?;
    let fan = UserFactory::new(db).build().await?;
    // Counter deliberately out of sync with the (zero) like rows.
    let recording = RecordingFactory::new(db, uploader.id)
        .like_count(41)
        .build()
        .await?;

    let response = RecordingService::new(db)
        .toggle_like(&fan, recording.id)
        .await
        .unwrap();

    assert!(response.liked);
    assert_eq!(response.like_count, 1);

    Ok(())
}

/// Tests toggling a like on a recording that does not exist.
///
/// Expected: NotFound and no row written
#[tokio::test]
async fn missing_recording_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_archive_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fan = UserFactory::new(db).build().await?;

    let result = RecordingService::new(db).toggle_like(&fan, 4242).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
