use super::*;

/// Tests the live recount that feeds the denormalized counter.
///
/// Expected: counts only rows for the requested recording
#[tokio::test]
async fn counts_rows_per_recording() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_archive_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let uploader = UserFactory::new(db).build().await?;
    let first_fan = UserFactory::new(db).build().await?;
    let second_fan = UserFactory::new(db).build().await?;

    let liked = RecordingFactory::new(db, uploader.id).build().await?;
    let other = RecordingFactory::new(db, uploader.id).build().await?;

    let repo = RecordingLikeRepository::new(db);
    repo.insert(first_fan.id, liked.id).await?;
    repo.insert(second_fan.id, liked.id).await?;
    repo.insert(first_fan.id, other.id).await?;

    assert_eq!(repo.count_for_recording(liked.id).await?, 2);
    assert_eq!(repo.count_for_recording(other.id).await?, 1);

    Ok(())
}
