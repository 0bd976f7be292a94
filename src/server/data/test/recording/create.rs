use super::*;

use entity::enums::VerificationStatus;

/// Tests inserting a recording with links.
///
/// Expected: pending status, zeroed counters, and the instrument linked
#[tokio::test]
async fn creates_pending_with_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_archive_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let uploader = UserFactory::new(db).build().await?;
    let ethnicity = EthnicityFactory::new(db).build().await?;
    let instrument = InstrumentFactory::new(db).build().await?;

    let repo = RecordingRepository::new(db);
    let recording = repo
        .create(
            uploader.id,
            UpsertRecordingParam {
                title: "Xoan singing".to_string(),
                audio_url: "audio/xoan.mp3".to_string(),
                ethnicity_id: Some(ethnicity.id),
                instrument_ids: vec![instrument.id],
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(recording.verification_status, VerificationStatus::Pending);
    assert_eq!(recording.play_count, 0);
    assert_eq!(recording.like_count, 0);
    assert_eq!(recording.download_count, 0);

    let resolved = repo.find_by_id(recording.id).await?.unwrap();
    assert_eq!(resolved.uploader.id, uploader.id);
    assert_eq!(resolved.ethnicity.map(|e| e.id), Some(ethnicity.id));
    assert_eq!(resolved.instruments.len(), 1);
    assert!(resolved.performers.is_empty());

    Ok(())
}

/// Tests that a failing link insert rolls the recording back.
///
/// Expected: the create errors on the broken instrument id and no
/// recording row is left behind
#[tokio::test]
async fn failed_link_insert_leaves_no_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_archive_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let uploader = UserFactory::new(db).build().await?;

    let repo = RecordingRepository::new(db);
    let result = repo
        .create(
            uploader.id,
            UpsertRecordingParam {
                title: "Gong ensemble".to_string(),
                audio_url: "audio/gong.mp3".to_string(),
                instrument_ids: vec![9999],
                ..Default::default()
            },
        )
        .await;

    assert!(result.is_err());
    assert!(repo.find_all().await?.is_empty());

    Ok(())
}

/// Tests that a failing update keeps the previous links.
///
/// Expected: the update errors on the broken performer id and the
/// original instrument link survives
#[tokio::test]
async fn failed_update_keeps_existing_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_archive_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let uploader = UserFactory::new(db).build().await?;
    let instrument = InstrumentFactory::new(db).build().await?;

    let repo = RecordingRepository::new(db);
    let recording = repo
        .create(
            uploader.id,
            UpsertRecordingParam {
                title: "Then singing".to_string(),
                audio_url: "audio/then.mp3".to_string(),
                instrument_ids: vec![instrument.id],
                ..Default::default()
            },
        )
        .await?;
    let recording_id = recording.id;

    let result = repo
        .update(
            recording,
            UpsertRecordingParam {
                title: "Then singing (revised)".to_string(),
                audio_url: "audio/then.mp3".to_string(),
                performer_ids: vec![9999],
                ..Default::default()
            },
        )
        .await;

    assert!(result.is_err());

    let resolved = repo.find_by_id(recording_id).await?.unwrap();
    assert_eq!(resolved.recording.title, "Then singing");
    assert_eq!(resolved.instruments.len(), 1);

    Ok(())
}

/// Tests that deleting the uploader cascades to their recordings.
///
/// Expected: the recording row disappears with the user
#[tokio::test]
async fn uploader_delete_cascades() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_archive_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let uploader = UserFactory::new(db).build().await?;
    let recording = RecordingFactory::new(db, uploader.id).build().await?;

    use sea_orm::EntityTrait;
    entity::prelude::User::delete_by_id(uploader.id)
        .exec(db)
        .await?;

    let repo = RecordingRepository::new(db);
    assert!(repo.find_model(recording.id).await?.is_none());

    Ok(())
}
