use super::*;

use entity::enums::{RecordingType, Region};

/// Tests that an empty filter set returns the whole catalogue.
///
/// Expected: every recording comes back
#[tokio::test]
async fn no_filters_returns_everything() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_archive_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let uploader = UserFactory::new(db).build().await?;
    RecordingFactory::new(db, uploader.id).build().await?;
    RecordingFactory::new(db, uploader.id).build().await?;

    let results = RecordingRepository::new(db)
        .search(&RecordingFilters::default())
        .await?;

    assert_eq!(results.len(), 2);

    Ok(())
}

/// Tests keyword matching against title and description.
///
/// Expected: substring hits on either column
#[tokio::test]
async fn keyword_matches_title_and_description() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_archive_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let uploader = UserFactory::new(db).build().await?;
    RecordingFactory::new(db, uploader.id)
        .title("Quan ho duet")
        .build()
        .await?;
    RecordingFactory::new(db, uploader.id)
        .title("Lullaby")
        .description("A quan ho inspired melody")
        .build()
        .await?;
    RecordingFactory::new(db, uploader.id)
        .title("Gong ensemble")
        .build()
        .await?;

    let results = RecordingRepository::new(db)
        .search(&RecordingFilters {
            keyword: Some("quan ho".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(results.len(), 2);

    Ok(())
}

/// Tests that a keyword overrides the structured filters.
///
/// Expected: the region filter is ignored while the keyword is present
#[tokio::test]
async fn keyword_wins_over_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_archive_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let uploader = UserFactory::new(db).build().await?;
    RecordingFactory::new(db, uploader.id)
        .title("Highland chant")
        .region(Region::CentralHighlands)
        .build()
        .await?;

    let results = RecordingRepository::new(db)
        .search(&RecordingFilters {
            keyword: Some("Highland".to_string()),
            region: Some(Region::MekongDelta),
            ..Default::default()
        })
        .await?;

    assert_eq!(results.len(), 1);

    Ok(())
}

/// Tests ANDed structured filters.
///
/// Expected: only rows matching both type and region
#[tokio::test]
async fn filters_are_anded() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_archive_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let uploader = UserFactory::new(db).build().await?;
    RecordingFactory::new(db, uploader.id)
        .title("Match")
        .recording_type(RecordingType::FolkSong)
        .region(Region::RedRiverDelta)
        .build()
        .await?;
    RecordingFactory::new(db, uploader.id)
        .title("Wrong region")
        .recording_type(RecordingType::FolkSong)
        .region(Region::MekongDelta)
        .build()
        .await?;
    RecordingFactory::new(db, uploader.id)
        .title("Wrong type")
        .recording_type(RecordingType::Ceremonial)
        .region(Region::RedRiverDelta)
        .build()
        .await?;

    let results = RecordingRepository::new(db)
        .search(&RecordingFilters {
            recording_type: Some(RecordingType::FolkSong),
            region: Some(Region::RedRiverDelta),
            ..Default::default()
        })
        .await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].recording.title, "Match");

    Ok(())
}

/// Tests filtering by a linked instrument.
///
/// Expected: only recordings linked to that instrument
#[tokio::test]
async fn filters_by_instrument_link() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_archive_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let uploader = UserFactory::new(db).build().await?;
    let instrument = InstrumentFactory::new(db).build().await?;

    let repo = RecordingRepository::new(db);
    let linked = repo
        .create(
            uploader.id,
            UpsertRecordingParam {
                title: "With instrument".to_string(),
                audio_url: "audio/a.mp3".to_string(),
                instrument_ids: vec![instrument.id],
                ..Default::default()
            },
        )
        .await?;
    RecordingFactory::new(db, uploader.id)
        .title("Without instrument")
        .build()
        .await?;

    let results = repo
        .search(&RecordingFilters {
            instrument_id: Some(instrument.id),
            ..Default::default()
        })
        .await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].recording.id, linked.id);

    Ok(())
}
