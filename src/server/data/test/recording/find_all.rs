use super::*;

use chrono::{Duration, Utc};

/// Tests that the catalogue lists newest first.
///
/// Expected: rows ordered by descending creation time
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_archive_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let uploader = UserFactory::new(db).build().await?;
    let now = Utc::now();

    RecordingFactory::new(db, uploader.id)
        .title("Oldest")
        .created_at(now - Duration::days(2))
        .build()
        .await?;
    RecordingFactory::new(db, uploader.id)
        .title("Newest")
        .created_at(now)
        .build()
        .await?;
    RecordingFactory::new(db, uploader.id)
        .title("Middle")
        .created_at(now - Duration::days(1))
        .build()
        .await?;

    let all = RecordingRepository::new(db).find_all().await?;

    let titles: Vec<&str> = all.iter().map(|r| r.recording.title.as_str()).collect();
    assert_eq!(titles, vec!["Newest", "Middle", "Oldest"]);

    Ok(())
}
