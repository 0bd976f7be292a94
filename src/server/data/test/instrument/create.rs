use super::*;

/// Tests inserting an instrument and reading it back.
///
/// Expected: Ok with category and origin persisted
#[tokio::test]
async fn creates_instrument() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Instrument)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InstrumentRepository::new(db);
    let created = repo
        .create(InstrumentRequest {
            name: "Dan bau".to_string(),
            description: Some("Monochord zither".to_string()),
            category: InstrumentCategory::String,
            origin_ethnicity: Some("Kinh".to_string()),
            image_url: None,
        })
        .await?;

    let reread = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(reread.name, "Dan bau");
    assert_eq!(reread.category, InstrumentCategory::String);
    assert_eq!(reread.origin_ethnicity.as_deref(), Some("Kinh"));

    Ok(())
}
