use super::*;

/// Tests the resolved lookup for a performer without relations.
///
/// Expected: Ok(Some) with no ethnicity and no instruments
#[tokio::test]
async fn resolves_performer_without_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Ethnicity)
        .with_table(entity::prelude::Instrument)
        .with_table(entity::prelude::Performer)
        .with_table(entity::prelude::PerformerInstrument)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let performer = PerformerFactory::new(db).build().await?;

    let resolved = PerformerRepository::new(db)
        .find_by_id(performer.id)
        .await?
        .unwrap();

    assert!(resolved.ethnicity.is_none());
    assert!(resolved.instruments.is_empty());

    Ok(())
}

/// Tests an unknown id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn unknown_id_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Ethnicity)
        .with_table(entity::prelude::Instrument)
        .with_table(entity::prelude::Performer)
        .with_table(entity::prelude::PerformerInstrument)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let resolved = PerformerRepository::new(db).find_by_id(42).await?;

    assert!(resolved.is_none());

    Ok(())
}
