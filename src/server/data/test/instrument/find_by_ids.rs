use super::*;

/// Tests the batch lookup used for referential checks before linking.
///
/// Expected: only the existing subset comes back
#[tokio::test]
async fn returns_existing_subset() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Instrument)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = InstrumentFactory::new(db).build().await?;
    let second = InstrumentFactory::new(db).build().await?;

    let found = InstrumentRepository::new(db)
        .find_by_ids(&[first.id, second.id, 9999])
        .await?;

    assert_eq!(found.len(), 2);

    Ok(())
}

/// Tests the batch lookup with no ids.
///
/// Expected: empty result without touching the database
#[tokio::test]
async fn empty_input_returns_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Instrument)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = InstrumentRepository::new(db).find_by_ids(&[]).await?;

    assert!(found.is_empty());

    Ok(())
}
