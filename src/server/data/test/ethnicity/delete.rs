use super::*;

/// Tests deleting a persisted group.
///
/// Expected: one row affected and the row gone afterwards
#[tokio::test]
async fn deletes_existing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Ethnicity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = EthnicityFactory::new(db).build().await?;

    let repo = EthnicityRepository::new(db);
    let deleted = repo.delete(existing.id).await?;

    assert_eq!(deleted, 1);
    assert!(repo.find_by_id(existing.id).await?.is_none());

    Ok(())
}

/// Tests deleting an id that does not exist.
///
/// Expected: zero rows affected
#[tokio::test]
async fn deleting_unknown_id_affects_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Ethnicity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = EthnicityRepository::new(db).delete(9999).await?;

    assert_eq!(deleted, 0);

    Ok(())
}
