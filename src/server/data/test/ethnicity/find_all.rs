use super::*;

/// Tests that listing returns every group ordered by name.
///
/// Expected: Ok with rows sorted alphabetically regardless of insert order
#[tokio::test]
async fn lists_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Ethnicity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    EthnicityFactory::new(db).name("Tay").build().await?;
    EthnicityFactory::new(db).name("Ede").build().await?;
    EthnicityFactory::new(db).name("Muong").build().await?;

    let all = EthnicityRepository::new(db).find_all().await?;

    let names: Vec<&str> = all.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Ede", "Muong", "Tay"]);

    Ok(())
}
