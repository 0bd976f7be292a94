use super::*;

/// Tests inserting a group with all optional fields set.
///
/// Expected: Ok with every field persisted
#[tokio::test]
async fn creates_with_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Ethnicity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = EthnicityRepository::new(db)
        .create(EthnicityRequest {
            name: "H'Mong".to_string(),
            description: Some("Highland group of the northern mountains".to_string()),
            population: Some("1.4 million".to_string()),
            location: Some("Ha Giang, Lao Cai".to_string()),
            image_url: Some("image/hmong.jpg".to_string()),
        })
        .await?;

    assert_eq!(created.name, "H'Mong");
    assert_eq!(created.population.as_deref(), Some("1.4 million"));
    assert_eq!(created.location.as_deref(), Some("Ha Giang, Lao Cai"));

    Ok(())
}

/// Tests the name existence check used before writes.
///
/// Expected: true only for persisted names
#[tokio::test]
async fn name_exists_reflects_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Ethnicity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    EthnicityFactory::new(db).name("Thai").build().await?;

    let repo = EthnicityRepository::new(db);

    assert!(repo.name_exists("Thai").await?);
    assert!(!repo.name_exists("Cham").await?);

    Ok(())
}
