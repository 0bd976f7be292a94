use super::*;

/// Tests inserting a performer with ethnicity and instrument links.
///
/// Expected: Ok, and the resolved view carries both relations
#[tokio::test]
async fn creates_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Ethnicity)
        .with_table(entity::prelude::Instrument)
        .with_table(entity::prelude::Performer)
        .with_table(entity::prelude::PerformerInstrument)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ethnicity = EthnicityFactory::new(db).name("Ede").build().await?;
    let instrument = InstrumentFactory::new(db).name("Gong").build().await?;

    let repo = PerformerRepository::new(db);
    let performer = repo
        .create(PerformerRequest {
            name: "Y Moan".to_string(),
            bio: None,
            birth_date: None,
            death_date: None,
            is_master: true,
            image_url: None,
            ethnicity_id: Some(ethnicity.id),
            instrument_ids: vec![instrument.id],
        })
        .await?;

    let resolved = repo.find_by_id(performer.id).await?.unwrap();
    assert_eq!(resolved.performer.name, "Y Moan");
    assert_eq!(resolved.ethnicity.map(|e| e.id), Some(ethnicity.id));
    assert_eq!(resolved.instruments.len(), 1);
    assert_eq!(resolved.instruments[0].id, instrument.id);

    Ok(())
}
