use super::*;

/// Tests that updating replaces the instrument links instead of appending.
///
/// Expected: only the new instrument remains linked
#[tokio::test]
async fn replaces_instrument_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Ethnicity)
        .with_table(entity::prelude::Instrument)
        .with_table(entity::prelude::Performer)
        .with_table(entity::prelude::PerformerInstrument)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let old_instrument = InstrumentFactory::new(db).build().await?;
    let new_instrument = InstrumentFactory::new(db).build().await?;

    let repo = PerformerRepository::new(db);
    let performer = repo
        .create(PerformerRequest {
            name: "Performer".to_string(),
            bio: None,
            birth_date: None,
            death_date: None,
            is_master: false,
            image_url: None,
            ethnicity_id: None,
            instrument_ids: vec![old_instrument.id],
        })
        .await?;

    repo.update(
        performer.clone(),
        PerformerRequest {
            name: "Performer".to_string(),
            bio: Some("Updated bio".to_string()),
            birth_date: None,
            death_date: None,
            is_master: false,
            image_url: None,
            ethnicity_id: None,
            instrument_ids: vec![new_instrument.id],
        },
    )
    .await?;

    let resolved = repo.find_by_id(performer.id).await?.unwrap();
    assert_eq!(resolved.performer.bio.as_deref(), Some("Updated bio"));
    assert_eq!(resolved.instruments.len(), 1);
    assert_eq!(resolved.instruments[0].id, new_instrument.id);

    Ok(())
}
