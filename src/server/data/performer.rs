//! Performer repository.
//!
//! Performers carry two relations resolved here: an optional ethnicity and a
//! many-to-many link to the instruments they play.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, LoaderTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::model::performer::PerformerRequest;

/// A performer with its relations resolved.
pub struct PerformerWithRelations {
    pub performer: entity::performer::Model,
    pub ethnicity: Option<entity::ethnicity::Model>,
    pub instruments: Vec<entity::instrument::Model>,
}

pub struct PerformerRepository<'a, C: ConnectionTrait + TransactionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait + TransactionTrait> PerformerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists all performers with relations, ordered by name.
    pub async fn find_all(&self) -> Result<Vec<PerformerWithRelations>, DbErr> {
        let performers = entity::prelude::Performer::find()
            .order_by_asc(entity::performer::Column::Name)
            .all(self.db)
            .await?;

        self.resolve_relations(performers).await
    }

    /// Lists performers recognised as masters, ordered by name.
    pub async fn find_masters(&self) -> Result<Vec<PerformerWithRelations>, DbErr> {
        let performers = entity::prelude::Performer::find()
            .filter(entity::performer::Column::IsMaster.eq(true))
            .order_by_asc(entity::performer::Column::Name)
            .all(self.db)
            .await?;

        self.resolve_relations(performers).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<PerformerWithRelations>, DbErr> {
        let Some(performer) = entity::prelude::Performer::find_by_id(id).one(self.db).await?
        else {
            return Ok(None);
        };

        let mut resolved = self.resolve_relations(vec![performer]).await?;

        Ok(resolved.pop())
    }

    pub async fn find_model(&self, id: i32) -> Result<Option<entity::performer::Model>, DbErr> {
        entity::prelude::Performer::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::performer::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Performer::find()
            .filter(entity::performer::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Inserts a performer and links the given instruments.
    ///
    /// Row and link writes share one transaction, so a failed link insert
    /// leaves no orphan performer behind.
    pub async fn create(&self, param: PerformerRequest) -> Result<entity::performer::Model, DbErr> {
        let txn = self.db.begin().await?;
        let now = chrono::Utc::now();

        let performer = entity::performer::ActiveModel {
            name: ActiveValue::Set(param.name),
            bio: ActiveValue::Set(param.bio),
            birth_date: ActiveValue::Set(param.birth_date),
            death_date: ActiveValue::Set(param.death_date),
            is_master: ActiveValue::Set(param.is_master),
            image_url: ActiveValue::Set(param.image_url),
            ethnicity_id: ActiveValue::Set(param.ethnicity_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        set_instruments(&txn, performer.id, &param.instrument_ids).await?;

        txn.commit().await?;

        Ok(performer)
    }

    /// Rewrites a performer's fields and instrument links in one transaction.
    pub async fn update(
        &self,
        existing: entity::performer::Model,
        param: PerformerRequest,
    ) -> Result<entity::performer::Model, DbErr> {
        let txn = self.db.begin().await?;
        let id = existing.id;

        let mut active: entity::performer::ActiveModel = existing.into();
        active.name = ActiveValue::Set(param.name);
        active.bio = ActiveValue::Set(param.bio);
        active.birth_date = ActiveValue::Set(param.birth_date);
        active.death_date = ActiveValue::Set(param.death_date);
        active.is_master = ActiveValue::Set(param.is_master);
        active.image_url = ActiveValue::Set(param.image_url);
        active.ethnicity_id = ActiveValue::Set(param.ethnicity_id);
        active.updated_at = ActiveValue::Set(chrono::Utc::now());

        let performer = active.update(&txn).await?;

        set_instruments(&txn, id, &param.instrument_ids).await?;

        txn.commit().await?;

        Ok(performer)
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Performer::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn resolve_relations(
        &self,
        performers: Vec<entity::performer::Model>,
    ) -> Result<Vec<PerformerWithRelations>, DbErr> {
        let ethnicities = performers
            .load_one(entity::prelude::Ethnicity, self.db)
            .await?;
        let instruments = performers
            .load_many_to_many(
                entity::prelude::Instrument,
                entity::prelude::PerformerInstrument,
                self.db,
            )
            .await?;

        Ok(performers
            .into_iter()
            .zip(ethnicities)
            .zip(instruments)
            .map(|((performer, ethnicity), instruments)| PerformerWithRelations {
                performer,
                ethnicity,
                instruments,
            })
            .collect())
    }
}

/// Replaces the performer's instrument links with the given set.
///
/// Runs over the caller's transaction so link failures roll back with the
/// performer write.
async fn set_instruments<C: ConnectionTrait>(
    conn: &C,
    performer_id: i32,
    instrument_ids: &[i32],
) -> Result<(), DbErr> {
    entity::prelude::PerformerInstrument::delete_many()
        .filter(entity::performer_instrument::Column::PerformerId.eq(performer_id))
        .exec(conn)
        .await?;

    for instrument_id in instrument_ids {
        entity::performer_instrument::ActiveModel {
            performer_id: ActiveValue::Set(performer_id),
            instrument_id: ActiveValue::Set(*instrument_id),
        }
        .insert(conn)
        .await?;
    }

    Ok(())
}
