use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260810_000003_create_instrument_table::Instrument,
    m20260810_000004_create_performer_table::Performer,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PerformerInstrument::Table)
                    .if_not_exists()
                    .col(integer(PerformerInstrument::PerformerId))
                    .col(integer(PerformerInstrument::InstrumentId))
                    .primary_key(
                        Index::create()
                            .col(PerformerInstrument::PerformerId)
                            .col(PerformerInstrument::InstrumentId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_performer_instrument_performer_id")
                            .from(PerformerInstrument::Table, PerformerInstrument::PerformerId)
                            .to(Performer::Table, Performer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_performer_instrument_instrument_id")
                            .from(
                                PerformerInstrument::Table,
                                PerformerInstrument::InstrumentId,
                            )
                            .to(Instrument::Table, Instrument::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PerformerInstrument::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PerformerInstrument {
    Table,
    PerformerId,
    InstrumentId,
}
