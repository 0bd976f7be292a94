use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260810_000003_create_instrument_table::Instrument,
    m20260810_000006_create_recording_table::Recording,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RecordingInstrument::Table)
                    .if_not_exists()
                    .col(integer(RecordingInstrument::RecordingId))
                    .col(integer(RecordingInstrument::InstrumentId))
                    .primary_key(
                        Index::create()
                            .col(RecordingInstrument::RecordingId)
                            .col(RecordingInstrument::InstrumentId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recording_instrument_recording_id")
                            .from(RecordingInstrument::Table, RecordingInstrument::RecordingId)
                            .to(Recording::Table, Recording::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recording_instrument_instrument_id")
                            .from(
                                RecordingInstrument::Table,
                                RecordingInstrument::InstrumentId,
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
            .drop_table(Table::drop().table(RecordingInstrument::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RecordingInstrument {
    Table,
    RecordingId,
    InstrumentId,
}
