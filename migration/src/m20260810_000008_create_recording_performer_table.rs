use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260810_000004_create_performer_table::Performer,
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
                    .table(RecordingPerformer::Table)
                    .if_not_exists()
                    .col(integer(RecordingPerformer::RecordingId))
                    .col(integer(RecordingPerformer::PerformerId))
                    .primary_key(
                        Index::create()
                            .col(RecordingPerformer::RecordingId)
                            .col(RecordingPerformer::PerformerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recording_performer_recording_id")
                            .from(RecordingPerformer::Table, RecordingPerformer::RecordingId)
                            .to(Recording::Table, Recording::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recording_performer_performer_id")
                            .from(RecordingPerformer::Table, RecordingPerformer::PerformerId)
                            .to(Performer::Table, Performer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RecordingPerformer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RecordingPerformer {
    Table,
    RecordingId,
    PerformerId,
}
