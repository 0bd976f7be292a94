use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260810_000001_create_user_table::User, m20260810_000006_create_recording_table::Recording,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RecordingLike::Table)
                    .if_not_exists()
                    .col(pk_auto(RecordingLike::Id))
                    .col(integer(RecordingLike::UserId))
                    .col(integer(RecordingLike::RecordingId))
                    .col(timestamp(RecordingLike::CreatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recording_like_user_id")
                            .from(RecordingLike::Table, RecordingLike::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recording_like_recording_id")
                            .from(RecordingLike::Table, RecordingLike::RecordingId)
                            .to(Recording::Table, Recording::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A user may like a given recording at most once.
        manager
            .create_index(
                Index::create()
                    .name("idx_recording_like_user_recording")
                    .table(RecordingLike::Table)
                    .col(RecordingLike::UserId)
                    .col(RecordingLike::RecordingId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RecordingLike::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RecordingLike {
    Table,
    Id,
    UserId,
    RecordingId,
    CreatedAt,
}
