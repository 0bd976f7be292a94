use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260810_000001_create_user_table::User, m20260810_000002_create_ethnicity_table::Ethnicity,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Recording::Table)
                    .if_not_exists()
                    .col(pk_auto(Recording::Id))
                    .col(string_len(Recording::Title, 200))
                    .col(text_null(Recording::Description))
                    .col(string(Recording::AudioUrl))
                    .col(string_null(Recording::CoverImageUrl))
                    .col(integer_null(Recording::DurationSeconds))
                    .col(string_len_null(Recording::RecordingType, 30))
                    .col(string_len_null(Recording::Region, 30))
                    .col(date_null(Recording::RecordingDate))
                    .col(string_len_null(Recording::RecordingLocation, 200))
                    .col(string_len_null(Recording::CeremonialContext, 200))
                    .col(string_len(Recording::VerificationStatus, 20).default("PENDING"))
                    .col(big_integer(Recording::PlayCount).default(0))
                    .col(big_integer(Recording::LikeCount).default(0))
                    .col(big_integer(Recording::DownloadCount).default(0))
                    .col(integer(Recording::UploaderId))
                    .col(integer_null(Recording::EthnicityId))
                    .col(timestamp(Recording::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(Recording::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recording_uploader_id")
                            .from(Recording::Table, Recording::UploaderId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recording_ethnicity_id")
                            .from(Recording::Table, Recording::EthnicityId)
                            .to(Ethnicity::Table, Ethnicity::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Recording::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Recording {
    Table,
    Id,
    Title,
    Description,
    AudioUrl,
    CoverImageUrl,
    DurationSeconds,
    RecordingType,
    Region,
    RecordingDate,
    RecordingLocation,
    CeremonialContext,
    VerificationStatus,
    PlayCount,
    LikeCount,
    DownloadCount,
    UploaderId,
    EthnicityId,
    CreatedAt,
    UpdatedAt,
}
