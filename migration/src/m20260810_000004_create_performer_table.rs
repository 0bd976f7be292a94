use sea_orm_migration::{prelude::*, schema::*};

use super::m20260810_000002_create_ethnicity_table::Ethnicity;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Performer::Table)
                    .if_not_exists()
                    .col(pk_auto(Performer::Id))
                    .col(string_len(Performer::Name, 100))
                    .col(text_null(Performer::Bio))
                    .col(date_null(Performer::BirthDate))
                    .col(date_null(Performer::DeathDate))
                    .col(boolean(Performer::IsMaster).default(false))
                    .col(string_null(Performer::ImageUrl))
                    .col(integer_null(Performer::EthnicityId))
                    .col(timestamp(Performer::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(Performer::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_performer_ethnicity_id")
                            .from(Performer::Table, Performer::EthnicityId)
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
            .drop_table(Table::drop().table(Performer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Performer {
    Table,
    Id,
    Name,
    Bio,
    BirthDate,
    DeathDate,
    IsMaster,
    ImageUrl,
    EthnicityId,
    CreatedAt,
    UpdatedAt,
}
