use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Instrument::Table)
                    .if_not_exists()
                    .col(pk_auto(Instrument::Id))
                    .col(string_len_uniq(Instrument::Name, 100))
                    .col(text_null(Instrument::Description))
                    .col(string_len(Instrument::Category, 30))
                    .col(string_len_null(Instrument::OriginEthnicity, 100))
                    .col(string_null(Instrument::ImageUrl))
                    .col(timestamp(Instrument::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(Instrument::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Instrument::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Instrument {
    Table,
    Id,
    Name,
    Description,
    Category,
    OriginEthnicity,
    ImageUrl,
    CreatedAt,
    UpdatedAt,
}
