use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ethnicity::Table)
                    .if_not_exists()
                    .col(pk_auto(Ethnicity::Id))
                    .col(string_len_uniq(Ethnicity::Name, 100))
                    .col(text_null(Ethnicity::Description))
                    .col(string_null(Ethnicity::Population))
                    .col(string_len_null(Ethnicity::Location, 200))
                    .col(string_null(Ethnicity::ImageUrl))
                    .col(timestamp(Ethnicity::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(Ethnicity::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ethnicity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Ethnicity {
    Table,
    Id,
    Name,
    Description,
    Population,
    Location,
    ImageUrl,
    CreatedAt,
    UpdatedAt,
}
