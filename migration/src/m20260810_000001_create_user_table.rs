use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_len_uniq(User::Username, 50))
                    .col(string_len_uniq(User::Email, 100))
                    .col(string(User::PasswordHash))
                    .col(string_len_null(User::FullName, 100))
                    .col(string_len(User::Role, 20).default("USER"))
                    .col(boolean(User::IsActive).default(true))
                    .col(string_null(User::AvatarUrl))
                    .col(text_null(User::Bio))
                    .col(timestamp(User::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(User::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    FullName,
    Role,
    IsActive,
    AvatarUrl,
    Bio,
    CreatedAt,
    UpdatedAt,
}
