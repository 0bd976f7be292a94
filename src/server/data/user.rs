//! User account repository.
//!
//! Handles account creation and the lookups used by registration, login, and
//! bearer token resolution.

use entity::enums::UserRole;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

/// New account parameters. The password arrives already hashed.
pub struct CreateUserParam {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub full_name: Option<String>,
}

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new account with the default `USER` role, active.
    ///
    /// # Arguments
    /// - `param` - Account fields with the password already hashed
    ///
    /// # Returns
    /// - `Ok(Model)` - The persisted account
    /// - `Err(DbErr)` - Database error, including unique constraint violations
    pub async fn create(&self, param: CreateUserParam) -> Result<entity::user::Model, DbErr> {
        let now = chrono::Utc::now();

        entity::user::ActiveModel {
            username: ActiveValue::Set(param.username),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            full_name: ActiveValue::Set(param.full_name),
            role: ActiveValue::Set(UserRole::User),
            is_active: ActiveValue::Set(true),
            avatar_url: ActiveValue::Set(None),
            bio: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Finds an account by username or email, whichever matches.
    ///
    /// Login accepts either identifier in a single field, so both columns are
    /// checked with one query.
    pub async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(
                entity::user::Column::Username
                    .eq(identifier)
                    .or(entity::user::Column::Email.eq(identifier)),
            )
            .one(self.db)
            .await
    }

    pub async fn username_exists(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
