use crate::{
    model::auth::{LoginRequest, RegisterRequest},
    server::{
        error::{auth::AuthError, AppError},
        service::{auth::AuthService, token::TokenService},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::user::UserFactory};

mod login;
mod register;

fn register_request(username: &str, email: &str) -> RegisterRequest {
    RegisterRequest {
        username: username.to_string(),
        email: email.to_string(),
        password: "correct-horse".to_string(),
        full_name: None,
    }
}
