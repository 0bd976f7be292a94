use crate::server::service::token::TokenService;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::user::UserFactory};

mod verify;
