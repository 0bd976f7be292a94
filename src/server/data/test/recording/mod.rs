use crate::server::{
    data::recording::RecordingRepository,
    model::recording::{RecordingFilters, UpsertRecordingParam},
};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{
        ethnicity::EthnicityFactory, instrument::InstrumentFactory, recording::RecordingFactory,
        user::UserFactory,
    },
};

mod create;
mod find_all;
mod search;
