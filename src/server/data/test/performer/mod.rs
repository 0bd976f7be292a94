use crate::{model::performer::PerformerRequest, server::data::performer::PerformerRepository};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{
        ethnicity::EthnicityFactory, instrument::InstrumentFactory, performer::PerformerFactory,
    },
};

mod create;
mod find_by_id;
mod update;
