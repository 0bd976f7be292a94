pub use sea_orm_migration::prelude::*;

mod m20260810_000001_create_user_table;
mod m20260810_000002_create_ethnicity_table;
mod m20260810_000003_create_instrument_table;
mod m20260810_000004_create_performer_table;
mod m20260810_000005_create_performer_instrument_table;
mod m20260810_000006_create_recording_table;
mod m20260810_000007_create_recording_instrument_table;
mod m20260810_000008_create_recording_performer_table;
mod m20260810_000009_create_recording_like_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260810_000001_create_user_table::Migration),
            Box::new(m20260810_000002_create_ethnicity_table::Migration),
            Box::new(m20260810_000003_create_instrument_table::Migration),
            Box::new(m20260810_000004_create_performer_table::Migration),
            Box::new(m20260810_000005_create_performer_instrument_table::Migration),
            Box::new(m20260810_000006_create_recording_table::Migration),
            Box::new(m20260810_000007_create_recording_instrument_table::Migration),
            Box::new(m20260810_000008_create_recording_performer_table::Migration),
            Box::new(m20260810_000009_create_recording_like_table::Migration),
        ]
    }
}
