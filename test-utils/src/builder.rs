use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add entity tables with `with_table()` (in dependency order — tables with
/// foreign keys after their referenced tables), then call `build()` to get
/// a `TestContext` with those tables created.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// The CREATE TABLE statement is generated from the SeaORM entity using
    /// SQLite syntax and executed during `build()`.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every table of the archive schema in dependency order.
    ///
    /// Use this for recording tests, which touch users, reference entities,
    /// the join tables, and likes.
    pub fn with_archive_tables(self) -> Self {
        self.with_table(User)
            .with_table(Ethnicity)
            .with_table(Instrument)
            .with_table(Performer)
            .with_table(PerformerInstrument)
            .with_table(Recording)
            .with_table(RecordingInstrument)
            .with_table(RecordingPerformer)
            .with_table(RecordingLike)
    }

    /// Builds the test context and creates the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with connected database and schema applied
    /// - `Err(TestError::Database)` - Connection or table creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();
        context.with_tables(self.tables).await?;
        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
