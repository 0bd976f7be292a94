//! Shared testing utilities for the archive backend.
//!
//! Provides a builder for in-memory SQLite test databases whose schema is
//! generated from the entity models, plus factories that insert entities
//! with sensible defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::User;
//!
//! #[tokio::test]
//! async fn test_user_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_table(User).build().await?;
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
