//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the archive,
//! including API endpoints, business logic, data access, and infrastructure
//! services. The backend uses Axum as the web framework and SeaORM for
//! database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations against the entity crate
//! - **Model Layer** (`model/`) - Operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token authentication guards
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, token signer, file storage)
//! - **Startup** (`startup`) - Database connection and migration on boot
//! - **Router** (`router`) - Axum route configuration
//!
//! # Request Flow
//!
//! A typical request flows through these layers:
//!
//! 1. **Router** receives HTTP request and routes to the appropriate controller
//! 2. **Controller** authenticates where required, validates input, calls a service
//! 3. **Service** executes business logic, orchestrates data operations
//! 4. **Data** queries the database and returns entity models
//! 5. **Controller** converts the result to a DTO and returns the HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
