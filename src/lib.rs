//! Ride admin - backend and admin tooling for a ride-hailing platform
//!
//! This crate provides the administrative backend (user records and the
//! contact-message inbox over a relational store, exposed as a REST API)
//! and the driver-board list view that consumes it.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities
//! - **infra**: Infrastructure concerns (database, repositories)
//! - **services**: Application use cases
//! - **api**: HTTP handlers and routes
//! - **types**: Shared types (pagination, responses)
//! - **view**: Driver board state machine and table rendering
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Render the accepted-drivers tab
//! cargo run -- drivers --tab 1
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;
pub mod view;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{User, UserProfile, UserStatus, UserType};
pub use errors::{AppError, AppResult};
