//! Infrastructure layer - External systems integration
//!
//! This module handles the database connection, schema migrations,
//! and the repositories built on top of them.

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{MessageRepository, MessageStore, UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockMessageRepository, MockUserRepository};
