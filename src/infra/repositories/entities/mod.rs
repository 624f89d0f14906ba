//! SeaORM entities backing the repositories.

pub mod message;
pub mod user;
