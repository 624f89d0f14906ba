//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `migrate` - Database migrations
//! - `drivers` - Render the driver board against a running server

pub mod args;

pub use args::{Cli, Commands};
