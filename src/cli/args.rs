//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

use crate::config::{
    BOARD_PAGE_SIZE_OPTIONS, DEFAULT_BOARD_PAGE_SIZE, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Ride admin - backend and admin tooling for the ride-hailing platform
#[derive(Parser, Debug)]
#[command(name = "ride-admin")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Run database migrations
    Migrate(MigrateArgs),

    /// Render one page of the driver board
    Drivers(DriversArgs),
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long, default_value = DEFAULT_SERVER_HOST, env = "SERVER_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_SERVER_PORT, env = "SERVER_PORT")]
    pub port: u16,
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

/// Arguments for the drivers command
#[derive(Parser, Debug)]
pub struct DriversArgs {
    /// Tab to render: 0 = pending, 1 = accepted, 2 = rejected
    #[arg(short, long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=2))]
    pub tab: u8,

    /// 0-indexed page to show
    #[arg(short, long, default_value_t = 0)]
    pub page: u64,

    /// Rows per page
    #[arg(short = 's', long, default_value_t = DEFAULT_BOARD_PAGE_SIZE, value_parser = parse_page_size)]
    pub page_size: u64,
}

/// Accept only the rows-per-page choices the board offers
fn parse_page_size(s: &str) -> Result<u64, String> {
    let value: u64 = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if BOARD_PAGE_SIZE_OPTIONS.contains(&value) {
        Ok(value)
    } else {
        Err(format!("must be one of {:?}", BOARD_PAGE_SIZE_OPTIONS))
    }
}
