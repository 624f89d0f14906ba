//! Drivers command - Renders one page of the driver board to stdout.
//!
//! Drives the same board component the admin screen uses, against a
//! running server's list endpoint.

use std::sync::Arc;
use std::time::Instant;

use crate::cli::args::DriversArgs;
use crate::config::{Config, DEFAULT_BOARD_PAGE_SIZE};
use crate::errors::AppResult;
use crate::view::{DriverBoard, HttpDriverGateway, TableRow, DRIVER_TABLE_HEADERS};

/// Execute the drivers command
pub async fn execute(args: DriversArgs, config: Config) -> AppResult<()> {
    let gateway = Arc::new(HttpDriverGateway::new(config.api_base_url.clone()));
    let mut board = DriverBoard::new(gateway);

    // Walk the same transitions the admin screen would
    board.select_tab(args.tab as usize).await;
    if args.page_size != DEFAULT_BOARD_PAGE_SIZE {
        board.change_page_size(args.page_size).await;
    }
    if args.page > 0 {
        board.change_page(args.page).await;
    }

    if let Some(notice) = board.active_notice(Instant::now()) {
        eprintln!("! {}", notice.message());
    }

    let lane = board.active_lane();
    println!(
        "{} drivers, page {} ({} per page, {} total)",
        lane.label(),
        lane.page() + 1,
        lane.page_size(),
        lane.total()
    );

    let [first, last, address, contact] = DRIVER_TABLE_HEADERS;
    println!("{:<16} {:<16} {:<42} {}", first, last, address, contact);

    for row in board.table_rows() {
        match row {
            TableRow::Driver(cells) => println!(
                "{:<16} {:<16} {:<42} {}",
                cells.first_name, cells.last_name, cells.address, cells.contact_no
            ),
            TableRow::Placeholder { text, .. } => println!("{}", text),
        }
    }

    Ok(())
}
