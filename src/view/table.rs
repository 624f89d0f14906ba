//! Table rendering for the driver board.

use crate::config::DRIVER_TABLE_COLUMNS;

use super::board::Lane;
use super::gateway::DriverRow;

/// Column headers of the driver table
pub const DRIVER_TABLE_HEADERS: [&str; DRIVER_TABLE_COLUMNS] =
    ["First Name", "Last Name", "Address", "Contact No"];

/// One rendered table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    Driver(DriverCells),
    /// Single empty-state row spanning every column
    Placeholder {
        text: String,
        span: usize,
    },
}

/// Cell values for one driver row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverCells {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub contact_no: String,
}

/// Join the five address subfields with the fixed template.
///
/// Empty subfields are not omitted; they render as stray comma
/// sequences, exactly as the admin screen does.
pub fn format_address(row: &DriverRow) -> String {
    format!(
        "{}, {}, {}, {}, {}",
        row.no.as_deref().unwrap_or_default(),
        row.street_name.as_deref().unwrap_or_default(),
        row.suburb.as_deref().unwrap_or_default(),
        row.postal_code.as_deref().unwrap_or_default(),
        row.state.as_deref().unwrap_or_default(),
    )
}

impl Lane {
    /// Render this lane's rows, or the lane-specific empty-state
    /// placeholder when there are none.
    pub fn table_rows(&self) -> Vec<TableRow> {
        if self.rows().is_empty() {
            return vec![TableRow::Placeholder {
                text: format!("No {} drivers.", self.label()),
                span: DRIVER_TABLE_COLUMNS,
            }];
        }

        self.rows()
            .iter()
            .map(|row| {
                TableRow::Driver(DriverCells {
                    first_name: row.first_name.clone(),
                    last_name: row.last_name.clone(),
                    address: format_address(row),
                    contact_no: row.contact_no.clone().unwrap_or_default(),
                })
            })
            .collect()
    }
}
