//! Driver board: three status-scoped, independently paginated lanes.
//!
//! The reactive fetch-on-change behavior of the admin screen is modeled
//! as explicit transitions: selecting a tab, changing the page, or
//! changing the page size each refetch the active lane. A failed fetch
//! leaves the lane's rows and total untouched and raises a transient
//! notice instead.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::{DEFAULT_BOARD_PAGE_SIZE, NOTICE_AUTO_DISMISS_MS, TYPE_DRIVER};
use crate::domain::UserStatus;

use super::gateway::{DriverGateway, DriverQuery, DriverRow};
use super::table::TableRow;

/// Transient error banner, auto-dismissed after a short interval.
#[derive(Debug, Clone)]
pub struct Notice {
    message: String,
    raised_at: Instant,
}

impl Notice {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            raised_at: Instant::now(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the auto-dismiss interval has elapsed at `now`.
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.raised_at) >= Duration::from_millis(NOTICE_AUTO_DISMISS_MS)
    }
}

/// One status-scoped pagination state.
#[derive(Debug, Clone)]
pub struct Lane {
    status: UserStatus,
    page: u64,
    page_size: u64,
    rows: Vec<DriverRow>,
    total: u64,
    /// The (page, page_size) the current rows were fetched for
    fetched: Option<(u64, u64)>,
}

impl Lane {
    fn new(status: UserStatus) -> Self {
        Self {
            status,
            page: 0,
            page_size: DEFAULT_BOARD_PAGE_SIZE,
            rows: Vec::new(),
            total: 0,
            fetched: None,
        }
    }

    /// Lane wording as shown in the UI (Approved reads as "accepted").
    pub fn label(&self) -> &'static str {
        match self.status {
            UserStatus::Pending => "pending",
            UserStatus::Approved => "accepted",
            UserStatus::Rejected => "rejected",
        }
    }

    /// Current 0-indexed page
    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn rows(&self) -> &[DriverRow] {
        &self.rows
    }

    /// Total matching rows across all pages, for the pagination control
    pub fn total(&self) -> u64 {
        self.total
    }
}

/// The tabbed driver list: Pending, Accepted, and Rejected lanes.
pub struct DriverBoard<G: DriverGateway> {
    gateway: Arc<G>,
    lanes: [Lane; 3],
    active: usize,
    notice: Option<Notice>,
}

impl<G: DriverGateway> DriverBoard<G> {
    /// Create a board with all three lanes unfetched; call
    /// [`DriverBoard::select_tab`] to load the first one.
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            lanes: [
                Lane::new(UserStatus::Pending),
                Lane::new(UserStatus::Approved),
                Lane::new(UserStatus::Rejected),
            ],
            active: 0,
            notice: None,
        }
    }

    /// Activate lane `index`, fetching it unless its rows already match
    /// the current (page, page_size). Out-of-range indexes are ignored.
    pub async fn select_tab(&mut self, index: usize) {
        if index >= self.lanes.len() {
            return;
        }
        self.active = index;

        let lane = &self.lanes[self.active];
        if lane.fetched != Some((lane.page, lane.page_size)) {
            self.fetch_active().await;
        }
    }

    /// Move the active lane to `page` (0-indexed) and refetch.
    pub async fn change_page(&mut self, page: u64) {
        self.lanes[self.active].page = page;
        self.fetch_active().await;
    }

    /// Change the active lane's rows-per-page, reset to the first page,
    /// and refetch.
    pub async fn change_page_size(&mut self, page_size: u64) {
        let lane = &mut self.lanes[self.active];
        lane.page_size = page_size;
        lane.page = 0;
        self.fetch_active().await;
    }

    async fn fetch_active(&mut self) {
        let lane = &self.lanes[self.active];
        let query = DriverQuery {
            status: lane.status,
            user_type: TYPE_DRIVER.to_string(),
            // The backend pages 1-indexed
            page: lane.page + 1,
            limit: lane.page_size,
        };

        let gateway = self.gateway.clone();
        match gateway.list_drivers(&query).await {
            Ok(page) => {
                let lane = &mut self.lanes[self.active];
                lane.rows = page.data;
                lane.total = page.total;
                lane.fetched = Some((lane.page, lane.page_size));
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to fetch {} drivers: {}",
                    self.lanes[self.active].label(),
                    e
                );
                self.notice = Some(Notice::new("Error fetching drivers"));
            }
        }
    }

    /// Index of the active tab
    pub fn active_tab(&self) -> usize {
        self.active
    }

    pub fn active_lane(&self) -> &Lane {
        &self.lanes[self.active]
    }

    /// Table rows for the active lane
    pub fn table_rows(&self) -> Vec<TableRow> {
        self.active_lane().table_rows()
    }

    /// The current notice, unless it has auto-dismissed by `now`.
    pub fn active_notice(&self, now: Instant) -> Option<&Notice> {
        self.notice.as_ref().filter(|n| !n.is_expired(now))
    }

    /// Dismiss the notice ahead of its auto-dismiss deadline.
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_labels_follow_ui_wording() {
        assert_eq!(Lane::new(UserStatus::Pending).label(), "pending");
        assert_eq!(Lane::new(UserStatus::Approved).label(), "accepted");
        assert_eq!(Lane::new(UserStatus::Rejected).label(), "rejected");
    }
}
