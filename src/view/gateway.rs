//! Data gateway for the driver board.
//!
//! The board only knows the wire contract of the list endpoint: a
//! `{data, total}` page of rows carrying the eight fields the table
//! renders. [`HttpDriverGateway`] is the production implementation.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::UserStatus;

/// Gateway failure: the board converts any of these into a notice.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// One list request issued by a lane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverQuery {
    pub status: UserStatus,
    pub user_type: String,
    /// 1-indexed page number
    pub page: u64,
    pub limit: u64,
}

/// Row fields consumed by the driver table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DriverRow {
    pub first_name: String,
    pub last_name: String,
    pub no: Option<String>,
    pub street_name: Option<String>,
    pub suburb: Option<String>,
    pub postal_code: Option<String>,
    pub state: Option<String>,
    pub contact_no: Option<String>,
}

/// The `{data, total}` list response shape
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DriverPage {
    pub data: Vec<DriverRow>,
    pub total: u64,
}

/// Source of driver pages for the board.
#[async_trait]
pub trait DriverGateway: Send + Sync {
    async fn list_drivers(&self, query: &DriverQuery) -> Result<DriverPage, GatewayError>;
}

/// HTTP implementation of [`DriverGateway`] against the admin API.
pub struct HttpDriverGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDriverGateway {
    /// Create a gateway fetching from the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl DriverGateway for HttpDriverGateway {
    async fn list_drivers(&self, query: &DriverQuery) -> Result<DriverPage, GatewayError> {
        let page = self
            .client
            .get(format!("{}/api/users", self.base_url))
            .query(&[
                ("page", query.page.to_string()),
                ("limit", query.limit.to_string()),
                ("status", query.status.to_string()),
                ("user_type", query.user_type.clone()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(page)
    }
}
