//! Application state - Dependency injection container.

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Config;
use crate::infra::{Database, MessageStore, UserStore};
use crate::services::{MessageManager, MessageService, UserManager, UserService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// User record store service
    pub user_service: Arc<dyn UserService>,
    /// Contact message service
    pub message_service: Arc<dyn MessageService>,
    /// Database connection (health checks)
    pub database: Arc<Database>,
    /// Directory holding profile images
    pub media_dir: PathBuf,
}

impl AppState {
    /// Create application state from a database connection and config.
    pub fn from_config(database: Arc<Database>, config: &Config) -> Self {
        let conn = database.get_connection();
        let user_service = Arc::new(UserManager::new(Arc::new(UserStore::new(conn.clone()))));
        let message_service = Arc::new(MessageManager::new(Arc::new(MessageStore::new(conn))));

        Self {
            user_service,
            message_service,
            database,
            media_dir: config.media_dir.clone(),
        }
    }
}
