//! HTTP request handlers.

pub mod message_handler;
pub mod user_handler;

pub use message_handler::message_routes;
pub use user_handler::user_routes;
