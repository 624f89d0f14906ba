//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{message_handler, user_handler};
use crate::domain::{
    CreateUser, Message, MessageType, UpdateMessage, UpdateUser, UserProfile, UserStatus, UserType,
};
use crate::types::MessageResponse;

/// OpenAPI documentation for the ride admin API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ride Admin API",
        version = "0.1.0",
        description = "Administrative backend for the ride-hailing platform: user records and contact messages",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // User endpoints
        user_handler::create_user,
        user_handler::list_users,
        user_handler::get_user,
        user_handler::update_user,
        user_handler::delete_user,
        user_handler::reset_password_by_id,
        user_handler::reset_password_by_email,
        user_handler::profile_thumb,
        user_handler::profile_full,
        // Message endpoints
        message_handler::list_messages,
        message_handler::update_message,
        message_handler::mark_read,
    ),
    components(
        schemas(
            // Domain types
            UserType,
            UserStatus,
            UserProfile,
            CreateUser,
            UpdateUser,
            MessageType,
            Message,
            UpdateMessage,
            // Wrappers
            MessageResponse,
            // Handler types
            user_handler::ResetPasswordRequest,
        )
    ),
    tags(
        (name = "Users", description = "User record management"),
        (name = "Messages", description = "Contact message inbox")
    )
)]
pub struct ApiDoc;
