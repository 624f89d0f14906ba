//! Contact message entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::{MESSAGE_COMPLAINT, MESSAGE_FEEDBACK, MESSAGE_INQUIRY};

/// Category of a contact message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum MessageType {
    Inquiry,
    Complaint,
    Feedback,
}

impl From<&str> for MessageType {
    fn from(s: &str) -> Self {
        match s {
            MESSAGE_COMPLAINT => MessageType::Complaint,
            MESSAGE_FEEDBACK => MessageType::Feedback,
            _ => MessageType::Inquiry,
        }
    }
}

impl std::fmt::Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageType::Inquiry => write!(f, "{}", MESSAGE_INQUIRY),
            MessageType::Complaint => write!(f, "{}", MESSAGE_COMPLAINT),
            MessageType::Feedback => write!(f, "{}", MESSAGE_FEEDBACK),
        }
    }
}

/// Contact message left through the public site, reviewed in the admin app
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Message {
    #[schema(example = 1)]
    pub id: i32,
    /// Sender display name
    #[schema(example = "John Rider")]
    pub name: String,
    #[schema(example = "john@example.com")]
    pub email: String,
    pub content: String,
    pub message_type: MessageType,
    /// Whether an admin has opened the message
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// Message update data transfer object (overwrites the mutable fields)
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateMessage {
    pub content: String,
    pub message_type: MessageType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_type_string_round_trip() {
        assert_eq!(MessageType::from("Complaint"), MessageType::Complaint);
        assert_eq!(MessageType::from("Feedback"), MessageType::Feedback);
        // Unknown values default to Inquiry
        assert_eq!(MessageType::from("spam"), MessageType::Inquiry);
        assert_eq!(MessageType::Complaint.to_string(), "Complaint");
    }
}
