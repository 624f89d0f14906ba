//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::{
    STATUS_APPROVED, STATUS_PENDING, STATUS_REJECTED, TYPE_ADMIN, TYPE_DRIVER, TYPE_RIDER,
};

/// User type discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum UserType {
    Driver,
    Rider,
    Admin,
}

impl From<&str> for UserType {
    fn from(s: &str) -> Self {
        match s {
            TYPE_DRIVER => UserType::Driver,
            TYPE_ADMIN => UserType::Admin,
            _ => UserType::Rider,
        }
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserType::Driver => write!(f, "{}", TYPE_DRIVER),
            UserType::Rider => write!(f, "{}", TYPE_RIDER),
            UserType::Admin => write!(f, "{}", TYPE_ADMIN),
        }
    }
}

/// Moderation status of an account.
///
/// Transitions are performed by the moderation workflow; records are
/// created as `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum UserStatus {
    Pending,
    Approved,
    Rejected,
}

impl From<&str> for UserStatus {
    fn from(s: &str) -> Self {
        match s {
            STATUS_APPROVED => UserStatus::Approved,
            STATUS_REJECTED => UserStatus::Rejected,
            _ => UserStatus::Pending,
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserStatus::Pending => write!(f, "{}", STATUS_PENDING),
            UserStatus::Approved => write!(f, "{}", STATUS_APPROVED),
            UserStatus::Rejected => write!(f, "{}", STATUS_REJECTED),
        }
    }
}

/// User domain entity, including the credential column.
///
/// Only the by-email lookup hands this out; every other store operation
/// projects it to [`UserProfile`] first. Deliberately not `Serialize`.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub user_type: UserType,
    pub status: UserStatus,
    pub no: Option<String>,
    pub street_name: Option<String>,
    pub suburb: Option<String>,
    pub postal_code: Option<String>,
    pub state: Option<String>,
    pub contact_no: Option<String>,
}

// Don't expose the credential in debug output
impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("user_type", &self.user_type)
            .field("status", &self.status)
            .field("contact_no", &self.contact_no)
            .finish()
    }
}

/// Public view of a user record: [`User`] minus the credential field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    /// Row identifier
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Jane")]
    pub first_name: String,
    #[schema(example = "Doe")]
    pub last_name: String,
    #[schema(example = "jane@example.com")]
    pub email: String,
    pub user_type: UserType,
    pub status: UserStatus,
    /// Street number
    #[schema(example = "12")]
    pub no: Option<String>,
    pub street_name: Option<String>,
    pub suburb: Option<String>,
    pub postal_code: Option<String>,
    pub state: Option<String>,
    pub contact_no: Option<String>,
}

/// Pure projection dropping the credential field.
impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            user_type: user.user_type,
            status: user.status,
            no: user.no,
            street_name: user.street_name,
            suburb: user.suburb,
            postal_code: user.postal_code,
            state: user.state,
            contact_no: user.contact_no,
        }
    }
}

/// User creation data transfer object
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateUser {
    /// First name
    #[schema(example = "Jane")]
    pub first_name: String,
    /// Last name
    #[schema(example = "Doe")]
    pub last_name: String,
    /// Email address (unique)
    #[schema(example = "jane@example.com")]
    pub email: String,
    /// Credential, stored as supplied
    #[schema(example = "SecurePass123!")]
    pub password: String,
    /// Account type
    pub user_type: UserType,
    #[serde(default)]
    pub no: Option<String>,
    #[serde(default)]
    pub street_name: Option<String>,
    #[serde(default)]
    pub suburb: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub contact_no: Option<String>,
}

/// User update data transfer object.
///
/// Updates overwrite all four mutable fields; partial edits are not
/// supported by the store.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateUser {
    #[schema(example = "Jane")]
    pub first_name: String,
    #[schema(example = "Doe")]
    pub last_name: String,
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

/// Optional filters applied to the list endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub status: Option<UserStatus>,
    pub user_type: Option<UserType>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 1,
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "a@x.com".to_string(),
            password: "p".to_string(),
            user_type: UserType::Driver,
            status: UserStatus::Pending,
            no: Some("12".to_string()),
            street_name: Some("High St".to_string()),
            suburb: None,
            postal_code: Some("2000".to_string()),
            state: Some("NSW".to_string()),
            contact_no: Some("0400000000".to_string()),
        }
    }

    #[test]
    fn test_profile_projection_strips_credential() {
        let profile = UserProfile::from(sample_user());

        let json = serde_json::to_value(&profile).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["id"], 1);
        assert_eq!(json["email"], "a@x.com");
        assert_eq!(json["user_type"], "Driver");
    }

    #[test]
    fn test_user_debug_redacts_credential() {
        let rendered = format!("{:?}", sample_user());
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("\"p\""));
    }

    #[test]
    fn test_user_type_string_round_trip() {
        assert_eq!(UserType::from("Driver"), UserType::Driver);
        assert_eq!(UserType::from("Admin"), UserType::Admin);
        // Unknown values default to Rider
        assert_eq!(UserType::from("anything"), UserType::Rider);
        assert_eq!(UserType::Driver.to_string(), "Driver");
    }

    #[test]
    fn test_user_status_string_round_trip() {
        assert_eq!(UserStatus::from("Approved"), UserStatus::Approved);
        assert_eq!(UserStatus::from("Rejected"), UserStatus::Rejected);
        // Unknown values default to Pending
        assert_eq!(UserStatus::from("bogus"), UserStatus::Pending);
        assert_eq!(UserStatus::Approved.to_string(), "Approved");
    }
}
