//! User service tests over an in-memory store.
//!
//! Exercises the store contract end-to-end without a database: the fake
//! repository reproduces the table semantics (serial ids, unique email,
//! credential projection on every path except the by-email lookup).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use ride_admin::domain::{
    CreateUser, UpdateUser, User, UserFilter, UserProfile, UserStatus, UserType,
};
use ride_admin::errors::{AppError, AppResult};
use ride_admin::infra::UserRepository;
use ride_admin::services::{UserManager, UserService};
use ride_admin::types::PaginationParams;

/// In-memory stand-in for the users table
#[derive(Default)]
struct MemoryUserRepo {
    rows: Mutex<Vec<User>>,
}

impl MemoryUserRepo {
    fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepo {
    async fn create(&self, new_user: CreateUser) -> AppResult<UserProfile> {
        let mut rows = self.rows.lock().unwrap();

        if rows.iter().any(|u| u.email == new_user.email) {
            return Err(AppError::persistence(
                "creating user",
                sea_orm::DbErr::Custom(
                    "duplicate key value violates unique constraint \"users_email_key\""
                        .to_string(),
                ),
            ));
        }

        let id = rows.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let user = User {
            id,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            email: new_user.email,
            password: new_user.password,
            user_type: new_user.user_type,
            status: UserStatus::Pending,
            no: new_user.no,
            street_name: new_user.street_name,
            suburb: new_user.suburb,
            postal_code: new_user.postal_code,
            state: new_user.state,
            contact_no: new_user.contact_no,
        };
        rows.push(user.clone());

        Ok(UserProfile::from(user))
    }

    async fn list_all(&self) -> AppResult<Vec<UserProfile>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().cloned().map(UserProfile::from).collect())
    }

    async fn list_filtered(
        &self,
        filter: &UserFilter,
        page: &PaginationParams,
    ) -> AppResult<(Vec<UserProfile>, u64)> {
        let rows = self.rows.lock().unwrap();
        let matches: Vec<&User> = rows
            .iter()
            .filter(|u| filter.status.map_or(true, |s| u.status == s))
            .filter(|u| filter.user_type.map_or(true, |t| u.user_type == t))
            .collect();

        let total = matches.len() as u64;
        let data = matches
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .map(UserProfile::from)
            .collect();

        Ok((data, total))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<UserProfile>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .map(UserProfile::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|u| u.email == email).cloned())
    }

    async fn update_by_id(&self, id: i32, changes: UpdateUser) -> AppResult<Option<UserProfile>> {
        let mut rows = self.rows.lock().unwrap();
        let Some(user) = rows.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };

        user.first_name = changes.first_name;
        user.last_name = changes.last_name;
        user.email = changes.email;
        user.password = changes.password;

        Ok(Some(UserProfile::from(user.clone())))
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<Option<UserProfile>> {
        let mut rows = self.rows.lock().unwrap();
        let Some(index) = rows.iter().position(|u| u.id == id) else {
            return Ok(None);
        };

        Ok(Some(UserProfile::from(rows.remove(index))))
    }

    async fn reset_password_by_id(
        &self,
        id: i32,
        password: String,
    ) -> AppResult<Option<UserProfile>> {
        let mut rows = self.rows.lock().unwrap();
        let Some(user) = rows.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };

        user.password = password;
        Ok(Some(UserProfile::from(user.clone())))
    }

    async fn reset_password_by_email(
        &self,
        email: &str,
        password: String,
    ) -> AppResult<Option<UserProfile>> {
        let mut rows = self.rows.lock().unwrap();
        let Some(user) = rows.iter_mut().find(|u| u.email == email) else {
            return Ok(None);
        };

        user.password = password;
        Ok(Some(UserProfile::from(user.clone())))
    }
}

fn service() -> UserManager {
    UserManager::new(Arc::new(MemoryUserRepo::new()))
}

fn driver(email: &str) -> CreateUser {
    CreateUser {
        first_name: "Test".to_string(),
        last_name: "Driver".to_string(),
        email: email.to_string(),
        password: "p".to_string(),
        user_type: UserType::Driver,
        no: Some("12".to_string()),
        street_name: Some("High St".to_string()),
        suburb: Some("Newtown".to_string()),
        postal_code: Some("2042".to_string()),
        state: Some("NSW".to_string()),
        contact_no: Some("0400000000".to_string()),
    }
}

#[tokio::test]
async fn test_create_then_get_round_trips_without_credential() {
    let service = service();

    let created = service.create_user(driver("a@x.com")).await.unwrap();
    let fetched = service.get_user(created.id).await.unwrap().unwrap();

    assert_eq!(created, fetched);
    assert_eq!(fetched.status, UserStatus::Pending);

    // The serialized profile must not carry a password key
    let json = serde_json::to_value(&fetched).unwrap();
    assert!(json.get("password").is_none());
}

#[tokio::test]
async fn test_get_by_email_is_the_only_read_with_credential() {
    let service = service();
    service.create_user(driver("a@x.com")).await.unwrap();

    let raw = service.get_user_by_email("a@x.com").await.unwrap().unwrap();
    assert_eq!(raw.password, "p");
    assert_eq!(raw.user_type, UserType::Driver);

    assert!(service
        .get_user_by_email("nobody@x.com")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_duplicate_email_fails_with_operation_prefix() {
    let service = service();
    service.create_user(driver("a@x.com")).await.unwrap();

    let err = service.create_user(driver("a@x.com")).await.unwrap_err();
    let message = err.to_string();

    assert!(message.starts_with("Error creating user:"));
    assert!(message.contains("duplicate key"));
}

#[tokio::test]
async fn test_update_overwrites_all_four_mutable_fields() {
    let service = service();
    let created = service.create_user(driver("a@x.com")).await.unwrap();

    let changes = UpdateUser {
        first_name: "New".to_string(),
        last_name: "Name".to_string(),
        email: "new@x.com".to_string(),
        password: "q".to_string(),
    };
    let updated = service
        .update_user(created.id, changes)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.first_name, "New");
    assert_eq!(updated.email, "new@x.com");
    // Untouched columns survive the overwrite
    assert_eq!(updated.suburb.as_deref(), Some("Newtown"));

    let raw = service.get_user_by_email("new@x.com").await.unwrap().unwrap();
    assert_eq!(raw.password, "q");
}

#[tokio::test]
async fn test_update_missing_id_returns_empty_not_error() {
    let service = service();

    let changes = UpdateUser {
        first_name: "A".to_string(),
        last_name: "B".to_string(),
        email: "a@x.com".to_string(),
        password: "p".to_string(),
    };
    let result = service.update_user(99, changes).await;

    assert!(matches!(result, Ok(None)));
}

#[tokio::test]
async fn test_delete_is_idempotent_in_effect() {
    let service = service();
    let created = service.create_user(driver("a@x.com")).await.unwrap();

    let removed = service.delete_user(created.id).await.unwrap();
    assert_eq!(removed.unwrap().email, "a@x.com");

    // Second delete finds nothing and still succeeds
    assert!(service.delete_user(created.id).await.unwrap().is_none());
    assert!(service.get_user(created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_filtered_list_pages_and_counts() {
    let service = service();
    for i in 0..7 {
        service
            .create_user(driver(&format!("driver{}@x.com", i)))
            .await
            .unwrap();
    }

    let filter = UserFilter {
        status: Some(UserStatus::Pending),
        user_type: Some(UserType::Driver),
    };

    let first = service
        .list_users_filtered(filter, PaginationParams { page: 1, limit: 5 })
        .await
        .unwrap();
    assert_eq!(first.data.len(), 5);
    assert_eq!(first.total, 7);

    let second = service
        .list_users_filtered(filter, PaginationParams { page: 2, limit: 5 })
        .await
        .unwrap();
    assert_eq!(second.data.len(), 2);
    assert_eq!(second.total, 7);

    // Nothing is approved yet
    let approved = service
        .list_users_filtered(
            UserFilter {
                status: Some(UserStatus::Approved),
                user_type: Some(UserType::Driver),
            },
            PaginationParams::default(),
        )
        .await
        .unwrap();
    assert!(approved.data.is_empty());
    assert_eq!(approved.total, 0);
}

#[tokio::test]
async fn test_reset_password_by_id_and_email() {
    let service = service();
    let created = service.create_user(driver("a@x.com")).await.unwrap();

    service
        .reset_password_by_id(created.id, "first".to_string())
        .await
        .unwrap()
        .unwrap();
    let raw = service.get_user_by_email("a@x.com").await.unwrap().unwrap();
    assert_eq!(raw.password, "first");

    service
        .reset_password_by_email("a@x.com", "second".to_string())
        .await
        .unwrap()
        .unwrap();
    let raw = service.get_user_by_email("a@x.com").await.unwrap().unwrap();
    assert_eq!(raw.password, "second");

    // Unknown targets are empty results
    assert!(service
        .reset_password_by_id(99, "x".to_string())
        .await
        .unwrap()
        .is_none());
    assert!(service
        .reset_password_by_email("nobody@x.com", "x".to_string())
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_list_all_returns_every_row() {
    let service = service();
    service.create_user(driver("a@x.com")).await.unwrap();
    service.create_user(driver("b@x.com")).await.unwrap();

    let all = service.list_users().await.unwrap();
    assert_eq!(all.len(), 2);
}
