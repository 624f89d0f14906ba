//! User service - user-record use cases over the repository.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{CreateUser, UpdateUser, User, UserFilter, UserProfile};
use crate::errors::AppResult;
use crate::infra::UserRepository;
use crate::types::{Paginated, PaginationParams};

/// User service trait for dependency injection.
///
/// Mirrors the store contract: reads and writes return credential-stripped
/// profiles, except [`UserService::get_user_by_email`] which hands the raw
/// record to the (external) login flow.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a new user record
    async fn create_user(&self, new_user: CreateUser) -> AppResult<UserProfile>;

    /// List every record, in storage order
    async fn list_users(&self) -> AppResult<Vec<UserProfile>>;

    /// List one page of records matching the filter
    async fn list_users_filtered(
        &self,
        filter: UserFilter,
        page: PaginationParams,
    ) -> AppResult<Paginated<UserProfile>>;

    /// Get a record by id (`None` when absent)
    async fn get_user(&self, id: i32) -> AppResult<Option<UserProfile>>;

    /// Raw record including the credential, for authentication
    async fn get_user_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Overwrite the mutable fields (`None` when the id does not exist)
    async fn update_user(&self, id: i32, changes: UpdateUser) -> AppResult<Option<UserProfile>>;

    /// Delete and return the removed record (`None` when already absent)
    async fn delete_user(&self, id: i32) -> AppResult<Option<UserProfile>>;

    /// Replace the credential by id
    async fn reset_password_by_id(
        &self,
        id: i32,
        password: String,
    ) -> AppResult<Option<UserProfile>>;

    /// Replace the credential by email
    async fn reset_password_by_email(
        &self,
        email: &str,
        password: String,
    ) -> AppResult<Option<UserProfile>>;
}

/// Concrete implementation of UserService
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, new_user: CreateUser) -> AppResult<UserProfile> {
        self.repo.create(new_user).await
    }

    async fn list_users(&self) -> AppResult<Vec<UserProfile>> {
        self.repo.list_all().await
    }

    async fn list_users_filtered(
        &self,
        filter: UserFilter,
        page: PaginationParams,
    ) -> AppResult<Paginated<UserProfile>> {
        let (data, total) = self.repo.list_filtered(&filter, &page).await?;
        Ok(Paginated::new(data, total))
    }

    async fn get_user(&self, id: i32) -> AppResult<Option<UserProfile>> {
        self.repo.find_by_id(id).await
    }

    async fn get_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.repo.find_by_email(email).await
    }

    async fn update_user(&self, id: i32, changes: UpdateUser) -> AppResult<Option<UserProfile>> {
        self.repo.update_by_id(id, changes).await
    }

    async fn delete_user(&self, id: i32) -> AppResult<Option<UserProfile>> {
        self.repo.delete_by_id(id).await
    }

    async fn reset_password_by_id(
        &self,
        id: i32,
        password: String,
    ) -> AppResult<Option<UserProfile>> {
        self.repo.reset_password_by_id(id, password).await
    }

    async fn reset_password_by_email(
        &self,
        email: &str,
        password: String,
    ) -> AppResult<Option<UserProfile>> {
        self.repo.reset_password_by_email(email, password).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{UserStatus, UserType};
    use crate::errors::AppError;
    use crate::infra::MockUserRepository;
    use mockall::predicate::eq;
    use mockall::Sequence;

    fn profile(id: i32) -> UserProfile {
        UserProfile {
            id,
            first_name: "Test".to_string(),
            last_name: "Driver".to_string(),
            email: "driver@example.com".to_string(),
            user_type: UserType::Driver,
            status: UserStatus::Pending,
            no: None,
            street_name: None,
            suburb: None,
            postal_code: None,
            state: None,
            contact_no: None,
        }
    }

    #[tokio::test]
    async fn test_get_user_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(eq(7))
            .returning(|id| Ok(Some(profile(id))));

        let service = UserManager::new(Arc::new(repo));
        let result = service.get_user(7).await.unwrap();

        assert_eq!(result.unwrap().id, 7);
    }

    #[tokio::test]
    async fn test_update_missing_id_is_empty_not_error() {
        let mut repo = MockUserRepository::new();
        repo.expect_update_by_id().returning(|_, _| Ok(None));

        let service = UserManager::new(Arc::new(repo));
        let changes = UpdateUser {
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            email: "a@x.com".to_string(),
            password: "p".to_string(),
        };
        let result = service.update_user(404, changes).await;

        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test]
    async fn test_delete_twice_returns_row_then_empty() {
        let mut repo = MockUserRepository::new();
        let mut seq = Sequence::new();
        repo.expect_delete_by_id()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|id| Ok(Some(profile(id))));
        repo.expect_delete_by_id()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(None));

        let service = UserManager::new(Arc::new(repo));
        assert!(service.delete_user(3).await.unwrap().is_some());
        assert!(service.delete_user(3).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_propagates_persistence_error() {
        let mut repo = MockUserRepository::new();
        repo.expect_create().returning(|_| {
            Err(AppError::persistence(
                "creating user",
                sea_orm::DbErr::Custom("duplicate key".to_string()),
            ))
        });

        let service = UserManager::new(Arc::new(repo));
        let new_user = CreateUser {
            first_name: "Test".to_string(),
            last_name: "Driver".to_string(),
            email: "driver@example.com".to_string(),
            password: "p".to_string(),
            user_type: UserType::Driver,
            no: None,
            street_name: None,
            suburb: None,
            postal_code: None,
            state: None,
            contact_no: None,
        };

        let err = service.create_user(new_user).await.unwrap_err();
        assert!(err.to_string().starts_with("Error creating user:"));
    }
}
