//! User repository: the persistence-facing store for user records.
//!
//! Every operation projects rows to [`UserProfile`] before returning,
//! with one deliberate exception: [`UserRepository::find_by_email`]
//! returns the raw [`User`] so the login flow can verify the credential.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{CreateUser, UpdateUser, User, UserFilter, UserProfile, UserStatus};
use crate::errors::{AppError, AppResult};
use crate::types::PaginationParams;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user; the row starts in `Pending` status.
    async fn create(&self, new_user: CreateUser) -> AppResult<UserProfile>;

    /// Every row, in storage order.
    async fn list_all(&self) -> AppResult<Vec<UserProfile>>;

    /// One page of rows matching the filter, plus the total match count.
    async fn list_filtered(
        &self,
        filter: &UserFilter,
        page: &PaginationParams,
    ) -> AppResult<(Vec<UserProfile>, u64)>;

    /// Find user by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<UserProfile>>;

    /// Find the raw row (credential included) by email, for authentication.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Overwrite the four mutable fields. `None` when the id does not exist.
    async fn update_by_id(&self, id: i32, changes: UpdateUser) -> AppResult<Option<UserProfile>>;

    /// Remove the row and return its data. `None` when already absent.
    async fn delete_by_id(&self, id: i32) -> AppResult<Option<UserProfile>>;

    /// Replace the credential for the given id.
    async fn reset_password_by_id(
        &self,
        id: i32,
        password: String,
    ) -> AppResult<Option<UserProfile>>;

    /// Replace the credential for the given email.
    async fn reset_password_by_email(
        &self,
        email: &str,
        password: String,
    ) -> AppResult<Option<UserProfile>>;
}

/// Concrete implementation of UserRepository over the users table
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn set_password(&self, model: user::Model, password: String) -> AppResult<UserProfile> {
        let mut active: ActiveModel = model.into();
        active.password = Set(password);

        let model = active
            .update(&self.db)
            .await
            .map_err(|e| AppError::persistence("resetting password", e))?;

        Ok(UserProfile::from(User::from(model)))
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, new_user: CreateUser) -> AppResult<UserProfile> {
        let active = ActiveModel {
            first_name: Set(new_user.first_name),
            last_name: Set(new_user.last_name),
            email: Set(new_user.email),
            password: Set(new_user.password),
            user_type: Set(new_user.user_type.to_string()),
            status: Set(UserStatus::Pending.to_string()),
            no: Set(new_user.no),
            street_name: Set(new_user.street_name),
            suburb: Set(new_user.suburb),
            postal_code: Set(new_user.postal_code),
            state: Set(new_user.state),
            contact_no: Set(new_user.contact_no),
            ..Default::default()
        };

        // A duplicate email surfaces here as a unique-constraint violation
        let model = active
            .insert(&self.db)
            .await
            .map_err(|e| AppError::persistence("creating user", e))?;

        Ok(UserProfile::from(User::from(model)))
    }

    async fn list_all(&self) -> AppResult<Vec<UserProfile>> {
        let models = UserEntity::find()
            .all(&self.db)
            .await
            .map_err(|e| AppError::persistence("retrieving users", e))?;

        Ok(models
            .into_iter()
            .map(|m| UserProfile::from(User::from(m)))
            .collect())
    }

    async fn list_filtered(
        &self,
        filter: &UserFilter,
        page: &PaginationParams,
    ) -> AppResult<(Vec<UserProfile>, u64)> {
        let mut query = UserEntity::find();
        if let Some(status) = filter.status {
            query = query.filter(user::Column::Status.eq(status.to_string()));
        }
        if let Some(user_type) = filter.user_type {
            query = query.filter(user::Column::UserType.eq(user_type.to_string()));
        }

        let paginator = query.paginate(&self.db, page.limit());
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AppError::persistence("retrieving users", e))?;
        let models = paginator
            .fetch_page(page.page.saturating_sub(1))
            .await
            .map_err(|e| AppError::persistence("retrieving users", e))?;

        Ok((
            models
                .into_iter()
                .map(|m| UserProfile::from(User::from(m)))
                .collect(),
            total,
        ))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<UserProfile>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AppError::persistence("retrieving user", e))?;

        Ok(result.map(|m| UserProfile::from(User::from(m))))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| AppError::persistence("retrieving user by email", e))?;

        Ok(result.map(User::from))
    }

    async fn update_by_id(&self, id: i32, changes: UpdateUser) -> AppResult<Option<UserProfile>> {
        // A missing id is an empty result, not an error
        let Some(model) = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AppError::persistence("updating user", e))?
        else {
            return Ok(None);
        };

        let mut active: ActiveModel = model.into();
        active.first_name = Set(changes.first_name);
        active.last_name = Set(changes.last_name);
        active.email = Set(changes.email);
        active.password = Set(changes.password);

        let model = active
            .update(&self.db)
            .await
            .map_err(|e| AppError::persistence("updating user", e))?;

        Ok(Some(UserProfile::from(User::from(model))))
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<Option<UserProfile>> {
        let Some(model) = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AppError::persistence("deleting user", e))?
        else {
            return Ok(None);
        };

        UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| AppError::persistence("deleting user", e))?;

        Ok(Some(UserProfile::from(User::from(model))))
    }

    async fn reset_password_by_id(
        &self,
        id: i32,
        password: String,
    ) -> AppResult<Option<UserProfile>> {
        let Some(model) = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AppError::persistence("resetting password", e))?
        else {
            return Ok(None);
        };

        self.set_password(model, password).await.map(Some)
    }

    async fn reset_password_by_email(
        &self,
        email: &str,
        password: String,
    ) -> AppResult<Option<UserProfile>> {
        let Some(model) = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| AppError::persistence("resetting password", e))?
        else {
            return Ok(None);
        };

        self.set_password(model, password).await.map(Some)
    }
}
