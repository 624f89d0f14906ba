//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{User, UserStatus, UserType};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub user_type: String,
    pub status: String,
    pub no: Option<String>,
    pub street_name: Option<String>,
    pub suburb: Option<String>,
    pub postal_code: Option<String>,
    pub state: Option<String>,
    pub contact_no: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            password: model.password,
            user_type: UserType::from(model.user_type.as_str()),
            status: UserStatus::from(model.status.as_str()),
            no: model.no,
            street_name: model.street_name,
            suburb: model.suburb,
            postal_code: model.postal_code,
            state: model.state,
            contact_no: model.contact_no,
        }
    }
}
