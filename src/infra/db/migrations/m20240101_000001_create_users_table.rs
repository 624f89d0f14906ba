//! Migration: Create the users table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::FirstName).string().not_null())
                    .col(ColumnDef::new(Users::LastName).string().not_null())
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::Password).string().not_null())
                    .col(ColumnDef::new(Users::UserType).string().not_null())
                    .col(
                        ColumnDef::new(Users::Status)
                            .string()
                            .not_null()
                            .default("Pending"),
                    )
                    .col(ColumnDef::new(Users::No).string().null())
                    .col(ColumnDef::new(Users::StreetName).string().null())
                    .col(ColumnDef::new(Users::Suburb).string().null())
                    .col(ColumnDef::new(Users::PostalCode).string().null())
                    .col(ColumnDef::new(Users::State).string().null())
                    .col(ColumnDef::new(Users::ContactNo).string().null())
                    .to_owned(),
            )
            .await?;

        // The driver board filters on (user_type, status)
        manager
            .create_index(
                Index::create()
                    .name("idx_users_user_type_status")
                    .table(Users::Table)
                    .col(Users::UserType)
                    .col(Users::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Password,
    UserType,
    Status,
    No,
    StreetName,
    Suburb,
    PostalCode,
    State,
    ContactNo,
}
