//! Create `client` table.
//!
//! One row per event client. `state` only ever holds a canonical two-letter code.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Client::Table)
                    .if_not_exists()
                    // AUTOINCREMENT on SQLite, sequence on Postgres: ids are never handed out twice
                    .col(pk_auto(Client::Id))
                    .col(string(Client::Name))
                    .col(string(Client::Email).unique_key())
                    .col(string(Client::EventType))
                    .col(string(Client::Address))
                    .col(string(Client::City))
                    .col(string_len(Client::State, 2))
                    .col(date(Client::Date))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Client::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Client {
    Table,
    Id,
    Name,
    Email,
    EventType,
    Address,
    City,
    State,
    Date,
}
