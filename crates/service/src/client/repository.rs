use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use super::domain::{ClientFields, SortDirection};
use crate::errors::ServiceError;
use crate::pagination::Pagination;

/// Persistence contract for client records. Implementations enforce email
/// uniqueness and never reuse ids.
#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn create(&self, fields: ClientFields) -> Result<models::client::Model, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<models::client::Model>, ServiceError>;
    async fn list(&self, page: Pagination) -> Result<Vec<models::client::Model>, ServiceError>;
    async fn list_sorted_by_date(&self, direction: SortDirection, page: Pagination) -> Result<Vec<models::client::Model>, ServiceError>;
    async fn update(&self, id: i32, fields: ClientFields) -> Result<models::client::Model, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
    async fn count(&self) -> Result<u64, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmClientRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ClientRepository for SeaOrmClientRepository {
    async fn create(&self, fields: ClientFields) -> Result<models::client::Model, ServiceError> {
        crate::db::client_store::create_client(&self.db, fields).await
    }

    async fn get(&self, id: i32) -> Result<Option<models::client::Model>, ServiceError> {
        crate::db::client_store::get_client(&self.db, id).await
    }

    async fn list(&self, page: Pagination) -> Result<Vec<models::client::Model>, ServiceError> {
        crate::db::client_store::list_clients(&self.db, page).await
    }

    async fn list_sorted_by_date(&self, direction: SortDirection, page: Pagination) -> Result<Vec<models::client::Model>, ServiceError> {
        crate::db::client_store::list_clients_by_date(&self.db, direction, page).await
    }

    async fn update(&self, id: i32, fields: ClientFields) -> Result<models::client::Model, ServiceError> {
        crate::db::client_store::update_client(&self.db, id, fields).await
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        crate::db::client_store::delete_client(&self.db, id).await
    }

    async fn count(&self) -> Result<u64, ServiceError> {
        crate::db::client_store::count_clients(&self.db).await
    }
}
