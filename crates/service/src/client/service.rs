use std::sync::Arc;

use models::service_area::{self, ServiceAreaError};
use tracing::{error, info, instrument, warn};

use super::domain::{ClientFields, ClientResponse, CreateClientInput, SortDirection, UpdateClientInput};
use super::repository::ClientRepository;
use crate::errors::ServiceError;
use crate::pagination::Pagination;

/// Application service for client records.
/// Every write passes the service-area gate; only canonical state codes reach the repository.
pub struct ClientService<R: ClientRepository> {
    repo: Arc<R>,
}

/// Swap the raw state for its canonical code, or refuse the record.
fn accept(fields: ClientFields) -> Result<ClientFields, ServiceError> {
    match service_area::canonicalize(&fields.state) {
        Ok(state) => Ok(ClientFields { state, ..fields }),
        Err(e @ ServiceAreaError::OutOfRange(_)) => {
            warn!(state = %fields.state, "state_out_of_service_range");
            Err(e.into())
        }
        Err(e) => {
            error!(state = %fields.state, err = %e, "service_area_tables_inconsistent");
            Err(e.into())
        }
    }
}

impl<R: ClientRepository> ClientService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self, input), fields(state = %input.fields.state))]
    pub async fn create(&self, input: CreateClientInput) -> Result<ClientResponse, ServiceError> {
        let fields = accept(input.fields)?;
        let created = self.repo.create(fields).await?;
        info!(id = created.id, state = %created.state, "client_created");
        Ok(created.into())
    }

    pub async fn get(&self, id: i32) -> Result<ClientResponse, ServiceError> {
        self.repo
            .get(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ServiceError::not_found("client"))
    }

    pub async fn list(&self, page: Pagination) -> Result<Vec<ClientResponse>, ServiceError> {
        let rows = self.repo.list(page).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn list_sorted_by_date(&self, direction: SortDirection, page: Pagination) -> Result<Vec<ClientResponse>, ServiceError> {
        let rows = self.repo.list_sorted_by_date(direction, page).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Full replacement. A missing record is reported before the state is looked at.
    #[instrument(skip(self, input), fields(id = id, state = %input.fields.state))]
    pub async fn update(&self, id: i32, input: UpdateClientInput) -> Result<ClientResponse, ServiceError> {
        if self.repo.get(id).await?.is_none() {
            return Err(ServiceError::not_found("client"));
        }
        let fields = accept(input.fields)?;
        let updated = self.repo.update(id, fields).await?;
        info!(id = updated.id, state = %updated.state, "client_updated");
        Ok(updated.into())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("client"));
        }
        info!(id, "client_deleted");
        Ok(())
    }

    pub async fn count(&self) -> Result<u64, ServiceError> { self.repo.count().await }
}
