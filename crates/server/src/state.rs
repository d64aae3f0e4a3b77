use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::client::{repository::SeaOrmClientRepository, ClientService};

pub type Clients = ClientService<SeaOrmClientRepository>;

/// Handles shared by every request; built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub clients: Arc<Clients>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        let repo = Arc::new(SeaOrmClientRepository { db });
        Self { clients: Arc::new(ClientService::new(repo)) }
    }
}
