//! Client records: DTOs, repository abstraction and the service that applies
//! the service-area gate before anything reaches the store.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::ClientService;
