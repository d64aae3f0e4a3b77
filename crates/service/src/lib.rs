//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access.
//! - Reuses entity definitions and the service-area gate from the `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod client;
pub mod db;
pub mod pagination;
#[cfg(test)]
pub mod test_support;
