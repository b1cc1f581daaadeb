//! Service layer holding the customer domain model and the in-memory store.
//! - Keeps locking discipline in one place; handlers never touch the map.
//! - Provides clear error types for the HTTP layer to translate.

pub mod customer;
pub mod errors;
pub mod store;
