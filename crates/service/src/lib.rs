//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access.
//! - Reuses validation and entity definitions in the `models` crate.
//! - Association operations enforce existence and membership before writing.

pub mod airline_airport_service;
pub mod airline_service;
pub mod airport_service;
pub mod errors;
#[cfg(test)]
pub mod test_support;
