//! Service layer forwarding CRUD operations to the `models` crate.
//! - Keeps the HTTP layer decoupled from data access.
//! - Adds no validation or transformation; failures propagate unchanged.

pub mod employee_service;
pub mod errors;
#[cfg(test)]
pub mod test_support;
