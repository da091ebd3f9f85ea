//! Repository trait definitions for the domain layer.
//!
//! The resource store is an external collaborator of the listing core; these
//! traits are its contract. Implementations live in
//! `crate::infrastructure::persistence`, and `mockall` generates mocks for
//! unit tests.

pub mod resource_repository;

pub use resource_repository::{ResourceQuery, ResourceRepository};

#[cfg(test)]
pub use resource_repository::MockResourceRepository;
