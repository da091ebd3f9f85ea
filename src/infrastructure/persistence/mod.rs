//! Resource store implementations.
//!
//! # Repositories
//!
//! - [`PgResourceRepository`] - PostgreSQL-backed store used in production
//! - [`MemoryResourceRepository`] - In-memory store seeded from a JSON file

pub mod memory_resource_repository;
pub mod pg_resource_repository;

pub use memory_resource_repository::{MemoryResourceRepository, read_seed_file};
pub use pg_resource_repository::PgResourceRepository;
