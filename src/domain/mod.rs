//! Domain layer containing directory entities and listing logic.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures (resources, categories, regions)
//! - [`listing`] - Filter engine, marker projector and selection coordinator
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Orchestration lives in services (see [`crate::application::services`])

pub mod entities;
pub mod listing;
pub mod repositories;
