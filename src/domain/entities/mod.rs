//! Core domain entities representing the directory data model.
//!
//! Entities are plain data structures owned by the resource store. The listing
//! core in [`crate::domain::listing`] only reads them.
//!
//! # Entity Types
//!
//! - [`Resource`] - A community-service listing with resolved references
//! - [`Category`] / [`Region`] - Filter vocabulary
//! - [`ResourceDocument`] - Stored form of a resource, references held by id
//! - [`NewResource`] - A public submission awaiting approval
//! - [`DirectorySeed`] - Bulk import format

pub mod resource;
pub mod seed;
pub mod vocabulary;

pub use resource::{
    CategoryRef, ContactInfo, GeoPoint, NewResource, RegionRef, Resource, ResourceDocument,
};
pub use seed::{DirectorySeed, DirectoryStats, ImportSummary};
pub use vocabulary::{Category, Region};
