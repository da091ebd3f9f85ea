//! Business logic services for the application layer.

pub mod curation_service;
pub mod directory_service;
pub mod submission_service;

pub use curation_service::{CurationService, Eviction};
pub use directory_service::{DirectoryService, FormOptions, Listing};
pub use submission_service::{SubmissionInput, SubmissionService};
