//! Application layer services implementing business logic.
//!
//! Services consume the repository trait and the cache, and provide a clean
//! API for the JSON handlers, the web pages and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::directory_service::DirectoryService`] - Listings, vocabulary and resource details
//! - [`services::submission_service::SubmissionService`] - Public submissions awaiting review
//! - [`services::curation_service::CurationService`] - Operator changes with cache eviction

pub mod services;
