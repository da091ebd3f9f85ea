//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod resources;
pub mod submit;
pub mod vocabulary;

pub use health::health_handler;
pub use resources::{list_resources_handler, resource_detail_handler};
pub use submit::submit_resource_handler;
pub use vocabulary::{categories_handler, form_options_handler, regions_handler};
