//! Page handlers rendering Askama templates.

pub mod detail;
pub mod resources;

pub use detail::resource_page_handler;
pub use resources::resources_page_handler;
