//! Listing core: filtering, map markers and list/map selection.
//!
//! Everything here is synchronous and free of I/O so it can be driven by the
//! JSON API, by the server-rendered page, or directly from tests.
//!
//! # Flow
//!
//! 1. The store supplies resources ordered by title
//! 2. [`filter::filter_resources`] keeps the ones matching [`FilterCriteria`]
//! 3. [`markers::project_markers`] derives map pins from the filtered set
//! 4. [`view::ListingView`] reconciles hovers and clicks from both views into
//!    one highlighted resource and manages the mobile list/map toggle

pub mod category_style;
pub mod filter;
pub mod markers;
pub mod selection;
pub mod view;

pub use category_style::{CategoryStyle, style_for};
pub use filter::{FilterCriteria, filter_resources};
pub use markers::{MapMarker, MapViewport, project_markers};
pub use selection::{SelectionOrigin, SelectionPhase, SelectionState, ViewEffect};
pub use view::{
    DirectorySnapshot, ListingEvent, ListingView, LoadTicket, PaneVisibility, result_label,
};
