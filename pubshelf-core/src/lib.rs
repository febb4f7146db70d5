//! Sorting, pagination, and view-state logic for the pubshelf browser.
//!
//! The crate is deliberately adapter-free: raw records are normalized before
//! they arrive (see `pubshelf-model`), and rendering happens elsewhere. Every
//! operation here is total and synchronous.

pub mod page;
pub mod sort;
pub mod state;


pub use page::{paginate, total_pages};
pub use sort::{compare_publications, sort_publications, sort_publications_in_place};
pub use state::{PageControls, ViewState};
