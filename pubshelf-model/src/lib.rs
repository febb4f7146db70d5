//! Core data model definitions shared across pubshelf crates.

pub mod criteria;
pub mod publication;

pub use criteria::SortCriteria;
pub use publication::{NO_LINK, NO_TITLE, Publication, RawPublication};
