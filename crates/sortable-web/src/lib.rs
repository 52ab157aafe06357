#![forbid(unsafe_code)]
//! sortable-web: the thin layer between a web request and the resolver.
//!
//! - [`params`] pulls the field/direction pair out of a raw query string.
//! - [`helper::sortable_helper`] sorts a collection straight from a query string.
//! - [`link`] computes the URL and CSS class for a sortable column header.
//!
//! Markup is left to the caller's templates.

pub mod helper;
pub mod link;
pub mod params;

pub use helper::sortable_helper;
pub use link::SortLink;
pub use params::SortParams;
