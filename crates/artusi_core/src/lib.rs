//! Core data types for the Artusi recipe browsing library.
//!
//! This crate provides the recipe data model, the backend response envelope,
//! the filter specification, and the pure view-derivation logic shared by all
//! Artusi interfaces. It performs no I/O.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod envelope;
mod filters;
mod recipe;
mod view;

pub use envelope::Envelope;
pub use filters::{SearchFilters, SearchFiltersBuilder, SortKey, SortOrder};
pub use recipe::Recipe;
pub use view::{available_tags, derive_view};
