//! Application state controller for the Artusi recipe browsing flow.
//!
//! [`RecipeApp`] owns the loaded recipe collection, the active filter
//! specification, the search query, and the loading/error flags. It
//! orchestrates calls through a [`artusi_interface::RecipeSource`] and
//! recomputes the derived view synchronously; no backend failure escapes it.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod app;

pub use app::{LOAD_FAILED_MESSAGE, MIN_QUERY_LEN, Phase, RecipeApp, SEARCH_FAILED_MESSAGE};
