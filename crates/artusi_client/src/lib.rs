//! HTTP repository client for the Artusi recipe backend.
//!
//! The backend wraps every response in a uniform envelope; this crate maps
//! each endpoint to a typed result, unwraps the envelope in one place, and
//! normalizes transport failures into [`artusi_error::ClientError`] so that
//! no reqwest types leak to callers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
mod request;

pub use client::RecipeClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};
pub use request::SearchRequest;
