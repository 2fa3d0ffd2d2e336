//! Error types for the Artusi library.
//!
//! This crate provides the foundation error types used throughout the Artusi
//! ecosystem.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use artusi_error::{ArtusiResult, ClientError, ClientErrorKind};
//!
//! fn fetch_data() -> ArtusiResult<String> {
//!     Err(ClientError::new(ClientErrorKind::Http(
//!         "Connection refused".to_string(),
//!     )))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
mod error;
mod json;

pub use client::{ClientError, ClientErrorKind};
pub use config::ConfigError;
pub use error::{ArtusiError, ArtusiErrorKind, ArtusiResult};
pub use json::JsonError;
