//! Artusi - Recipe Browsing Client
//!
//! Artusi provides a typed client for a remote recipe backend, a pure
//! filter/sort engine over the loaded collection, and an application state
//! controller that ties the two together behind a small, testable surface.
//!
//! # Features
//!
//! - **Typed Repository Client**: four backend operations (load, fetch all,
//!   fetch by id, search) behind one envelope-unwrapping routine
//! - **Filter/Sort Engine**: pure derivation of the visible view (tag
//!   filtering with OR semantics, stable sorting by name or cook time)
//! - **State Controller**: the `Unloaded → Loading → Loaded ⇄ Searching`
//!   browsing flow with exact error-surfacing policies
//! - **CLI**: the `artusi` binary drives the full stack against a backend
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use artusi::{ClientConfig, RecipeApp, RecipeClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RecipeClient::new(ClientConfig::from_env()?)?;
//!     let mut app = RecipeApp::new(client);
//!
//!     app.request_initial_load().await;
//!     app.submit_search("pasta").await;
//!     for recipe in app.derived_view() {
//!         println!("{}: {}", recipe.id, recipe.name);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Artusi is organized as a workspace with focused crates:
//!
//! - `artusi_error` - Error types
//! - `artusi_core` - Data model, envelope, and view derivation
//! - `artusi_interface` - RecipeSource trait definition
//! - `artusi_client` - HTTP repository client
//! - `artusi_app` - Application state controller
//!
//! This crate (`artusi`) re-exports everything for convenience.

pub use artusi_app::*;
pub use artusi_client::*;
pub use artusi_core::*;
pub use artusi_error::*;
pub use artusi_interface::*;
