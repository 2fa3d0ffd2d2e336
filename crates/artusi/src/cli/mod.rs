//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the
//! artusi binary.

mod browse;
mod commands;
mod recipes;

pub use browse::handle_browse;
pub use commands::{Cli, Commands};
pub use recipes::{handle_get, handle_list, handle_load, handle_search};
