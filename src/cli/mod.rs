//! CLI module
//!
//! Command-line interface for the paginated user list.
//!
//! # Commands
//!
//! - `show` - Fetch the users once and print a single page
//! - `browse` - Fetch the users once, then switch pages from stdin

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
