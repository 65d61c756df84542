//! # user-pager
//!
//! Fetches a list of user records from a remote endpoint once, pages
//! through it client-side, and renders the current page together with a
//! row of page-selector buttons.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use user_pager::{ListComponent, PagerConfig, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = PagerConfig::default();
//!     let mut component = ListComponent::mount_http(&config)?;
//!
//!     println!("{}", component.render().to_terminal()); // Loading...
//!     component.settled().await?;
//!
//!     component.click(2);
//!     println!("{}", component.render().to_terminal());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     ListComponent                        │
//! │  mount() → Loading    render() → Node    click(page)     │
//! └──────────────────────────────────────────────────────────┘
//!                              │
//! ┌──────────────┬─────────────┴─────┬───────────────────────┐
//! │  DataLoader  │     Paginator     │        Render         │
//! ├──────────────┼───────────────────┼───────────────────────┤
//! │ one fetch    │ ceil(count/size)  │ Loading... / Error:   │
//! │ watch status │ memoized window   │ h1 + ul + buttons     │
//! │ abort on drop│ unclamped pages   │ text / html / json    │
//! └──────────────┴───────────────────┴───────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Wire types and defaults
pub mod types;

/// Pager configuration
pub mod config;

/// Single-shot HTTP client
pub mod http;

/// Data loading and load status
pub mod loader;

/// Page arithmetic
pub mod pagination;

/// Render tree and views
pub mod render;

/// The paginated list component
pub mod component;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use component::ListComponent;
pub use config::PagerConfig;
pub use error::{Error, Result};
pub use loader::{DataLoader, HttpUserSource, LoadStatus, UserSource};
pub use pagination::Paginator;
pub use render::Node;
pub use types::{User, UsersResponse, DEFAULT_ENDPOINT, PAGE_SIZE};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
