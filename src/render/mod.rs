//! Render module
//!
//! Builds the DOM-like tree a list component displays and turns it into
//! text, HTML or a terminal listing.
//!
//! # Views
//!
//! - **Loading**: `<div>Loading...</div>` and nothing else
//! - **Error**: `<div>Error: {message}</div>` and nothing else
//! - **List**: a heading, one `<li>` per visible record keyed by id, and one
//!   `<button>` per page

mod node;
mod views;

pub use node::Node;
pub use views::{error_view, list_view, loading_view, PAGE_BUTTON_ATTR};
