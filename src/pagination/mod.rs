//! Pagination module
//!
//! Client-side page arithmetic over an in-memory record collection.
//!
//! # Overview
//!
//! Pages are 1-based fixed-size windows `[(page - 1) * size, page * size)`
//! clipped to the collection. The free functions are pure; [`Paginator`]
//! owns the current page and memoizes the derived window and page list so
//! they are only recomputed when their inputs change.
//!
//! Page numbers are never validated or clamped: a page of `0` or one past
//! the last page simply yields an empty window.

mod paginator;
mod types;

pub use paginator::Paginator;
pub use types::{page_bounds, page_numbers, total_pages, PageNumber, FIRST_PAGE};

#[cfg(test)]
mod tests;
