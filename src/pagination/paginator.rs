//! Memoizing paginator

use super::types::{page_bounds, page_numbers, PageNumber, FIRST_PAGE};
use crate::types::User;
use std::ops::Range;
use std::sync::Arc;
use tracing::debug;

/// Last computed window, keyed on the page and the collection it was cut from
#[derive(Debug)]
struct WindowMemo<T> {
    page: PageNumber,
    records: Arc<[T]>,
    bounds: Range<usize>,
}

/// Last computed page list, keyed on the record count
#[derive(Debug)]
struct PagesMemo {
    count: usize,
    pages: Vec<PageNumber>,
}

/// Tracks the current page and derives what is visible on it
#[derive(Debug)]
pub struct Paginator<T = User> {
    page_size: usize,
    current_page: PageNumber,
    window: Option<WindowMemo<T>>,
    pages: Option<PagesMemo>,
    window_computations: usize,
    pages_computations: usize,
}

impl<T> Paginator<T> {
    /// Create a paginator on the first page
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            current_page: FIRST_PAGE,
            window: None,
            pages: None,
            window_computations: 0,
            pages_computations: 0,
        }
    }

    /// Records per page
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The page currently selected
    pub fn current_page(&self) -> PageNumber {
        self.current_page
    }

    /// Select a page. The value is stored as given.
    pub fn set_page(&mut self, page: PageNumber) {
        debug!("Page changed: {} -> {}", self.current_page, page);
        self.current_page = page;
    }

    /// Records visible on the current page
    pub fn visible<'a>(&mut self, records: &'a Arc<[T]>) -> &'a [T] {
        let fresh = self.window.as_ref().is_some_and(|memo| {
            memo.page == self.current_page && Arc::ptr_eq(&memo.records, records)
        });

        if !fresh {
            let bounds = page_bounds(records.len(), self.current_page, self.page_size);
            self.window = Some(WindowMemo {
                page: self.current_page,
                records: Arc::clone(records),
                bounds,
            });
            self.window_computations += 1;
        }

        let bounds = self
            .window
            .as_ref()
            .map_or(0..0, |memo| memo.bounds.clone());
        records.get(bounds).unwrap_or(&[])
    }

    /// Page numbers for a collection of `count` records
    pub fn page_numbers(&mut self, count: usize) -> &[PageNumber] {
        let stale = self.pages.as_ref().map_or(true, |memo| memo.count != count);
        if stale {
            self.pages = Some(PagesMemo {
                count,
                pages: page_numbers(count, self.page_size),
            });
            self.pages_computations += 1;
        }

        match &self.pages {
            Some(memo) => memo.pages.as_slice(),
            None => &[],
        }
    }

    /// How many times the visible window has been recomputed
    pub fn window_computations(&self) -> usize {
        self.window_computations
    }

    /// How many times the page list has been recomputed
    pub fn pages_computations(&self) -> usize {
        self.pages_computations
    }
}
