//! The paginated user list
//!
//! Composes the [`DataLoader`], the [`Paginator`] and the views: mounting
//! starts the one fetch, rendering derives the visible page from whatever
//! the loader has published, and clicking a page button only moves the
//! paginator.

use crate::config::PagerConfig;
use crate::error::Result;
use crate::loader::{DataLoader, HttpUserSource, LoadStatus, UserSource};
use crate::pagination::{PageNumber, Paginator};
use crate::render::{self, Node};
use tracing::{debug, info};

/// A mounted list component
#[derive(Debug)]
pub struct ListComponent {
    loader: DataLoader,
    paginator: Paginator,
    heading: String,
}

impl ListComponent {
    /// Mount the component and start fetching from `source`
    pub fn mount<S>(source: S, config: &PagerConfig) -> Self
    where
        S: UserSource + 'static,
    {
        info!("Mounting list component (page size {})", config.page_size);
        Self {
            loader: DataLoader::spawn(source),
            paginator: Paginator::new(config.page_size),
            heading: config.heading.clone(),
        }
    }

    /// Mount the component against the configured HTTP endpoint
    pub fn mount_http(config: &PagerConfig) -> Result<Self> {
        config.validate()?;
        let source = HttpUserSource::from_config(config)?;
        Ok(Self::mount(source, config))
    }

    pub fn status(&self) -> LoadStatus {
        self.loader.status()
    }

    pub fn current_page(&self) -> PageNumber {
        self.paginator.current_page()
    }

    /// Wait for the fetch to finish
    pub async fn settled(&mut self) -> Result<LoadStatus> {
        self.loader.settled().await
    }

    /// Handle a click on the button for `page`
    pub fn click(&mut self, page: PageNumber) {
        debug!("Page button {} clicked", page);
        self.paginator.set_page(page);
    }

    /// Page numbers that currently have a button; empty unless loaded
    pub fn page_buttons(&mut self) -> Vec<PageNumber> {
        match self.loader.status() {
            LoadStatus::Ready(records) => self.paginator.page_numbers(records.len()).to_vec(),
            _ => Vec::new(),
        }
    }

    /// Render the current state
    pub fn render(&mut self) -> Node {
        match self.loader.status() {
            LoadStatus::Loading => render::loading_view(),
            LoadStatus::Error(message) => render::error_view(&message),
            LoadStatus::Ready(records) => {
                let current = self.paginator.current_page();
                let visible = self.paginator.visible(&records);
                let pages = self.paginator.page_numbers(records.len());
                render::list_view(&self.heading, visible, pages, current)
            }
        }
    }

    /// Tear the component down, abandoning a fetch still in flight
    pub fn unmount(self) {
        debug!("Unmounting list component");
        self.loader.cancel();
    }

    #[cfg(test)]
    pub(crate) fn paginator(&self) -> &Paginator {
        &self.paginator
    }
}
