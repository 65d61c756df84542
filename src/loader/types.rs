//! Load status

use crate::types::User;
use std::sync::Arc;

/// Where the fetch stands. Exactly one variant holds at any time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// The fetch has not completed
    Loading,
    /// The fetch failed; carries the message shown to the user
    Error(String),
    /// The fetch succeeded
    Ready(Arc<[User]>),
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// `Ready` or `Error`
    pub fn is_settled(&self) -> bool {
        !self.is_loading()
    }

    pub fn records(&self) -> Option<&Arc<[User]>> {
        match self {
            Self::Ready(records) => Some(records),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }
}
