//! Common types used throughout user-pager
//!
//! The wire shape of the users endpoint and the fixed defaults the
//! component runs with.

use serde::{Deserialize, Serialize};

// ============================================================================
// Defaults
// ============================================================================

/// Number of records shown per page
pub const PAGE_SIZE: usize = 10;

/// Endpoint the user collection is fetched from
pub const DEFAULT_ENDPOINT: &str = "https://dummyjson.com/users";

/// Heading rendered above the list
pub const DEFAULT_HEADING: &str = "List Component";

// ============================================================================
// Records
// ============================================================================

/// A single user record
///
/// Only `id` and `firstName` are read from the wire; every other field the
/// endpoint sends is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier, used as the list item key
    pub id: u64,
    /// Display name
    pub first_name: String,
}

impl User {
    /// Create a new user record
    pub fn new(id: u64, first_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
        }
    }
}

/// Response body of the users endpoint
///
/// `users` is required; `total`, `skip` and `limit` are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}
