//! Where user records come from

use crate::config::PagerConfig;
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig};
use crate::types::{User, UsersResponse};
use async_trait::async_trait;

/// A one-shot provider of the user collection
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Fetch the whole collection
    async fn fetch_users(&self) -> Result<Vec<User>>;
}

/// Fetches users from a JSON endpoint shaped `{ "users": [...] }`
#[derive(Debug, Clone)]
pub struct HttpUserSource {
    client: HttpClient,
    endpoint: String,
}

impl HttpUserSource {
    /// Create a source for `endpoint` using an existing client
    pub fn new(client: HttpClient, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Build the client and source described by a pager config
    pub fn from_config(config: &PagerConfig) -> Result<Self> {
        let client = HttpClient::with_config(HttpClientConfig::from(config))?;
        Ok(Self::new(client, &config.endpoint))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl UserSource for HttpUserSource {
    async fn fetch_users(&self) -> Result<Vec<User>> {
        let body: UsersResponse = self.client.get_json(&self.endpoint).await?;
        Ok(body.users)
    }
}
