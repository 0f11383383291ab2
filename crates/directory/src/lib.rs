//! Remote lookup collaborators for page assembly.
//!
//! Every profile record lives in an upstream user directory. This crate
//! defines the lookup surface the assembler composes over, the reqwest
//! adapter that talks to the real upstream, and an in-memory fixture
//! directory for local serving and tests.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use shared::{
    domain::{OneOrMany, Post, User, UserId},
    error::LookupError,
};
use tracing::warn;

mod fixture;

pub use fixture::FixtureDirectory;

/// The three remote lookups a page render may need.
///
/// Each call is a single attempt: no retries, no caching across renders.
/// Callers own concurrency and failure policy.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Resolve one user by id. Fails with [`LookupError::NotFound`] when the
    /// id does not exist.
    async fn get_user(&self, id: UserId) -> Result<User, LookupError>;

    /// Fetch the posts owned by a user. The upstream contract is loose: the
    /// body may be a single post or a list, so the raw [`OneOrMany`] shape is
    /// returned and normalized by the caller.
    async fn get_user_posts(&self, id: UserId) -> Result<OneOrMany<Post>, LookupError>;

    /// List every user in the directory.
    async fn get_all_users(&self) -> Result<Vec<User>, LookupError>;
}

/// Reqwest adapter for a JSONPlaceholder-shaped upstream directory.
///
/// Owns transport details only: URL construction, the request timeout, and
/// the mapping from HTTP status / transport failures into [`LookupError`].
pub struct HttpDirectory {
    http: Client,
    base_url: String,
}

impl HttpDirectory {
    /// Build an adapter with an explicit per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    async fn fetch(&self, path: &str, key: &str) -> Result<reqwest::Response, LookupError> {
        let url = format!("{}{path}", self.base_url);
        let response = self.http.get(&url).send().await.map_err(|error| {
            warn!(%url, %error, "directory request failed");
            LookupError::upstream(error.to_string())
        })?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(LookupError::not_found(key)),
            status if !status.is_success() => {
                warn!(%url, %status, "directory answered with error status");
                Err(LookupError::upstream(format!("{url} answered {status}")))
            }
            _ => Ok(response),
        }
    }
}

#[async_trait]
impl UserDirectory for HttpDirectory {
    async fn get_user(&self, id: UserId) -> Result<User, LookupError> {
        let response = self.fetch(&format!("/users/{id}"), &id.to_string()).await?;
        response
            .json::<User>()
            .await
            .map_err(|error| LookupError::upstream(format!("malformed user body: {error}")))
    }

    async fn get_user_posts(&self, id: UserId) -> Result<OneOrMany<Post>, LookupError> {
        let response = self
            .fetch(&format!("/users/{id}/posts"), &id.to_string())
            .await?;
        // Some upstreams answer `null` instead of an empty list.
        let body = response
            .json::<Option<OneOrMany<Post>>>()
            .await
            .map_err(|error| LookupError::upstream(format!("malformed posts body: {error}")))?;
        Ok(body.unwrap_or_default())
    }

    async fn get_all_users(&self) -> Result<Vec<User>, LookupError> {
        let response = self.fetch("/users", "users").await?;
        response
            .json::<Vec<User>>()
            .await
            .map_err(|error| LookupError::upstream(format!("malformed users body: {error}")))
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
