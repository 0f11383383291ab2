use serde::{Deserialize, Serialize};

use crate::domain::{Post, User};

/// Display metadata derived from the page's primary entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
}

impl PageMetadata {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Per-request aggregate for a user detail page.
///
/// Exists only between assembly and response; never persisted. A value of
/// this type implies the primary `User` resolved. `degraded` marks a render
/// whose posts lookup failed, which is distinct from a user with zero posts
/// (`degraded == false`, empty `posts`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPageModel {
    pub user: User,
    pub posts: Vec<Post>,
    pub degraded: bool,
    pub metadata: PageMetadata,
}

/// Per-request aggregate for the users index page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersIndexModel {
    pub users: Vec<User>,
    pub metadata: PageMetadata,
}
