use std::collections::HashMap;

use async_trait::async_trait;
use shared::{
    domain::{OneOrMany, Post, PostId, User, UserId},
    error::LookupError,
};

use crate::UserDirectory;

/// In-memory directory used for fixture serving and tests.
#[derive(Debug, Clone, Default)]
pub struct FixtureDirectory {
    users: Vec<User>,
    posts: HashMap<UserId, Vec<Post>>,
}

impl FixtureDirectory {
    pub fn new(users: Vec<User>, posts: HashMap<UserId, Vec<Post>>) -> Self {
        Self { users, posts }
    }

    /// A small seeded directory so the server can run without an upstream.
    pub fn seeded() -> Self {
        let mut posts = HashMap::new();
        posts.insert(
            UserId(1),
            vec![
                post(1, 1, "Shipping the first release", "Notes from cutting v0.1."),
                post(2, 1, "Postmortem: the flaky deploy", "What broke and what we changed."),
            ],
        );
        posts.insert(
            UserId(2),
            vec![post(3, 2, "On pairing", "Why we pair on gnarly migrations.")],
        );
        posts.insert(UserId(3), Vec::new());

        Self {
            users: vec![
                user(1, "Ada Lovelace", "ada", "ada@example.com"),
                user(2, "Grace Hopper", "grace", "grace@example.com"),
                user(3, "Edsger Dijkstra", "edsger", "edsger@example.com"),
            ],
            posts,
        }
    }
}

fn user(id: i64, name: &str, username: &str, email: &str) -> User {
    User {
        id: UserId(id),
        name: name.to_string(),
        username: username.to_string(),
        email: email.to_string(),
    }
}

fn post(id: i64, user_id: i64, title: &str, body: &str) -> Post {
    Post {
        id: PostId(id),
        user_id: UserId(user_id),
        title: title.to_string(),
        body: body.to_string(),
    }
}

#[async_trait]
impl UserDirectory for FixtureDirectory {
    async fn get_user(&self, id: UserId) -> Result<User, LookupError> {
        self.users
            .iter()
            .find(|user| user.id == id)
            .cloned()
            .ok_or_else(|| LookupError::not_found(id))
    }

    async fn get_user_posts(&self, id: UserId) -> Result<OneOrMany<Post>, LookupError> {
        Ok(self.posts.get(&id).cloned().unwrap_or_default().into())
    }

    async fn get_all_users(&self) -> Result<Vec<User>, LookupError> {
        Ok(self.users.clone())
    }
}
