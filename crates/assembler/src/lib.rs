//! Page view-model assembly.
//!
//! A page render needs data from one or more independent remote lookups.
//! This crate owns the composition contract: independent lookups run
//! concurrently and are joined as a barrier, the primary entity is fetched
//! at most once per render, loose one-or-many payloads are normalized before
//! they reach a renderer, and a failed secondary lookup degrades the render
//! instead of failing it.

use std::sync::Arc;

use directory::UserDirectory;
use shared::{
    domain::{User, UserId},
    error::{LookupError, PageError},
    view::{PageMetadata, UserPageModel, UsersIndexModel},
};
use tokio::sync::OnceCell;
use tracing::{debug, warn};

/// Per-request composition context.
///
/// Created when a request arrives and dropped with the response; never
/// shared across requests. The context carries the single-flight cell for
/// the render's primary entity: every consumer in the same render observes
/// the one resolved record, and no consumer triggers a second upstream
/// round-trip for the same key. The cell is keyed, so a lookup for a
/// different id never aliases to the cached record.
pub struct RenderContext {
    directory: Arc<dyn UserDirectory>,
    primary: OnceCell<(UserId, User)>,
}

impl RenderContext {
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self {
            directory,
            primary: OnceCell::new(),
        }
    }

    pub fn directory(&self) -> &dyn UserDirectory {
        self.directory.as_ref()
    }

    /// Resolve the render's primary user, at most once per key.
    ///
    /// Concurrent callers for the same id join the in-flight lookup instead
    /// of issuing their own; later callers get the cached record. A call
    /// with a different id is a different lookup and goes to the directory,
    /// it never answers from the cell.
    pub async fn primary_user(&self, id: UserId) -> Result<User, LookupError> {
        let (cached_id, user) = self
            .primary
            .get_or_try_init(|| async {
                let user = self.directory.get_user(id).await?;
                Ok::<_, LookupError>((id, user))
            })
            .await?;
        if *cached_id == id {
            return Ok(user.clone());
        }
        self.directory.get_user(id).await
    }
}

/// Assemble the view-model for a user detail page.
///
/// The user and posts lookups have no data dependency, so both are issued
/// together and joined as a barrier: total latency tracks the slower of the
/// two, and neither result short-circuits the other. Failure policy:
///
/// - primary (user) failure, not-found or upstream, ends the render with a
///   page-level not-found; the posts result is discarded unseen;
/// - secondary (posts) failure keeps the page: posts render empty and
///   `degraded` is set so the renderer can show a fallback state.
pub async fn assemble_user_page(
    ctx: &RenderContext,
    id: UserId,
) -> Result<UserPageModel, PageError> {
    let (primary, secondary) = futures::join!(
        ctx.primary_user(id),
        ctx.directory().get_user_posts(id)
    );

    let user = primary.map_err(|error| {
        debug!(user_id = %id, %error, "primary lookup failed");
        PageError::from(error)
    })?;

    let (posts, degraded) = match secondary {
        Ok(body) => (body.into_vec(), false),
        Err(error) => {
            warn!(user_id = %id, %error, "posts lookup failed, rendering degraded page");
            (Vec::new(), true)
        }
    };

    // Derived from the already-resolved record via the single-flight cell;
    // no second round-trip for the same key.
    let metadata = derive_user_metadata(ctx, id).await?;

    Ok(UserPageModel {
        user,
        posts,
        degraded,
        metadata,
    })
}

/// Derive the display metadata for a user page.
///
/// Must run after the primary entity resolves; rides the render's
/// single-flight cell rather than fetching the user again.
pub async fn derive_user_metadata(
    ctx: &RenderContext,
    id: UserId,
) -> Result<PageMetadata, PageError> {
    let user = ctx.primary_user(id).await?;
    Ok(user_metadata(&user))
}

pub fn user_metadata(user: &User) -> PageMetadata {
    PageMetadata::new(
        user.name.clone(),
        format!("This is the page of {}", user.name),
    )
}

/// Assemble the view-model for the users index page.
///
/// The user list is this page's primary lookup, so its failure surfaces as
/// the page-level error; there is no secondary data to degrade over.
pub async fn assemble_users_index(ctx: &RenderContext) -> Result<UsersIndexModel, PageError> {
    let users = ctx.directory().get_all_users().await?;
    Ok(UsersIndexModel {
        users,
        metadata: PageMetadata::new("Users", "Users page"),
    })
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
