//! Post collection store - the in-memory list of posts and its fetch
//! status.

use crate::domain::{Post, PostDraft};
use crate::error::ApiError;
use crate::ports::ApiGateway;

/// Status of the last full fetch. Mutations (create/update/delete) never
/// touch this; only `fetch_all` drives the transitions
/// idle -> loading -> succeeded | failed -> loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Ordered post collection.
///
/// Ordering rules: a fetch adopts server order wholesale, creates
/// prepend, updates keep position, deletes remove exactly one entry.
#[derive(Default)]
pub struct PostStore {
    posts: Vec<Post>,
    status: FetchStatus,
}

impl PostStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn find(&self, id: i64) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Replace the whole collection with the server's list.
    ///
    /// On failure the previous list stays untouched - no partial merge.
    pub async fn fetch_all(&mut self, gateway: &dyn ApiGateway) -> Result<(), ApiError> {
        self.status = FetchStatus::Loading;
        match gateway.fetch_posts().await {
            Ok(posts) => {
                tracing::debug!(count = posts.len(), "fetched posts");
                self.posts = posts;
                self.status = FetchStatus::Succeeded;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "post fetch failed");
                self.status = FetchStatus::Failed;
                Err(e)
            }
        }
    }

    /// Create a post and prepend the backend's copy (most-recent-first).
    pub async fn create(
        &mut self,
        gateway: &dyn ApiGateway,
        draft: &PostDraft,
    ) -> Result<(), ApiError> {
        let post = gateway.create_post(draft).await?;
        self.posts.insert(0, post);
        Ok(())
    }

    /// Update a post and replace the local entry in place.
    ///
    /// An id with no local entry is dropped silently; the next fetch
    /// corrects whatever led to that.
    pub async fn update(
        &mut self,
        gateway: &dyn ApiGateway,
        id: i64,
        draft: &PostDraft,
    ) -> Result<(), ApiError> {
        let post = gateway.update_post(id, draft).await?;
        match self.posts.iter_mut().find(|p| p.id == post.id) {
            Some(entry) => *entry = post,
            None => tracing::debug!(id, "updated post not in local list"),
        }
        Ok(())
    }

    /// Delete a post and remove the matching local entry.
    pub async fn delete(&mut self, gateway: &dyn ApiGateway, id: i64) -> Result<(), ApiError> {
        gateway.delete_post(id).await?;
        self.posts.retain(|p| p.id != id);
        Ok(())
    }
}
