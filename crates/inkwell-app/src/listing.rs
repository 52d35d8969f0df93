//! The admin post collection controller.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use inkwell_core::domain::{Post, PostWrite};
use inkwell_core::error::StoreError;
use inkwell_core::ports::{ConfirmPrompt, PostFilter, PostOrder, PostStore};

/// Result of a delete request. `Failed` is the surfaced notice path; the
/// underlying store error has already been logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum DeleteOutcome {
    Deleted,
    /// The confirmation prompt was declined; no store call was made.
    Cancelled,
    Failed,
}

/// Owns the admin list of posts, drafts included.
///
/// Both mutations are synchronous-after-confirmation: the held list changes
/// only once the store call has succeeded, never before, so a failure needs
/// no rollback.
pub struct PostListController {
    store: Arc<dyn PostStore>,
    prompt: Arc<dyn ConfirmPrompt>,
    posts: Vec<Post>,
}

impl PostListController {
    pub fn new(store: Arc<dyn PostStore>, prompt: Arc<dyn ConfirmPrompt>) -> Self {
        Self {
            store,
            prompt,
            posts: Vec::new(),
        }
    }

    /// The list as currently held: newest first, including drafts.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Load all posts, newest first.
    pub async fn load(&mut self) -> Result<(), StoreError> {
        self.posts = self
            .store
            .list(PostFilter::All, PostOrder::CreatedAtDesc)
            .await?;
        Ok(())
    }

    /// Flip a post's published flag.
    ///
    /// On success the held row is replaced with the stored result. On
    /// failure the list is left exactly as it was and the error goes to the
    /// log only; there is no user-facing message on this path.
    ///
    /// Returns the row as held after the attempt, or `None` for an unknown
    /// id.
    pub async fn toggle_publish(&mut self, id: Uuid) -> Option<&Post> {
        let index = self.posts.iter().position(|p| p.id == id)?;
        let post = &self.posts[index];

        let write = PostWrite {
            title: post.title.clone(),
            slug: post.slug.clone(),
            content: post.content.clone(),
            excerpt: post.excerpt.clone(),
            cover_image: post.cover_image.clone(),
            published: !post.published,
            author_id: post.author_id,
            updated_at: Utc::now(),
        };

        match self.store.update(id, write).await {
            Ok(updated) => {
                self.posts[index] = updated;
            }
            Err(err) => {
                tracing::error!(post_id = %id, error = %err, "failed to toggle publish state");
            }
        }

        Some(&self.posts[index])
    }

    /// Delete a post after external confirmation.
    ///
    /// Declining the prompt means no store call at all. On success the row
    /// is removed from the held list; on failure the list is unchanged and
    /// the caller surfaces a failure notice.
    pub async fn delete(&mut self, id: Uuid) -> DeleteOutcome {
        if !self
            .prompt
            .confirm("Are you sure you want to delete this post?")
            .await
        {
            return DeleteOutcome::Cancelled;
        }

        match self.store.delete(id).await {
            Ok(()) => {
                self.posts.retain(|p| p.id != id);
                DeleteOutcome::Deleted
            }
            Err(err) => {
                tracing::error!(post_id = %id, error = %err, "failed to delete post");
                DeleteOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FailingStore, ScriptedPrompt};
    use inkwell_infra::database::InMemoryPostStore;

    async fn seed(store: &InMemoryPostStore, slug: &str, published: bool) -> Post {
        let write = PostWrite {
            title: slug.to_string(),
            slug: slug.to_string(),
            content: String::new(),
            excerpt: None,
            cover_image: None,
            published,
            author_id: Uuid::new_v4(),
            updated_at: Utc::now(),
        };
        store.insert(write, Utc::now()).await.unwrap()
    }

    #[tokio::test]
    async fn test_load_orders_newest_first_and_includes_drafts() {
        let store = InMemoryPostStore::new();
        let older = seed(&store, "older", true).await;
        let newer = seed(&store, "newer", false).await;

        let mut list = PostListController::new(
            Arc::new(store),
            Arc::new(ScriptedPrompt::answering(true)),
        );
        list.load().await.unwrap();

        let ids: Vec<Uuid> = list.posts().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![newer.id, older.id]);
    }

    #[tokio::test]
    async fn test_toggle_publish_flips_on_success() {
        let store = InMemoryPostStore::new();
        let post = seed(&store, "a-post", false).await;

        let mut list = PostListController::new(
            Arc::new(store.clone()),
            Arc::new(ScriptedPrompt::answering(true)),
        );
        list.load().await.unwrap();

        let row = list.toggle_publish(post.id).await.unwrap();
        assert!(row.published);

        let stored = store.find_by_id(post.id).await.unwrap().unwrap();
        assert!(stored.published);
    }

    #[tokio::test]
    async fn test_toggle_publish_failure_leaves_row_unchanged() {
        let store = InMemoryPostStore::new();
        let post = seed(&store, "a-post", false).await;

        let mut list = PostListController::new(
            Arc::new(store),
            Arc::new(ScriptedPrompt::answering(true)),
        );
        list.load().await.unwrap();

        // Swap in a store that fails every update.
        list.store = Arc::new(FailingStore::new("update refused"));

        let row = list.toggle_publish(post.id).await.unwrap();
        assert!(!row.published);
        assert_eq!(list.posts().len(), 1);
    }

    #[tokio::test]
    async fn test_toggle_unknown_id_is_none() {
        let mut list = PostListController::new(
            Arc::new(InMemoryPostStore::new()),
            Arc::new(ScriptedPrompt::answering(true)),
        );
        list.load().await.unwrap();
        assert!(list.toggle_publish(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_delete_declined_makes_no_store_call() {
        let failing = Arc::new(FailingStore::new("should not be called"));
        let prompt = Arc::new(ScriptedPrompt::answering(false));
        let mut list = PostListController::new(failing.clone(), prompt.clone());

        assert_eq!(list.delete(Uuid::new_v4()).await, DeleteOutcome::Cancelled);
        assert_eq!(prompt.times_asked(), 1);
        assert_eq!(failing.call_count(), 0);
    }

    #[tokio::test]
    async fn test_delete_removes_row_on_success() {
        let store = InMemoryPostStore::new();
        let keep = seed(&store, "keep", true).await;
        let gone = seed(&store, "gone", false).await;

        let mut list = PostListController::new(
            Arc::new(store.clone()),
            Arc::new(ScriptedPrompt::answering(true)),
        );
        list.load().await.unwrap();

        assert_eq!(list.delete(gone.id).await, DeleteOutcome::Deleted);
        assert_eq!(list.posts().len(), 1);
        assert_eq!(list.posts()[0].id, keep.id);
        assert!(store.find_by_id(gone.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_failure_leaves_list_unchanged() {
        let store = InMemoryPostStore::new();
        let post = seed(&store, "sticky", true).await;

        let mut list = PostListController::new(
            Arc::new(store),
            Arc::new(ScriptedPrompt::answering(true)),
        );
        list.load().await.unwrap();

        list.store = Arc::new(FailingStore::new("delete refused"));

        assert_eq!(list.delete(post.id).await, DeleteOutcome::Failed);
        assert_eq!(list.posts().len(), 1);
        assert_eq!(list.posts()[0].id, post.id);
    }

    #[tokio::test]
    async fn test_load_failure_propagates() {
        let mut list = PostListController::new(
            Arc::new(FailingStore::new("no connection")),
            Arc::new(ScriptedPrompt::answering(true)),
        );
        let err = list.load().await.unwrap_err();
        assert_eq!(err.to_string(), "no connection");
    }
}
