use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{Post, PostWrite};
use crate::error::StoreError;

/// Which posts a listing should include.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostFilter {
    All,
    PublishedOnly,
}

/// Sort order for post listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostOrder {
    CreatedAtDesc,
    CreatedAtAsc,
}

/// Post persistence port.
///
/// Every operation returns an explicit `Result` rather than panicking, and
/// constraint violations (notably slug uniqueness) surface as
/// `StoreError::Constraint` carrying the store's own message text.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// List posts matching the filter, in the given order.
    async fn list(&self, filter: PostFilter, order: PostOrder) -> Result<Vec<Post>, StoreError>;

    /// Find a post by its unique ID, drafts included.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, StoreError>;

    /// Find a published post by slug. Drafts are invisible here: an
    /// existing-but-unpublished post resolves to `None`.
    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<Post>, StoreError>;

    /// Insert a new post. The store assigns the id; `created_at` is fixed
    /// here once and never changes afterwards.
    async fn insert(
        &self,
        write: PostWrite,
        created_at: DateTime<Utc>,
    ) -> Result<Post, StoreError>;

    /// Update an existing post by id with the full writable field set.
    async fn update(&self, id: Uuid, write: PostWrite) -> Result<Post, StoreError>;

    /// Delete a post by id.
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}
