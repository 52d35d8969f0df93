//! Admin dashboard stats.

use inkwell_core::error::StoreError;
use inkwell_core::ports::{PostFilter, PostOrder, PostStore};

/// Post counts shown on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentStats {
    pub total: usize,
    pub published: usize,
    pub drafts: usize,
}

/// Partition the whole store into published and draft counts.
pub async fn content_stats(store: &dyn PostStore) -> Result<ContentStats, StoreError> {
    let posts = store
        .list(PostFilter::All, PostOrder::CreatedAtDesc)
        .await?;
    let published = posts.iter().filter(|p| p.published).count();
    Ok(ContentStats {
        total: posts.len(),
        published,
        drafts: posts.len() - published,
    })
}
