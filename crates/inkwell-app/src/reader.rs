//! The public read side: what anonymous visitors can see.

use inkwell_core::domain::Post;
use inkwell_core::error::StoreError;
use inkwell_core::ports::{PostFilter, PostOrder, PostStore};

/// All published posts, newest first.
pub async fn published_posts(store: &dyn PostStore) -> Result<Vec<Post>, StoreError> {
    store
        .list(PostFilter::PublishedOnly, PostOrder::CreatedAtDesc)
        .await
}

/// One published post by slug.
///
/// Missing and existing-but-unpublished posts are indistinguishable here:
/// both come back `None`, rendered as a not-found view rather than an
/// error banner.
pub async fn published_post_by_slug(
    store: &dyn PostStore,
    slug: &str,
) -> Result<Option<Post>, StoreError> {
    store.find_published_by_slug(slug).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use inkwell_core::domain::PostWrite;
    use inkwell_infra::database::InMemoryPostStore;
    use uuid::Uuid;

    async fn seed(store: &InMemoryPostStore, slug: &str, published: bool) -> Post {
        let write = PostWrite {
            title: slug.to_string(),
            slug: slug.to_string(),
            content: "body".to_string(),
            excerpt: None,
            cover_image: None,
            published,
            author_id: Uuid::new_v4(),
            updated_at: Utc::now(),
        };
        store.insert(write, Utc::now()).await.unwrap()
    }

    #[tokio::test]
    async fn test_drafts_are_invisible_to_readers() {
        let store = InMemoryPostStore::new();
        let visible = seed(&store, "visible", true).await;
        seed(&store, "hidden-draft", false).await;

        let posts = published_posts(&store).await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, visible.id);

        assert!(
            published_post_by_slug(&store, "hidden-draft")
                .await
                .unwrap()
                .is_none()
        );
        assert!(
            published_post_by_slug(&store, "no-such-slug")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_published_post_resolves_by_slug() {
        let store = InMemoryPostStore::new();
        let post = seed(&store, "hello", true).await;

        let found = published_post_by_slug(&store, "hello").await.unwrap();
        assert_eq!(found.unwrap().id, post.id);
    }
}
