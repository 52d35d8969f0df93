#[cfg(test)]
mod tests {
    use crate::database::entity::post;
    use crate::database::postgres::PostgresPostStore;
    use inkwell_core::error::StoreError;
    use inkwell_core::ports::{PostFilter, PostOrder, PostStore};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn sample_model(slug: &str, published: bool) -> post::Model {
        let now = chrono::Utc::now();
        post::Model {
            id: uuid::Uuid::new_v4(),
            title: "Test Post".to_owned(),
            slug: slug.to_owned(),
            content: "Content".to_owned(),
            excerpt: None,
            cover_image: None,
            published,
            author_id: uuid::Uuid::new_v4(),
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        let model = sample_model("test-post", true);
        let post_id = model.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let store = PostgresPostStore::new(db);

        let result = store.find_by_id(post_id).await.unwrap();

        assert!(result.is_some());
        let found = result.unwrap();
        assert_eq!(found.title, "Test Post");
        assert_eq!(found.id, post_id);
    }

    #[tokio::test]
    async fn test_list_maps_rows_to_domain() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                sample_model("newer", true),
                sample_model("older", false),
            ]])
            .into_connection();

        let store = PostgresPostStore::new(db);

        let posts = store
            .list(PostFilter::All, PostOrder::CreatedAtDesc)
            .await
            .unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].slug, "newer");
    }

    #[tokio::test]
    async fn test_delete_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let store = PostgresPostStore::new(db);

        let err = store.delete(uuid::Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
    }
}
