//! PostgreSQL post store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use inkwell_core::domain::{Post, PostWrite};
use inkwell_core::error::StoreError;
use inkwell_core::ports::{PostFilter, PostOrder, PostStore};

use super::entity::post::{self, Entity as PostEntity};

/// SeaORM-backed implementation of the post store port.
pub struct PostgresPostStore {
    db: DbConn,
}

impl PostgresPostStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

/// Constraint violations keep the database's own message text, because the
/// editor shows it to the user as-is.
fn map_db_err(err: DbErr) -> StoreError {
    match &err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => StoreError::Connection(err.to_string()),
        _ => {
            let msg = err.to_string();
            if msg.contains("duplicate key") || msg.contains("unique constraint") {
                StoreError::Constraint(msg)
            } else {
                StoreError::Query(msg)
            }
        }
    }
}

#[async_trait]
impl PostStore for PostgresPostStore {
    async fn list(&self, filter: PostFilter, order: PostOrder) -> Result<Vec<Post>, StoreError> {
        let mut query = PostEntity::find();

        if matches!(filter, PostFilter::PublishedOnly) {
            query = query.filter(post::Column::Published.eq(true));
        }

        query = match order {
            PostOrder::CreatedAtDesc => query.order_by_desc(post::Column::CreatedAt),
            PostOrder::CreatedAtAsc => query.order_by_asc(post::Column::CreatedAt),
        };

        let rows = query.all(&self.db).await.map_err(map_db_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        let row = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(row.map(Into::into))
    }

    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<Post>, StoreError> {
        let row = PostEntity::find()
            .filter(post::Column::Slug.eq(slug))
            .filter(post::Column::Published.eq(true))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(row.map(Into::into))
    }

    async fn insert(
        &self,
        write: PostWrite,
        created_at: DateTime<Utc>,
    ) -> Result<Post, StoreError> {
        let model = post::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(write.title),
            slug: Set(write.slug),
            content: Set(write.content),
            excerpt: Set(write.excerpt),
            cover_image: Set(write.cover_image),
            published: Set(write.published),
            author_id: Set(write.author_id),
            created_at: Set(created_at.into()),
            updated_at: Set(write.updated_at.into()),
        };

        let row = model.insert(&self.db).await.map_err(map_db_err)?;
        Ok(row.into())
    }

    async fn update(&self, id: Uuid, write: PostWrite) -> Result<Post, StoreError> {
        let model = post::ActiveModel {
            id: Unchanged(id),
            title: Set(write.title),
            slug: Set(write.slug),
            content: Set(write.content),
            excerpt: Set(write.excerpt),
            cover_image: Set(write.cover_image),
            published: Set(write.published),
            author_id: Set(write.author_id),
            created_at: NotSet,
            updated_at: Set(write.updated_at.into()),
        };

        let row = model.update(&self.db).await.map_err(|err| match err {
            DbErr::RecordNotUpdated => StoreError::NotFound,
            other => map_db_err(other),
        })?;
        Ok(row.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }
}
