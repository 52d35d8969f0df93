//! Public post reading endpoints.

use actix_web::{HttpResponse, web};

use inkwell_app::reader;
use inkwell_core::domain::Post;
use inkwell_shared::ApiResponse;
use inkwell_shared::dto::PostResponse;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

pub(crate) fn post_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        title: post.title,
        slug: post.slug,
        content: post.content,
        excerpt: post.excerpt,
        cover_image: post.cover_image,
        published: post.published,
        author_id: post.author_id.to_string(),
        created_at: post.created_at.to_rfc3339(),
        updated_at: post.updated_at.to_rfc3339(),
    }
}

/// GET /api/posts - published posts, newest first.
pub async fn list_published(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = reader::published_posts(state.store.as_ref()).await?;
    let body: Vec<PostResponse> = posts.into_iter().map(post_response).collect();
    Ok(HttpResponse::Ok().json(ApiResponse::ok(body)))
}

/// GET /api/posts/{slug} - one published post.
///
/// Drafts and missing slugs are the same 404 here; a reader cannot tell an
/// unpublished post from one that never existed.
pub async fn by_slug(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();

    match reader::published_post_by_slug(state.store.as_ref(), &slug).await? {
        Some(post) => Ok(HttpResponse::Ok().json(ApiResponse::ok(post_response(post)))),
        None => Err(AppError::NotFound(format!("no published post at /{slug}"))),
    }
}
