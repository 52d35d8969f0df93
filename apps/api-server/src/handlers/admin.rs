//! Admin post management endpoints - thin adapters over the controllers.

use std::sync::Arc;
use std::sync::Mutex;

use actix_web::{HttpResponse, web};
use async_trait::async_trait;
use uuid::Uuid;

use inkwell_app::dashboard;
use inkwell_app::editor::{LoadOutcome, PostEditorController, SubmitOutcome};
use inkwell_app::listing::{DeleteOutcome, PostListController};
use inkwell_core::ports::{ConfirmPrompt, Navigator};
use inkwell_shared::ApiResponse;
use inkwell_shared::dto::{DraftRequest, PostResponse, PreviewResponse, StatsResponse};

use super::posts::post_response;
use crate::middleware::auth::AdminIdentity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Captures the editor's navigation intent so the response can relay it to
/// the client as a redirect hint.
#[derive(Default)]
struct CapturedRedirect(Mutex<Option<String>>);

impl CapturedRedirect {
    fn take(&self) -> Option<String> {
        self.0.lock().unwrap().take()
    }
}

impl Navigator for CapturedRedirect {
    fn go_to(&self, path: &str, _replace: bool) {
        *self.0.lock().unwrap() = Some(path.to_string());
    }
}

/// The HTTP request is the post-confirmation action; the yes/no dialog
/// already happened on the client.
struct AlreadyConfirmed;

#[async_trait]
impl ConfirmPrompt for AlreadyConfirmed {
    async fn confirm(&self, _message: &str) -> bool {
        true
    }
}

/// Feed the request's fields through the editor's setters, in the order the
/// form would: title first so a supplied slug survives the recompute.
fn apply_draft(editor: &mut PostEditorController, draft: DraftRequest) {
    editor.set_title(draft.title);
    if let Some(slug) = draft.slug {
        editor.set_slug(slug);
    }
    editor.set_content(draft.content);
    editor.set_excerpt(draft.excerpt);
    editor.set_cover_image(draft.cover_image);
    editor.set_published(draft.published);
}

fn rejection(editor: &PostEditorController) -> AppError {
    AppError::BadRequest(
        editor
            .error_message()
            .unwrap_or("the post could not be saved")
            .to_string(),
    )
}

/// GET /api/admin/posts - every post, drafts included, newest first.
pub async fn list(state: web::Data<AppState>, _admin: AdminIdentity) -> AppResult<HttpResponse> {
    let mut controller =
        PostListController::new(state.store.clone(), Arc::new(AlreadyConfirmed));
    controller.load().await?;

    let body: Vec<PostResponse> = controller
        .posts()
        .iter()
        .cloned()
        .map(post_response)
        .collect();
    Ok(HttpResponse::Ok().json(ApiResponse::ok(body)))
}

/// POST /api/admin/posts - create a post through the editor workflow.
pub async fn create(
    state: web::Data<AppState>,
    admin: AdminIdentity,
    body: web::Json<DraftRequest>,
) -> AppResult<HttpResponse> {
    let navigator = Arc::new(CapturedRedirect::default());
    let mut editor =
        PostEditorController::new_post(state.store.clone(), navigator.clone(), Some(admin.0));
    apply_draft(&mut editor, body.into_inner());

    match editor.submit().await {
        SubmitOutcome::Saved => Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
            serde_json::json!({ "redirect": navigator.take() }),
            "Post created",
        ))),
        SubmitOutcome::Rejected => Err(rejection(&editor)),
    }
}

/// PUT /api/admin/posts/{id} - edit an existing post.
pub async fn update(
    state: web::Data<AppState>,
    admin: AdminIdentity,
    path: web::Path<Uuid>,
    body: web::Json<DraftRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let navigator = Arc::new(CapturedRedirect::default());
    let mut editor = PostEditorController::edit_post(
        id,
        state.store.clone(),
        navigator.clone(),
        Some(admin.0),
    );

    if editor.load().await == LoadOutcome::NotFound {
        return Err(AppError::NotFound(format!("post {id} not found")));
    }
    apply_draft(&mut editor, body.into_inner());

    match editor.submit().await {
        SubmitOutcome::Saved => Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
            serde_json::json!({ "redirect": navigator.take() }),
            "Post updated",
        ))),
        SubmitOutcome::Rejected => Err(rejection(&editor)),
    }
}

/// POST /api/admin/posts/preview - render the current unsaved draft.
pub async fn preview(
    state: web::Data<AppState>,
    admin: AdminIdentity,
    body: web::Json<DraftRequest>,
) -> AppResult<HttpResponse> {
    let navigator = Arc::new(CapturedRedirect::default());
    let mut editor =
        PostEditorController::new_post(state.store.clone(), navigator, Some(admin.0));
    apply_draft(&mut editor, body.into_inner());
    editor.preview();

    let model = editor.preview_model();
    Ok(HttpResponse::Ok().json(PreviewResponse {
        title: model.title,
        excerpt: model.excerpt,
        cover_image: model.cover_image,
        content: model.content,
    }))
}

/// POST /api/admin/posts/{id}/publish - flip the published flag.
///
/// Responds with the row as the list now holds it. When the underlying
/// update failed that row is simply unchanged; the failure went to the
/// alert sink, not the client.
pub async fn toggle_publish(
    state: web::Data<AppState>,
    _admin: AdminIdentity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let mut controller =
        PostListController::new(state.store.clone(), Arc::new(AlreadyConfirmed));
    controller.load().await?;

    match controller.toggle_publish(id).await {
        Some(post) => Ok(HttpResponse::Ok().json(ApiResponse::ok(post_response(post.clone())))),
        None => Err(AppError::NotFound(format!("post {id} not found"))),
    }
}

/// DELETE /api/admin/posts/{id}
pub async fn delete(
    state: web::Data<AppState>,
    _admin: AdminIdentity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let mut controller =
        PostListController::new(state.store.clone(), Arc::new(AlreadyConfirmed));
    controller.load().await?;

    if !controller.posts().iter().any(|p| p.id == id) {
        return Err(AppError::NotFound(format!("post {id} not found")));
    }

    match controller.delete(id).await {
        DeleteOutcome::Deleted => Ok(HttpResponse::NoContent().finish()),
        DeleteOutcome::Cancelled => {
            Err(AppError::Internal("delete cancelled unexpectedly".to_string()))
        }
        DeleteOutcome::Failed => Err(AppError::Internal("Failed to delete post".to_string())),
    }
}

/// GET /api/admin/stats - dashboard post counts.
pub async fn stats(state: web::Data<AppState>, _admin: AdminIdentity) -> AppResult<HttpResponse> {
    let stats = dashboard::content_stats(state.store.as_ref()).await?;
    Ok(HttpResponse::Ok().json(StatsResponse {
        total: stats.total,
        published: stats.published,
        drafts: stats.drafts,
    }))
}
