//! The single-post authoring controller.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use inkwell_core::domain::{PostDraft, slugify};
use inkwell_core::ports::{Navigator, PostStore};

use crate::guard;
use crate::session::Identity;

/// Which surface the author is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Edit,
    Preview,
}

/// Editor lifecycle state.
///
/// `Error` keeps the view that was active so the host renders the same
/// surface with the message over it; the message is retained until the next
/// field change or submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorState {
    /// Fetching the post to edit. Only ever entered when an id was supplied.
    Loading,
    Editing,
    Previewing,
    Saving,
    Error { message: String, view: ViewMode },
}

/// Create-new versus edit-existing. The distinction drives both the slug
/// recompute rule and which store call submit issues.
#[derive(Debug, Clone, Copy)]
enum EditorMode {
    Create,
    Edit { id: Uuid },
}

/// Result of loading an existing post into the editor.
///
/// `NotFound` is a navigational dead end for the enclosing view to handle,
/// not an editor error state: it covers both a missing row and a store
/// failure during the fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum LoadOutcome {
    Loaded,
    NotFound,
}

/// Result of a submit attempt. On `Rejected` the editor state carries the
/// message and all field values are preserved for retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum SubmitOutcome {
    Saved,
    Rejected,
}

/// What the public site would render for the current unsaved field values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostPreview {
    pub title: String,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
    pub content: String,
}

/// Owns the load → edit → preview → save state machine for one post.
///
/// One instance per open editor; nothing is shared for mutation across
/// instances, and `&mut self` on every transition means at most one
/// in-flight request per instance by construction.
pub struct PostEditorController {
    store: Arc<dyn PostStore>,
    navigator: Arc<dyn Navigator>,
    identity: Option<Identity>,
    mode: EditorMode,
    state: EditorState,
    draft: PostDraft,
}

impl PostEditorController {
    /// Editor for a brand-new post: starts in `Editing` with empty fields
    /// and `published = false`.
    pub fn new_post(
        store: Arc<dyn PostStore>,
        navigator: Arc<dyn Navigator>,
        identity: Option<Identity>,
    ) -> Self {
        Self {
            store,
            navigator,
            identity,
            mode: EditorMode::Create,
            state: EditorState::Editing,
            draft: PostDraft::default(),
        }
    }

    /// Editor for an existing post: starts in `Loading` until
    /// [`PostEditorController::load`] completes.
    pub fn edit_post(
        id: Uuid,
        store: Arc<dyn PostStore>,
        navigator: Arc<dyn Navigator>,
        identity: Option<Identity>,
    ) -> Self {
        Self {
            store,
            navigator,
            identity,
            mode: EditorMode::Edit { id },
            state: EditorState::Loading,
            draft: PostDraft::default(),
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn draft(&self) -> &PostDraft {
        &self.draft
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            EditorState::Error { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Fetch the post under edit and populate the fields.
    pub async fn load(&mut self) -> LoadOutcome {
        let EditorMode::Edit { id } = self.mode else {
            return LoadOutcome::Loaded;
        };

        match self.store.find_by_id(id).await {
            Ok(Some(post)) => {
                self.draft = PostDraft::from_post(&post);
                self.state = EditorState::Editing;
                LoadOutcome::Loaded
            }
            Ok(None) => LoadOutcome::NotFound,
            Err(err) => {
                tracing::error!(post_id = %id, error = %err, "failed to fetch post for editing");
                LoadOutcome::NotFound
            }
        }
    }

    /// While creating a new post the slug always tracks the title,
    /// overwriting any manual slug edit. Editing an existing post leaves
    /// the slug alone.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
        if matches!(self.mode, EditorMode::Create) {
            self.draft.slug = slugify(&self.draft.title);
        }
        self.clear_error();
    }

    pub fn set_slug(&mut self, slug: impl Into<String>) {
        self.draft.slug = slug.into();
        self.clear_error();
    }

    /// The document widget hands back the full markdown text on each change.
    pub fn set_content(&mut self, markdown: impl Into<String>) {
        self.draft.content = markdown.into();
        self.clear_error();
    }

    pub fn set_excerpt(&mut self, excerpt: impl Into<String>) {
        self.draft.excerpt = excerpt.into();
        self.clear_error();
    }

    pub fn set_cover_image(&mut self, url: impl Into<String>) {
        self.draft.cover_image = url.into();
        self.clear_error();
    }

    pub fn set_published(&mut self, published: bool) {
        self.draft.published = published;
        self.clear_error();
    }

    /// Switch to the preview surface. A pure view toggle: nothing is
    /// persisted and nothing is re-fetched.
    pub fn preview(&mut self) {
        match &mut self.state {
            EditorState::Editing | EditorState::Previewing => {
                self.state = EditorState::Previewing;
            }
            EditorState::Error { view, .. } => *view = ViewMode::Preview,
            EditorState::Loading | EditorState::Saving => {}
        }
    }

    /// Switch back to the edit surface.
    pub fn edit(&mut self) {
        match &mut self.state {
            EditorState::Editing | EditorState::Previewing => {
                self.state = EditorState::Editing;
            }
            EditorState::Error { view, .. } => *view = ViewMode::Edit,
            EditorState::Loading | EditorState::Saving => {}
        }
    }

    /// Render model for the preview surface, straight from the in-memory
    /// field values with no store round-trip.
    pub fn preview_model(&self) -> PostPreview {
        PostPreview {
            title: if self.draft.title.is_empty() {
                "Untitled Post".to_string()
            } else {
                self.draft.title.clone()
            },
            excerpt: (!self.draft.excerpt.is_empty()).then(|| self.draft.excerpt.clone()),
            cover_image: (!self.draft.cover_image.is_empty()).then(|| self.draft.cover_image.clone()),
            content: self.draft.content.clone(),
        }
    }

    /// Validate, then issue exactly one store call.
    ///
    /// The submit control stays disabled for the whole in-flight duration:
    /// a second submit while `Saving` is a no-op rejection. On store success
    /// the controller navigates to the post list and its job ends; on any
    /// failure the fields are preserved unchanged so retry never requires
    /// re-entering data.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let view = match &self.state {
            EditorState::Editing => ViewMode::Edit,
            EditorState::Previewing => ViewMode::Preview,
            EditorState::Error { view, .. } => *view,
            EditorState::Loading | EditorState::Saving => return SubmitOutcome::Rejected,
        };

        let Some(identity) = self.identity.clone() else {
            self.fail(view, "You must be logged in");
            return SubmitOutcome::Rejected;
        };

        let valid = match self.draft.validate() {
            Ok(valid) => valid,
            Err(err) => {
                self.fail(view, err.to_string());
                return SubmitOutcome::Rejected;
            }
        };

        self.state = EditorState::Saving;

        let now = Utc::now();
        let write = valid.into_write(identity.user_id, now);
        let result = match self.mode {
            EditorMode::Create => self.store.insert(write, now).await,
            EditorMode::Edit { id } => self.store.update(id, write).await,
        };

        match result {
            Ok(post) => {
                tracing::info!(post_id = %post.id, slug = %post.slug, "post saved");
                self.state = match view {
                    ViewMode::Edit => EditorState::Editing,
                    ViewMode::Preview => EditorState::Previewing,
                };
                self.navigator.go_to(guard::ADMIN_POSTS_PATH, false);
                SubmitOutcome::Saved
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to save post");
                self.fail(view, err.to_string());
                SubmitOutcome::Rejected
            }
        }
    }

    fn fail(&mut self, view: ViewMode, message: impl Into<String>) {
        self.state = EditorState::Error {
            message: message.into(),
            view,
        };
    }

    fn clear_error(&mut self) {
        if let EditorState::Error { view, .. } = &self.state {
            self.state = match view {
                ViewMode::Edit => EditorState::Editing,
                ViewMode::Preview => EditorState::Previewing,
            };
        }
    }
}
