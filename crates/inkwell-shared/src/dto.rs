//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Request to sign in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response containing authentication tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// The signed-in identity, as shown to its own client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub id: String,
    pub email: String,
    pub username: Option<String>,
    pub is_admin: bool,
}

/// Post fields as edited in the authoring UI. Used for create, update, and
/// preview requests alike.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftRequest {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub cover_image: String,
    #[serde(default)]
    pub published: bool,
}

/// A post as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
    pub published: bool,
    pub author_id: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Rendered preview of an unsaved draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewResponse {
    pub title: String,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
    pub content: String,
}

/// Dashboard post counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total: usize,
    pub published: usize,
    pub drafts: usize,
}
