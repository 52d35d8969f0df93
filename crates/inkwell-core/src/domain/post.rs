use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Post entity - a single blog entry as persisted by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
    pub published: bool,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The editable field bag held by the post editor.
///
/// Every field stays editable regardless of the editor's state; trimming and
/// empty-to-None defaulting happen only at validation time.
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub cover_image: String,
    pub published: bool,
}

impl PostDraft {
    /// Populate a draft from an existing post, for edit-in-place.
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            slug: post.slug.clone(),
            content: post.content.clone(),
            excerpt: post.excerpt.clone().unwrap_or_default(),
            cover_image: post.cover_image.clone().unwrap_or_default(),
            published: post.published,
        }
    }

    /// Validate the draft into the record shape the store accepts.
    ///
    /// Title and slug must be non-empty after trimming; blank excerpt and
    /// cover image collapse to `None`. Content passes through unmodified,
    /// empty or not.
    pub fn validate(&self) -> Result<ValidDraft, DraftError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DraftError::required(DraftField::Title));
        }

        let slug = self.slug.trim();
        if slug.is_empty() {
            return Err(DraftError::required(DraftField::Slug));
        }

        Ok(ValidDraft {
            title: title.to_string(),
            slug: slug.to_string(),
            content: self.content.clone(),
            excerpt: non_blank(&self.excerpt),
            cover_image: non_blank(&self.cover_image),
            published: self.published,
        })
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// A draft that passed validation: trimmed, defaulted, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
    pub published: bool,
}

impl ValidDraft {
    /// Attach the acting identity and save timestamp, producing the field
    /// set handed to the store on insert or update.
    pub fn into_write(self, author_id: Uuid, updated_at: DateTime<Utc>) -> PostWrite {
        PostWrite {
            title: self.title,
            slug: self.slug,
            content: self.content,
            excerpt: self.excerpt,
            cover_image: self.cover_image,
            published: self.published,
            author_id,
            updated_at,
        }
    }
}

/// The writable field set shared by insert and update.
///
/// `created_at` is deliberately absent: inserts take it as a separate
/// argument and updates never touch it.
#[derive(Debug, Clone)]
pub struct PostWrite {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
    pub published: bool,
    pub author_id: Uuid,
    pub updated_at: DateTime<Utc>,
}

/// Which draft field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Slug,
}

/// A draft validation failure: the field at fault and the reason shown to
/// the user.
#[derive(Debug, Clone, Error)]
#[error("{reason}")]
pub struct DraftError {
    pub field: DraftField,
    pub reason: String,
}

impl DraftError {
    fn required(field: DraftField) -> Self {
        let reason = match field {
            DraftField::Title => "Title is required",
            DraftField::Slug => "Slug is required",
        };
        Self {
            field,
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> PostDraft {
        PostDraft {
            title: "  Hello World  ".to_string(),
            slug: "hello-world".to_string(),
            content: "# Hi".to_string(),
            excerpt: "   ".to_string(),
            cover_image: " https://example.com/a.png ".to_string(),
            published: true,
        }
    }

    #[test]
    fn test_validate_trims_and_defaults() {
        let valid = draft().validate().unwrap();
        assert_eq!(valid.title, "Hello World");
        assert_eq!(valid.slug, "hello-world");
        assert_eq!(valid.excerpt, None);
        assert_eq!(
            valid.cover_image.as_deref(),
            Some("https://example.com/a.png")
        );
        assert!(valid.published);
    }

    #[test]
    fn test_whitespace_title_rejected() {
        let mut d = draft();
        d.title = "   ".to_string();
        let err = d.validate().unwrap_err();
        assert_eq!(err.field, DraftField::Title);
        assert_eq!(err.to_string(), "Title is required");
    }

    #[test]
    fn test_whitespace_slug_rejected() {
        let mut d = draft();
        d.slug = "\t".to_string();
        let err = d.validate().unwrap_err();
        assert_eq!(err.field, DraftField::Slug);
        assert_eq!(err.to_string(), "Slug is required");
    }

    #[test]
    fn test_empty_content_allowed() {
        let mut d = draft();
        d.content = String::new();
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_round_trip_from_post() {
        let post = Post {
            id: Uuid::new_v4(),
            title: "T".to_string(),
            slug: "t".to_string(),
            content: "c".to_string(),
            excerpt: None,
            cover_image: Some("img".to_string()),
            published: false,
            author_id: Uuid::new_v4(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let d = PostDraft::from_post(&post);
        assert_eq!(d.title, "T");
        assert_eq!(d.excerpt, "");
        assert_eq!(d.cover_image, "img");
        assert!(!d.published);
    }
}
