//! Shared test doubles for the controller tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use inkwell_core::domain::{Post, PostWrite, Profile, User};
use inkwell_core::error::StoreError;
use inkwell_core::ports::{AuthBackend, AuthError, ConfirmPrompt, Navigator, PostFilter, PostOrder, PostStore};

use crate::session::Identity;

pub fn admin_identity() -> Identity {
    Identity {
        user_id: Uuid::new_v4(),
        email: "author@example.com".to_string(),
        username: Some("author".to_string()),
        is_admin: true,
    }
}

/// Auth backend with one known credential pair and a fixed profile answer.
pub struct StubAuthBackend {
    user: User,
    password: String,
    profile: Option<Profile>,
}

impl StubAuthBackend {
    pub fn admin(email: &str, password: &str) -> Self {
        let user = User::new(email.to_string(), "hash".to_string());
        let profile = Profile {
            user_id: user.id,
            username: "author".to_string(),
            is_admin: true,
        };
        Self {
            user,
            password: password.to_string(),
            profile: Some(profile),
        }
    }

    pub fn without_profile(email: &str, password: &str) -> Self {
        Self {
            user: User::new(email.to_string(), "hash".to_string()),
            password: password.to_string(),
            profile: None,
        }
    }
}

#[async_trait]
impl AuthBackend for StubAuthBackend {
    async fn verify_credentials(&self, email: &str, password: &str) -> Result<User, AuthError> {
        if email == self.user.email && password == self.password {
            Ok(self.user.clone())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }

    async fn profile_for(&self, user_id: Uuid) -> Result<Option<Profile>, AuthError> {
        Ok(self.profile.clone().filter(|p| p.user_id == user_id))
    }
}

/// Navigator that records every visit.
#[derive(Default)]
pub struct RecordingNavigator {
    visits: Mutex<Vec<(String, bool)>>,
}

impl RecordingNavigator {
    pub fn last(&self) -> Option<(String, bool)> {
        self.visits.lock().unwrap().last().cloned()
    }

    pub fn visit_count(&self) -> usize {
        self.visits.lock().unwrap().len()
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&self, path: &str, replace: bool) {
        self.visits.lock().unwrap().push((path.to_string(), replace));
    }
}

/// Confirmation prompt that always gives the scripted answer.
pub struct ScriptedPrompt {
    answer: bool,
    asked: AtomicUsize,
}

impl ScriptedPrompt {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            asked: AtomicUsize::new(0),
        }
    }

    pub fn times_asked(&self) -> usize {
        self.asked.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConfirmPrompt for ScriptedPrompt {
    async fn confirm(&self, _message: &str) -> bool {
        self.asked.fetch_add(1, Ordering::SeqCst);
        self.answer
    }
}

/// Store whose every operation fails with the given message, counting calls.
pub struct FailingStore {
    message: String,
    calls: AtomicUsize,
}

impl FailingStore {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail(&self) -> StoreError {
        self.calls.fetch_add(1, Ordering::SeqCst);
        StoreError::Query(self.message.clone())
    }
}

#[async_trait]
impl PostStore for FailingStore {
    async fn list(&self, _filter: PostFilter, _order: PostOrder) -> Result<Vec<Post>, StoreError> {
        Err(self.fail())
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Post>, StoreError> {
        Err(self.fail())
    }

    async fn find_published_by_slug(&self, _slug: &str) -> Result<Option<Post>, StoreError> {
        Err(self.fail())
    }

    async fn insert(
        &self,
        _write: PostWrite,
        _created_at: DateTime<Utc>,
    ) -> Result<Post, StoreError> {
        Err(self.fail())
    }

    async fn update(&self, _id: Uuid, _write: PostWrite) -> Result<Post, StoreError> {
        Err(self.fail())
    }

    async fn delete(&self, _id: Uuid) -> Result<(), StoreError> {
        Err(self.fail())
    }
}
