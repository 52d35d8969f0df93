//! PostgreSQL auth backend: users table for credentials, profiles table for
//! the admin capability.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DbConn, EntityTrait, QueryFilter};
use uuid::Uuid;

use inkwell_core::domain::{Profile, User};
use inkwell_core::ports::{AuthBackend, AuthError, PasswordService};

use crate::database::entity::profile::Entity as ProfileEntity;
use crate::database::entity::user::{self, Entity as UserEntity};

pub struct PostgresAuthBackend {
    db: DbConn,
    passwords: Arc<dyn PasswordService>,
}

impl PostgresAuthBackend {
    pub fn new(db: DbConn, passwords: Arc<dyn PasswordService>) -> Self {
        Self { db, passwords }
    }
}

/// Mask an email for logging to avoid PII in logs.
fn mask_email(email: &str) -> String {
    if let Some(at_pos) = email.find('@') {
        let (local, domain) = email.split_at(at_pos);
        let masked_local = if local.len() > 1 {
            format!("{}***", &local[..1])
        } else {
            "***".to_string()
        };
        format!("{}{}", masked_local, domain)
    } else {
        "***".to_string()
    }
}

#[async_trait]
impl AuthBackend for PostgresAuthBackend {
    async fn verify_credentials(&self, email: &str, password: &str) -> Result<User, AuthError> {
        tracing::debug!(user_email = %mask_email(email), "Verifying credentials");

        let row = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| AuthError::Backend(e.to_string()))?;

        let Some(row) = row else {
            return Err(AuthError::InvalidCredentials);
        };

        let user: User = row.into();
        if !self.passwords.verify(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(user)
    }

    async fn profile_for(&self, user_id: Uuid) -> Result<Option<Profile>, AuthError> {
        let row = ProfileEntity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| AuthError::Backend(e.to_string()))?;

        Ok(row.map(Into::into))
    }
}
