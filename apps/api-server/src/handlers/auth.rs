//! Authentication handlers.

use actix_web::{HttpResponse, web};

use inkwell_app::session::{AuthSession, SessionState};
use inkwell_core::ports::AuthError;
use inkwell_shared::dto::{AuthResponse, LoginRequest, SessionResponse};

use crate::middleware::auth::Session;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/auth/login
///
/// Runs the sign-in flow through an [`AuthSession`], then mints a bearer
/// token whose role claims reflect the capability the profile lookup
/// resolved. Invalid credentials come back 401 with the session untouched;
/// the client decides whether to retry.
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let mut session = AuthSession::new(state.auth.clone());
    let identity = session
        .sign_in(&req.email, &req.password)
        .await
        .map_err(|err| match err {
            AuthError::InvalidCredentials => AppError::Unauthorized,
            other => AppError::Internal(other.to_string()),
        })?;

    let roles = if identity.is_admin {
        vec!["admin".to_string()]
    } else {
        vec!["user".to_string()]
    };

    let token = state
        .tokens
        .generate_token(identity.user_id, &identity.email, roles)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        access_token: token,
        token_type: "Bearer".to_string(),
        expires_in: state.tokens.expiration_seconds() as u64,
    }))
}

/// POST /api/auth/logout
///
/// Tokens are stateless; this clears whatever session state the backend
/// holds and always succeeds.
pub async fn logout(state: web::Data<AppState>) -> HttpResponse {
    let mut session = AuthSession::new(state.auth.clone());
    session.sign_out().await;
    HttpResponse::NoContent().finish()
}

/// GET /api/auth/me - who the presented token resolves to.
pub async fn me(session: Session) -> AppResult<HttpResponse> {
    match session.0 {
        SessionState::Authenticated(identity) => Ok(HttpResponse::Ok().json(SessionResponse {
            id: identity.user_id.to_string(),
            email: identity.email,
            username: identity.username,
            is_admin: identity.is_admin,
        })),
        _ => Err(AppError::Unauthorized),
    }
}
