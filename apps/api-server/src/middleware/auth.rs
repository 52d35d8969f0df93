//! Session resolution and admin gating for guarded routes.
//!
//! The bearer token stands in for the browsing session: its role claims
//! were derived from the profile row at sign-in, so resolving a token here
//! reproduces the same identity the session held then. Admin routes run the
//! route guard over that state before any controller is constructed.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header};
use std::future::{Ready, ready};

use inkwell_app::guard::{self, AccessPolicy, GuardDecision};
use inkwell_app::session::{Identity, SessionState};
use inkwell_shared::ErrorResponse;

use crate::state::AppState;

/// The session state carried by this request: `Authenticated` for a valid
/// bearer token, `Anonymous` otherwise. Never fails extraction.
pub struct Session(pub SessionState);

fn resolve_session(req: &HttpRequest) -> SessionState {
    let Some(state) = req.app_data::<actix_web::web::Data<AppState>>() else {
        tracing::error!("AppState not found in app data");
        return SessionState::Anonymous;
    };

    let Some(auth_header) = req.headers().get(header::AUTHORIZATION) else {
        return SessionState::Anonymous;
    };

    let Some(token) = auth_header
        .to_str()
        .ok()
        .and_then(|s| s.strip_prefix("Bearer "))
    else {
        return SessionState::Anonymous;
    };

    match state.tokens.validate_token(token) {
        Ok(claims) => SessionState::Authenticated(Identity {
            user_id: claims.user_id,
            email: claims.email,
            username: None,
            is_admin: claims.roles.iter().any(|r| r == "admin"),
        }),
        Err(err) => {
            tracing::debug!(error = %err, "rejected bearer token");
            SessionState::Anonymous
        }
    }
}

impl FromRequest for Session {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(Session(resolve_session(req))))
    }
}

/// The acting admin identity, or a guard rejection.
///
/// Runs [`guard::evaluate`] with `RequireAdmin` against the request's
/// session state and path. A login redirect becomes a 401 whose `instance`
/// carries the originally requested location; an insufficient-privilege
/// redirect becomes a 403.
pub struct AdminIdentity(pub Identity);

impl FromRequest for AdminIdentity {
    type Error = GuardRejection;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let session = resolve_session(req);

        let result = match guard::evaluate(AccessPolicy::RequireAdmin, &session, req.path()) {
            GuardDecision::Render => match session {
                SessionState::Authenticated(identity) => Ok(AdminIdentity(identity)),
                _ => Err(GuardRejection::Login {
                    return_to: req.path().to_string(),
                }),
            },
            GuardDecision::Redirect {
                to: guard::LOGIN_PATH,
                return_to,
                ..
            } => Err(GuardRejection::Login {
                return_to: return_to.unwrap_or_else(|| req.path().to_string()),
            }),
            GuardDecision::Redirect { .. } => Err(GuardRejection::Forbidden),
            // A server-resolved session is never mid-flight.
            GuardDecision::Pending => Err(GuardRejection::Login {
                return_to: req.path().to_string(),
            }),
        };

        ready(result)
    }
}

/// Guard decisions rendered as HTTP errors.
#[derive(Debug, thiserror::Error)]
pub enum GuardRejection {
    #[error("authentication required")]
    Login { return_to: String },

    #[error("insufficient permissions")]
    Forbidden,
}

impl actix_web::ResponseError for GuardRejection {
    fn status_code(&self) -> actix_web::http::StatusCode {
        match self {
            GuardRejection::Login { .. } => actix_web::http::StatusCode::UNAUTHORIZED,
            GuardRejection::Forbidden => actix_web::http::StatusCode::FORBIDDEN,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        let error = match self {
            GuardRejection::Login { return_to } => {
                // `instance` carries the requested location so the client can
                // come back to it after signing in at the login destination.
                let mut body = ErrorResponse::new(401, "Authentication Required")
                    .with_detail(format!("Sign in at {} to continue.", guard::LOGIN_PATH));
                body.instance = Some(return_to.clone());
                body
            }
            GuardRejection::Forbidden => ErrorResponse::forbidden(),
        };

        actix_web::HttpResponse::build(self.status_code()).json(error)
    }
}
