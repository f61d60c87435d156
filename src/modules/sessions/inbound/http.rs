// Bearer session authentication for protected routes.
//
// A request passes only when `Authorization: Bearer <token>` carries the
// token of an existing session. The session's user is then inserted into the
// request extensions as `AuthenticatedUser`.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::modules::sessions::core::session::AuthenticatedUser;
use crate::modules::sessions::ports::SessionQueries;
use crate::shell::state::AppState;

pub const UNAUTHORIZED_MESSAGE: &str = "You must be signed in to continue";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing bearer token")]
    MissingToken,

    #[error("authorization header is not a bearer token")]
    MalformedHeader,

    #[error("no session for bearer token")]
    UnknownSession,

    #[error("session lookup failed: {0}")]
    Backend(anyhow::Error),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (StatusCode::UNAUTHORIZED, UNAUTHORIZED_MESSAGE).into_response()
    }
}

pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?
        .to_str()
        .map_err(|_| AuthError::MalformedHeader)?;
    let token = value
        .strip_prefix("Bearer ")
        .ok_or(AuthError::MalformedHeader)?
        .trim();
    if token.is_empty() {
        return Err(AuthError::MissingToken);
    }
    Ok(token)
}

pub async fn authenticate(
    sessions: &(dyn SessionQueries + Send + Sync),
    headers: &HeaderMap,
) -> Result<AuthenticatedUser, AuthError> {
    let token = bearer_token(headers)?;
    let session = sessions
        .find_session_by_token(token)
        .await
        .map_err(AuthError::Backend)?
        .ok_or(AuthError::UnknownSession)?;
    Ok(AuthenticatedUser::from(&session))
}

pub async fn authenticate_token(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    match authenticate(state.sessions.as_ref(), request.headers()).await {
        Ok(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(AuthError::Backend(source)) => {
            tracing::error!(error = ?source, "session lookup failed");
            AuthError::Backend(source).into_response()
        }
        Err(error) => {
            tracing::debug!(%error, "unauthenticated request");
            error.into_response()
        }
    }
}
