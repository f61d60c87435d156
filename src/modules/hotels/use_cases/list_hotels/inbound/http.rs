use axum::{
    Extension, Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::modules::hotels::adapters::inbound::errors::error_response;
use crate::modules::sessions::core::session::AuthenticatedUser;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Response {
    match state.list_hotels_handler.handle(user.user_id).await {
        Ok(hotels) => Json(hotels).into_response(),
        Err(error) => error_response(error),
    }
}
