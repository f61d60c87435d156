use axum::{
    Extension, Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::modules::hotels::adapters::inbound::errors::error_response;
use crate::modules::sessions::core::session::AuthenticatedUser;
use crate::shared::core::primitives::parse_id;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(hotel_id): Path<String>,
) -> Response {
    let hotel_id = parse_id(&hotel_id);
    if hotel_id.is_none() {
        tracing::debug!(user_id = user.user_id, "hotel id did not parse");
    }

    match state
        .get_hotel_with_rooms_handler
        .handle(hotel_id, user.user_id)
        .await
    {
        Ok(hotel) => Json(hotel).into_response(),
        Err(error) => error_response(error),
    }
}
