use axum::{
    Extension, Router, middleware,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::hotels::use_cases::get_hotel_with_rooms::inbound::http as get_hotel_http;
use crate::modules::hotels::use_cases::list_hotels::inbound::http as list_hotels_http;
use crate::modules::sessions::inbound::http::authenticate_token;
use crate::shell::graphql;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = graphql::build_schema(state.clone());

    let protected = Router::new()
        .route("/hotels", get(list_hotels_http::handle))
        .route("/hotels/{hotel_id}", get(get_hotel_http::handle))
        .route("/graphql", post(graphql::handle))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            authenticate_token,
        ));

    Router::new()
        .merge(protected)
        .route("/graphiql", get(graphql::graphiql))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
