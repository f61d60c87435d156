use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::hotels::adapters::outbound::hotels_in_memory::InMemoryHotels;
use crate::modules::sessions::adapters::outbound::sessions_in_memory::InMemorySessions;
use crate::modules::ticketing::adapters::outbound::ticketing_in_memory::InMemoryTicketing;
use crate::shared::core::primitives::UserId;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::next_id;
use crate::tests::fixtures::sessions::create_session;

/// The full router over in memory stores, with handles on the stores for seeding.
pub struct TestApp {
    pub hotels: Arc<InMemoryHotels>,
    pub ticketing: Arc<InMemoryTicketing>,
    pub sessions: Arc<InMemorySessions>,
    pub state: AppState,
}

#[allow(dead_code)]
impl TestApp {
    pub fn new() -> Self {
        Self::from_stores(
            InMemoryHotels::new(),
            InMemoryTicketing::new(),
            InMemorySessions::new(),
        )
    }

    pub fn from_stores(
        hotels: InMemoryHotels,
        ticketing: InMemoryTicketing,
        sessions: InMemorySessions,
    ) -> Self {
        let hotels = Arc::new(hotels);
        let ticketing = Arc::new(ticketing);
        let sessions = Arc::new(sessions);
        let state = AppState::new(
            hotels.clone(),
            ticketing.clone(),
            ticketing.clone(),
            sessions.clone(),
        );
        Self {
            hotels,
            ticketing,
            sessions,
            state,
        }
    }

    pub fn router(&self) -> Router {
        router(self.state.clone())
    }

    pub fn create_user(&self) -> UserId {
        next_id()
    }

    pub async fn generate_valid_token(&self, user_id: UserId) -> String {
        create_session(&self.sessions, user_id).await.token
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, String) {
        let mut request = Request::get(uri);
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.send(request.body(Body::empty()).unwrap()).await
    }

    pub async fn post_graphql(&self, query: &str, token: Option<&str>) -> (StatusCode, String) {
        let mut request = Request::post("/graphql").header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let body = serde_json::json!({ "query": query }).to_string();
        self.send(request.body(Body::from(body)).unwrap()).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }
}
