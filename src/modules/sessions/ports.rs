use async_trait::async_trait;

use crate::modules::sessions::core::session::Session;

#[async_trait]
pub trait SessionQueries {
    async fn find_session_by_token(&self, token: &str) -> anyhow::Result<Option<Session>>;
}
