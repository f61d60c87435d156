use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::modules::sessions::core::session::Session;
use crate::modules::sessions::ports::SessionQueries;

#[derive(Default)]
pub struct InMemorySessions {
    sessions: RwLock<HashMap<String, Session>>,
    is_offline: bool,
}

impl InMemorySessions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn insert_session(&self, session: Session) {
        self.sessions.write().await.insert(session.token.clone(), session);
    }
}

#[async_trait]
impl SessionQueries for InMemorySessions {
    async fn find_session_by_token(&self, token: &str) -> anyhow::Result<Option<Session>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Sessions repository offline"));
        }

        Ok(self.sessions.read().await.get(token).cloned())
    }
}
