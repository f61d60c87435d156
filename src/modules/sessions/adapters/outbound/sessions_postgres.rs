use anyhow::Context;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::{FromRow, PgPool};

use crate::modules::sessions::core::session::Session;
use crate::modules::sessions::ports::SessionQueries;

#[derive(Clone)]
pub struct PostgresSessions {
    pool: PgPool,
}

impl PostgresSessions {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct SessionRow {
    #[sqlx(rename = "userId")]
    user_id: i32,
    #[sqlx(rename = "createdAt")]
    created_at: NaiveDateTime,
}

#[async_trait]
impl SessionQueries for PostgresSessions {
    async fn find_session_by_token(&self, token: &str) -> anyhow::Result<Option<Session>> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"SELECT "userId", "createdAt" FROM "Session" WHERE "token" = $1 LIMIT 1"#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .context("failed to load session")?;

        Ok(row.map(|row| Session {
            token: token.to_string(),
            user_id: row.user_id,
            created_at: row.created_at.and_utc(),
        }))
    }
}
