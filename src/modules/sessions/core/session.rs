use chrono::{DateTime, Utc};

use crate::shared::core::primitives::UserId;

/// A signed-in user's session. The token is what clients send as bearer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Identity injected into the request by the authentication middleware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

impl From<&Session> for AuthenticatedUser {
    fn from(session: &Session) -> Self {
        Self {
            user_id: session.user_id,
        }
    }
}
