use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};
use chrono::SecondsFormat;

use crate::modules::hotels::adapters::inbound::errors::graphql_error;
use crate::modules::hotels::core::hotel::Hotel;
use crate::modules::sessions::core::session::AuthenticatedUser;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlHotel {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Hotel> for GqlHotel {
    fn from(h: Hotel) -> Self {
        Self {
            id: h.id,
            name: h.name,
            image: h.image,
            created_at: h.created_at.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            updated_at: h.updated_at.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        }
    }
}

#[derive(Default)]
pub struct ListHotelsQuery;

#[Object]
impl ListHotelsQuery {
    async fn hotels(&self, context: &Context<'_>) -> GqlResult<Vec<GqlHotel>> {
        let state = context.data_unchecked::<AppState>();
        let user = context.data::<AuthenticatedUser>()?;
        let hotels = state
            .list_hotels_handler
            .handle(user.user_id)
            .await
            .map_err(graphql_error)?;
        Ok(hotels.into_iter().map(Into::into).collect())
    }
}
