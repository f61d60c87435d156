use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};
use chrono::SecondsFormat;

use crate::modules::hotels::adapters::inbound::errors::graphql_error;
use crate::modules::hotels::core::hotel::{HotelWithRooms, Room};
use crate::modules::sessions::core::session::AuthenticatedUser;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlRoom {
    pub id: i32,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Room> for GqlRoom {
    fn from(r: Room) -> Self {
        Self {
            id: r.id,
            name: r.name,
            capacity: r.capacity,
            hotel_id: r.hotel_id,
            created_at: r.created_at.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            updated_at: r.updated_at.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlHotelWithRooms {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub created_at: String,
    pub updated_at: String,
    pub rooms: Vec<GqlRoom>,
}

impl From<HotelWithRooms> for GqlHotelWithRooms {
    fn from(v: HotelWithRooms) -> Self {
        Self {
            id: v.hotel.id,
            name: v.hotel.name,
            image: v.hotel.image,
            created_at: v
                .hotel
                .created_at
                .to_rfc3339_opts(SecondsFormat::AutoSi, true),
            updated_at: v
                .hotel
                .updated_at
                .to_rfc3339_opts(SecondsFormat::AutoSi, true),
            rooms: v.rooms.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Default)]
pub struct GetHotelWithRoomsQuery;

#[Object]
impl GetHotelWithRoomsQuery {
    async fn hotel(&self, context: &Context<'_>, hotel_id: i32) -> GqlResult<GqlHotelWithRooms> {
        let state = context.data_unchecked::<AppState>();
        let user = context.data::<AuthenticatedUser>()?;
        let hotel = state
            .get_hotel_with_rooms_handler
            .handle(Some(hotel_id), user.user_id)
            .await
            .map_err(graphql_error)?;
        Ok(hotel.into())
    }
}
