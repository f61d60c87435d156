use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::core::primitives::{HotelId, RoomId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: HotelId,
    pub name: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: HotelId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A hotel with its rooms embedded under `Rooms`, the shape clients already consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelWithRooms {
    #[serde(flatten)]
    pub hotel: Hotel,
    #[serde(rename = "Rooms")]
    pub rooms: Vec<Room>,
}
