// Postgres hotel queries over the "Hotel" and "Room" tables.
//
// The tables store timestamps without a time zone; they are read as UTC.

use anyhow::Context;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::{FromRow, PgPool};

use crate::modules::hotels::core::hotel::{Hotel, HotelWithRooms, Room};
use crate::modules::hotels::ports::HotelQueries;
use crate::shared::core::primitives::HotelId;

#[derive(Clone)]
pub struct PostgresHotels {
    pool: PgPool,
}

impl PostgresHotels {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct HotelRow {
    id: i32,
    name: String,
    image: String,
    #[sqlx(rename = "createdAt")]
    created_at: NaiveDateTime,
    #[sqlx(rename = "updatedAt")]
    updated_at: NaiveDateTime,
}

impl From<HotelRow> for Hotel {
    fn from(row: HotelRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            image: row.image,
            created_at: row.created_at.and_utc(),
            updated_at: row.updated_at.and_utc(),
        }
    }
}

#[derive(FromRow)]
struct RoomRow {
    id: i32,
    name: String,
    capacity: i32,
    #[sqlx(rename = "hotelId")]
    hotel_id: i32,
    #[sqlx(rename = "createdAt")]
    created_at: NaiveDateTime,
    #[sqlx(rename = "updatedAt")]
    updated_at: NaiveDateTime,
}

impl From<RoomRow> for Room {
    fn from(row: RoomRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            capacity: row.capacity,
            hotel_id: row.hotel_id,
            created_at: row.created_at.and_utc(),
            updated_at: row.updated_at.and_utc(),
        }
    }
}

#[async_trait]
impl HotelQueries for PostgresHotels {
    async fn list_hotels(&self) -> anyhow::Result<Vec<Hotel>> {
        let rows = sqlx::query_as::<_, HotelRow>(
            r#"SELECT "id", "name", "image", "createdAt", "updatedAt" FROM "Hotel" ORDER BY "id""#,
        )
        .fetch_all(&self.pool)
        .await
        .context("failed to list hotels")?;

        Ok(rows.into_iter().map(Hotel::from).collect())
    }

    async fn find_hotel_with_rooms(
        &self,
        hotel_id: HotelId,
    ) -> anyhow::Result<Option<HotelWithRooms>> {
        let Some(hotel) = sqlx::query_as::<_, HotelRow>(
            r#"SELECT "id", "name", "image", "createdAt", "updatedAt" FROM "Hotel" WHERE "id" = $1"#,
        )
        .bind(hotel_id)
        .fetch_optional(&self.pool)
        .await
        .context("failed to load hotel")?
        else {
            return Ok(None);
        };

        let rooms = sqlx::query_as::<_, RoomRow>(
            r#"
            SELECT "id", "name", "capacity", "hotelId", "createdAt", "updatedAt"
            FROM "Room"
            WHERE "hotelId" = $1
            ORDER BY "id"
            "#,
        )
        .bind(hotel_id)
        .fetch_all(&self.pool)
        .await
        .context("failed to load rooms")?;

        Ok(Some(HotelWithRooms {
            hotel: hotel.into(),
            rooms: rooms.into_iter().map(Room::from).collect(),
        }))
    }
}
